use chrono::Utc;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, EntityTrait, ModelTrait, QueryOrder, Set};

use crate::{
    dto::categories::{CategoryList, CreateCategoryRequest, UpdateCategoryRequest},
    entity::{
        Products,
        categories::{ActiveModel, Column, Entity as Categories},
        products::Column as ProdCol,
    },
    error::{AppError, AppResult},
    models::Category,
    state::AppState,
};

pub async fn list_categories(state: &AppState) -> AppResult<CategoryList> {
    let items = Categories::find()
        .find_with_related(Products)
        .order_by_asc(Column::Id)
        .order_by_asc(ProdCol::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(|(category, products)| Category::from_entity(category, products))
        .collect();

    Ok(CategoryList { items })
}

pub async fn get_category(state: &AppState, id: i32) -> AppResult<Category> {
    let category = Categories::find_by_id(id).one(&state.orm).await?;
    let category = match category {
        Some(c) => c,
        None => return Err(AppError::NotFound("Category")),
    };

    let products = category
        .find_related(Products)
        .order_by_asc(ProdCol::Id)
        .all(&state.orm)
        .await?;

    Ok(Category::from_entity(category, products))
}

pub async fn create_category(
    state: &AppState,
    payload: CreateCategoryRequest,
) -> AppResult<Category> {
    let now = Utc::now().fixed_offset();
    let category = ActiveModel {
        id: NotSet,
        name: Set(payload.name),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(&state.orm)
    .await?;
    tracing::debug!(category_id = category.id, "category created");

    Ok(Category::from_entity(category, Vec::new()))
}

pub async fn update_category(
    state: &AppState,
    id: i32,
    payload: UpdateCategoryRequest,
) -> AppResult<Category> {
    let existing = Categories::find_by_id(id).one(&state.orm).await?;
    let existing = match existing {
        Some(c) => c,
        None => return Err(AppError::NotFound("Category")),
    };

    let mut active: ActiveModel = existing.into();
    if let Some(name) = payload.name {
        active.name = Set(name);
    }
    active.updated_at = Set(Utc::now().fixed_offset());
    let category = active.update(&state.orm).await?;
    tracing::debug!(category_id = category.id, "category updated");

    let products = category
        .find_related(Products)
        .order_by_asc(ProdCol::Id)
        .all(&state.orm)
        .await?;

    Ok(Category::from_entity(category, products))
}

/// Products keep pointing at a deleted category; nothing cascades.
pub async fn delete_category(state: &AppState, id: i32) -> AppResult<()> {
    let result = Categories::delete_by_id(id).exec(&state.orm).await?;
    tracing::debug!(category_id = id, rows = result.rows_affected, "category deleted");
    Ok(())
}
