use chrono::Utc;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, QueryOrder, Set};

use crate::{
    dto::products::{CreateProductRequest, ProductList, UpdateProductRequest},
    entity::{
        Categories,
        products::{ActiveModel, Column, Entity as Products},
    },
    error::{AppError, AppResult},
    models::Product,
    state::AppState,
};

pub async fn list_products(state: &AppState) -> AppResult<ProductList> {
    let items = Products::find()
        .find_also_related(Categories)
        .order_by_asc(Column::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(|(product, category)| Product::from_entity(product, category))
        .collect();

    Ok(ProductList { items })
}

pub async fn get_product(state: &AppState, id: i32) -> AppResult<Product> {
    load_product(&state.orm, id).await
}

pub async fn create_product(
    state: &AppState,
    payload: CreateProductRequest,
) -> AppResult<Product> {
    let now = Utc::now().fixed_offset();
    let active = ActiveModel {
        id: NotSet,
        name: Set(payload.name),
        description: Set(payload.description),
        price: Set(payload.price),
        category_id: Set(payload.category_id),
        created_at: Set(now),
        updated_at: Set(now),
    };
    let product = active.insert(&state.orm).await?;
    tracing::debug!(product_id = product.id, category_id = product.category_id, "product created");

    load_product(&state.orm, product.id).await
}

pub async fn update_product(
    state: &AppState,
    id: i32,
    payload: UpdateProductRequest,
) -> AppResult<Product> {
    let existing = Products::find_by_id(id).one(&state.orm).await?;
    let existing = match existing {
        Some(p) => p,
        None => return Err(AppError::NotFound("Product")),
    };

    let mut active: ActiveModel = existing.into();
    if let Some(name) = payload.name {
        active.name = Set(name);
    }
    if let Some(description) = payload.description {
        active.description = Set(description);
    }
    if let Some(price) = payload.price {
        active.price = Set(price);
    }
    if let Some(category_id) = payload.category_id {
        active.category_id = Set(category_id);
    }
    active.updated_at = Set(Utc::now().fixed_offset());

    let product = active.update(&state.orm).await?;
    tracing::debug!(product_id = product.id, "product updated");

    load_product(&state.orm, product.id).await
}

/// Removes the product if it exists; deleting an unknown id is not an error.
pub async fn delete_product(state: &AppState, id: i32) -> AppResult<()> {
    let result = Products::delete_by_id(id).exec(&state.orm).await?;
    tracing::debug!(product_id = id, rows = result.rows_affected, "product deleted");
    Ok(())
}

/// Fetch one product with its category, on a plain connection or inside a
/// transaction.
pub(crate) async fn load_product<C>(conn: &C, id: i32) -> AppResult<Product>
where
    C: ConnectionTrait,
{
    let found = Products::find_by_id(id)
        .find_also_related(Categories)
        .one(conn)
        .await?;
    match found {
        Some((product, category)) => Ok(Product::from_entity(product, category)),
        None => Err(AppError::NotFound("Product")),
    }
}
