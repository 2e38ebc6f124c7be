#![allow(dead_code)]

use storefront_api::{
    db::{create_orm_conn, run_migrations},
    dto::{categories::CreateCategoryRequest, products::CreateProductRequest},
    models::{Category, Product},
    services::{category_service, product_service},
    state::AppState,
};

/// A freshly migrated in-memory database per test.
pub async fn setup_state() -> anyhow::Result<AppState> {
    let orm = create_orm_conn("sqlite::memory:", 1).await?;
    run_migrations(&orm).await?;
    Ok(AppState { orm })
}

pub async fn seed_category(state: &AppState, name: &str) -> anyhow::Result<Category> {
    let category = category_service::create_category(
        state,
        CreateCategoryRequest {
            name: name.to_string(),
        },
    )
    .await?;
    Ok(category)
}

pub async fn seed_product(
    state: &AppState,
    name: &str,
    price: f64,
    category_id: i32,
) -> anyhow::Result<Product> {
    let product = product_service::create_product(
        state,
        CreateProductRequest {
            name: name.to_string(),
            description: format!("{name} description"),
            price,
            category_id,
        },
    )
    .await?;
    Ok(product)
}
