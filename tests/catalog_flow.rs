mod common;

use common::{seed_category, seed_product, setup_state};
use storefront_api::{
    dto::{
        categories::UpdateCategoryRequest,
        products::{CreateProductRequest, UpdateProductRequest},
    },
    error::AppError,
    services::{category_service, product_service},
};

#[tokio::test]
async fn created_product_reads_back_with_its_category() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let books = seed_category(&state, "Books").await?;

    let created = product_service::create_product(
        &state,
        CreateProductRequest {
            name: "Go Guide".into(),
            description: "Concurrency patterns".into(),
            price: 29.99,
            category_id: books.id,
        },
    )
    .await?;

    let fetched = product_service::get_product(&state, created.id).await?;
    assert_eq!(fetched, created);
    assert_eq!(fetched.name, "Go Guide");
    assert_eq!(fetched.description, "Concurrency patterns");
    assert_eq!(fetched.price, 29.99);
    assert_eq!(fetched.category_id, books.id);

    let category = fetched.category.expect("category is preloaded");
    assert_eq!(category.id, books.id);
    assert_eq!(category.name, "Books");
    assert_eq!(fetched.created_at, fetched.updated_at);
    Ok(())
}

#[tokio::test]
async fn missing_product_is_not_found() -> anyhow::Result<()> {
    let state = setup_state().await?;

    let err = product_service::get_product(&state, 42).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound("Product")));
    Ok(())
}

#[tokio::test]
async fn list_returns_every_product_in_id_order() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let books = seed_category(&state, "Books").await?;
    let merch = seed_category(&state, "Merch").await?;
    seed_product(&state, "Go Guide", 29.99, books.id).await?;
    seed_product(&state, "Mug", 12.0, merch.id).await?;

    let list = product_service::list_products(&state).await?;
    let names: Vec<_> = list.items.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Go Guide", "Mug"]);
    assert_eq!(
        list.items[1].category.as_ref().map(|c| c.name.as_str()),
        Some("Merch")
    );
    Ok(())
}

#[tokio::test]
async fn update_overlays_only_given_fields() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let books = seed_category(&state, "Books").await?;
    let merch = seed_category(&state, "Merch").await?;
    let product = seed_product(&state, "Go Guide", 29.99, books.id).await?;

    let updated = product_service::update_product(
        &state,
        product.id,
        UpdateProductRequest {
            price: Some(24.5),
            category_id: Some(merch.id),
            ..Default::default()
        },
    )
    .await?;

    assert_eq!(updated.name, "Go Guide");
    assert_eq!(updated.description, product.description);
    assert_eq!(updated.price, 24.5);
    assert_eq!(updated.category.map(|c| c.id), Some(merch.id));
    assert_eq!(updated.created_at, product.created_at);
    assert!(updated.updated_at >= product.updated_at);
    Ok(())
}

#[tokio::test]
async fn update_of_missing_product_is_not_found_and_writes_nothing() -> anyhow::Result<()> {
    let state = setup_state().await?;

    let err = product_service::update_product(
        &state,
        7,
        UpdateProductRequest {
            name: Some("Ghost".into()),
            ..Default::default()
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::NotFound("Product")));
    assert!(product_service::list_products(&state).await?.items.is_empty());
    Ok(())
}

#[tokio::test]
async fn delete_is_unconditional() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let books = seed_category(&state, "Books").await?;
    let product = seed_product(&state, "Go Guide", 29.99, books.id).await?;

    product_service::delete_product(&state, product.id).await?;
    product_service::delete_product(&state, product.id).await?;
    product_service::delete_product(&state, 999).await?;

    let err = product_service::get_product(&state, product.id).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
    Ok(())
}

#[tokio::test]
async fn category_lists_the_products_that_reference_it() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let books = seed_category(&state, "Books").await?;
    let merch = seed_category(&state, "Merch").await?;
    seed_product(&state, "Go Guide", 29.99, books.id).await?;
    seed_product(&state, "Rust Book", 39.0, books.id).await?;
    seed_product(&state, "Mug", 12.0, merch.id).await?;

    let category = category_service::get_category(&state, books.id).await?;
    let names: Vec<_> = category.products.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Go Guide", "Rust Book"]);
    assert!(category.products.iter().all(|p| p.category.is_none()));

    let all = category_service::list_categories(&state).await?;
    let counts: Vec<_> = all.items.iter().map(|c| c.products.len()).collect();
    assert_eq!(counts, [2, 1]);
    Ok(())
}

#[tokio::test]
async fn missing_category_is_not_found() -> anyhow::Result<()> {
    let state = setup_state().await?;

    let err = category_service::get_category(&state, 3).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound("Category")));

    let err = category_service::update_category(
        &state,
        3,
        UpdateCategoryRequest {
            name: Some("Nope".into()),
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::NotFound("Category")));
    Ok(())
}

#[tokio::test]
async fn deleting_a_category_leaves_its_products() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let books = seed_category(&state, "Books").await?;
    let product = seed_product(&state, "Go Guide", 29.99, books.id).await?;

    category_service::delete_category(&state, books.id).await?;

    let orphan = product_service::get_product(&state, product.id).await?;
    assert_eq!(orphan.category_id, books.id);
    assert!(orphan.category.is_none());
    Ok(())
}
