use storefront_api::{
    config::AppConfig,
    db::{create_orm_conn, run_migrations},
    dto::{categories::CreateCategoryRequest, products::CreateProductRequest},
    services::{category_service, product_service},
    state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let orm = create_orm_conn(&config.database_url, config.max_connections).await?;
    // Ensure migrations are applied.
    run_migrations(&orm).await?;
    let state = AppState { orm };

    let catalog = [
        (
            "Books",
            vec![
                ("Go Guide", "A tour of the Go language", 29.99),
                ("Async Rust", "Futures, executors and pinning", 39.5),
            ],
        ),
        (
            "Merch",
            vec![
                ("Ferris Mug", "Coffee tastes better with Ferris", 12.0),
                ("Sticker Pack", "Decorate your laptop", 4.99),
            ],
        ),
    ];

    for (category_name, products) in catalog {
        let category = category_service::create_category(
            &state,
            CreateCategoryRequest {
                name: category_name.to_string(),
            },
        )
        .await?;
        println!("Seeded category {} (id={})", category.name, category.id);

        for (name, description, price) in products {
            let product = product_service::create_product(
                &state,
                CreateProductRequest {
                    name: name.to_string(),
                    description: description.to_string(),
                    price,
                    category_id: category.id,
                },
            )
            .await?;
            println!("  product {} (id={})", product.name, product.id);
        }
    }

    println!("Seed completed");
    Ok(())
}
