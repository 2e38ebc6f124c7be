use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        cart::AddToCartRequest,
        categories::{CategoryList, CreateCategoryRequest, UpdateCategoryRequest},
        payments::{PaymentRequest, PaymentResponse},
        products::{CreateProductRequest, ProductList, UpdateProductRequest},
    },
    models::{Cart, Category, CategorySummary, Product},
    response::ApiResponse,
    routes::{carts, categories, health, payments, products},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        products::list_products,
        products::create_product,
        products::get_product,
        products::update_product,
        products::delete_product,
        categories::list_categories,
        categories::create_category,
        categories::get_category,
        categories::update_category,
        categories::delete_category,
        carts::create_cart,
        carts::get_cart,
        carts::add_product,
        carts::remove_product,
        payments::process_payment
    ),
    components(
        schemas(
            Product,
            CategorySummary,
            Category,
            Cart,
            ProductList,
            CategoryList,
            CreateProductRequest,
            UpdateProductRequest,
            CreateCategoryRequest,
            UpdateCategoryRequest,
            AddToCartRequest,
            PaymentRequest,
            PaymentResponse,
            health::HealthData,
            ApiResponse<health::HealthData>
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Products", description = "Product endpoints"),
        (name = "Categories", description = "Category endpoints"),
        (name = "Carts", description = "Cart endpoints"),
        (name = "Payments", description = "Payment stub"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
