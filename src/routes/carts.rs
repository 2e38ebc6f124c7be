use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{delete, get, post},
};

use crate::{
    dto::cart::AddToCartRequest,
    error::AppResult,
    extract::{ApiJson, ApiPath},
    models::Cart,
    services::cart_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_cart))
        .route("/{id}", get(get_cart))
        .route("/{id}/products", post(add_product))
        .route("/{id}/products/{product_id}", delete(remove_product))
}

#[utoipa::path(
    post,
    path = "/carts",
    responses(
        (status = 201, description = "Empty cart created", body = Cart)
    ),
    tag = "Carts"
)]
pub async fn create_cart(State(state): State<AppState>) -> AppResult<(StatusCode, Json<Cart>)> {
    let cart = cart_service::create_cart(&state).await?;
    Ok((StatusCode::CREATED, Json(cart)))
}

#[utoipa::path(
    get,
    path = "/carts/{id}",
    params(
        ("id" = i32, Path, description = "Cart ID")
    ),
    responses(
        (status = 200, description = "Cart with its products", body = Cart),
        (status = 404, description = "Cart not found"),
    ),
    tag = "Carts"
)]
pub async fn get_cart(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> AppResult<Json<Cart>> {
    let cart = cart_service::get_cart(&state, id).await?;
    Ok(Json(cart))
}

#[utoipa::path(
    post,
    path = "/carts/{id}/products",
    params(
        ("id" = i32, Path, description = "Cart ID")
    ),
    request_body = AddToCartRequest,
    responses(
        (status = 200, description = "Product is a member of the cart", body = Cart),
        (status = 400, description = "Malformed body"),
        (status = 404, description = "Cart or product not found"),
    ),
    tag = "Carts"
)]
pub async fn add_product(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(payload): ApiJson<AddToCartRequest>,
) -> AppResult<Json<Cart>> {
    let cart = cart_service::add_product(&state, id, payload).await?;
    Ok(Json(cart))
}

#[utoipa::path(
    delete,
    path = "/carts/{id}/products/{product_id}",
    params(
        ("id" = i32, Path, description = "Cart ID"),
        ("product_id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product is no longer a member of the cart", body = Cart),
        (status = 404, description = "Cart or product not found"),
    ),
    tag = "Carts"
)]
pub async fn remove_product(
    State(state): State<AppState>,
    ApiPath((id, product_id)): ApiPath<(i32, i32)>,
) -> AppResult<Json<Cart>> {
    let cart = cart_service::remove_product(&state, id, product_id).await?;
    Ok(Json(cart))
}
