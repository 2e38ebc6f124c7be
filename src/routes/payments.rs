use axum::{Json, Router, routing::post};

use crate::{
    dto::payments::{PaymentRequest, PaymentResponse},
    error::AppResult,
    extract::ApiJson,
    services::payment_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/", post(process_payment))
}

#[utoipa::path(
    post,
    path = "/payments",
    request_body = PaymentRequest,
    responses(
        (status = 200, description = "Payment accepted", body = PaymentResponse),
        (status = 400, description = "Invalid payment data"),
    ),
    tag = "Payments"
)]
pub async fn process_payment(
    ApiJson(payload): ApiJson<PaymentRequest>,
) -> AppResult<Json<PaymentResponse>> {
    let response = payment_service::process_payment(payload)?;
    Ok(Json(response))
}
