//! Payment stub: accepts a payment for a cart and answers with a fresh
//! transaction id. Nothing is charged or stored.

use chrono::Utc;

use crate::{
    dto::payments::{PaymentRequest, PaymentResponse},
    error::AppResult,
};

pub fn process_payment(payload: PaymentRequest) -> AppResult<PaymentResponse> {
    let transaction_id = transaction_id();
    tracing::info!(
        cart_id = payload.cart_id,
        amount = payload.amount,
        card = %payload.masked_card_number(),
        transaction_id,
        "payment accepted"
    );

    Ok(PaymentResponse {
        status: "success".to_string(),
        transaction_id,
        cart_id: payload.cart_id,
    })
}

/// Nanoseconds since the Unix epoch.
fn transaction_id() -> i64 {
    let now = Utc::now();
    now.timestamp_nanos_opt()
        .unwrap_or_else(|| now.timestamp_micros().saturating_mul(1_000))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn echoes_cart_and_reports_success() {
        let response = process_payment(PaymentRequest {
            cart_id: 3,
            card_number: "4242424242424242".into(),
            amount: 59.98,
        })
        .expect("payment stub never fails");

        assert_eq!(response.status, "success");
        assert_eq!(response.cart_id, 3);
        assert!(response.transaction_id > 0);
    }

    #[test]
    fn transaction_ids_follow_the_clock() {
        let first = transaction_id();
        let second = transaction_id();
        assert!(second >= first);
    }
}
