use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct PaymentRequest {
    pub cart_id: i32,
    pub card_number: String,
    pub amount: f64,
}

impl PaymentRequest {
    /// The card number reduced to its last four digits, e.g. `************4242`.
    pub fn masked_card_number(&self) -> String {
        let digits: Vec<char> = self.card_number.chars().filter(|c| !c.is_whitespace()).collect();
        let visible = digits.len().saturating_sub(4);
        digits
            .iter()
            .enumerate()
            .map(|(i, c)| if i < visible { '*' } else { *c })
            .collect()
    }
}

impl fmt::Debug for PaymentRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaymentRequest")
            .field("cart_id", &self.cart_id)
            .field("card_number", &self.masked_card_number())
            .field("amount", &self.amount)
            .finish()
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PaymentResponse {
    pub status: String,
    pub transaction_id: i64,
    pub cart_id: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(card: &str) -> PaymentRequest {
        PaymentRequest {
            cart_id: 7,
            card_number: card.into(),
            amount: 12.5,
        }
    }

    #[test]
    fn masks_all_but_last_four_digits() {
        assert_eq!(
            request("4242 4242 4242 1234").masked_card_number(),
            "************1234"
        );
        assert_eq!(request("123").masked_card_number(), "123");
    }

    #[test]
    fn debug_output_never_contains_full_card_number() {
        let rendered = format!("{:?}", request("4111111111111111"));
        assert!(!rendered.contains("4111111111111111"));
        assert!(rendered.contains("************1111"));
    }
}
