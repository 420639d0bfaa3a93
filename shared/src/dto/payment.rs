use serde::{Deserialize, Serialize};

/// One-off payment intent request.
///
/// `amount` is in minor units (cents); the backend forwards it to the
/// payment provider unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreatePaymentIntentRequest {
    pub amount: i64,
    pub currency: String,
}

/// Subscription intent request, keyed on the provider price id of the plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateSubscriptionIntentRequest {
    #[serde(rename = "priceId")]
    pub price_id: String,
}

/// Provider-issued handle for one pending payment.
///
/// The client secret is opaque to us; it is consumed exactly once by a
/// confirm call on the provider's client library.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaymentIntentResponse {
    #[serde(rename = "clientSecret")]
    pub client_secret: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_off_request_carries_minor_units_and_currency() {
        let req = CreatePaymentIntentRequest {
            amount: crate::utils::price_to_minor_units(12.99),
            currency: "brl".to_string(),
        };
        let json = serde_json::to_string(&req).unwrap();
        assert_eq!(json, r#"{"amount":1299,"currency":"brl"}"#);
    }

    #[test]
    fn subscription_request_uses_camel_case_price_id() {
        let req = CreateSubscriptionIntentRequest {
            price_id: "price_quarterly".to_string(),
        };
        let json = serde_json::to_string(&req).unwrap();
        assert_eq!(json, r#"{"priceId":"price_quarterly"}"#);
    }

    #[test]
    fn intent_response_parses_camel_case_client_secret() {
        let resp: PaymentIntentResponse =
            serde_json::from_str(r#"{"clientSecret":"pi_123_secret_456"}"#).unwrap();
        assert_eq!(resp.client_secret, "pi_123_secret_456");
    }
}
