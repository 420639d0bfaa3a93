//! Backend REST client
//!
//! One function per endpoint, all returning `Result<T, String>` with a
//! message fit for logging. The bearer credential is injected explicitly per
//! call; there is no shared client carrying default headers.

use gloo_net::http::{Request, RequestBuilder, Response};
use shared::dto::auth::{AuthResponse, ErrorResponse, LoginRequest, RegisterRequest, UserInfo};
use shared::dto::catalog::FirmwareItem;
use shared::dto::payment::{
    CreatePaymentIntentRequest, CreateSubscriptionIntentRequest, PaymentIntentResponse,
};

use crate::utils::constants::api_base;

fn endpoint(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Attach the bearer credential to a request under construction.
fn with_bearer(request: RequestBuilder, token: Option<&str>) -> RequestBuilder {
    match token {
        Some(token) => request.header("Authorization", &format!("Bearer {}", token)),
        None => request,
    }
}

/// Extract a readable error from a non-2xx response.
async fn error_body(response: Response) -> String {
    let status = response.status();
    match response.json::<ErrorResponse>().await {
        Ok(body) => body.error,
        Err(_) => format!("request failed with status {}", status),
    }
}

pub async fn login(request: &LoginRequest) -> Result<AuthResponse, String> {
    let response = Request::post(&endpoint("/api/login"))
        .json(request)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if response.ok() {
        response.json().await.map_err(|e| e.to_string())
    } else {
        Err(error_body(response).await)
    }
}

pub async fn register(request: &RegisterRequest) -> Result<AuthResponse, String> {
    let response = Request::post(&endpoint("/api/register"))
        .json(request)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if response.ok() {
        response.json().await.map_err(|e| e.to_string())
    } else {
        Err(error_body(response).await)
    }
}

/// Resolve the current user from a bearer credential.
pub async fn fetch_user(token: &str) -> Result<UserInfo, String> {
    let response = with_bearer(Request::get(&endpoint("/api/user")), Some(token))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if response.ok() {
        response.json().await.map_err(|e| e.to_string())
    } else {
        Err(error_body(response).await)
    }
}

/// Fetch the purchasable firmware catalog. Idempotent read; each screen
/// mount re-fetches, no caching.
pub async fn list_firmwares() -> Result<Vec<FirmwareItem>, String> {
    let response = Request::get(&endpoint("/api/firmwares"))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if response.ok() {
        response.json().await.map_err(|e| e.to_string())
    } else {
        Err(error_body(response).await)
    }
}

/// Request a payment intent for a one-off purchase; returns the client
/// secret that the confirm call consumes.
pub async fn create_payment_intent(
    token: Option<&str>,
    amount: i64,
    currency: &str,
) -> Result<String, String> {
    let request = CreatePaymentIntentRequest {
        amount,
        currency: currency.to_string(),
    };
    let response = with_bearer(
        Request::post(&endpoint("/api/payment/create-payment-intent")),
        token,
    )
    .json(&request)
    .map_err(|e| e.to_string())?
    .send()
    .await
    .map_err(|e| e.to_string())?;
    if response.ok() {
        let body: PaymentIntentResponse = response.json().await.map_err(|e| e.to_string())?;
        Ok(body.client_secret)
    } else {
        Err(error_body(response).await)
    }
}

/// Request a subscription intent keyed on a plan's provider price id.
pub async fn create_subscription_intent(
    token: Option<&str>,
    price_id: &str,
) -> Result<String, String> {
    let request = CreateSubscriptionIntentRequest {
        price_id: price_id.to_string(),
    };
    let response = with_bearer(
        Request::post(&endpoint("/api/payment/create-subscription-intent")),
        token,
    )
    .json(&request)
    .map_err(|e| e.to_string())?
    .send()
    .await
    .map_err(|e| e.to_string())?;
    if response.ok() {
        let body: PaymentIntentResponse = response.json().await.map_err(|e| e.to_string())?;
        Ok(body.client_secret)
    } else {
        Err(error_body(response).await)
    }
}
