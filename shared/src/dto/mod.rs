//! # Data Transfer Objects (DTOs)
//!
//! All data structures exchanged with the backend REST API.
//!
//! ## Module Organization
//!
//! - [`auth`] - Login, registration, and current-user DTOs
//! - [`catalog`] - Purchasable firmware records
//! - [`payment`] - Payment-intent creation DTOs
//!
//! ## Serialization Format
//!
//! All DTOs use `serde_json`:
//!
//! - **Field naming**: snake_case by default; fields the backend expects in
//!   camelCase carry explicit `#[serde(rename)]`
//! - **Optional fields**: omitted when `None` via
//!   `#[serde(skip_serializing_if = "Option::is_none")]`
//! - **All types**: implement both `Serialize` and `Deserialize`
//!
//! ## Example Request/Response Pair
//!
//! ```text
//! POST /api/payment/create-payment-intent
//! Content-Type: application/json
//!
//! { "amount": 1299, "currency": "brl" }
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! { "clientSecret": "pi_3Abc_secret_Xyz" }
//! ```

pub mod auth;
pub mod catalog;
pub mod payment;

pub use auth::*;
pub use catalog::*;
pub use payment::*;
