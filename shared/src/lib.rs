//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the storefront frontend and the
//! backend API. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::auth`]**: Authentication and user DTOs
//!   - **[`dto::catalog`]**: Firmware catalog DTOs
//!   - **[`dto::payment`]**: Payment-intent DTOs
//! - **[`utils`]**: Shared helpers (price ↔ minor-unit conversion, display
//!   formatting)
//!
//! ## Wire Format
//!
//! - Field names are **snake_case** in Rust; fields the backend expects in
//!   camelCase (`clientSecret`, `priceId`, `releaseDate`) carry explicit
//!   `#[serde(rename)]`
//! - Optional fields are omitted from JSON when `None`
//! - All structs implement both `Serialize` and `Deserialize`
//!
//! ## Usage in the frontend
//!
//! ```rust
//! use shared::dto::auth::LoginRequest;
//! use shared::utils::price_to_minor_units;
//!
//! let request = LoginRequest {
//!     email: "alice@example.com".to_string(),
//!     password: "secret".to_string(),
//! };
//! let body = serde_json::to_string(&request).unwrap();
//! assert!(body.contains("alice@example.com"));
//!
//! assert_eq!(price_to_minor_units(12.99), 1299);
//! ```

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
pub use dto::*;
pub use utils::*;
