//! Remote collaborators: backend REST API and the Stripe client library

pub mod api;
pub mod stripe;
