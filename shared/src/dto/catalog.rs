use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A purchasable firmware image as listed by the backend catalog.
///
/// Read-only to the frontend; `price` is a decimal major-unit amount
/// (convert with [`crate::utils::price_to_minor_units`] before creating a
/// payment intent).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FirmwareItem {
    pub id: String,
    pub name: String,
    pub brand: String,
    pub version: String,
    #[serde(rename = "releaseDate")]
    pub release_date: NaiveDate,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
}
