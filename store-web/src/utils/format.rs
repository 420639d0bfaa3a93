//! Formatting helpers for the storefront UI

pub use shared::utils::format_price;

/// Format a catalog release date for table display.
pub fn format_release_date(date: &chrono::NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn release_date_is_iso_formatted() {
        let date = NaiveDate::from_ymd_opt(2023, 2, 20).unwrap();
        assert_eq!(format_release_date(&date), "2023-02-20");
    }
}
