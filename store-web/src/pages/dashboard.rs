//! Catalog Dashboard Page
//!
//! Lists the purchasable firmware images with brand and name filtering.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use shared::dto::catalog::FirmwareItem;
use shared::utils::format_price;

use crate::components::toast::use_toast_context;
use crate::services::api;
use crate::state::session::use_session_context;
use crate::utils::format::format_release_date;

const BRAND_FILTERS: &[&str] = &["all", "Samsung", "LG", "Sony"];

/// Apply the brand and name filters. Brand `"all"` and an empty name query
/// both act as match-all; the name match is a case-insensitive substring.
fn filter_firmwares(items: &[FirmwareItem], brand: &str, name: &str) -> Vec<FirmwareItem> {
    let name_query = name.to_lowercase();
    items
        .iter()
        .filter(|firmware| {
            (brand == "all" || firmware.brand == brand)
                && (name_query.is_empty() || firmware.name.to_lowercase().contains(&name_query))
        })
        .cloned()
        .collect()
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = use_session_context();
    let toasts = use_toast_context();
    let navigate = use_navigate();

    let (firmwares, set_firmwares) = signal(Vec::<FirmwareItem>::new());
    let (brand_filter, set_brand_filter) = signal("all".to_string());
    let (name_filter, set_name_filter) = signal(String::new());

    // Each mount re-fetches; a failed fetch degrades to an empty catalog
    leptos::task::spawn_local(async move {
        match api::list_firmwares().await {
            Ok(items) => set_firmwares.set(items),
            Err(err) => {
                log::error!("failed to load firmware catalog: {}", err);
                toasts.error("Could not load the firmware catalog.");
                set_firmwares.set(Vec::new());
            }
        }
    });

    let filtered = move || {
        firmwares.with(|items| filter_firmwares(items, &brand_filter.get(), &name_filter.get()))
    };

    view! {
        <div class="card card-wide">
            <h1 class="card-title">"Catalog"</h1>
            <p class="subtitle">
                {move || {
                    session
                        .current_user()
                        .map(|user| format!("Welcome to your control panel, {}.", user.name))
                        .unwrap_or_default()
                }}
            </p>

            <div class="filter-row">
                <select on:change=move |ev| set_brand_filter.set(event_target_value(&ev))>
                    {BRAND_FILTERS
                        .iter()
                        .map(|brand| {
                            let label = if *brand == "all" { "All brands" } else { *brand };
                            view! { <option value={*brand}>{label}</option> }
                        })
                        .collect::<Vec<_>>()}
                </select>
                <input
                    type="text"
                    placeholder="Filter by name"
                    prop:value=name_filter
                    on:input=move |ev| set_name_filter.set(event_target_value(&ev))
                />
                <A href="/subscribe" attr:class="btn btn-outline">"Subscribe"</A>
            </div>

            <table>
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Brand"</th>
                        <th>"Version"</th>
                        <th>"Release date"</th>
                        <th>"Price"</th>
                        <th>"Action"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        filtered()
                            .into_iter()
                            .map(|firmware| {
                                let navigate = navigate.clone();
                                let firmware_id = firmware.id.clone();
                                view! {
                                    <tr>
                                        <td>{firmware.name.clone()}</td>
                                        <td>{firmware.brand.clone()}</td>
                                        <td>{firmware.version.clone()}</td>
                                        <td>{format_release_date(&firmware.release_date)}</td>
                                        <td>{format_price(firmware.price)}</td>
                                        <td>
                                            <button
                                                class="btn"
                                                on:click=move |_| navigate(
                                                    &format!("/checkout/{}", firmware_id),
                                                    Default::default(),
                                                )
                                            >
                                                "Buy"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </tbody>
            </table>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn item(name: &str, brand: &str) -> FirmwareItem {
        FirmwareItem {
            id: format!("{}-{}", brand, name),
            name: name.to_string(),
            brand: brand.to_string(),
            version: "1.0.0".to_string(),
            release_date: NaiveDate::from_ymd_opt(2023, 1, 15).unwrap(),
            price: 9.99,
            description: None,
            instructions: None,
        }
    }

    fn catalog() -> Vec<FirmwareItem> {
        vec![
            item("Firmware A", "Samsung"),
            item("Firmware B", "LG"),
            item("Patch C", "LG"),
            item("Firmware D", "Sony"),
        ]
    }

    #[test]
    fn brand_and_name_filters_compose() {
        let items = catalog();
        let hits = filter_firmwares(&items, "LG", "FIRMWARE");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Firmware B");
    }

    #[test]
    fn empty_name_filter_matches_all_of_brand() {
        let items = catalog();
        let hits = filter_firmwares(&items, "LG", "");
        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn all_brand_with_name_query() {
        let items = catalog();
        let hits = filter_firmwares(&items, "all", "firmware");
        assert_eq!(hits.len(), 3);
    }

    #[test]
    fn all_filters_open_returns_everything() {
        let items = catalog();
        assert_eq!(filter_firmwares(&items, "all", "").len(), items.len());
    }
}
