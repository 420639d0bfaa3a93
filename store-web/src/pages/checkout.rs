//! One-off Purchase Checkout Page
//!
//! Drives the payment-intent lifecycle for a single firmware image: fetch
//! the selected item, request an intent, mount the card element, confirm.

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};
use shared::dto::catalog::FirmwareItem;
use shared::utils::{format_price, price_to_minor_units};

use crate::checkout::{CheckoutFlow, CheckoutPhase, SettleOutcome};
use crate::components::toast::use_toast_context;
use crate::services::{api, stripe};
use crate::state::session::use_session_context;
use crate::utils::constants::{CARD_MOUNT_ID, CURRENCY};

#[component]
pub fn CheckoutPage() -> impl IntoView {
    let params = use_params_map();
    let session = use_session_context();
    let toasts = use_toast_context();
    let navigate = use_navigate();

    let (firmware, set_firmware) = signal(None::<FirmwareItem>);
    let flow = RwSignal::new(CheckoutFlow::new());

    // Resolve the selected item (the catalog is re-fetched, never cached)
    // and request an intent for it as soon as it is known.
    {
        let navigate = navigate.clone();
        let firmware_id = params.with_untracked(|p| p.get("firmware_id"));
        leptos::task::spawn_local(async move {
            let Some(firmware_id) = firmware_id else {
                navigate("/dashboard", Default::default());
                return;
            };
            let selected = match api::list_firmwares().await {
                Ok(items) => items.into_iter().find(|f| f.id == firmware_id),
                Err(err) => {
                    log::error!("failed to load firmware for checkout: {}", err);
                    None
                }
            };
            let Some(selected) = selected else {
                toasts.error("Firmware not found.");
                navigate("/dashboard", Default::default());
                return;
            };

            let amount = price_to_minor_units(selected.price);
            set_firmware.set(Some(selected));

            let generation = flow.try_update(|f| f.begin_intent()).unwrap_or_default();
            let token = session.token();
            match api::create_payment_intent(token.as_deref(), amount, CURRENCY).await {
                Ok(client_secret) => {
                    flow.try_update(|f| f.intent_ready(generation, client_secret));
                }
                Err(err) => {
                    if flow.try_update(|f| f.intent_failed(generation)).unwrap_or(false) {
                        log::error!("failed to create payment intent: {}", err);
                        toasts.error("Could not start the payment. Try again later.");
                    }
                }
            }
        });
    }

    // Mount the card element once a handle is present and its container has
    // rendered. Re-runs until Stripe.js has finished loading.
    Effect::new(move || {
        if flow.with(|f| f.has_handle()) && !stripe::payment_surface_ready() {
            if !stripe::init_payment_surface(CARD_MOUNT_ID) {
                log::warn!("payment surface not ready; Stripe.js may still be loading");
            }
        }
    });

    on_cleanup(|| stripe::teardown_payment_surface());

    let on_pay = {
        let navigate = navigate.clone();
        move |_| {
            // Silent no-op unless the provider client and card element are
            // both up and the flow holds an unconsumed handle.
            let surface_ready = stripe::payment_surface_ready();
            let Some(client_secret) = flow.try_update(|f| f.try_submit(surface_ready)).flatten()
            else {
                return;
            };

            let billing_name = session
                .current_user()
                .map(|user| user.name)
                .unwrap_or_else(|| "Customer".to_string());
            let item_name = firmware
                .get_untracked()
                .map(|f| f.name)
                .unwrap_or_default();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let outcome = match stripe::confirm_card_payment(&client_secret, &billing_name).await
                {
                    Ok(status) => flow.try_update(|f| f.settle_success(status)),
                    Err(message) => flow.try_update(|f| f.settle_error(message)),
                };
                match outcome {
                    Some(SettleOutcome::NavigateToCatalog) => {
                        toasts.success(format!("Payment complete! You now own {}.", item_name));
                        navigate("/dashboard", Default::default());
                    }
                    Some(SettleOutcome::Resubmit(message)) => toasts.error(message),
                    Some(SettleOutcome::Pending(message)) => toasts.info(message),
                    None => {}
                }
            });
        }
    };

    let on_cancel = {
        let navigate = navigate.clone();
        move |_| navigate("/dashboard", Default::default())
    };

    view! {
        <div class="centered-screen">
            <div class="card" style="max-width: 480px; width: 100%;">
                <h1 class="card-title">"Checkout"</h1>
                <p class="subtitle">"Complete your firmware purchase"</p>

                {move || match firmware.get() {
                    None => view! { <p class="subtitle">"Loading..."</p> }.into_any(),
                    Some(item) => view! {
                        <div class="purchase-summary">
                            <div class="summary-row">
                                <span class="summary-label">"Firmware"</span>
                                <span>{item.name.clone()}</span>
                            </div>
                            <div class="summary-row">
                                <span class="summary-label">"Brand"</span>
                                <span>{item.brand.clone()}</span>
                            </div>
                            <div class="summary-row">
                                <span class="summary-label">"Version"</span>
                                <span>{item.version.clone()}</span>
                            </div>
                            <div class="summary-row">
                                <span class="summary-label">"Price"</span>
                                <span>{format_price(item.price)}</span>
                            </div>
                        </div>
                    }
                    .into_any(),
                }}

                {move || {
                    let phase = flow.with(|f| f.phase());
                    if flow.with(|f| f.has_handle()) {
                        let submitting = phase == CheckoutPhase::Submitting;
                        let on_pay = on_pay.clone();
                        view! {
                            <div>
                                <div id=CARD_MOUNT_ID class="card-element-host"></div>
                                <button class="btn btn-full" disabled=submitting on:click=on_pay>
                                    {if submitting { "Processing..." } else { "Pay" }}
                                </button>
                            </div>
                        }
                        .into_any()
                    } else if phase == CheckoutPhase::Failed {
                        view! {
                            <p class="error">"The payment could not be started."</p>
                        }
                        .into_any()
                    } else {
                        view! { <p class="subtitle">"Preparing payment..."</p> }.into_any()
                    }
                }}

                <button class="btn btn-outline btn-full" on:click=on_cancel>"Cancel"</button>
            </div>
        </div>
    }
}
