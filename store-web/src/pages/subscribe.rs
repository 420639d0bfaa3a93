//! Subscription Checkout Page
//!
//! Same confirmation protocol as the one-off checkout, keyed on a
//! subscription plan instead of a firmware item. Changing the plan
//! supersedes any outstanding intent request.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use shared::utils::format_price;

use crate::checkout::{
    plan_by_id, CheckoutFlow, CheckoutPhase, SettleOutcome, SubscriptionPlan, SUBSCRIPTION_PLANS,
};
use crate::components::toast::use_toast_context;
use crate::services::{api, stripe};
use crate::state::session::use_session_context;
use crate::utils::constants::CARD_MOUNT_ID;
use crate::utils::url::get_query_param;

#[component]
pub fn SubscribePage() -> impl IntoView {
    let session = use_session_context();
    let toasts = use_toast_context();
    let navigate = use_navigate();

    // ?plan=<price_id> preselects a tier; default is the first plan
    let initial_plan = get_query_param("plan")
        .and_then(|id| plan_by_id(&id))
        .unwrap_or(&SUBSCRIPTION_PLANS[0]);

    let (selected_plan, set_selected_plan) = signal(initial_plan);
    let flow = RwSignal::new(CheckoutFlow::new());

    // Request a subscription intent for a plan. Selecting a different plan
    // bumps the flow generation first, so a superseded request's response
    // is dropped on arrival instead of overwriting the newer handle.
    let request_intent = move |plan: &'static SubscriptionPlan| {
        let generation = flow.try_update(|f| f.begin_intent()).unwrap_or_default();
        let token = session.token();
        leptos::task::spawn_local(async move {
            match api::create_subscription_intent(token.as_deref(), plan.id).await {
                Ok(client_secret) => {
                    flow.try_update(|f| f.intent_ready(generation, client_secret));
                }
                Err(err) => {
                    if flow.try_update(|f| f.intent_failed(generation)).unwrap_or(false) {
                        log::error!("failed to create subscription intent: {}", err);
                        toasts.error("Could not start the subscription. Try again later.");
                    }
                }
            }
        });
    };

    request_intent(initial_plan);

    // Mount the card element once a handle is present; re-runs until
    // Stripe.js has finished loading.
    Effect::new(move || {
        if flow.with(|f| f.has_handle()) && !stripe::payment_surface_ready() {
            if !stripe::init_payment_surface(CARD_MOUNT_ID) {
                log::warn!("payment surface not ready; Stripe.js may still be loading");
            }
        }
    });

    on_cleanup(|| stripe::teardown_payment_surface());

    let on_select = move |plan: &'static SubscriptionPlan| {
        if selected_plan.get_untracked().id == plan.id {
            return;
        }
        set_selected_plan.set(plan);
        request_intent(plan);
    };

    let on_subscribe = {
        let navigate = navigate.clone();
        move |_| {
            let surface_ready = stripe::payment_surface_ready();
            let Some(client_secret) = flow.try_update(|f| f.try_submit(surface_ready)).flatten()
            else {
                return;
            };

            let billing_name = session
                .current_user()
                .map(|user| user.name)
                .unwrap_or_else(|| "Customer".to_string());
            let plan_name = selected_plan.get_untracked().name;
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let outcome = match stripe::confirm_card_payment(&client_secret, &billing_name).await
                {
                    Ok(status) => flow.try_update(|f| f.settle_success(status)),
                    Err(message) => flow.try_update(|f| f.settle_error(message)),
                };
                match outcome {
                    Some(SettleOutcome::NavigateToCatalog) => {
                        toasts.success(format!("{} subscription active. Welcome aboard!", plan_name));
                        navigate("/dashboard", Default::default());
                    }
                    Some(SettleOutcome::Resubmit(message)) => toasts.error(message),
                    Some(SettleOutcome::Pending(message)) => toasts.info(message),
                    None => {}
                }
            });
        }
    };

    view! {
        <div class="centered-screen">
            <div class="card" style="max-width: 520px; width: 100%;">
                <h1 class="card-title">"Subscribe"</h1>
                <p class="subtitle">"Unlimited firmware downloads for your devices"</p>

                <div class="plan-row">
                    {SUBSCRIPTION_PLANS
                        .iter()
                        .map(|plan| {
                            view! {
                                <button
                                    class=move || {
                                        if selected_plan.get().id == plan.id {
                                            "plan-option plan-selected"
                                        } else {
                                            "plan-option"
                                        }
                                    }
                                    on:click=move |_| on_select(plan)
                                >
                                    <span class="plan-name">{plan.name}</span>
                                    <span class="plan-price">{format_price(plan.price)}</span>
                                    <span class="plan-interval">
                                        {format!("per {}", plan.interval.label())}
                                    </span>
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>

                {move || {
                    let phase = flow.with(|f| f.phase());
                    if flow.with(|f| f.has_handle()) {
                        let submitting = phase == CheckoutPhase::Submitting;
                        let on_subscribe = on_subscribe.clone();
                        // CTA price is recomputed from the selection on
                        // every render
                        let label = if submitting {
                            "Processing...".to_string()
                        } else {
                            let plan = selected_plan.get();
                            format!(
                                "Subscribe for {} / {}",
                                format_price(plan.price),
                                plan.interval.label()
                            )
                        };
                        view! {
                            <div>
                                <div id=CARD_MOUNT_ID class="card-element-host"></div>
                                <button class="btn btn-full" disabled=submitting on:click=on_subscribe>
                                    {label}
                                </button>
                            </div>
                        }
                        .into_any()
                    } else if phase == CheckoutPhase::Failed {
                        view! {
                            <p class="error">"The subscription could not be started."</p>
                        }
                        .into_any()
                    } else {
                        view! { <p class="subtitle">"Preparing payment..."</p> }.into_any()
                    }
                }}
            </div>
        </div>
    }
}
