//! Stripe Integration via wasm-bindgen
//!
//! This module provides JavaScript interop for Stripe's client library
//! (loaded from js.stripe.com in index.html). It owns the card-entry element
//! lifecycle and the confirm-card-payment call; tokenization and PCI
//! handling stay on Stripe's side.

use serde::Deserialize;
use wasm_bindgen::prelude::*;

use crate::checkout::flow::PaymentStatus;
use crate::utils::constants::stripe_publishable_key;

// ============================================================================
// STRIPE CLIENT AND CARD ELEMENT (JavaScript Interop)
// ============================================================================

#[wasm_bindgen(inline_js = "
let stripe = null;
let card = null;

export function initCardPayment(publishableKey, mountId) {
    if (typeof window.Stripe === 'undefined') {
        // Stripe.js script has not finished loading yet
        return false;
    }
    if (!stripe) {
        stripe = window.Stripe(publishableKey);
    }
    const host = document.getElementById(mountId);
    if (!host) {
        return false;
    }
    // Re-mounting after navigation: drop any element bound to a dead node
    if (card) {
        try { card.unmount(); } catch (_) {}
        card = null;
    }
    const elements = stripe.elements();
    card = elements.create('card', { style: { base: { fontSize: '16px' } } });
    card.mount('#' + mountId);
    return true;
}

export function cardPaymentReady() {
    return stripe !== null && card !== null;
}

export function teardownCardPayment() {
    if (card) {
        try { card.unmount(); } catch (_) {}
        try { card.destroy(); } catch (_) {}
        card = null;
    }
}

export async function confirmCardPayment(clientSecret, billingName) {
    if (!stripe || !card) {
        throw new Error('Payment form is not ready.');
    }
    const result = await stripe.confirmCardPayment(clientSecret, {
        payment_method: {
            card: card,
            billing_details: { name: billingName },
        },
    });
    if (result.error) {
        throw new Error(result.error.message || 'Payment failed.');
    }
    return { status: result.paymentIntent ? result.paymentIntent.status : 'unknown' };
}
")]
extern "C" {
    /// Create the Stripe client (first call) and mount a card element
    fn initCardPayment(publishable_key: &str, mount_id: &str) -> bool;

    /// True once both the client and the card element are initialized
    fn cardPaymentReady() -> bool;

    /// Unmount and drop the card element
    fn teardownCardPayment();

    /// Confirm a payment intent against the mounted card element
    #[wasm_bindgen(catch)]
    async fn confirmCardPayment(client_secret: &str, billing_name: &str)
        -> Result<JsValue, JsValue>;
}

// ============================================================================
// PAYMENT SERVICE
// ============================================================================

/// Mount the card-entry surface into the element with the given DOM id.
///
/// Returns false when Stripe.js has not loaded or the mount node is not in
/// the DOM yet; callers retry from a later render effect.
pub fn init_payment_surface(mount_id: &str) -> bool {
    initCardPayment(stripe_publishable_key(), mount_id)
}

/// Both the provider client and the card element are initialized.
pub fn payment_surface_ready() -> bool {
    cardPaymentReady()
}

pub fn teardown_payment_surface() {
    teardownCardPayment();
}

/// Shape of a successful confirm call
#[derive(Deserialize)]
struct ConfirmOutcome {
    status: String,
}

/// Confirm the intent behind `client_secret` with the card the user entered.
///
/// A provider-reported failure comes back as `Err` with the provider's
/// message verbatim; success carries the reported intent status.
pub async fn confirm_card_payment(
    client_secret: &str,
    billing_name: &str,
) -> Result<PaymentStatus, String> {
    match confirmCardPayment(client_secret, billing_name).await {
        Ok(outcome) => {
            let outcome: ConfirmOutcome = serde_wasm_bindgen::from_value(outcome)
                .map_err(|e| format!("Unexpected confirmation result: {}", e))?;
            Ok(PaymentStatus::parse(&outcome.status))
        }
        Err(err) => Err(err
            .as_string()
            .unwrap_or_else(|| format!("Payment error: {:?}", err))),
    }
}
