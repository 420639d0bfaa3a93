//! Checkout orchestration core
//!
//! Pure flow state machine plus the static subscription plan table. The
//! screens in `pages` drive these against the remote collaborators.

pub mod flow;
pub mod plans;

pub use flow::{CheckoutFlow, CheckoutPhase, PaymentStatus, SettleOutcome};
pub use plans::{plan_by_id, BillingInterval, SubscriptionPlan, SUBSCRIPTION_PLANS};
