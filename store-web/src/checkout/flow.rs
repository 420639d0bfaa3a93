//! Checkout flow state machine
//!
//! One `CheckoutFlow` lives per checkout screen and coordinates intent
//! creation, the card-entry surface, and the confirm call. Intent responses
//! carry the generation they were requested under; a response whose
//! generation no longer matches the flow's current one is stale (the user
//! changed selection meanwhile) and is dropped instead of overwriting the
//! newer handle.

/// Screen-local phase of one checkout attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CheckoutPhase {
    Idle,
    AwaitingIntent,
    Ready,
    Submitting,
    Succeeded,
    Failed,
}

/// Provider-reported payment-intent status, enumerated exhaustively.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PaymentStatus {
    Succeeded,
    Processing,
    RequiresAction,
    RequiresPaymentMethod,
    Other(String),
}

impl PaymentStatus {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "succeeded" => PaymentStatus::Succeeded,
            "processing" => PaymentStatus::Processing,
            "requires_action" => PaymentStatus::RequiresAction,
            "requires_payment_method" => PaymentStatus::RequiresPaymentMethod,
            other => PaymentStatus::Other(other.to_string()),
        }
    }
}

/// What the screen should do after a confirm call settles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SettleOutcome {
    /// Payment complete; leave for the catalog screen.
    NavigateToCatalog,
    /// Retryable failure; surface the message and allow resubmission.
    Resubmit(String),
    /// Still pending on the provider side; inform the user and keep the
    /// form up.
    Pending(String),
}

/// Transient state of one confirmation flow.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckoutFlow {
    phase: CheckoutPhase,
    generation: u64,
    client_secret: Option<String>,
}

impl CheckoutFlow {
    pub fn new() -> Self {
        Self {
            phase: CheckoutPhase::Idle,
            generation: 0,
            client_secret: None,
        }
    }

    pub fn phase(&self) -> CheckoutPhase {
        self.phase
    }

    /// A handle is present and the payment form can render.
    pub fn has_handle(&self) -> bool {
        self.client_secret.is_some()
    }

    /// Start a new attempt for a freshly selected product or plan.
    ///
    /// Bumps the generation, which invalidates any outstanding handle and
    /// any intent request still in flight for the previous selection.
    pub fn begin_intent(&mut self) -> u64 {
        self.generation += 1;
        self.client_secret = None;
        self.phase = CheckoutPhase::AwaitingIntent;
        self.generation
    }

    /// Record an intent-creation success. Returns false, changing nothing,
    /// when the response belongs to a superseded selection.
    pub fn intent_ready(&mut self, generation: u64, client_secret: String) -> bool {
        if generation != self.generation {
            return false;
        }
        self.client_secret = Some(client_secret);
        self.phase = CheckoutPhase::Ready;
        true
    }

    /// Record an intent-creation failure; stale failures are dropped the
    /// same way stale successes are. No auto-retry.
    pub fn intent_failed(&mut self, generation: u64) -> bool {
        if generation != self.generation {
            return false;
        }
        self.client_secret = None;
        self.phase = CheckoutPhase::Failed;
        true
    }

    /// Gate a submit click. Returns the handle to confirm, or `None` as a
    /// silent no-op when the payment surface is not up yet or the flow is
    /// not in a submittable phase. Resubmission after a declined attempt
    /// (phase `Failed` with the handle intact) is allowed.
    pub fn try_submit(&mut self, surface_ready: bool) -> Option<String> {
        if !surface_ready {
            return None;
        }
        if !matches!(self.phase, CheckoutPhase::Ready | CheckoutPhase::Failed) {
            return None;
        }
        let secret = self.client_secret.clone()?;
        self.phase = CheckoutPhase::Submitting;
        Some(secret)
    }

    /// Settle a confirm call the provider rejected (decline, validation).
    /// The message is surfaced verbatim and the flow stays resubmittable.
    pub fn settle_error(&mut self, message: String) -> SettleOutcome {
        self.phase = CheckoutPhase::Failed;
        SettleOutcome::Resubmit(message)
    }

    /// Settle a confirm call that returned an intent status.
    pub fn settle_success(&mut self, status: PaymentStatus) -> SettleOutcome {
        match status {
            PaymentStatus::Succeeded => {
                self.phase = CheckoutPhase::Succeeded;
                SettleOutcome::NavigateToCatalog
            }
            PaymentStatus::Processing => {
                self.phase = CheckoutPhase::Ready;
                SettleOutcome::Pending(
                    "Payment is processing. You will be notified once it settles.".to_string(),
                )
            }
            PaymentStatus::RequiresAction => {
                self.phase = CheckoutPhase::Ready;
                SettleOutcome::Pending(
                    "Payment requires additional confirmation from your bank.".to_string(),
                )
            }
            PaymentStatus::RequiresPaymentMethod => {
                self.phase = CheckoutPhase::Failed;
                SettleOutcome::Resubmit(
                    "Payment method was not accepted. Try another card.".to_string(),
                )
            }
            PaymentStatus::Other(status) => {
                self.phase = CheckoutPhase::Failed;
                SettleOutcome::Resubmit(format!("Payment did not complete (status: {}).", status))
            }
        }
    }
}

impl Default for CheckoutFlow {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn happy_path_one_off_purchase() {
        let mut flow = CheckoutFlow::new();
        assert_eq!(flow.phase(), CheckoutPhase::Idle);

        let generation = flow.begin_intent();
        assert_eq!(flow.phase(), CheckoutPhase::AwaitingIntent);

        assert!(flow.intent_ready(generation, "pi_secret".to_string()));
        assert_eq!(flow.phase(), CheckoutPhase::Ready);

        let secret = flow.try_submit(true);
        assert_eq!(secret.as_deref(), Some("pi_secret"));
        assert_eq!(flow.phase(), CheckoutPhase::Submitting);

        let outcome = flow.settle_success(PaymentStatus::Succeeded);
        assert_eq!(outcome, SettleOutcome::NavigateToCatalog);
        assert_eq!(flow.phase(), CheckoutPhase::Succeeded);
    }

    #[test]
    fn submit_is_a_silent_noop_before_surface_is_ready() {
        let mut flow = CheckoutFlow::new();
        let generation = flow.begin_intent();
        flow.intent_ready(generation, "pi_secret".to_string());

        // Provider library still initializing: no transition, handle intact
        assert_eq!(flow.try_submit(false), None);
        assert_eq!(flow.phase(), CheckoutPhase::Ready);
        assert!(flow.has_handle());
    }

    #[test]
    fn submit_without_a_handle_does_nothing() {
        let mut flow = CheckoutFlow::new();
        flow.begin_intent();
        assert_eq!(flow.try_submit(true), None);
        assert_eq!(flow.phase(), CheckoutPhase::AwaitingIntent);
    }

    #[test]
    fn double_submit_is_blocked_while_submitting() {
        let mut flow = CheckoutFlow::new();
        let generation = flow.begin_intent();
        flow.intent_ready(generation, "pi_secret".to_string());

        assert!(flow.try_submit(true).is_some());
        // A second click while the confirm call is in flight
        assert_eq!(flow.try_submit(true), None);
    }

    #[test]
    fn stale_intent_response_is_dropped() {
        let mut flow = CheckoutFlow::new();
        let first = flow.begin_intent();
        // User switches plans before the first response arrives
        let second = flow.begin_intent();

        // First response arrives last but is stale: dropped
        assert!(flow.intent_ready(second, "pi_new".to_string()));
        assert!(!flow.intent_ready(first, "pi_old".to_string()));

        assert_eq!(flow.try_submit(true).as_deref(), Some("pi_new"));
    }

    #[test]
    fn stale_intent_response_is_dropped_regardless_of_arrival_order() {
        let mut flow = CheckoutFlow::new();
        let first = flow.begin_intent();
        let second = flow.begin_intent();

        // Stale response arrives first this time
        assert!(!flow.intent_ready(first, "pi_old".to_string()));
        assert_eq!(flow.phase(), CheckoutPhase::AwaitingIntent);

        assert!(flow.intent_ready(second, "pi_new".to_string()));
        assert_eq!(flow.try_submit(true).as_deref(), Some("pi_new"));
    }

    #[test]
    fn stale_intent_failure_does_not_fail_a_newer_attempt() {
        let mut flow = CheckoutFlow::new();
        let first = flow.begin_intent();
        let second = flow.begin_intent();

        assert!(!flow.intent_failed(first));
        assert_eq!(flow.phase(), CheckoutPhase::AwaitingIntent);

        assert!(flow.intent_ready(second, "pi_new".to_string()));
        assert_eq!(flow.phase(), CheckoutPhase::Ready);
    }

    #[test]
    fn provider_error_surfaces_verbatim_and_allows_resubmission() {
        let mut flow = CheckoutFlow::new();
        let generation = flow.begin_intent();
        flow.intent_ready(generation, "pi_secret".to_string());
        flow.try_submit(true);

        let outcome = flow.settle_error("Your card was declined.".to_string());
        assert_eq!(
            outcome,
            SettleOutcome::Resubmit("Your card was declined.".to_string())
        );
        assert_eq!(flow.phase(), CheckoutPhase::Failed);

        // The user can try again with the same handle
        assert_eq!(flow.try_submit(true).as_deref(), Some("pi_secret"));
    }

    #[test]
    fn only_succeeded_navigates() {
        for (status, navigates) in [
            (PaymentStatus::Succeeded, true),
            (PaymentStatus::Processing, false),
            (PaymentStatus::RequiresAction, false),
            (PaymentStatus::RequiresPaymentMethod, false),
            (PaymentStatus::Other("canceled".to_string()), false),
        ] {
            let mut flow = CheckoutFlow::new();
            let generation = flow.begin_intent();
            flow.intent_ready(generation, "pi_secret".to_string());
            flow.try_submit(true);

            let outcome = flow.settle_success(status);
            assert_eq!(outcome == SettleOutcome::NavigateToCatalog, navigates);
        }
    }

    #[test]
    fn parse_maps_known_statuses() {
        assert_eq!(PaymentStatus::parse("succeeded"), PaymentStatus::Succeeded);
        assert_eq!(PaymentStatus::parse("processing"), PaymentStatus::Processing);
        assert_eq!(
            PaymentStatus::parse("requires_action"),
            PaymentStatus::RequiresAction
        );
        assert_eq!(
            PaymentStatus::parse("requires_payment_method"),
            PaymentStatus::RequiresPaymentMethod
        );
        assert_eq!(
            PaymentStatus::parse("canceled"),
            PaymentStatus::Other("canceled".to_string())
        );
    }
}
