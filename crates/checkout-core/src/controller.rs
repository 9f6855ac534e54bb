//! Checkout Controller
//!
//! Owns the form, the pricing selection, and the payment phase, and
//! drives the three-step sequence behind the pay button:
//!
//! ```text
//! submit ─> create order ─> load script ─> open widget ─> verify
//! ```
//!
//! Every failure along the way lands back in Idle with one user
//! notice, so the payer can always try again.

use std::sync::Arc;

use crate::config::CheckoutConfig;
use crate::error::{CheckoutError, Result};
use crate::form::CheckoutForm;
use crate::gateway::{CreateOrderRequest, OrderGateway, VerifyPaymentRequest};
use crate::notify::Notifier;
use crate::pricing::{Denomination, Tier, CURRENCY};
use crate::session::{PaymentPhase, SessionContext};
use crate::theme::ThemeMode;
use crate::widget::{CheckoutOptions, CheckoutWidget, Notes, Prefill, SdkLoader, WidgetOutcome};

/// Single-page checkout state machine
pub struct CheckoutController {
    gateway: Arc<dyn OrderGateway>,
    widget: Arc<dyn CheckoutWidget>,
    notifier: Arc<dyn Notifier>,
    sdk: SdkLoader,
    config: CheckoutConfig,
    session: SessionContext,
    form: CheckoutForm,
    tier: Tier,
    denomination: Denomination,
    theme: ThemeMode,
    phase: PaymentPhase,
}

impl CheckoutController {
    pub fn new(
        gateway: Arc<dyn OrderGateway>,
        widget: Arc<dyn CheckoutWidget>,
        notifier: Arc<dyn Notifier>,
        config: CheckoutConfig,
        session: SessionContext,
    ) -> Self {
        Self {
            gateway,
            widget,
            notifier,
            sdk: SdkLoader::new(),
            config,
            session,
            form: CheckoutForm::default(),
            tier: Tier::default(),
            denomination: Denomination::default(),
            theme: ThemeMode::default(),
            phase: PaymentPhase::default(),
        }
    }

    pub fn form(&self) -> &CheckoutForm {
        &self.form
    }

    pub fn phase(&self) -> PaymentPhase {
        self.phase
    }

    pub fn tier(&self) -> Tier {
        self.tier
    }

    pub fn denomination(&self) -> Denomination {
        self.denomination
    }

    pub fn theme(&self) -> ThemeMode {
        self.theme
    }

    pub fn set_name(&mut self, name: &str) {
        self.form.name = name.to_string();
    }

    pub fn set_email(&mut self, email: &str) {
        self.form.email = email.to_string();
    }

    /// Contact input is sanitized on the way in, so the stored value
    /// is always digits-only and at most ten long
    pub fn set_contact(&mut self, raw: &str) {
        self.form.set_contact(raw);
    }

    pub fn set_address(&mut self, address: &str) {
        self.form.address = address.to_string();
    }

    pub fn set_amount(&mut self, amount: &str) {
        self.form.amount = amount.to_string();
    }

    pub fn select_tier(&mut self, tier: Tier) {
        self.tier = tier;
    }

    pub fn select_denomination(&mut self, denomination: Denomination) {
        self.denomination = denomination;
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    /// Amount due in rupees for the current tier
    pub fn payable_amount(&self) -> f64 {
        self.tier.payable_amount()
    }

    /// Amount due in paise for the current tier
    pub fn amount_in_paise(&self) -> i64 {
        self.tier.amount_in_paise()
    }

    /// Whether the pay button does anything right now
    pub fn is_submittable(&self) -> bool {
        self.form.is_valid() && self.phase.accepts_submit()
    }

    /// Runs one payment attempt end to end. On success the session is
    /// Done; on any failure it is back to Idle, the payer has been
    /// notified, and the error is returned for the caller's own use.
    pub async fn submit(&mut self) -> Result<()> {
        if !self.is_submittable() {
            tracing::debug!(phase = ?self.phase, "submit ignored");
            return Ok(());
        }

        self.phase = PaymentPhase::Paying;
        tracing::info!(
            tier = ?self.tier,
            amount = self.payable_amount(),
            paise = self.amount_in_paise(),
            "payment attempt started"
        );

        match self.run_sequence().await {
            Ok(()) => {
                self.phase = PaymentPhase::Done;
                tracing::info!("payment verified");
                Ok(())
            }
            Err(err) => {
                self.phase = PaymentPhase::Idle;
                if err.is_payer_action() {
                    tracing::info!(error = %err, "payment attempt ended by payer");
                } else {
                    tracing::warn!(error = %err, "payment attempt failed");
                }
                self.notifier.notify(&err.user_message());
                Err(err)
            }
        }
    }

    /// The three gateway steps, in order. Phase handling lives in
    /// [`submit`](Self::submit) so every exit path here maps to
    /// exactly one phase transition there.
    async fn run_sequence(&self) -> Result<()> {
        let order = self
            .gateway
            .create_order(CreateOrderRequest {
                amount: self.amount_in_paise(),
                currency: CURRENCY.to_string(),
                willid: self.session.draft_id.clone(),
            })
            .await?;
        tracing::debug!(order_id = %order.id, "order created");

        self.sdk.ensure_loaded(self.widget.as_ref()).await?;

        let options = CheckoutOptions {
            key: self.config.key.clone(),
            amount: order.amount.to_string(),
            currency: order.currency.clone(),
            name: self.config.name.clone(),
            description: self.config.description.clone(),
            order_id: order.id.clone(),
            prefill: Prefill {
                name: self.form.name.clone(),
                email: self.form.email.clone(),
                contact: self.form.contact.clone(),
            },
            notes: Notes {
                address: self.form.address.clone(),
            },
            theme_color: self.config.theme_color.clone(),
        };

        match self.widget.open(options).await {
            WidgetOutcome::Completed(confirmation) => {
                let verification = self
                    .gateway
                    .verify_payment(VerifyPaymentRequest {
                        razorpay_order_id: confirmation.order_id,
                        razorpay_payment_id: confirmation.payment_id,
                        razorpay_signature: confirmation.signature,
                        will_id: self.session.draft_id.clone(),
                        is_premium: true,
                        value_of_draft: self.denomination.value(),
                        user_id: self.session.user_id.clone(),
                        amount: self.payable_amount(),
                    })
                    .await?;
                if verification.is_verified() {
                    Ok(())
                } else {
                    Err(CheckoutError::VerificationRejected(verification.message))
                }
            }
            WidgetOutcome::Failed { description } => {
                Err(CheckoutError::PaymentFailed(description))
            }
            WidgetOutcome::Dismissed => Err(CheckoutError::Cancelled),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::MockOrderGateway;
    use crate::notify::MemoryNotifier;
    use crate::widget::MockCheckoutWidget;

    struct Harness {
        gateway: Arc<MockOrderGateway>,
        widget: Arc<MockCheckoutWidget>,
        notifier: Arc<MemoryNotifier>,
        controller: CheckoutController,
    }

    fn harness(gateway: MockOrderGateway, widget: MockCheckoutWidget) -> Harness {
        let gateway = Arc::new(gateway);
        let widget = Arc::new(widget);
        let notifier = Arc::new(MemoryNotifier::new());
        let mut controller = CheckoutController::new(
            Arc::clone(&gateway) as Arc<dyn OrderGateway>,
            Arc::clone(&widget) as Arc<dyn CheckoutWidget>,
            Arc::clone(&notifier) as Arc<dyn Notifier>,
            CheckoutConfig::default(),
            SessionContext::new(Some("draft_42".into()), Some("user_7".into())),
        );
        controller.set_name("John Doe");
        controller.set_email("john@example.com");
        controller.set_contact("9876543210");
        controller.set_address("12 Main Street");
        controller.set_amount("100");
        Harness {
            gateway,
            widget,
            notifier,
            controller,
        }
    }

    #[tokio::test]
    async fn test_submit_inert_on_invalid_form() {
        let mut h = harness(MockOrderGateway::new(), MockCheckoutWidget::new());
        h.controller.set_email("not-an-email");
        assert!(!h.controller.is_submittable());

        h.controller.submit().await.unwrap();
        assert_eq!(h.controller.phase(), PaymentPhase::Idle);
        assert!(h.gateway.create_requests().is_empty());
        assert!(h.notifier.messages().is_empty());
    }

    #[tokio::test]
    async fn test_happy_path_reaches_done() {
        let mut h = harness(MockOrderGateway::new(), MockCheckoutWidget::new());
        assert!(h.controller.is_submittable());

        h.controller.submit().await.unwrap();
        assert_eq!(h.controller.phase(), PaymentPhase::Done);
        assert!(h.notifier.messages().is_empty());

        let creates = h.gateway.create_requests();
        assert_eq!(creates.len(), 1);
        assert_eq!(creates[0].amount, 110_000);
        assert_eq!(creates[0].currency, "INR");
        assert_eq!(creates[0].willid.as_deref(), Some("draft_42"));

        let opens = h.widget.opened_with();
        assert_eq!(opens.len(), 1);
        assert_eq!(opens[0].key, "rzp_test_WrEHxWwQWGpjH8");
        assert_eq!(opens[0].amount, "110000");
        assert_eq!(opens[0].currency, "INR");
        assert_eq!(opens[0].order_id, "order_mock_0001");
        assert_eq!(opens[0].prefill.name, "John Doe");
        assert_eq!(opens[0].prefill.email, "john@example.com");
        assert_eq!(opens[0].prefill.contact, "9876543210");
        assert_eq!(opens[0].notes.address, "12 Main Street");
        assert_eq!(opens[0].theme_color, "#FF4B26");

        let verifies = h.gateway.verify_requests();
        assert_eq!(verifies.len(), 1);
        assert_eq!(verifies[0].razorpay_order_id, "order_mock_0001");
        assert_eq!(verifies[0].razorpay_payment_id, "pay_mock_0001");
        assert_eq!(verifies[0].razorpay_signature, "sig_mock_0001");
        assert_eq!(verifies[0].will_id.as_deref(), Some("draft_42"));
        assert!(verifies[0].is_premium);
        assert_eq!(verifies[0].value_of_draft, 5500);
        assert_eq!(verifies[0].user_id.as_deref(), Some("user_7"));
        assert_eq!(verifies[0].amount, 1100.0);
    }

    #[tokio::test]
    async fn test_tier_b_amounts() {
        let mut h = harness(MockOrderGateway::new(), MockCheckoutWidget::new());
        h.controller.select_tier(Tier::TierB);
        assert_eq!(h.controller.payable_amount(), 2750.0);

        h.controller.submit().await.unwrap();
        assert_eq!(h.gateway.create_requests()[0].amount, 275_000);
        assert_eq!(h.widget.opened_with()[0].amount, "275000");
        assert_eq!(h.gateway.verify_requests()[0].amount, 2750.0);
    }

    #[tokio::test]
    async fn test_order_creation_failure_returns_to_idle() {
        let mut h = harness(MockOrderGateway::failing_create(), MockCheckoutWidget::new());
        let err = h.controller.submit().await.unwrap_err();
        assert!(matches!(err, CheckoutError::OrderCreation(_)));
        assert_eq!(h.controller.phase(), PaymentPhase::Idle);
        assert_eq!(
            h.notifier.messages(),
            vec!["Payment initiation failed. Please try again."]
        );
        assert_eq!(h.widget.load_calls(), 0);
        assert!(h.widget.opened_with().is_empty());
    }

    #[tokio::test]
    async fn test_script_load_failure_returns_to_idle() {
        let mut h = harness(
            MockOrderGateway::new(),
            MockCheckoutWidget::with_load_failure(),
        );
        let err = h.controller.submit().await.unwrap_err();
        assert!(matches!(err, CheckoutError::SdkLoad(_)));
        assert_eq!(h.controller.phase(), PaymentPhase::Idle);
        assert_eq!(h.notifier.messages(), vec!["Failed to load Razorpay SDK"]);
        assert!(h.widget.opened_with().is_empty());
    }

    #[tokio::test]
    async fn test_payment_failure_surfaces_provider_description() {
        let mut h = harness(
            MockOrderGateway::new(),
            MockCheckoutWidget::failing(Some("Card declined")),
        );
        let err = h.controller.submit().await.unwrap_err();
        assert!(matches!(err, CheckoutError::PaymentFailed(_)));
        assert_eq!(h.controller.phase(), PaymentPhase::Idle);
        assert_eq!(h.notifier.messages(), vec!["Card declined"]);
        assert!(h.gateway.verify_requests().is_empty());
    }

    #[tokio::test]
    async fn test_payment_failure_without_description() {
        let mut h = harness(MockOrderGateway::new(), MockCheckoutWidget::failing(None));
        h.controller.submit().await.unwrap_err();
        assert_eq!(
            h.notifier.messages(),
            vec!["Payment failed. Please try again."]
        );
    }

    #[tokio::test]
    async fn test_dismissal_returns_to_idle() {
        let mut h = harness(MockOrderGateway::new(), MockCheckoutWidget::dismissing());
        let err = h.controller.submit().await.unwrap_err();
        assert!(matches!(err, CheckoutError::Cancelled));
        assert_eq!(h.controller.phase(), PaymentPhase::Idle);
        assert_eq!(h.notifier.messages(), vec!["Payment cancelled."]);
        assert!(h.gateway.verify_requests().is_empty());
    }

    #[tokio::test]
    async fn test_verification_transport_failure() {
        let mut h = harness(MockOrderGateway::failing_verify(), MockCheckoutWidget::new());
        let err = h.controller.submit().await.unwrap_err();
        assert!(matches!(err, CheckoutError::Verification(_)));
        assert_eq!(h.controller.phase(), PaymentPhase::Idle);
        assert_eq!(
            h.notifier.messages(),
            vec!["Payment verification failed. Please contact support."]
        );
    }

    #[tokio::test]
    async fn test_verification_rejection() {
        let mut h = harness(
            MockOrderGateway::verifying_with("Signature mismatch"),
            MockCheckoutWidget::new(),
        );
        let err = h.controller.submit().await.unwrap_err();
        assert!(matches!(err, CheckoutError::VerificationRejected(_)));
        assert_eq!(h.controller.phase(), PaymentPhase::Idle);
        assert_eq!(h.notifier.messages(), vec!["Payment verification failed"]);
    }

    #[tokio::test]
    async fn test_submit_inert_after_done() {
        let mut h = harness(MockOrderGateway::new(), MockCheckoutWidget::new());
        h.controller.submit().await.unwrap();
        assert_eq!(h.controller.phase(), PaymentPhase::Done);
        assert!(!h.controller.is_submittable());

        h.controller.submit().await.unwrap();
        assert_eq!(h.gateway.create_requests().len(), 1);
    }

    #[tokio::test]
    async fn test_resubmit_after_failure_skips_reload() {
        let mut h = harness(MockOrderGateway::new(), MockCheckoutWidget::dismissing());
        h.controller.submit().await.unwrap_err();
        assert_eq!(h.controller.phase(), PaymentPhase::Idle);
        assert!(h.controller.is_submittable());

        h.controller.submit().await.unwrap_err();
        assert_eq!(h.gateway.create_requests().len(), 2);
        assert_eq!(h.widget.load_calls(), 1);
        assert_eq!(
            h.notifier.messages(),
            vec!["Payment cancelled.", "Payment cancelled."]
        );
    }
}
