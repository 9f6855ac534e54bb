//! Mock Checkout Widget for Tests and Demos

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::{CheckoutError, Result};
use crate::widget::{CheckoutOptions, CheckoutWidget, PaymentConfirmation, WidgetOutcome};

/// Scriptable widget. Counts script loads and records the options
/// every open was given.
pub struct MockCheckoutWidget {
    outcome: WidgetOutcome,
    fail_load: bool,
    load_calls: AtomicUsize,
    opened_with: Mutex<Vec<CheckoutOptions>>,
}

impl MockCheckoutWidget {
    /// Widget whose payer always completes the payment
    pub fn new() -> Self {
        Self {
            outcome: WidgetOutcome::Completed(PaymentConfirmation {
                order_id: "order_mock_0001".into(),
                payment_id: "pay_mock_0001".into(),
                signature: "sig_mock_0001".into(),
            }),
            fail_load: false,
            load_calls: AtomicUsize::new(0),
            opened_with: Mutex::new(Vec::new()),
        }
    }

    /// Widget that resolves every open with `outcome`
    pub fn with_outcome(outcome: WidgetOutcome) -> Self {
        Self {
            outcome,
            ..Self::new()
        }
    }

    /// Widget whose payer closes the window without paying
    pub fn dismissing() -> Self {
        Self::with_outcome(WidgetOutcome::Dismissed)
    }

    /// Widget whose provider declares the payment failed
    pub fn failing(description: Option<&str>) -> Self {
        Self::with_outcome(WidgetOutcome::Failed {
            description: description.map(str::to_string),
        })
    }

    /// Widget whose script never loads
    pub fn with_load_failure() -> Self {
        Self {
            fail_load: true,
            ..Self::new()
        }
    }

    /// How many times the script was fetched
    pub fn load_calls(&self) -> usize {
        self.load_calls.load(Ordering::SeqCst)
    }

    /// Options from every open so far
    pub fn opened_with(&self) -> Vec<CheckoutOptions> {
        self.opened_with.lock().unwrap().clone()
    }
}

impl Default for MockCheckoutWidget {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CheckoutWidget for MockCheckoutWidget {
    async fn load(&self) -> Result<()> {
        self.load_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_load {
            return Err(CheckoutError::SdkLoad("script unreachable".into()));
        }
        Ok(())
    }

    async fn open(&self, options: CheckoutOptions) -> WidgetOutcome {
        self.opened_with.lock().unwrap().push(options);
        self.outcome.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::{Notes, Prefill};

    #[tokio::test]
    async fn test_mock_widget_records_opens() {
        let widget = MockCheckoutWidget::dismissing();
        widget.load().await.unwrap();
        let outcome = widget
            .open(CheckoutOptions {
                key: "rzp_test_key".into(),
                amount: "110000".into(),
                currency: "INR".into(),
                name: "Shop".into(),
                description: "Order".into(),
                order_id: "order_1".into(),
                prefill: Prefill {
                    name: "John Doe".into(),
                    email: "john@example.com".into(),
                    contact: "9876543210".into(),
                },
                notes: Notes {
                    address: "12 Main Street".into(),
                },
                theme_color: "#FF4B26".into(),
            })
            .await;
        assert!(matches!(outcome, WidgetOutcome::Dismissed));
        assert_eq!(widget.load_calls(), 1);
        assert_eq!(widget.opened_with().len(), 1);
        assert_eq!(widget.opened_with()[0].amount, "110000");
    }
}
