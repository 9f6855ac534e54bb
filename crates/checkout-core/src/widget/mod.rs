//! Hosted Checkout Widget Contract
//!
//! The widget is the gateway-hosted payment window. The controller
//! loads its script once per process, opens it with a fully-built
//! options object, and gets back exactly one outcome per open.

mod mock;

pub use mock::MockCheckoutWidget;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::OnceCell;

use crate::error::Result;

/// Buyer fields the widget pre-populates
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Prefill {
    pub name: String,
    pub email: String,
    pub contact: String,
}

/// Free-form merchant notes attached to the payment
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Notes {
    pub address: String,
}

/// Everything the widget needs to run one payment
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CheckoutOptions {
    pub key: String,
    /// Amount in paise, as the string the widget API takes
    pub amount: String,
    pub currency: String,
    pub name: String,
    pub description: String,
    pub order_id: String,
    pub prefill: Prefill,
    pub notes: Notes,
    pub theme_color: String,
}

/// Proof of payment handed back on success, forwarded verbatim to
/// verification
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentConfirmation {
    pub order_id: String,
    pub payment_id: String,
    pub signature: String,
}

/// How one widget open ended
#[derive(Clone, Debug)]
pub enum WidgetOutcome {
    /// Payer paid, signature attached
    Completed(PaymentConfirmation),
    /// Provider declared the payment failed
    Failed { description: Option<String> },
    /// Payer closed the window without paying
    Dismissed,
}

/// The hosted payment window
#[async_trait]
pub trait CheckoutWidget: Send + Sync {
    /// Fetches the widget's script. Called through [`SdkLoader`], never
    /// directly, so repeat submits share one successful load.
    async fn load(&self) -> Result<()>;

    /// Opens the window and resolves when the payer is done with it
    async fn open(&self, options: CheckoutOptions) -> WidgetOutcome;
}

/// Once-per-process script loading. Concurrent callers share a single
/// in-flight load, and a failed load is not cached, so the next submit
/// tries again.
#[derive(Default)]
pub struct SdkLoader {
    loaded: OnceCell<()>,
}

impl SdkLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns once the script is loaded, fetching it if no successful
    /// load has happened yet
    pub async fn ensure_loaded(&self, widget: &dyn CheckoutWidget) -> Result<()> {
        self.loaded
            .get_or_try_init(|| widget.load())
            .await
            .map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::error::CheckoutError;

    #[tokio::test]
    async fn test_sdk_loads_once_across_submits() {
        let widget = MockCheckoutWidget::new();
        let loader = SdkLoader::new();
        loader.ensure_loaded(&widget).await.unwrap();
        loader.ensure_loaded(&widget).await.unwrap();
        assert_eq!(widget.load_calls(), 1);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_concurrent_loads_share_one_fetch() {
        let widget = Arc::new(MockCheckoutWidget::new());
        let loader = Arc::new(SdkLoader::new());
        let mut handles = Vec::new();
        for _ in 0..8 {
            let widget = Arc::clone(&widget);
            let loader = Arc::clone(&loader);
            handles.push(tokio::spawn(async move {
                loader.ensure_loaded(widget.as_ref()).await
            }));
        }
        for handle in handles {
            handle.await.unwrap().unwrap();
        }
        assert_eq!(widget.load_calls(), 1);
    }

    #[tokio::test]
    async fn test_failed_load_is_retried() {
        let widget = MockCheckoutWidget::with_load_failure();
        let loader = SdkLoader::new();
        let first = loader.ensure_loaded(&widget).await.unwrap_err();
        assert!(matches!(first, CheckoutError::SdkLoad(_)));
        let second = loader.ensure_loaded(&widget).await.unwrap_err();
        assert!(matches!(second, CheckoutError::SdkLoad(_)));
        assert_eq!(widget.load_calls(), 2);
    }
}
