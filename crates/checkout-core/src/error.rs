//! Checkout Error Types

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, CheckoutError>;

/// Everything that can end a payment attempt short of success
#[derive(Error, Debug)]
pub enum CheckoutError {
    /// Order creation request rejected or unreachable
    #[error("order creation failed: {0}")]
    OrderCreation(String),

    /// The hosted checkout library could not be fetched
    #[error("checkout library failed to load: {0}")]
    SdkLoad(String),

    /// Verification request rejected or unreachable
    #[error("verification request failed: {0}")]
    Verification(String),

    /// Backend answered the verification call with a non-success message
    #[error("payment not verified: {0}")]
    VerificationRejected(String),

    /// The payment provider reported a failed transaction
    #[error("payment failed: {}", .0.as_deref().unwrap_or("no description"))]
    PaymentFailed(Option<String>),

    /// The payer closed the checkout window without paying
    #[error("payment cancelled by user")]
    Cancelled,

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl CheckoutError {
    /// The message shown to the payer for this failure
    pub fn user_message(&self) -> String {
        match self {
            CheckoutError::OrderCreation(_) => {
                "Payment initiation failed. Please try again.".into()
            }
            CheckoutError::SdkLoad(_) => "Failed to load Razorpay SDK".into(),
            CheckoutError::Verification(_) => {
                "Payment verification failed. Please contact support.".into()
            }
            CheckoutError::VerificationRejected(_) => "Payment verification failed".into(),
            CheckoutError::PaymentFailed(description) => description
                .clone()
                .unwrap_or_else(|| "Payment failed. Please try again.".into()),
            CheckoutError::Cancelled => "Payment cancelled.".into(),
            CheckoutError::Config(_) => "Service configuration error.".into(),
        }
    }

    /// Whether the failure came from the payer's side of the widget
    /// (declined or abandoned) rather than from infrastructure
    pub fn is_payer_action(&self) -> bool {
        matches!(
            self,
            CheckoutError::PaymentFailed(_) | CheckoutError::Cancelled
        )
    }
}
