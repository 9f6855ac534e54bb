//! Order Gateway Contract
//!
//! Wire types and the trait the controller drives for the two backend
//! calls: order creation before the widget opens and payment
//! verification after it reports success. Field names here are the
//! exact JSON keys the backend expects, quirks included (`willid` on
//! creation, `will_id` on verification).

mod mock;

pub use mock::MockOrderGateway;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Message the backend returns when a signature checks out
pub const VERIFIED_MESSAGE: &str = "Payment verified successfully";

/// Body for the order-creation call
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    /// Amount due, in paise
    pub amount: i64,
    pub currency: String,
    /// Draft identifier from the app session, if there is one
    pub willid: Option<String>,
}

/// The created gateway order
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OrderCreated {
    pub id: String,
    /// Echoed amount. Some backends echo the integer, some a string.
    pub amount: OrderAmount,
    pub currency: String,
}

/// Order amount as echoed by the backend
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OrderAmount {
    Minor(i64),
    Text(String),
}

impl std::fmt::Display for OrderAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderAmount::Minor(paise) => write!(f, "{paise}"),
            OrderAmount::Text(text) => write!(f, "{text}"),
        }
    }
}

/// Body for the verification call
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VerifyPaymentRequest {
    pub razorpay_order_id: String,
    pub razorpay_payment_id: String,
    pub razorpay_signature: String,
    pub will_id: Option<String>,
    pub is_premium: bool,
    /// Selected denomination face value, in rupees
    pub value_of_draft: i64,
    pub user_id: Option<String>,
    /// Amount paid, in rupees
    pub amount: f64,
}

/// Backend's answer to a verification call
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PaymentVerification {
    #[serde(default)]
    pub message: String,
}

impl PaymentVerification {
    /// True only for the exact success message
    pub fn is_verified(&self) -> bool {
        self.message == VERIFIED_MESSAGE
    }
}

/// Backend API for the two payment calls
#[async_trait]
pub trait OrderGateway: Send + Sync {
    /// Creates a gateway order for the given amount in paise
    async fn create_order(&self, request: CreateOrderRequest) -> Result<OrderCreated>;

    /// Asks the backend to verify a completed payment's signature
    async fn verify_payment(&self, request: VerifyPaymentRequest)
        -> Result<PaymentVerification>;
}
