//! # checkout-core
//!
//! Headless checkout-page logic: form validation, tier pricing, and the
//! hosted-payment sequence behind the pay button.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                   CheckoutController                          │
//! │  ┌──────────┐  ┌───────────┐  ┌──────────────────────────┐  │
//! │  │   Form   │  │  Pricing  │  │  Payment Sequence        │  │
//! │  │  Rules   │──│   Tiers   │──│  order → script → widget │  │
//! │  └──────────┘  └───────────┘  │        → verify          │  │
//! │                               └──────────────────────────┘  │
//! └──────────────────────────────────────────────────────────────┘
//!          │                                │
//!   OrderGateway (Strategy)         CheckoutWidget (Strategy)
//! ```
//!
//! The `OrderGateway` and `CheckoutWidget` traits keep the controller
//! independent of any concrete backend or hosted-payment library, so
//! the whole flow runs against in-memory mocks in tests.

pub mod config;
pub mod controller;
pub mod error;
pub mod form;
pub mod gateway;
pub mod notify;
pub mod pricing;
pub mod session;
pub mod theme;
pub mod widget;

pub use config::CheckoutConfig;
pub use controller::CheckoutController;
pub use error::{CheckoutError, Result};
pub use form::CheckoutForm;
pub use gateway::{
    CreateOrderRequest, MockOrderGateway, OrderAmount, OrderCreated, OrderGateway,
    PaymentVerification, VerifyPaymentRequest, VERIFIED_MESSAGE,
};
pub use notify::{MemoryNotifier, Notifier};
pub use pricing::{to_paise, Denomination, Tier, BASE_PRICE, CURRENCY};
pub use session::{PaymentPhase, SessionContext};
pub use theme::ThemeMode;
pub use widget::{
    CheckoutOptions, CheckoutWidget, MockCheckoutWidget, Notes, PaymentConfirmation, Prefill,
    SdkLoader, WidgetOutcome,
};
