//! # checkout-gateway
//!
//! HTTP implementation of checkout-core's `OrderGateway`, talking to
//! the checkout backend over its `/api2` JSON endpoints:
//!
//! - `POST /api2/create_order` before the widget opens
//! - `POST /api2/verify_payment` after the payer completes
//!
//! Wire it into a controller:
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use checkout_core::{CheckoutConfig, CheckoutController, MemoryNotifier,
//!     MockCheckoutWidget, SessionContext};
//! use checkout_gateway::HttpOrderGateway;
//!
//! # fn main() -> checkout_core::Result<()> {
//! let gateway = Arc::new(HttpOrderGateway::from_env()?);
//! let controller = CheckoutController::new(
//!     gateway,
//!     Arc::new(MockCheckoutWidget::new()),
//!     Arc::new(MemoryNotifier::new()),
//!     CheckoutConfig::from_env(),
//!     SessionContext::default(),
//! );
//! # let _ = controller;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod http;

pub use config::ApiConfig;
pub use http::HttpOrderGateway;
