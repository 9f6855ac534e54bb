//! Checkout Configuration

use std::env;

/// Static options handed to the hosted checkout widget
#[derive(Clone, Debug)]
pub struct CheckoutConfig {
    /// Publishable gateway key
    pub key: String,
    /// Merchant name shown in the widget header
    pub name: String,
    /// One-line description shown under the merchant name
    pub description: String,
    /// Widget accent color, as a hex string
    pub theme_color: String,
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            key: "rzp_test_WrEHxWwQWGpjH8".to_string(),
            name: "TECHOPTIMA PVT LTD".to_string(),
            description: "Payment for Order".to_string(),
            theme_color: "#FF4B26".to_string(),
        }
    }
}

impl CheckoutConfig {
    /// Defaults with the key overridable through `RAZORPAY_KEY_ID`
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(key) = env::var("RAZORPAY_KEY_ID") {
            config.key = key;
        }
        config
    }
}
