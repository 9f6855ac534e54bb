//! HTTP Order Gateway
//!
//! Implementation of `OrderGateway` against the checkout backend's
//! `/api2` endpoints.

use std::time::Duration;

use async_trait::async_trait;
use checkout_core::{
    error::{CheckoutError, Result},
    gateway::{
        CreateOrderRequest, OrderCreated, OrderGateway, PaymentVerification,
        VerifyPaymentRequest,
    },
};

use crate::config::ApiConfig;

/// Backend client for order creation and payment verification
pub struct HttpOrderGateway {
    client: reqwest::Client,
    base_url: String,
}

impl HttpOrderGateway {
    /// Create a gateway from configuration
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| CheckoutError::Config(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self> {
        Self::new(&ApiConfig::from_env())
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/api2/{}", self.base_url, path)
    }
}

#[async_trait]
impl OrderGateway for HttpOrderGateway {
    async fn create_order(&self, request: CreateOrderRequest) -> Result<OrderCreated> {
        let order: OrderCreated = self
            .client
            .post(self.endpoint("create_order"))
            .json(&request)
            .send()
            .await
            .map_err(|e| CheckoutError::OrderCreation(e.to_string()))?
            .error_for_status()
            .map_err(|e| CheckoutError::OrderCreation(e.to_string()))?
            .json()
            .await
            .map_err(|e| CheckoutError::OrderCreation(e.to_string()))?;

        tracing::debug!(order_id = %order.id, "order created");
        Ok(order)
    }

    async fn verify_payment(
        &self,
        request: VerifyPaymentRequest,
    ) -> Result<PaymentVerification> {
        self.client
            .post(self.endpoint("verify_payment"))
            .json(&request)
            .send()
            .await
            .map_err(|e| CheckoutError::Verification(e.to_string()))?
            .error_for_status()
            .map_err(|e| CheckoutError::Verification(e.to_string()))?
            .json()
            .await
            .map_err(|e| CheckoutError::Verification(e.to_string()))
    }
}
