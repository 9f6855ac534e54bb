//! Mock Order Gateway for Tests and Demos

use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::{CheckoutError, Result};
use crate::gateway::{
    CreateOrderRequest, OrderAmount, OrderCreated, OrderGateway, PaymentVerification,
    VerifyPaymentRequest, VERIFIED_MESSAGE,
};

/// Scriptable in-memory gateway. Records every request it sees so
/// tests can assert on the exact bodies the controller built.
pub struct MockOrderGateway {
    fail_create: bool,
    fail_verify: bool,
    verify_message: String,
    create_requests: Mutex<Vec<CreateOrderRequest>>,
    verify_requests: Mutex<Vec<VerifyPaymentRequest>>,
}

impl MockOrderGateway {
    /// Gateway that succeeds at both calls
    pub fn new() -> Self {
        Self {
            fail_create: false,
            fail_verify: false,
            verify_message: VERIFIED_MESSAGE.to_string(),
            create_requests: Mutex::new(Vec::new()),
            verify_requests: Mutex::new(Vec::new()),
        }
    }

    /// Gateway whose order-creation call errors
    pub fn failing_create() -> Self {
        Self {
            fail_create: true,
            ..Self::new()
        }
    }

    /// Gateway whose verification call errors at the transport level
    pub fn failing_verify() -> Self {
        Self {
            fail_verify: true,
            ..Self::new()
        }
    }

    /// Gateway whose verification call succeeds but answers `message`
    pub fn verifying_with(message: &str) -> Self {
        Self {
            verify_message: message.to_string(),
            ..Self::new()
        }
    }

    /// Order-creation requests seen so far
    pub fn create_requests(&self) -> Vec<CreateOrderRequest> {
        self.create_requests.lock().unwrap().clone()
    }

    /// Verification requests seen so far
    pub fn verify_requests(&self) -> Vec<VerifyPaymentRequest> {
        self.verify_requests.lock().unwrap().clone()
    }
}

impl Default for MockOrderGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OrderGateway for MockOrderGateway {
    async fn create_order(&self, request: CreateOrderRequest) -> Result<OrderCreated> {
        if self.fail_create {
            return Err(CheckoutError::OrderCreation("connection refused".into()));
        }
        let mut seen = self.create_requests.lock().unwrap();
        seen.push(request.clone());
        Ok(OrderCreated {
            id: format!("order_mock_{:04}", seen.len()),
            amount: OrderAmount::Minor(request.amount),
            currency: request.currency,
        })
    }

    async fn verify_payment(
        &self,
        request: VerifyPaymentRequest,
    ) -> Result<PaymentVerification> {
        if self.fail_verify {
            return Err(CheckoutError::Verification("connection refused".into()));
        }
        self.verify_requests.lock().unwrap().push(request);
        Ok(PaymentVerification {
            message: self.verify_message.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_gateway_round_trip() {
        let gateway = MockOrderGateway::new();
        let order = gateway
            .create_order(CreateOrderRequest {
                amount: 110_000,
                currency: "INR".into(),
                willid: None,
            })
            .await
            .unwrap();
        assert_eq!(order.id, "order_mock_0001");
        assert_eq!(order.amount, OrderAmount::Minor(110_000));
        assert_eq!(gateway.create_requests().len(), 1);

        let failing = MockOrderGateway::failing_create();
        let err = failing
            .create_order(CreateOrderRequest {
                amount: 110_000,
                currency: "INR".into(),
                willid: None,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, CheckoutError::OrderCreation(_)));
        assert!(failing.create_requests().is_empty());
    }
}
