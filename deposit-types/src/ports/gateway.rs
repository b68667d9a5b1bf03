//! Payment gateway port trait.
//!
//! The PayPal REST adapter implements this trait; tests substitute an
//! in-memory double.

use crate::domain::{AccessToken, CapturedOrder, CreatedOrder, OrderPayload};
use crate::error::GatewayError;

/// Outbound port to the payment provider.
///
/// Each method is one network exchange. Callers fetch a token first and pass
/// it to the order or capture call.
#[async_trait::async_trait]
pub trait PaymentGateway: Send + Sync + 'static {
    /// Exchanges the service credentials for a bearer token.
    async fn obtain_access_token(&self) -> Result<AccessToken, GatewayError>;

    /// Submits an order-creation payload.
    async fn create_order(
        &self,
        token: &AccessToken,
        payload: &OrderPayload,
    ) -> Result<CreatedOrder, GatewayError>;

    /// Captures a previously approved order.
    async fn capture_order(
        &self,
        token: &AccessToken,
        order_id: &str,
    ) -> Result<CapturedOrder, GatewayError>;
}
