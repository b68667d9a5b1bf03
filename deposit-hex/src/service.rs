//! Deposit Application Service
//!
//! Orchestrates the gateway port: one token fetch, then one order or capture
//! call. Contains NO infrastructure logic - pure business orchestration.

use tracing::{info, instrument, warn};

use deposit_types::{
    AppError, CaptureOutcome, CheckoutSettings, DepositRequest, DomainError, OrderCreationResult,
    PaymentGateway, build_order_payload,
};

/// Application service for deposit checkout operations.
///
/// Generic over `G: PaymentGateway` - the adapter is injected at compile time.
/// This enables:
/// - Testing with an in-memory gateway
/// - Compile-time checks for port implementation
pub struct DepositService<G: PaymentGateway> {
    gateway: G,
    settings: CheckoutSettings,
}

impl<G: PaymentGateway> DepositService<G> {
    /// Creates a new deposit service with the given gateway and checkout settings.
    pub fn new(gateway: G, settings: CheckoutSettings) -> Self {
        Self { gateway, settings }
    }

    /// Returns a reference to the underlying gateway.
    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn settings(&self) -> &CheckoutSettings {
        &self.settings
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Order Operations
    // ─────────────────────────────────────────────────────────────────────────────

    /// Creates a provider order for a deposit.
    ///
    /// Input is validated before any network call. A missing approval link is
    /// not an error here; see [`OrderCreationResult::require_approval`].
    #[instrument(skip(self, req), fields(reference = req.reference().unwrap_or_default()))]
    pub async fn create_order(&self, req: DepositRequest) -> Result<OrderCreationResult, AppError> {
        let payload = build_order_payload(&req, &self.settings)?;

        let token = self.gateway.obtain_access_token().await?;
        let order = self.gateway.create_order(&token, &payload).await?;

        let approve_url = order.approve_url().map(String::from);
        if approve_url.is_none() {
            warn!(order_id = %order.id, "provider returned no approval link");
        }
        info!(order_id = %order.id, amount = %payload.purchase_units[0].amount.value, "order created");

        Ok(OrderCreationResult {
            order_id: order.id,
            approve_url,
        })
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Capture Operations
    // ─────────────────────────────────────────────────────────────────────────────

    /// Captures the order the payer just approved.
    #[instrument(skip(self))]
    pub async fn capture_order(&self, order_token: Option<&str>) -> Result<CaptureOutcome, AppError> {
        let order_id = order_token
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(DomainError::MissingToken)?;

        let token = self.gateway.obtain_access_token().await?;
        let captured = self.gateway.capture_order(&token, order_id).await?;

        info!(order_id, status = ?captured.status, "order captured");
        Ok(CaptureOutcome {
            order_id: order_id.to_string(),
            status: captured.status,
        })
    }
}
