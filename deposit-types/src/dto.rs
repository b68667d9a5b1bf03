//! Data Transfer Objects (DTOs) for requests and responses.

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::RawAmount;
use crate::error::AppError;

// ─────────────────────────────────────────────────────────────────────────────
// Order DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Request to create a deposit order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct DepositRequest {
    /// Caller correlation id (quote / booking number)
    #[serde(
        default,
        alias = "presupuesto",
        deserialize_with = "text_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(example = "023")]
    pub reference: Option<String>,
    /// Amount to charge, as a number or a decimal string
    #[serde(default)]
    #[schema(example = 100.0)]
    pub amount: Option<RawAmount>,
    /// ISO 4217 code, defaults to EUR
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "EUR")]
    pub currency: Option<String>,
}

impl DepositRequest {
    /// Trimmed reference, or `None` when absent or blank.
    pub fn reference(&self) -> Option<&str> {
        self.reference
            .as_deref()
            .map(str::trim)
            .filter(|r| !r.is_empty())
    }
}

/// Spreadsheet macros send quote numbers as JSON numbers; keep them as text.
fn text_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Reference {
        Text(String),
        Integer(i64),
        Float(f64),
    }

    Ok(
        Option::<Reference>::deserialize(deserializer)?.map(|reference| match reference {
            Reference::Text(s) => s,
            Reference::Integer(n) => n.to_string(),
            Reference::Float(n) => n.to_string(),
        }),
    )
}

/// Query string of `GET /redirect`.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RedirectQuery {
    #[serde(default, alias = "presupuesto")]
    pub reference: Option<String>,
    #[serde(default)]
    pub amount: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
}

impl From<RedirectQuery> for DepositRequest {
    fn from(q: RedirectQuery) -> Self {
        DepositRequest {
            reference: q.reference,
            amount: q.amount.map(RawAmount::Text),
            currency: q.currency,
        }
    }
}

/// Result of order creation. `approve_url` is absent when the provider
/// returned no `approve` link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderCreationResult {
    pub order_id: String,
    pub approve_url: Option<String>,
}

impl OrderCreationResult {
    /// Demands an approval link; callers that redirect the payer need one.
    pub fn require_approval(self) -> Result<ApprovedOrder, AppError> {
        match self.approve_url {
            Some(approve_url) => Ok(ApprovedOrder {
                order_id: self.order_id,
                approve_url,
            }),
            None => Err(AppError::MissingApprovalLink {
                order_id: self.order_id,
            }),
        }
    }
}

/// Response of `POST /create-deposit-order`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ApprovedOrder {
    /// Provider order id
    #[schema(example = "5O190127TN364715T")]
    pub order_id: String,
    /// URL the payer must visit to approve the order
    #[schema(example = "https://www.sandbox.paypal.com/checkoutnow?token=5O190127TN364715T")]
    pub approve_url: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Capture DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Query string of `GET /return`. PayPal appends `token` (the order id) and `PayerID`.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ReturnQuery {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default, rename = "PayerID")]
    pub payer_id: Option<String>,
    #[serde(default, alias = "presupuesto")]
    pub reference: Option<String>,
}

/// Query string of `GET /cancel`.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CancelQuery {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default, alias = "presupuesto")]
    pub reference: Option<String>,
}

/// Outcome of a successful capture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureOutcome {
    pub order_id: String,
    pub status: Option<String>,
}
