//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use utoipa::ToSchema;

use deposit_types::{
    AppError, ApprovedOrder, CancelQuery, DepositRequest, PaymentGateway, RedirectQuery,
    ReturnQuery,
};

use crate::DepositService;

pub const HEALTH_BODY: &str = "OK paypal-deposit-api";
pub const CAPTURED_BODY: &str = "Payment confirmed. You can close this page.";
pub const CANCELLED_BODY: &str = "Payment cancelled.";

/// Application state shared across handlers.
pub struct AppState<G: PaymentGateway> {
    pub service: DepositService<G>,
}

fn status_of(err: &AppError) -> StatusCode {
    if err.is_client_error() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

fn log_failure(err: &AppError) {
    if err.is_client_error() {
        tracing::debug!(error = %err, "request rejected");
    } else {
        tracing::error!(error = %err, "request failed");
    }
}

/// JSON error payload.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Human-readable message
    #[schema(example = "Invalid amount: '0' must be greater than zero")]
    pub error: String,
    /// HTTP status code of this response
    #[schema(example = 400)]
    pub code: u16,
    /// Status code the payment provider answered with
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upstream_status: Option<u16>,
    /// Body the payment provider answered with, verbatim
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub upstream_body: Option<serde_json::Value>,
}

/// Wrapper to implement IntoResponse for AppError as JSON (orphan rule workaround).
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        log_failure(&self.0);
        let status = status_of(&self.0);
        let (upstream_status, upstream_body) = match self.0.upstream_response() {
            Some((code, body)) => (
                Some(code),
                Some(
                    serde_json::from_str(body)
                        .unwrap_or_else(|_| serde_json::Value::String(body.to_string())),
                ),
            ),
            None => (None, None),
        };

        let body = ErrorBody {
            error: self.0.to_string(),
            code: status.as_u16(),
            upstream_status,
            upstream_body,
        };

        (status, Json(body)).into_response()
    }
}

/// Same as [`ApiError`] but rendered as plain text, for routes a browser lands on.
pub struct TextError(pub AppError);

impl From<AppError> for TextError {
    fn from(err: AppError) -> Self {
        TextError(err)
    }
}

impl IntoResponse for TextError {
    fn into_response(self) -> Response {
        log_failure(&self.0);
        let message = match (&self.0, self.0.upstream_response()) {
            // Capture errors already embed the provider body.
            (AppError::UpstreamCapture { .. }, _) | (_, None) => self.0.to_string(),
            (_, Some((_, body))) => format!("{}: {}", self.0, body),
        };
        (status_of(&self.0), message).into_response()
    }
}

/// Liveness probe with a constant plain-text body.
pub async fn root() -> &'static str {
    HEALTH_BODY
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

/// Create a deposit order and return its approval link.
#[tracing::instrument(skip(state, payload))]
pub async fn create_deposit_order<G: PaymentGateway>(
    State(state): State<Arc<AppState<G>>>,
    payload: Result<Json<DepositRequest>, JsonRejection>,
) -> Result<Json<ApprovedOrder>, ApiError> {
    let Json(req) = payload.map_err(|e| AppError::InvalidInput(e.body_text()))?;
    let approved = state.service.create_order(req).await?.require_approval()?;
    Ok(Json(approved))
}

/// Create a deposit order and send the payer straight to the approval page.
#[tracing::instrument(skip(state, query))]
pub async fn redirect<G: PaymentGateway>(
    State(state): State<Arc<AppState<G>>>,
    query: Result<Query<RedirectQuery>, QueryRejection>,
) -> Result<Response, TextError> {
    let Query(query) = query.map_err(|e| AppError::InvalidInput(e.body_text()))?;
    let approved = state
        .service
        .create_order(query.into())
        .await?
        .require_approval()?;

    Ok((
        StatusCode::FOUND,
        [(header::LOCATION, approved.approve_url)],
    )
        .into_response())
}

/// Payer came back from the approval page: capture the order.
#[tracing::instrument(skip(state, query))]
pub async fn payment_return<G: PaymentGateway>(
    State(state): State<Arc<AppState<G>>>,
    query: Result<Query<ReturnQuery>, QueryRejection>,
) -> Result<&'static str, TextError> {
    let Query(query) = query.map_err(|e| AppError::InvalidInput(e.body_text()))?;
    let outcome = state.service.capture_order(query.token.as_deref()).await?;
    tracing::info!(
        order_id = %outcome.order_id,
        reference = query.reference.as_deref().unwrap_or_default(),
        "payer returned, payment captured"
    );
    Ok(CAPTURED_BODY)
}

/// Payer abandoned the approval page.
#[tracing::instrument(skip(query))]
pub async fn cancel(query: Result<Query<CancelQuery>, QueryRejection>) -> &'static str {
    if let Ok(Query(query)) = query {
        tracing::info!(
            order_id = query.token.as_deref().unwrap_or_default(),
            reference = query.reference.as_deref().unwrap_or_default(),
            "payer cancelled"
        );
    }
    CANCELLED_BODY
}
