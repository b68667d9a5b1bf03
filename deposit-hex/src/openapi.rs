//! OpenAPI specification, served at `/api-docs/openapi.json`.

#![allow(dead_code)] // Path functions are only used by utoipa for documentation generation

use deposit_types::{ApprovedOrder, CancelQuery, DepositRequest, RawAmount, RedirectQuery, ReturnQuery};
use utoipa::OpenApi;

use crate::inbound::ErrorBody;

// Dummy functions to generate path documentation
// These are not the actual handlers, just for OpenAPI path generation

/// Liveness probe
#[utoipa::path(
    get,
    path = "/",
    tag = "health",
    responses(
        (status = 200, description = "Service is up", body = String, content_type = "text/plain")
    )
)]
async fn root() {}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = inline(serde_json::Value), example = json!({"status": "healthy"}))
    )
)]
async fn health() {}

/// Create a deposit order
#[utoipa::path(
    post,
    path = "/create-deposit-order",
    tag = "orders",
    request_body = DepositRequest,
    responses(
        (status = 200, description = "Order created, payer must visit approve_url", body = ApprovedOrder),
        (status = 400, description = "Invalid amount or malformed body", body = ErrorBody),
        (status = 500, description = "Provider rejected the request or returned no approval link", body = ErrorBody)
    )
)]
async fn create_deposit_order() {}

/// Create a deposit order and redirect the payer to PayPal
#[utoipa::path(
    get,
    path = "/redirect",
    tag = "orders",
    params(RedirectQuery),
    responses(
        (status = 302, description = "Redirect to the approval page"),
        (status = 400, description = "Invalid amount", body = String, content_type = "text/plain"),
        (status = 500, description = "Provider failure", body = String, content_type = "text/plain")
    )
)]
async fn redirect() {}

/// Return URL: capture the approved order
#[utoipa::path(
    get,
    path = "/return",
    tag = "capture",
    params(ReturnQuery),
    responses(
        (status = 200, description = "Payment captured", body = String, content_type = "text/plain"),
        (status = 400, description = "Missing token", body = String, content_type = "text/plain"),
        (status = 500, description = "Capture failed", body = String, content_type = "text/plain")
    )
)]
async fn payment_return() {}

/// Cancel URL
#[utoipa::path(
    get,
    path = "/cancel",
    tag = "capture",
    params(CancelQuery),
    responses(
        (status = 200, description = "Cancellation acknowledged", body = String, content_type = "text/plain")
    )
)]
async fn cancel() {}

/// OpenAPI documentation for the deposit checkout API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "PayPal Deposit Checkout API",
        version = "1.0.0",
        description = "Creates PayPal CAPTURE orders for deposit payments and captures them when the payer returns.\n\nUse `POST /create-deposit-order` from scripts, or link `GET /redirect?reference=..&amount=..` from documents and forms.",
        license(name = "MIT"),
    ),
    paths(
        root,
        health,
        create_deposit_order,
        redirect,
        payment_return,
        cancel,
    ),
    components(
        schemas(
            DepositRequest,
            RawAmount,
            ApprovedOrder,
            ErrorBody,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "orders", description = "Deposit order creation"),
        (name = "capture", description = "Payer return and cancel pages"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_all_routes() {
        let doc = ApiDoc::openapi();
        for path in ["/", "/health", "/create-deposit-order", "/redirect", "/return", "/cancel"] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
