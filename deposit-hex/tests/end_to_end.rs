//! End-to-end tests: HTTP routes -> service -> PayPal REST client -> stub provider.
//!
//! The stub provider is an in-process axum app bound to an ephemeral port.

use std::sync::{Arc, Mutex};

use axum::{
    Json, Router,
    body::Body,
    extract::State,
    http::{Request, StatusCode, Uri, header},
    response::{IntoResponse, Response},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use deposit_hex::{DepositService, inbound::HttpServer};
use deposit_paypal::{PayPalClient, PayPalConfig};
use deposit_types::CheckoutSettings;

#[derive(Default)]
struct Provider {
    reject_token: bool,
    /// (path, body) of every request received.
    seen: Mutex<Vec<(String, String)>>,
}

impl Provider {
    fn paths(&self) -> Vec<String> {
        self.seen.lock().unwrap().iter().map(|(p, _)| p.clone()).collect()
    }

    fn order_body(&self) -> Value {
        let seen = self.seen.lock().unwrap();
        let (_, body) = seen
            .iter()
            .find(|(p, _)| p == "/v2/checkout/orders")
            .expect("no order request");
        serde_json::from_str(body).unwrap()
    }
}

async fn provider(State(state): State<Arc<Provider>>, uri: Uri, body: String) -> Response {
    let path = uri.path().to_string();
    state.seen.lock().unwrap().push((path.clone(), body));

    match path.as_str() {
        "/v1/oauth2/token" if state.reject_token => {
            (StatusCode::UNAUTHORIZED, Json(json!({"error": "invalid_client"}))).into_response()
        }
        "/v1/oauth2/token" => {
            Json(json!({"access_token": "A21AA-e2e", "token_type": "Bearer", "expires_in": 32400}))
                .into_response()
        }
        "/v2/checkout/orders" => (
            StatusCode::CREATED,
            Json(json!({
                "id": "ORDER1",
                "status": "CREATED",
                "links": [{"rel": "approve", "href": "https://pay/approve/ORDER1"}]
            })),
        )
            .into_response(),
        other if other.ends_with("/capture") => (
            StatusCode::CREATED,
            Json(json!({"id": "ORDER1", "status": "COMPLETED"})),
        )
            .into_response(),
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn start_provider(state: Arc<Provider>) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = Router::new().fallback(provider).with_state(state);
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

async fn app(state: Arc<Provider>) -> axum::Router {
    let base = start_provider(state).await;
    let client = PayPalClient::new(PayPalConfig::new(
        base,
        Some("client-id".into()),
        Some("client-secret".into()),
    ))
    .unwrap();
    let settings = CheckoutSettings::new(
        url::Url::parse("https://deposits.example/return").unwrap(),
        url::Url::parse("https://deposits.example/cancel").unwrap(),
    );
    HttpServer::new(DepositService::new(client, settings)).router()
}

async fn body_text(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn test_json_order_scenario() {
    let state = Arc::new(Provider::default());
    let app = app(state.clone()).await;

    let request = Request::builder()
        .method("POST")
        .uri("/create-deposit-order")
        .header("Content-Type", "application/json")
        .body(Body::from(
            r#"{"amount": 100.00, "currency": "eur", "reference": "023"}"#,
        ))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json: Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(
        json,
        json!({"order_id": "ORDER1", "approve_url": "https://pay/approve/ORDER1"})
    );

    let unit = &state.order_body()["purchase_units"][0];
    assert_eq!(unit["amount"]["currency_code"], "EUR");
    assert_eq!(unit["amount"]["value"], "100.00");
    assert_eq!(unit["reference_id"], "023");
    assert_eq!(state.paths(), vec!["/v1/oauth2/token", "/v2/checkout/orders"]);
}

#[tokio::test]
async fn test_redirect_scenario() {
    let state = Arc::new(Provider::default());
    let app = app(state.clone()).await;

    let request = Request::builder()
        .uri("/redirect?reference=023&amount=100.00&currency=eur")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "https://pay/approve/ORDER1"
    );
    assert_eq!(
        state.order_body()["application_context"]["return_url"],
        "https://deposits.example/return?reference=023"
    );
}

#[tokio::test]
async fn test_return_scenario_captures() {
    let state = Arc::new(Provider::default());
    let app = app(state.clone()).await;

    let request = Request::builder()
        .uri("/return?token=ORDER1&PayerID=XYZ")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        state.paths(),
        vec!["/v1/oauth2/token", "/v2/checkout/orders/ORDER1/capture"]
    );
}

#[tokio::test]
async fn test_empty_return_token_makes_no_provider_calls() {
    let state = Arc::new(Provider::default());
    let app = app(state.clone()).await;

    let request = Request::builder()
        .uri("/return?token=")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(state.paths().is_empty());
}

#[tokio::test]
async fn test_rejected_token_stops_both_flows() {
    let state = Arc::new(Provider {
        reject_token: true,
        ..Default::default()
    });
    let app = app(state.clone()).await;

    let create = Request::builder()
        .method("POST")
        .uri("/create-deposit-order")
        .header("Content-Type", "application/json")
        .body(Body::from(r#"{"amount": "20"}"#))
        .unwrap();
    let response = app.clone().oneshot(create).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let text = body_text(response).await;
    assert!(!text.contains("client-secret"));

    let capture = Request::builder()
        .uri("/return?token=ORDER1")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(capture).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    assert_eq!(state.paths(), vec!["/v1/oauth2/token", "/v1/oauth2/token"]);
}
