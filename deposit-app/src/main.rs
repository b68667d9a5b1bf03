//! # Deposit Application
//!
//! Binary that wires together all the components:
//! - Load configuration from environment
//! - Initialize the PayPal gateway adapter
//! - Create the deposit service
//! - Start the HTTP server

mod config;

use opentelemetry::global;
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::{propagation::TraceContextPropagator, trace as sdktrace};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use deposit_hex::{DepositService, inbound::HttpServer};
use deposit_paypal::PayPalClient;

fn init_tracer(endpoint: &str) -> anyhow::Result<(sdktrace::Tracer, sdktrace::SdkTracerProvider)> {
    global::set_text_map_propagator(TraceContextPropagator::new());

    // Use gRPC exporter with batch processing (non-blocking)
    let exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .with_endpoint(endpoint)
        .build()?;

    let provider = sdktrace::SdkTracerProvider::builder()
        .with_batch_exporter(exporter)
        .build();

    global::set_tracer_provider(provider.clone());

    use opentelemetry::trace::TracerProvider as _;
    Ok((provider.tracer("deposit-service"), provider))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Load configuration
    let config = config::Config::from_env()?;

    // Initialize OpenTelemetry tracing when a collector is configured
    let otel = config
        .otlp_endpoint
        .as_deref()
        .map(init_tracer)
        .transpose()?;
    let telemetry = otel
        .as_ref()
        .map(|(tracer, _)| tracing_opentelemetry::layer().with_tracer(tracer.clone()));

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "info,deposit_app=debug,deposit_hex=debug,deposit_paypal=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .with(telemetry)
        .init();

    tracing::info!("Starting deposit server on port {}", config.port);
    tracing::info!("Using PayPal API at {}", config.paypal.base_url);
    if config.paypal.client_id.is_none() || config.paypal.client_secret.is_none() {
        tracing::warn!("PAYPAL_CLIENT_ID / PAYPAL_CLIENT_SECRET not set; payment routes will fail");
    }

    // Build the gateway adapter
    let gateway = PayPalClient::new(config.paypal)?;

    // Create the deposit service
    let service = DepositService::new(gateway, config.checkout);

    // Create and run the HTTP server
    let server = HttpServer::new(service);
    let addr = format!("0.0.0.0:{}", config.port);

    server.run(&addr).await?;

    // Ensure traces are flushed before exit
    if let Some((_, provider)) = otel {
        let _ = provider.shutdown();
    }
    Ok(())
}
