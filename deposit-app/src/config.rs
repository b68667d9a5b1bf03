//! Configuration loading from environment.

use std::env;
use std::time::Duration;

use anyhow::Context;
use url::Url;

use deposit_paypal::{PayPalConfig, SANDBOX_BASE_URL};
use deposit_types::CheckoutSettings;

/// Application configuration.
#[derive(Debug)]
pub struct Config {
    pub port: u16,
    pub paypal: PayPalConfig,
    pub checkout: CheckoutSettings,
    /// OTLP collector; span export is off when unset.
    pub otlp_endpoint: Option<String>,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration through `lookup`, treating blank values as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port: u16 = var("PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse()
            .context("PORT must be a port number")?;

        let timeout_secs: u64 = var("PAYPAL_TIMEOUT_SECS")
            .map(|v| v.parse::<u64>())
            .transpose()
            .context("PAYPAL_TIMEOUT_SECS must be a whole number of seconds")?
            .unwrap_or(PayPalConfig::DEFAULT_TIMEOUT.as_secs());
        if timeout_secs == 0 {
            anyhow::bail!("PAYPAL_TIMEOUT_SECS must be greater than zero");
        }

        let paypal = PayPalConfig::new(
            var("PAYPAL_BASE").unwrap_or_else(|| SANDBOX_BASE_URL.to_string()),
            var("PAYPAL_CLIENT_ID"),
            var("PAYPAL_CLIENT_SECRET"),
        )
        .with_timeout(Duration::from_secs(timeout_secs))
        .with_token_cache(parse_flag(var("PAYPAL_CACHE_TOKEN"), false)?);

        let return_url = parse_url(
            "RETURN_URL",
            var("RETURN_URL").unwrap_or_else(|| format!("http://localhost:{}/return", port)),
        )?;
        let cancel_url = parse_url(
            "CANCEL_URL",
            var("CANCEL_URL").unwrap_or_else(|| format!("http://localhost:{}/cancel", port)),
        )?;

        let mut checkout = CheckoutSettings::new(return_url, cancel_url);
        checkout.correlate_reference = parse_flag(var("CORRELATE_REFERENCE"), true)?;
        if let Some(prefix) = var("ORDER_DESCRIPTION") {
            checkout.description_prefix = prefix;
        }

        Ok(Self {
            port,
            paypal,
            checkout,
            otlp_endpoint: var("OTEL_EXPORTER_OTLP_ENDPOINT"),
        })
    }
}

fn parse_url(key: &str, value: String) -> anyhow::Result<Url> {
    Url::parse(&value).with_context(|| format!("{} is not a valid URL: {}", key, value))
}

fn parse_flag(value: Option<String>, default: bool) -> anyhow::Result<bool> {
    match value.as_deref().map(|v| v.trim().to_ascii_lowercase()) {
        None => Ok(default),
        Some(v) if matches!(v.as_str(), "1" | "true" | "yes" | "on") => Ok(true),
        Some(v) if matches!(v.as_str(), "0" | "false" | "no" | "off") => Ok(false),
        Some(v) => Err(anyhow::anyhow!("expected a boolean flag, got '{}'", v)),
    }
}
