//! Connection settings for the PayPal REST API.

use std::fmt;
use std::time::Duration;

pub const SANDBOX_BASE_URL: &str = "https://api-m.sandbox.paypal.com";
pub const LIVE_BASE_URL: &str = "https://api-m.paypal.com";

/// PayPal connection settings.
///
/// Credentials are optional here: a missing id or secret fails the call that
/// needs them, not construction.
#[derive(Clone)]
pub struct PayPalConfig {
    pub base_url: String,
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    /// Per-request timeout for every outbound call.
    pub timeout: Duration,
    /// Reuse a token until shortly before it expires.
    pub cache_tokens: bool,
}

impl PayPalConfig {
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

    pub fn new(
        base_url: impl Into<String>,
        client_id: Option<String>,
        client_secret: Option<String>,
    ) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client_id,
            client_secret,
            timeout: Self::DEFAULT_TIMEOUT,
            cache_tokens: false,
        }
    }

    pub fn sandbox(client_id: Option<String>, client_secret: Option<String>) -> Self {
        Self::new(SANDBOX_BASE_URL, client_id, client_secret)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_token_cache(mut self, enabled: bool) -> Self {
        self.cache_tokens = enabled;
        self
    }

    /// Returns `(id, secret)` when both are present and non-blank.
    pub(crate) fn credentials(&self) -> Option<(&str, &str)> {
        let id = self.client_id.as_deref().filter(|s| !s.trim().is_empty())?;
        let secret = self
            .client_secret
            .as_deref()
            .filter(|s| !s.trim().is_empty())?;
        Some((id, secret))
    }
}

impl fmt::Debug for PayPalConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PayPalConfig")
            .field("base_url", &self.base_url)
            .field("client_id", &self.client_id)
            .field(
                "client_secret",
                &self.client_secret.as_ref().map(|_| "<redacted>"),
            )
            .field("timeout", &self.timeout)
            .field("cache_tokens", &self.cache_tokens)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = PayPalConfig::new("https://api-m.paypal.com/", None, None);
        assert_eq!(config.base_url, LIVE_BASE_URL);
    }

    #[test]
    fn test_credentials_require_both_parts() {
        assert!(PayPalConfig::sandbox(Some("id".into()), None).credentials().is_none());
        assert!(PayPalConfig::sandbox(Some("id".into()), Some(" ".into())).credentials().is_none());
        assert_eq!(
            PayPalConfig::sandbox(Some("id".into()), Some("secret".into())).credentials(),
            Some(("id", "secret"))
        );
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = PayPalConfig::sandbox(Some("id".into()), Some("top-secret".into()));
        let debug = format!("{:?}", config);
        assert!(!debug.contains("top-secret"));
        assert!(debug.contains("<redacted>"));
    }
}
