//! Provider-side representations: bearer tokens and checkout orders.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Short-lived bearer token from the client-credentials grant.
///
/// Has no `Display`; `Debug` redacts the value.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken {
    secret: String,
    expires_in: Option<u64>,
}

impl AccessToken {
    pub fn new(secret: impl Into<String>, expires_in: Option<u64>) -> Self {
        Self {
            secret: secret.into(),
            expires_in,
        }
    }

    /// Raw token value, for the `Authorization` header only.
    pub fn secret(&self) -> &str {
        &self.secret
    }

    /// Lifetime in seconds as stated by the provider.
    pub fn expires_in(&self) -> Option<u64> {
        self.expires_in
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessToken")
            .field("secret", &"<redacted>")
            .field("expires_in", &self.expires_in)
            .finish()
    }
}

/// HATEOAS link returned by the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkDescription {
    pub href: String,
    pub rel: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
}

/// Response of `POST /v2/checkout/orders`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedOrder {
    pub id: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub links: Vec<LinkDescription>,
}

impl CreatedOrder {
    /// Link relation the payer must be redirected to.
    pub const APPROVE_REL: &'static str = "approve";

    /// Target of the first link tagged `approve`, if any.
    pub fn approve_url(&self) -> Option<&str> {
        self.links
            .iter()
            .find(|link| link.rel == Self::APPROVE_REL)
            .map(|link| link.href.as_str())
    }
}

/// Response of `POST /v2/checkout/orders/{id}/capture`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapturedOrder {
    pub id: String,
    #[serde(default)]
    pub status: Option<String>,
}
