//! # Deposit PayPal
//!
//! Outbound adapter for the deposit checkout service.
//! This crate provides the PayPal REST client that implements the
//! `PaymentGateway` port:
//!
//! 1. OAuth2 client-credentials grant (`/v1/oauth2/token`)
//! 2. Order creation (`/v2/checkout/orders`)
//! 3. Capture (`/v2/checkout/orders/{id}/capture`)
//!
//! # Examples
//!
//! ```ignore
//! let config = PayPalConfig::sandbox(Some(client_id), Some(client_secret));
//! let gateway = PayPalClient::new(config)?;
//! let token = gateway.obtain_access_token().await?;
//! ```

mod client;
mod config;
mod token_cache;


pub use client::PayPalClient;
pub use config::{LIVE_BASE_URL, PayPalConfig, SANDBOX_BASE_URL};
