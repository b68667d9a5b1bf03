//! # Deposit Types
//!
//! Domain types and port traits for the deposit checkout service.
//! This crate has ZERO external IO dependencies - only data structures,
//! business rules, and trait definitions.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the hexagonal architecture:
//! - `domain/` - Pure domain types (amount, currency, order payload, provider orders)
//! - `ports/` - Trait definitions that adapters must implement
//! - `dto/` - Data Transfer Objects for API boundaries
//! - `error/` - Domain, gateway and application error types

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    AccessToken, CapturedOrder, CheckoutSettings, CreatedOrder, CurrencyCode, DEFAULT_REFERENCE,
    DepositAmount, LinkDescription, OrderPayload, RawAmount, build_order_payload,
};
pub use dto::*;
pub use error::{AppError, DomainError, GatewayError};
pub use ports::PaymentGateway;
