//! # Deposit Hex
//!
//! Application service layer and HTTP adapter for the deposit checkout service.
//!
//! ## Architecture
//!
//! - `service/` - Application service (order creation and capture orchestration)
//! - `inbound/` - HTTP adapter (Axum server)
//!
//! The service is generic over `G: PaymentGateway`, allowing
//! different provider adapters to be injected.

pub mod inbound;
pub mod openapi;
pub mod service;


pub use service::DepositService;
