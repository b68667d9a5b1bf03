//! Domain models for the deposit checkout service.

pub mod amount;
pub mod currency;
pub mod order;
pub mod provider;

pub use amount::{DepositAmount, RawAmount};
pub use currency::CurrencyCode;
pub use order::{
    AmountBreakdown, ApplicationContext, CheckoutSettings, DEFAULT_REFERENCE, OrderIntent,
    OrderPayload, PurchaseUnit, build_order_payload,
};
pub use provider::{AccessToken, CapturedOrder, CreatedOrder, LinkDescription};
