//! Order-creation payload and the pure builder that produces it.

use serde::Serialize;
use url::Url;

use super::{CurrencyCode, DepositAmount};
use crate::dto::DepositRequest;
use crate::error::DomainError;

/// Reference used when the caller does not supply one.
pub const DEFAULT_REFERENCE: &str = "DEPOSIT";

/// Query parameter carrying the reference on the redirect URLs.
pub const REFERENCE_PARAM: &str = "reference";

/// Process-wide settings the builder embeds into every payload.
#[derive(Debug, Clone)]
pub struct CheckoutSettings {
    pub return_url: Url,
    pub cancel_url: Url,
    /// Append `reference=<value>` to both redirect URLs.
    pub correlate_reference: bool,
    pub description_prefix: String,
}

impl CheckoutSettings {
    pub fn new(return_url: Url, cancel_url: Url) -> Self {
        Self {
            return_url,
            cancel_url,
            correlate_reference: true,
            description_prefix: "Deposit".to_string(),
        }
    }

    fn redirect_url(&self, base: &Url, reference: Option<&str>) -> String {
        let mut url = base.clone();
        if let (true, Some(reference)) = (self.correlate_reference, reference) {
            url.query_pairs_mut().append_pair(REFERENCE_PARAM, reference);
        }
        url.into()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderIntent {
    Capture,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AmountBreakdown {
    pub currency_code: CurrencyCode,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PurchaseUnit {
    pub reference_id: String,
    pub description: String,
    pub amount: AmountBreakdown,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApplicationContext {
    pub return_url: String,
    pub cancel_url: String,
    pub user_action: &'static str,
}

/// Body of `POST /v2/checkout/orders`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderPayload {
    pub intent: OrderIntent,
    pub purchase_units: Vec<PurchaseUnit>,
    pub application_context: ApplicationContext,
}

/// Maps a deposit request onto the provider's order-creation payload.
///
/// Fails only when the amount is missing, non-numeric or not positive.
pub fn build_order_payload(
    req: &DepositRequest,
    settings: &CheckoutSettings,
) -> Result<OrderPayload, DomainError> {
    let amount = DepositAmount::parse(req.amount.as_ref())?;
    let currency = CurrencyCode::normalize(req.currency.as_deref());
    let reference = req.reference();

    let description = match reference {
        Some(r) => format!("{} - Reference {}", settings.description_prefix, r),
        None => settings.description_prefix.clone(),
    };

    Ok(OrderPayload {
        intent: OrderIntent::Capture,
        purchase_units: vec![PurchaseUnit {
            reference_id: reference.unwrap_or(DEFAULT_REFERENCE).to_string(),
            description,
            amount: AmountBreakdown {
                currency_code: currency,
                value: amount.to_provider_value(),
            },
        }],
        application_context: ApplicationContext {
            return_url: settings.redirect_url(&settings.return_url, reference),
            cancel_url: settings.redirect_url(&settings.cancel_url, reference),
            user_action: "PAY_NOW",
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RawAmount;

    fn settings() -> CheckoutSettings {
        CheckoutSettings::new(
            Url::parse("https://shop.example/return").unwrap(),
            Url::parse("https://shop.example/cancel").unwrap(),
        )
    }

    fn request(reference: Option<&str>, amount: RawAmount, currency: Option<&str>) -> DepositRequest {
        DepositRequest {
            reference: reference.map(String::from),
            amount: Some(amount),
            currency: currency.map(String::from),
        }
    }

    #[test]
    fn test_payload_shape() {
        let req = request(Some("023"), RawAmount::Number(100.0), Some("eur"));
        let payload = build_order_payload(&req, &settings()).unwrap();

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["intent"], "CAPTURE");
        let unit = &json["purchase_units"][0];
        assert_eq!(unit["reference_id"], "023");
        assert_eq!(unit["description"], "Deposit - Reference 023");
        assert_eq!(unit["amount"]["currency_code"], "EUR");
        assert_eq!(unit["amount"]["value"], "100.00");
        assert_eq!(
            json["application_context"]["return_url"],
            "https://shop.example/return?reference=023"
        );
        assert_eq!(
            json["application_context"]["cancel_url"],
            "https://shop.example/cancel?reference=023"
        );
        assert_eq!(json["application_context"]["user_action"], "PAY_NOW");
    }

    #[test]
    fn test_missing_reference_uses_placeholder() {
        let req = request(Some("  "), RawAmount::from("12.5"), None);
        let payload = build_order_payload(&req, &settings()).unwrap();

        let unit = &payload.purchase_units[0];
        assert_eq!(unit.reference_id, DEFAULT_REFERENCE);
        assert_eq!(unit.description, "Deposit");
        assert_eq!(unit.amount.currency_code.as_str(), "EUR");
        assert_eq!(unit.amount.value, "12.50");
        assert_eq!(
            payload.application_context.return_url,
            "https://shop.example/return"
        );
    }

    #[test]
    fn test_reference_is_url_encoded() {
        let req = request(Some("A&B 7"), RawAmount::from("1"), None);
        let payload = build_order_payload(&req, &settings()).unwrap();
        assert_eq!(
            payload.application_context.return_url,
            "https://shop.example/return?reference=A%26B+7"
        );
    }

    #[test]
    fn test_correlation_can_be_disabled() {
        let mut settings = settings();
        settings.correlate_reference = false;
        let req = request(Some("023"), RawAmount::from("1"), None);
        let payload = build_order_payload(&req, &settings).unwrap();
        assert_eq!(
            payload.application_context.cancel_url,
            "https://shop.example/cancel"
        );
    }

    #[test]
    fn test_existing_query_is_preserved() {
        let mut settings = settings();
        settings.return_url = Url::parse("https://shop.example/return?lang=es").unwrap();
        let req = request(Some("9"), RawAmount::from("1"), None);
        let payload = build_order_payload(&req, &settings).unwrap();
        assert_eq!(
            payload.application_context.return_url,
            "https://shop.example/return?lang=es&reference=9"
        );
    }

    #[test]
    fn test_invalid_amount_fails() {
        let req = request(None, RawAmount::from("-3"), None);
        assert!(matches!(
            build_order_payload(&req, &settings()),
            Err(DomainError::InvalidAmount(_))
        ));
    }
}
