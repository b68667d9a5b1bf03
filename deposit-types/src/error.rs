//! Error types for the deposit checkout service.

/// Domain-level errors (input rule violations).
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Missing token")]
    MissingToken,
}

/// Gateway-level errors (payment provider access failures).
///
/// `body` is the provider's response body, kept verbatim for diagnosis.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("Provider credentials are not configured")]
    MissingCredentials,

    #[error("Failed to get access token: {status}")]
    Auth { status: u16, body: String },

    #[error("Order creation failed: {status}")]
    Order { status: u16, body: String },

    #[error("Capture failed: {status}")]
    Capture { status: u16, body: String },

    #[error("Provider unreachable: {0}")]
    Transport(String),

    #[error("Unexpected provider response: {0}")]
    Decode(String),
}

/// Application-level errors (for HTTP responses).
///
/// Maps cleanly to HTTP status codes.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("Failed to get access token: {status}")]
    UpstreamAuth { status: u16, body: String },

    #[error("Order creation failed: {status}")]
    UpstreamOrder { status: u16, body: String },

    #[error("Capture error: {body}")]
    UpstreamCapture { status: u16, body: String },

    #[error("Order {order_id} has no approval link")]
    MissingApprovalLink { order_id: String },

    #[error("{0}")]
    Upstream(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl AppError {
    /// Status code and body received from the provider, when there was one.
    pub fn upstream_response(&self) -> Option<(u16, &str)> {
        match self {
            AppError::UpstreamAuth { status, body }
            | AppError::UpstreamOrder { status, body }
            | AppError::UpstreamCapture { status, body } => Some((*status, body.as_str())),
            _ => None,
        }
    }

    /// True for errors caused by the caller's input.
    pub fn is_client_error(&self) -> bool {
        matches!(self, AppError::InvalidInput(_))
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidAmount(msg) => AppError::InvalidInput(format!("Invalid amount: {msg}")),
            DomainError::MissingToken => AppError::InvalidInput("Missing token".into()),
        }
    }
}

impl From<GatewayError> for AppError {
    fn from(err: GatewayError) -> Self {
        match err {
            GatewayError::MissingCredentials => AppError::Configuration(err.to_string()),
            GatewayError::Auth { status, body } => AppError::UpstreamAuth { status, body },
            GatewayError::Order { status, body } => AppError::UpstreamOrder { status, body },
            GatewayError::Capture { status, body } => AppError::UpstreamCapture { status, body },
            GatewayError::Transport(_) | GatewayError::Decode(_) => {
                AppError::Upstream(err.to_string())
            }
        }
    }
}
