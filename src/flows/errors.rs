use crate::providers::ProviderError;
use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::json;

/// Failure of a single flow invocation. Nothing here is fatal to the process.
#[derive(Debug, thiserror::Error)]
pub enum FlowError {
    /// Caller input failed validation, the provider was never called
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
    /// The provider call itself did not complete
    #[error("Provider unavailable: {0}")]
    ProviderUnavailable(#[from] ProviderError),
    /// The call completed without a usable payload
    #[error("Provider returned an empty response")]
    EmptyResponse,
    /// The payload does not match the declared response schema
    #[error("Provider response failed validation: {0}")]
    ValidationFailed(String),
}

impl FlowError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidRequest(_) => "INVALID_REQUEST",
            Self::ProviderUnavailable(_) => "PROVIDER_UNAVAILABLE",
            Self::EmptyResponse => "EMPTY_RESPONSE",
            Self::ValidationFailed(_) => "VALIDATION_FAILED",
        }
    }

    /// `true` when re-submitting the same input cannot succeed.
    pub fn is_caller_error(&self) -> bool {
        matches!(self, Self::InvalidRequest(_))
    }
}

impl ResponseError for FlowError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Self::ProviderUnavailable(ProviderError::RateLimited(_)) => {
                StatusCode::TOO_MANY_REQUESTS
            }
            Self::ProviderUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::EmptyResponse | Self::ValidationFailed(_) => StatusCode::BAD_GATEWAY,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        // provider details stay in the logs
        let message = match self {
            Self::InvalidRequest(_) => self.to_string(),
            Self::ProviderUnavailable(_) => "AI service is unavailable, try again later".to_string(),
            Self::EmptyResponse => "AI service returned no result".to_string(),
            Self::ValidationFailed(_) => "AI service returned an unusable result".to_string(),
        };

        HttpResponse::build(status).json(json!({
            "status": "Error",
            "code": status.as_u16(),
            "kind": self.kind(),
            "message": message,
        }))
    }
}
