use reqwest::StatusCode;

/// Errors raised while talking to a hosted model
#[derive(Debug, Clone, thiserror::Error)]
pub enum ProviderError {
    /// Missing API key or unusable client settings
    #[error("Provider not configured: {0}")]
    NotConfigured(String),
    /// HTTP request/response error
    #[error("HTTP error: {0}")]
    Http(String),
    /// Provider unreachable, timed out or failing server side
    #[error("Service unavailable: {0}")]
    Unavailable(String),
    /// Authentication error (401/403)
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
    /// Rate limited or exceeded quota
    #[error("Rate limited: {0}")]
    RateLimited(String),
    /// Body could not be understood
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl ProviderError {
    pub fn from_status(provider: &str, status: StatusCode, body: &str) -> Self {
        let message = format!("{} returned {}: {}", provider, status, body);
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Self::Unauthorized(message),
            StatusCode::TOO_MANY_REQUESTS => Self::RateLimited(message),
            status if status.is_server_error() => Self::Unavailable(message),
            _ => Self::Http(message),
        }
    }
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Unavailable(format!("Request timeout: {}", err))
        } else if err.is_connect() {
            Self::Unavailable(format!("Connection failed: {}", err))
        } else {
            Self::Http(err.to_string())
        }
    }
}
