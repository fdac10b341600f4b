//! Request and response checks.
//!
//! Requests are checked before any prompt is rendered. Responses come from
//! the model and are untrusted: they are decoded into the typed record and
//! validated, and any mismatch is a hard `ValidationFailed`.

use super::FlowError;
use serde::de::DeserializeOwned;
use serde_json::Value;
use serde_valid::Validate;

pub fn check_request<T: Validate>(request: &T) -> Result<(), FlowError> {
    request.validate().map_err(|errors| {
        let errors = errors.to_string();
        tracing::debug!(errors = %errors, "Invalid flow request");
        FlowError::InvalidRequest(errors)
    })
}

pub fn check_response<T: Validate>(response: T) -> Result<T, FlowError> {
    response
        .validate()
        .map_err(|errors| FlowError::ValidationFailed(errors.to_string()))?;
    Ok(response)
}

/// Deserialize a model payload into `T`, then validate it.
pub fn decode<T>(value: Value) -> Result<T, FlowError>
where
    T: DeserializeOwned + Validate,
{
    let decoded: T = serde_path_to_error::deserialize(value).map_err(|err| {
        FlowError::ValidationFailed(format!("{} (at `{}`)", err.inner(), err.path()))
    })?;
    check_response(decoded)
}

/// Parse the text payload of a structured-output call.
/// A `null` document counts as no payload at all.
pub fn parse_payload(text: &str) -> Result<Value, FlowError> {
    let value: Value = serde_json::from_str(strip_code_fence(text))
        .map_err(|err| FlowError::ValidationFailed(format!("payload is not JSON: {}", err)))?;

    if value.is_null() {
        return Err(FlowError::EmptyResponse);
    }
    Ok(value)
}

fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };

    // drop the info string ("json") on the opening fence line
    let body = rest.split_once('\n').map(|(_, body)| body).unwrap_or("");
    body.trim_end().strip_suffix("```").unwrap_or(body).trim()
}
