//! Plain-text rendering of flow results and data URI decoding.

use super::CliError;
use crate::models::{ProjectIdea, Roadmap};
use base64::{engine::general_purpose, Engine as _};

pub fn ideas(ideas: &[ProjectIdea]) -> String {
    let mut out = String::new();
    for (i, idea) in ideas.iter().enumerate() {
        out.push_str(&format!("{}. {}\n   {}\n", i + 1, idea.title, idea.description));
    }
    out
}

pub fn roadmap(roadmap: &Roadmap) -> String {
    let mut out = format!("Tech stack: {}\n\n", roadmap.tech_stack.join(", "));
    out.push_str("Architecture:\n");
    out.push_str(roadmap.architecture.trim());
    out.push_str("\n\nSteps:\n");
    for (i, step) in roadmap.steps.iter().enumerate() {
        out.push_str(&format!("{}. {}\n   {}\n", i + 1, step.title, step.description));
    }
    out
}

/// Split `data:<mime>;base64,<payload>` into the mime type and decoded bytes.
pub fn decode_data_uri(uri: &str) -> Result<(String, Vec<u8>), CliError> {
    let rest = uri
        .strip_prefix("data:")
        .ok_or_else(|| CliError::Image("only data: URIs can be saved to a file".to_string()))?;
    let (meta, payload) = rest
        .split_once(',')
        .ok_or_else(|| CliError::Image("data URI has no payload".to_string()))?;
    let mime = meta
        .strip_suffix(";base64")
        .ok_or_else(|| CliError::Image("data URI is not base64 encoded".to_string()))?;

    let bytes = general_purpose::STANDARD
        .decode(payload)
        .map_err(|err| CliError::Image(format!("invalid base64 payload: {}", err)))?;

    Ok((mime.to_string(), bytes))
}
