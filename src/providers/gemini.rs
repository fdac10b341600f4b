use super::{
    http_client, send_json, GenerationOutput, GenerationProvider, GenerationRequest, Media,
    ProviderError,
};
use crate::configuration::AiSettings;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::Instrument;

/// Google Generative Language API.
pub const GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com";

/// Calls `models/{model}:generateContent` on the Generative Language API.
pub struct GeminiProvider {
    base_url: String,
    api_key: String,
    http_client: reqwest::Client,
}

impl GeminiProvider {
    pub fn from_settings(settings: &AiSettings) -> Result<Self, ProviderError> {
        let api_key = settings.api_key.clone().ok_or_else(|| {
            ProviderError::NotConfigured(
                "GEMINI_API_KEY (or EVENTRA_AI_API_KEY) is required for the gemini provider"
                    .to_string(),
            )
        })?;

        Ok(Self {
            base_url: settings
                .endpoint
                .as_deref()
                .unwrap_or(GEMINI_API_URL)
                .trim_end_matches('/')
                .to_string(),
            api_key,
            http_client: http_client(settings.timeout_secs)?,
        })
    }

    fn url(&self, model: &str) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.base_url, model)
    }

    fn body(request: &GenerationRequest) -> GeminiRequest {
        let generation_config = if request.wants_image() {
            Some(GeminiGenerationConfig {
                response_mime_type: None,
                response_schema: None,
                response_modalities: Some(
                    request
                        .modalities
                        .iter()
                        .map(|m| m.as_str().to_string())
                        .collect(),
                ),
            })
        } else {
            request
                .response_schema
                .as_ref()
                .map(|schema| GeminiGenerationConfig {
                    response_mime_type: Some("application/json".to_string()),
                    response_schema: Some(to_gemini_schema(schema)),
                    response_modalities: None,
                })
        };

        GeminiRequest {
            contents: vec![GeminiContent {
                role: "user".to_string(),
                parts: vec![GeminiTextPart {
                    text: request.prompt.clone(),
                }],
            }],
            system_instruction: request.system.as_ref().map(|system| GeminiSystemInstruction {
                parts: vec![GeminiTextPart {
                    text: system.clone(),
                }],
            }),
            generation_config,
        }
    }

    fn parse(payload: Value) -> Result<GenerationOutput, ProviderError> {
        let response: GeminiResponse = serde_json::from_value(payload)
            .map_err(|err| ProviderError::InvalidResponse(format!("gemini: {}", err)))?;

        if let Some(reason) = response
            .prompt_feedback
            .as_ref()
            .and_then(|feedback| feedback.block_reason.as_deref())
        {
            tracing::warn!(block_reason = reason, "Gemini blocked the prompt");
        }

        let parts = response
            .candidates
            .unwrap_or_default()
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .map(|content| content.parts)
            .unwrap_or_default();

        let mut text = String::new();
        let mut media = None;
        for part in parts {
            if part.thought.unwrap_or(false) {
                continue;
            }
            if let Some(chunk) = part.text {
                text.push_str(&chunk);
            }
            if media.is_none() {
                media = part.inline_data.map(|inline| Media {
                    url: format!("data:{};base64,{}", inline.mime_type, inline.data),
                    content_type: Some(inline.mime_type),
                });
            }
        }

        Ok(GenerationOutput {
            text: if text.is_empty() { None } else { Some(text) },
            media,
        })
    }
}

#[async_trait]
impl GenerationProvider for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn generate(&self, request: GenerationRequest) -> Result<GenerationOutput, ProviderError> {
        let span = tracing::info_span!(
            "gemini_generate",
            flow = request.flow,
            model = %request.model,
        );

        let builder = self
            .http_client
            .post(self.url(&request.model))
            .header("x-goog-api-key", &self.api_key)
            .json(&Self::body(&request));

        let payload = send_json(self.name(), builder).instrument(span).await?;
        Self::parse(payload)
    }
}

/// Gemini expects OpenAPI style upper-case type names (`OBJECT`, `STRING`, ...).
pub fn to_gemini_schema(schema: &Value) -> Value {
    match schema {
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(key, value)| {
                    let value = match (key.as_str(), value) {
                        ("type", Value::String(name)) => Value::String(name.to_uppercase()),
                        _ => to_gemini_schema(value),
                    };
                    (key.clone(), value)
                })
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.iter().map(to_gemini_schema).collect()),
        other => other.clone(),
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<GeminiSystemInstruction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GeminiGenerationConfig>,
}

#[derive(Serialize)]
struct GeminiContent {
    role: String,
    parts: Vec<GeminiTextPart>,
}

#[derive(Serialize)]
struct GeminiSystemInstruction {
    parts: Vec<GeminiTextPart>,
}

#[derive(Serialize)]
struct GeminiTextPart {
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiGenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_schema: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_modalities: Option<Vec<String>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiResponse {
    candidates: Option<Vec<GeminiCandidate>>,
    prompt_feedback: Option<GeminiPromptFeedback>,
}

#[derive(Deserialize)]
struct GeminiCandidate {
    content: Option<GeminiContentResponse>,
}

#[derive(Deserialize)]
struct GeminiContentResponse {
    #[serde(default)]
    parts: Vec<GeminiPartResponse>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiPartResponse {
    text: Option<String>,
    inline_data: Option<GeminiInlineData>,
    thought: Option<bool>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiInlineData {
    mime_type: String,
    data: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiPromptFeedback {
    block_reason: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn schema_types_are_upper_cased() {
        let schema = json!({
            "type": "object",
            "properties": {
                "answer": { "type": "string", "description": "the type of reply" },
                "steps": { "type": "array", "items": { "type": "string" } }
            },
            "required": ["answer"]
        });

        let converted = to_gemini_schema(&schema);
        assert_eq!(converted["type"], "OBJECT");
        assert_eq!(converted["properties"]["answer"]["type"], "STRING");
        assert_eq!(converted["properties"]["answer"]["description"], "the type of reply");
        assert_eq!(converted["properties"]["steps"]["items"]["type"], "STRING");
        assert_eq!(converted["required"], json!(["answer"]));
    }

    #[test]
    fn structured_body_sets_json_mime_type() {
        let request = GenerationRequest::structured(
            "project_ideas",
            "gemini-2.0-flash",
            "Skills: Rust".to_string(),
            json!({ "type": "object" }),
        );
        let body = serde_json::to_value(GeminiProvider::body(&request)).unwrap();

        assert_eq!(body["contents"][0]["parts"][0]["text"], "Skills: Rust");
        assert_eq!(body["generationConfig"]["responseMimeType"], "application/json");
        assert_eq!(body["generationConfig"]["responseSchema"]["type"], "OBJECT");
        assert!(body.get("systemInstruction").is_none());
    }

    #[test]
    fn image_body_requests_both_modalities() {
        let request = GenerationRequest::image("event_image", "img-model", "poster".to_string());
        let body = serde_json::to_value(GeminiProvider::body(&request)).unwrap();

        assert_eq!(
            body["generationConfig"]["responseModalities"],
            json!(["TEXT", "IMAGE"])
        );
        assert!(body["generationConfig"].get("responseSchema").is_none());
    }

    #[test]
    fn system_instruction_is_forwarded() {
        let request = GenerationRequest::structured("chat", "m", "hi".to_string(), json!({}))
            .with_system("You are helpful");
        let body = serde_json::to_value(GeminiProvider::body(&request)).unwrap();
        assert_eq!(body["systemInstruction"]["parts"][0]["text"], "You are helpful");
    }

    #[test]
    fn parse_joins_text_parts_and_skips_thoughts() {
        let payload = json!({
            "candidates": [{
                "content": { "parts": [
                    { "text": "thinking...", "thought": true },
                    { "text": "{\"answer\":" },
                    { "text": "\"hi\"}" }
                ]}
            }]
        });

        let output = GeminiProvider::parse(payload).unwrap();
        assert_eq!(output.text.as_deref(), Some("{\"answer\":\"hi\"}"));
        assert!(output.media.is_none());
    }

    #[test]
    fn parse_turns_inline_data_into_data_uri() {
        let payload = json!({
            "candidates": [{
                "content": { "parts": [
                    { "text": "Here is your poster" },
                    { "inlineData": { "mimeType": "image/png", "data": "iVBORw0KGgo=" } }
                ]}
            }]
        });

        let output = GeminiProvider::parse(payload).unwrap();
        let media = output.media.unwrap();
        assert_eq!(media.url, "data:image/png;base64,iVBORw0KGgo=");
        assert_eq!(media.content_type.as_deref(), Some("image/png"));
    }

    #[test]
    fn parse_without_candidates_is_empty_output() {
        let payload = json!({ "promptFeedback": { "blockReason": "SAFETY" } });
        let output = GeminiProvider::parse(payload).unwrap();
        assert_eq!(output, GenerationOutput::default());
    }
}
