use super::{
    http_client, send_json, GenerationOutput, GenerationProvider, GenerationRequest, Media,
    ProviderError,
};
use crate::configuration::AiSettings;
use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::Instrument;

/// Default OpenAI-compatible base URL.
pub const OPENAI_API_URL: &str = "https://api.openai.com";

/// Calls the OpenAI Chat Completions and Images APIs (or any compatible gateway).
pub struct OpenAiProvider {
    base_url: String,
    api_key: String,
    http_client: reqwest::Client,
}

impl OpenAiProvider {
    pub fn from_settings(settings: &AiSettings) -> Result<Self, ProviderError> {
        let api_key = settings.api_key.clone().ok_or_else(|| {
            ProviderError::NotConfigured(
                "OPENAI_API_KEY (or EVENTRA_AI_API_KEY) is required for the openai provider"
                    .to_string(),
            )
        })?;

        Ok(Self {
            base_url: settings
                .endpoint
                .as_deref()
                .unwrap_or(OPENAI_API_URL)
                .trim_end_matches('/')
                .to_string(),
            api_key,
            http_client: http_client(settings.timeout_secs)?,
        })
    }

    fn chat_body(request: &GenerationRequest) -> Value {
        let mut messages = Vec::with_capacity(2);
        if let Some(system) = &request.system {
            messages.push(json!({ "role": "system", "content": system }));
        }
        messages.push(json!({ "role": "user", "content": request.prompt }));

        let mut body = json!({
            "model": request.model,
            "messages": messages,
        });
        if let Some(schema) = &request.response_schema {
            body["response_format"] = json!({
                "type": "json_schema",
                "json_schema": {
                    "name": request.flow,
                    "schema": schema,
                    "strict": false
                }
            });
        }
        body
    }

    fn image_body(request: &GenerationRequest) -> Value {
        json!({
            "model": request.model,
            "prompt": request.prompt,
            "n": 1,
            "response_format": "b64_json"
        })
    }

    fn parse_chat(payload: &Value) -> GenerationOutput {
        GenerationOutput {
            text: payload["choices"][0]["message"]["content"]
                .as_str()
                .filter(|s| !s.is_empty())
                .map(|s| s.to_string()),
            media: None,
        }
    }

    fn parse_image(payload: &Value) -> GenerationOutput {
        let item = &payload["data"][0];
        let media = if let Some(data) = item["b64_json"].as_str().filter(|s| !s.is_empty()) {
            Some(Media {
                url: format!("data:image/png;base64,{}", data),
                content_type: Some("image/png".to_string()),
            })
        } else {
            item["url"]
                .as_str()
                .filter(|s| !s.is_empty())
                .map(|url| Media {
                    url: url.to_string(),
                    content_type: None,
                })
        };

        GenerationOutput {
            text: item["revised_prompt"].as_str().map(|s| s.to_string()),
            media,
        }
    }
}

#[async_trait]
impl GenerationProvider for OpenAiProvider {
    fn name(&self) -> &str {
        "openai"
    }

    async fn generate(&self, request: GenerationRequest) -> Result<GenerationOutput, ProviderError> {
        let span = tracing::info_span!(
            "openai_generate",
            flow = request.flow,
            model = %request.model,
        );

        let (path, body) = if request.wants_image() {
            ("/v1/images/generations", Self::image_body(&request))
        } else {
            ("/v1/chat/completions", Self::chat_body(&request))
        };

        let builder = self
            .http_client
            .post(format!("{}{}", self.base_url, path))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&body);

        let payload = send_json(self.name(), builder).instrument(span).await?;

        if request.wants_image() {
            Ok(Self::parse_image(&payload))
        } else {
            Ok(Self::parse_chat(&payload))
        }
    }
}
