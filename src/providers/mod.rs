//! Hosted generation providers
//!
//! This module is the only place that talks to an external model API. Flows
//! never see HTTP: they hand a [`GenerationRequest`] to a
//! `dyn GenerationProvider` and get a [`GenerationOutput`] back.
//!
//! ## Architecture Pattern
//!
//! 1. [`GenerationProvider`] trait → flows depend on the trait only
//! 2. One HTTP client per hosted API (`gemini.rs`, `openai.rs`)
//! 3. `mock.rs` → scripted provider for tests and canned demo provider
//! 4. [`create_provider`] picks the implementation from `AiSettings`
//!
//! Every call is a single HTTP attempt. There is no retry, backoff or cache
//! at this layer.

use crate::configuration::{AiProviderType, AiSettings};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

pub mod errors;
pub mod gemini;
pub mod mock;
pub mod openai;

pub use errors::ProviderError;
pub use gemini::GeminiProvider;
pub use mock::{DemoProvider, StubProvider};
pub use openai::OpenAiProvider;

/// Response modality a request asks the provider for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modality {
    Text,
    Image,
}

impl Modality {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "TEXT",
            Self::Image => "IMAGE",
        }
    }
}

/// One rendered prompt, ready to be sent.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    /// Name of the flow issuing the call, used for tracing only
    pub flow: &'static str,
    pub model: String,
    /// System instruction (persona). Only the chat flow sets it.
    pub system: Option<String>,
    pub prompt: String,
    /// JSON schema the text payload must follow
    pub response_schema: Option<Value>,
    pub modalities: Vec<Modality>,
}

impl GenerationRequest {
    pub fn structured(flow: &'static str, model: &str, prompt: String, schema: Value) -> Self {
        Self {
            flow,
            model: model.to_string(),
            system: None,
            prompt,
            response_schema: Some(schema),
            modalities: vec![Modality::Text],
        }
    }

    pub fn image(flow: &'static str, model: &str, prompt: String) -> Self {
        Self {
            flow,
            model: model.to_string(),
            system: None,
            prompt,
            response_schema: None,
            modalities: vec![Modality::Text, Modality::Image],
        }
    }

    pub fn with_system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }

    pub fn wants_image(&self) -> bool {
        self.modalities.contains(&Modality::Image)
    }
}

/// Generated media, either a `data:` URI or a resolvable URL.
#[derive(Debug, Clone, PartialEq)]
pub struct Media {
    pub url: String,
    pub content_type: Option<String>,
}

/// Raw provider answer. Interpretation (JSON parsing, schema checks) is left to the flow.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenerationOutput {
    pub text: Option<String>,
    pub media: Option<Media>,
}

impl GenerationOutput {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            media: None,
        }
    }

    pub fn media(media: Media) -> Self {
        Self {
            text: None,
            media: Some(media),
        }
    }
}

#[async_trait]
pub trait GenerationProvider: Send + Sync {
    /// Provider name for logs and error reporting.
    fn name(&self) -> &str;

    /// Issue exactly one generation call.
    async fn generate(&self, request: GenerationRequest) -> Result<GenerationOutput, ProviderError>;
}

/// Build the provider described by the settings.
/// A disabled AI section yields the offline [`DemoProvider`].
pub fn create_provider(settings: &AiSettings) -> Result<Arc<dyn GenerationProvider>, ProviderError> {
    if !settings.enabled {
        tracing::warn!("AI generation disabled - using demo responses");
        return Ok(Arc::new(DemoProvider::default()));
    }

    let provider: Arc<dyn GenerationProvider> = match settings.provider {
        AiProviderType::Gemini => Arc::new(GeminiProvider::from_settings(settings)?),
        AiProviderType::Openai => Arc::new(OpenAiProvider::from_settings(settings)?),
    };
    tracing::info!(provider = provider.name(), "Generation provider initialized");

    Ok(provider)
}

pub(crate) fn http_client(timeout_secs: u64) -> Result<reqwest::Client, ProviderError> {
    reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(timeout_secs.max(1)))
        .build()
        .map_err(|err| ProviderError::NotConfigured(format!("HTTP client error: {}", err)))
}

/// Send a prepared request once and return the decoded JSON body.
pub(crate) async fn send_json(
    provider: &str,
    builder: reqwest::RequestBuilder,
) -> Result<Value, ProviderError> {
    let response = builder.send().await?;
    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|err| ProviderError::Http(err.to_string()))?;

    if !status.is_success() {
        return Err(ProviderError::from_status(provider, status, &text));
    }

    serde_json::from_str::<Value>(&text)
        .map_err(|err| ProviderError::InvalidResponse(format!("{}: {}", provider, err)))
}
