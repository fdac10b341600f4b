//! Typed prompt flows.
//!
//! A flow wraps exactly one call to a hosted model:
//!
//! 1. validate the request (`INVALID_REQUEST`, provider never called)
//! 2. render the prompt from a compiled template
//! 3. one provider call, no retry (`PROVIDER_UNAVAILABLE`)
//! 4. decode and validate the payload (`EMPTY_RESPONSE` / `VALIDATION_FAILED`)
//!
//! Flows hold no mutable state, so one instance serves any number of
//! concurrent invocations.

use crate::configuration::AiSettings;
use crate::providers::{GenerationProvider, GenerationRequest, Media};
use serde::de::DeserializeOwned;
use serde_valid::Validate;
use std::sync::Arc;

pub mod chat;
pub mod errors;
pub mod ideas;
pub mod image;
pub mod roadmap;
pub mod schema;
pub mod template;

pub use chat::ChatAssistantFlow;
pub use errors::FlowError;
pub use ideas::ProjectIdeaFlow;
pub use image::EventImageFlow;
pub use roadmap::ProjectRoadmapFlow;
pub use template::{PromptFields, PromptTemplate, TemplateError};

/// The four flows sharing one provider.
pub struct Flows {
    pub chat: ChatAssistantFlow,
    pub ideas: ProjectIdeaFlow,
    pub roadmap: ProjectRoadmapFlow,
    pub image: EventImageFlow,
}

impl Flows {
    pub fn new(
        provider: Arc<dyn GenerationProvider>,
        settings: &AiSettings,
    ) -> Result<Self, TemplateError> {
        Ok(Self {
            chat: ChatAssistantFlow::new(provider.clone(), &settings.text_model)?,
            ideas: ProjectIdeaFlow::new(provider.clone(), &settings.text_model)?,
            roadmap: ProjectRoadmapFlow::new(provider.clone(), &settings.text_model)?,
            image: EventImageFlow::new(provider, &settings.image_model)?,
        })
    }
}

async fn call_provider(
    provider: &dyn GenerationProvider,
    request: GenerationRequest,
) -> Result<crate::providers::GenerationOutput, FlowError> {
    let flow = request.flow;
    provider.generate(request).await.map_err(|err| {
        tracing::error!(
            flow,
            provider = provider.name(),
            error = %err,
            "Generation call failed"
        );
        FlowError::ProviderUnavailable(err)
    })
}

/// Single structured-output call, decoded into `T`.
pub(crate) async fn dispatch_structured<T>(
    provider: &dyn GenerationProvider,
    request: GenerationRequest,
) -> Result<T, FlowError>
where
    T: DeserializeOwned + Validate,
{
    let flow = request.flow;
    let output = call_provider(provider, request).await?;

    let text = output
        .text
        .filter(|text| !text.trim().is_empty())
        .ok_or_else(|| {
            tracing::warn!(flow, "Provider returned no structured output");
            FlowError::EmptyResponse
        })?;

    let payload = schema::parse_payload(&text)?;
    schema::decode::<T>(payload).map_err(|err| {
        tracing::warn!(flow, error = %err, "Structured output rejected");
        err
    })
}

/// Single media call. A reply without a media reference is an empty response.
pub(crate) async fn dispatch_media(
    provider: &dyn GenerationProvider,
    request: GenerationRequest,
) -> Result<Media, FlowError> {
    let flow = request.flow;
    let output = call_provider(provider, request).await?;

    output
        .media
        .filter(|media| !media.url.trim().is_empty())
        .ok_or_else(|| {
            tracing::warn!(flow, "Provider returned no media");
            FlowError::EmptyResponse
        })
}
