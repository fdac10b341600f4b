use super::template::{PromptFields, PromptTemplate, TemplateError};
use super::{dispatch_media, schema, FlowError};
use crate::forms::ai::ImageRequest;
use crate::models::ImageResponse;
use crate::providers::{GenerationProvider, GenerationRequest};
use std::sync::Arc;

pub const FLOW_NAME: &str = "event_image";

const PROMPT: &str = "Generate a vibrant, modern, and exciting event poster for an event called \
\"{{eventName}}\". The event is about: \"{{eventDescription}}\". The image should be visually \
appealing and suitable for a promotional banner. Do not include any text in the image.";

impl PromptFields for ImageRequest {
    const FIELDS: &'static [&'static str] = &["eventName", "eventDescription"];

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "eventName" => Some(&self.event_name),
            "eventDescription" => Some(&self.event_description),
            _ => None,
        }
    }
}

/// Poster generation. The provider is asked for both text and image
/// modalities and only the media reference is kept.
pub struct EventImageFlow {
    provider: Arc<dyn GenerationProvider>,
    model: String,
    template: PromptTemplate<ImageRequest>,
}

impl EventImageFlow {
    pub fn new(
        provider: Arc<dyn GenerationProvider>,
        model: impl Into<String>,
    ) -> Result<Self, TemplateError> {
        Ok(Self {
            provider,
            model: model.into(),
            template: PromptTemplate::compile(FLOW_NAME, PROMPT)?,
        })
    }

    pub fn render_prompt(&self, request: &ImageRequest) -> String {
        self.template.render(request)
    }

    #[tracing::instrument(name = "Event image flow.", skip_all, fields(event = %request.event_name))]
    pub async fn run(&self, request: &ImageRequest) -> Result<ImageResponse, FlowError> {
        schema::check_request(request)?;

        let generation =
            GenerationRequest::image(FLOW_NAME, &self.model, self.render_prompt(request));
        let media = dispatch_media(self.provider.as_ref(), generation).await?;

        schema::check_response(ImageResponse {
            image_url: media.url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::{Modality, StubProvider};

    fn request() -> ImageRequest {
        ImageRequest {
            event_name: "Hackathon 2024".to_string(),
            event_description: "48 hours of building".to_string(),
        }
    }

    #[test]
    fn prompt_quotes_name_and_description() {
        let flow = EventImageFlow::new(Arc::new(StubProvider::empty()), "m").unwrap();
        let prompt = flow.render_prompt(&request());
        assert!(prompt.contains("an event called \"Hackathon 2024\""));
        assert!(prompt.contains("The event is about: \"48 hours of building\""));
        assert!(prompt.ends_with("Do not include any text in the image."));
    }

    #[tokio::test]
    async fn media_reference_becomes_image_url() {
        let stub = Arc::new(StubProvider::media("data:image/png;base64,iVBORw0KGgo="));
        let flow = EventImageFlow::new(stub.clone(), "image-model").unwrap();

        let response = flow.run(&request()).await.unwrap();
        assert_eq!(response.image_url, "data:image/png;base64,iVBORw0KGgo=");

        let sent = stub.last_request().unwrap();
        assert_eq!(sent.model, "image-model");
        assert_eq!(sent.modalities, vec![Modality::Text, Modality::Image]);
        assert!(sent.system.is_none());
    }

    #[tokio::test]
    async fn missing_media_is_empty_response_after_one_call() {
        let stub = Arc::new(StubProvider::text("I cannot draw that."));
        let flow = EventImageFlow::new(stub.clone(), "m").unwrap();

        let err = flow.run(&request()).await.unwrap_err();
        assert!(matches!(err, FlowError::EmptyResponse));
        assert_eq!(stub.calls(), 1);
    }

    #[tokio::test]
    async fn unusable_media_reference_fails_validation() {
        let stub = Arc::new(StubProvider::media("poster.png"));
        let flow = EventImageFlow::new(stub, "m").unwrap();

        let err = flow.run(&request()).await.unwrap_err();
        assert_eq!(err.kind(), "VALIDATION_FAILED");
    }
}
