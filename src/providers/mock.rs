use super::{GenerationOutput, GenerationProvider, GenerationRequest, Media, ProviderError};
use async_trait::async_trait;
use base64::{engine::general_purpose, Engine as _};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

#[derive(Debug, Clone)]
enum StubReply {
    Output(GenerationOutput),
    Failure(ProviderError),
}

/// Scripted provider: always gives the same reply and remembers what it was asked.
pub struct StubProvider {
    reply: StubReply,
    delay: Option<Duration>,
    calls: AtomicUsize,
    requests: Mutex<Vec<GenerationRequest>>,
}

impl StubProvider {
    fn new(reply: StubReply) -> Self {
        Self {
            reply,
            delay: None,
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Reply with a raw text payload.
    pub fn text(body: impl Into<String>) -> Self {
        Self::new(StubReply::Output(GenerationOutput::text(body)))
    }

    /// Reply with a JSON document serialized as the text payload.
    pub fn json(value: &Value) -> Self {
        Self::text(value.to_string())
    }

    pub fn media(url: impl Into<String>) -> Self {
        Self::new(StubReply::Output(GenerationOutput::media(Media {
            url: url.into(),
            content_type: None,
        })))
    }

    /// Successful call with neither text nor media.
    pub fn empty() -> Self {
        Self::new(StubReply::Output(GenerationOutput::default()))
    }

    pub fn failing(error: ProviderError) -> Self {
        Self::new(StubReply::Failure(error))
    }

    /// Hold every reply back for `delay`, to interleave concurrent calls.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<GenerationRequest> {
        self.requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn last_request(&self) -> Option<GenerationRequest> {
        self.requests().pop()
    }
}

#[async_trait]
impl GenerationProvider for StubProvider {
    fn name(&self) -> &str {
        "stub"
    }

    async fn generate(&self, request: GenerationRequest) -> Result<GenerationOutput, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(request);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        match &self.reply {
            StubReply::Output(output) => Ok(output.clone()),
            StubReply::Failure(err) => Err(err.clone()),
        }
    }
}

/// Offline provider used when AI is disabled in configuration.
///
/// Picks a canned reply from the shape of the requested schema, so every flow
/// keeps working in demos and local development without an API key.
#[derive(Default)]
pub struct DemoProvider;

const DEMO_POSTER_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="1200" height="630"><defs><linearGradient id="g" x1="0" y1="0" x2="1" y2="1"><stop offset="0" stop-color="#7c3aed"/><stop offset="1" stop-color="#f97316"/></linearGradient></defs><rect width="1200" height="630" fill="url(#g)"/><circle cx="950" cy="160" r="120" fill="#ffffff" fill-opacity="0.15"/><circle cx="220" cy="500" r="180" fill="#ffffff" fill-opacity="0.1"/></svg>"##;

impl DemoProvider {
    fn poster() -> Media {
        Media {
            url: format!(
                "data:image/svg+xml;base64,{}",
                general_purpose::STANDARD.encode(DEMO_POSTER_SVG)
            ),
            content_type: Some("image/svg+xml".to_string()),
        }
    }

    fn reply_for(schema: &Value) -> Value {
        let properties = &schema["properties"];
        if properties.get("answer").is_some() {
            json!({
                "answer": "AI assistance is running in demo mode. Browse events from the Events page, \
                           track registrations under My Applications, and try the AI Project Assistant \
                           for project ideas and roadmaps."
            })
        } else if properties.get("projectIdeas").is_some() {
            json!({
                "projectIdeas": [
                    {
                        "title": "Campus Event Finder",
                        "description": "A searchable directory of college fests and meetups with reminders and RSVP tracking."
                    },
                    {
                        "title": "Portfolio Health Check",
                        "description": "Analyse a public portfolio site and suggest improvements for a target job role."
                    },
                    {
                        "title": "Skill Swap Board",
                        "description": "Match people who want to learn a skill with people who can teach it locally."
                    }
                ]
            })
        } else if properties.get("steps").is_some() {
            json!({
                "techStack": ["TypeScript", "React", "Rust", "PostgreSQL"],
                "architecture": "A single page frontend talks to a JSON API. The API owns validation and \
                                 persistence and calls external services through adapters.",
                "steps": [
                    { "title": "Set up the repository", "description": "Create the frontend and API projects, CI and formatting." },
                    { "title": "Model the data", "description": "Design the tables and API payloads for the core entities." },
                    { "title": "Build the core screens", "description": "Implement the main user journey end to end." },
                    { "title": "Deploy", "description": "Containerise both services and publish a demo environment." }
                ]
            })
        } else {
            Value::Null
        }
    }
}

#[async_trait]
impl GenerationProvider for DemoProvider {
    fn name(&self) -> &str {
        "demo"
    }

    async fn generate(&self, request: GenerationRequest) -> Result<GenerationOutput, ProviderError> {
        tracing::debug!(flow = request.flow, "Serving demo generation");

        if request.wants_image() {
            return Ok(GenerationOutput::media(Self::poster()));
        }

        let reply = request
            .response_schema
            .as_ref()
            .map(Self::reply_for)
            .unwrap_or(Value::Null);
        if reply.is_null() {
            return Ok(GenerationOutput::default());
        }
        Ok(GenerationOutput::text(reply.to_string()))
    }
}
