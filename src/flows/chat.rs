use super::template::{PromptFields, PromptTemplate, TemplateError};
use super::{dispatch_structured, schema, FlowError};
use crate::forms::ai::{ChatMessage, ChatRequest};
use crate::models::ChatResponse;
use crate::providers::{GenerationProvider, GenerationRequest};
use serde_json::{json, Value};
use std::sync::Arc;

pub const FLOW_NAME: &str = "chat_assistant";

pub const SYSTEM_PROMPT: &str = r#"You are a friendly and helpful AI assistant for an application called "Eventra". Your goal is to guide users, answer their questions about the app's features, and help them solve any problems they might encounter.

Eventra has the following key features:
1. Dashboard: a summary page of the user's activities.
2. Events: users can discover events happening across India. They can see details, get AI-generated event banners, and register.
3. Create Event: users can create their own events by filling out a form.
4. My Applications: users can track the status of their applications to events (Pending, Approved, Rejected).
5. AI Project Assistant: users enter their skills and desired job role to get personalized project ideas, then generate a full roadmap for any idea with a recommended tech stack, architecture and step-by-step instructions.

Be concise, friendly and act as a guide. If you don't know the answer, say so politely."#;

const PROMPT: &str = "The user has sent the following message. Please provide a helpful response.\n\
Question: {{question}}\n";

impl PromptFields for ChatRequest {
    const FIELDS: &'static [&'static str] = &["question"];

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "question" => Some(&self.question),
            _ => None,
        }
    }
}

pub struct ChatAssistantFlow {
    provider: Arc<dyn GenerationProvider>,
    model: String,
    template: PromptTemplate<ChatRequest>,
}

impl ChatAssistantFlow {
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

    pub fn output_schema() -> Value {
        json!({
            "type": "object",
            "properties": {
                "answer": {
                    "type": "string",
                    "description": "The assistant's response to the user's question."
                }
            },
            "required": ["answer"]
        })
    }

    /// One `role: content` line per message, oldest first. Line breaks
    /// inside a message are written as a literal `\n`.
    pub fn render_history(history: &[ChatMessage]) -> String {
        history
            .iter()
            .map(|message| format!("{}: {}\n", message.role, single_line(&message.content)))
            .collect()
    }

    pub fn render_prompt(&self, request: &ChatRequest) -> String {
        let mut prompt = Self::render_history(&request.history);
        prompt.push_str(&self.template.render(request));
        prompt
    }

    #[tracing::instrument(
        name = "Chat assistant flow.",
        skip_all,
        fields(history = request.history.len())
    )]
    pub async fn run(&self, request: &ChatRequest) -> Result<ChatResponse, FlowError> {
        schema::check_request(request)?;

        let generation = GenerationRequest::structured(
            FLOW_NAME,
            &self.model,
            self.render_prompt(request),
            Self::output_schema(),
        )
        .with_system(SYSTEM_PROMPT);

        dispatch_structured::<ChatResponse>(self.provider.as_ref(), generation).await
    }
}

fn single_line(content: &str) -> String {
    content
        .replace("\r\n", "\n")
        .replace(|c: char| c == '\n' || c == '\r', "\\n")
}
