use super::template::{PromptFields, PromptTemplate, TemplateError};
use super::{dispatch_structured, schema, FlowError};
use crate::forms::ai::IdeaRequest;
use crate::models::{ProjectIdea, ProjectIdeas};
use crate::providers::{GenerationProvider, GenerationRequest};
use serde_json::{json, Value};
use std::sync::Arc;

pub const FLOW_NAME: &str = "project_ideas";

const PROMPT: &str = "You are an AI career advisor. A user will provide their skills (which can be \
technical or non-technical) and their desired job role. Your task is to suggest unique and practical \
project ideas that would be impressive for that job role, leveraging the specified skills. For each \
idea, provide a catchy title and a brief description.

Skills: {{skills}}
Job Role: {{jobRole}}

Project Ideas:";

impl PromptFields for IdeaRequest {
    const FIELDS: &'static [&'static str] = &["skills", "jobRole"];

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "skills" => Some(&self.skills),
            "jobRole" => Some(&self.job_role),
            _ => None,
        }
    }
}

pub struct ProjectIdeaFlow {
    provider: Arc<dyn GenerationProvider>,
    model: String,
    template: PromptTemplate<IdeaRequest>,
}

impl ProjectIdeaFlow {
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
                "projectIdeas": {
                    "type": "array",
                    "description": "Project ideas relevant to the user's skills and job role.",
                    "items": {
                        "type": "object",
                        "properties": {
                            "title": {
                                "type": "string",
                                "description": "A short, catchy title for the project idea."
                            },
                            "description": {
                                "type": "string",
                                "description": "A one or two sentence description of the project."
                            }
                        },
                        "required": ["title", "description"]
                    }
                }
            },
            "required": ["projectIdeas"]
        })
    }

    pub fn render_prompt(&self, request: &IdeaRequest) -> String {
        self.template.render(request)
    }

    /// Ideas in the order the model returned them.
    #[tracing::instrument(name = "Project idea flow.", skip_all, fields(job_role = %request.job_role))]
    pub async fn run(&self, request: &IdeaRequest) -> Result<Vec<ProjectIdea>, FlowError> {
        schema::check_request(request)?;

        let generation = GenerationRequest::structured(
            FLOW_NAME,
            &self.model,
            self.render_prompt(request),
            Self::output_schema(),
        );

        let ideas = dispatch_structured::<ProjectIdeas>(self.provider.as_ref(), generation).await?;
        Ok(ideas.project_ideas)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::providers::StubProvider;

    fn request() -> IdeaRequest {
        IdeaRequest {
            skills: "React, Figma".to_string(),
            job_role: "Frontend Developer".to_string(),
        }
    }

    #[test]
    fn prompt_carries_skills_and_role() {
        let flow = ProjectIdeaFlow::new(Arc::new(StubProvider::empty()), "m").unwrap();
        let prompt = flow.render_prompt(&request());
        assert!(prompt.starts_with("You are an AI career advisor."));
        assert!(prompt.contains("\nSkills: React, Figma\nJob Role: Frontend Developer\n"));
        assert!(prompt.ends_with("Project Ideas:"));
    }

    #[tokio::test]
    async fn ideas_come_back_unchanged_and_in_order() {
        let stub = Arc::new(StubProvider::json(&json!({
            "projectIdeas": [
                { "title": "Design System Playground", "description": "Build a Figma-synced component library in React." },
                { "title": "Accessible Portfolio", "description": "A portfolio site scoring 100 on Lighthouse accessibility." }
            ]
        })));
        let flow = ProjectIdeaFlow::new(stub.clone(), "m").unwrap();

        let ideas = flow.run(&request()).await.unwrap();

        assert_eq!(
            ideas,
            vec![
                ProjectIdea {
                    title: "Design System Playground".to_string(),
                    description: "Build a Figma-synced component library in React.".to_string(),
                },
                ProjectIdea {
                    title: "Accessible Portfolio".to_string(),
                    description: "A portfolio site scoring 100 on Lighthouse accessibility."
                        .to_string(),
                },
            ]
        );
        assert_eq!(stub.calls(), 1);
        assert!(stub.last_request().unwrap().system.is_none());
    }

    #[tokio::test]
    async fn empty_job_role_is_rejected_without_provider_call() {
        let stub = Arc::new(StubProvider::json(&json!({ "projectIdeas": [] })));
        let flow = ProjectIdeaFlow::new(stub.clone(), "m").unwrap();
        let request = IdeaRequest {
            skills: "React".to_string(),
            job_role: String::new(),
        };

        let err = flow.run(&request).await.unwrap_err();
        assert!(matches!(err, FlowError::InvalidRequest(_)));
        assert!(err.is_caller_error());
        assert_eq!(stub.calls(), 0);
    }

    #[tokio::test]
    async fn null_output_is_empty_response() {
        let stub = Arc::new(StubProvider::text("null"));
        let flow = ProjectIdeaFlow::new(stub, "m").unwrap();
        let err = flow.run(&request()).await.unwrap_err();
        assert_eq!(err.kind(), "EMPTY_RESPONSE");
    }
}
