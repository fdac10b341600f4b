use super::template::{PromptFields, PromptTemplate, TemplateError};
use super::{dispatch_structured, schema, FlowError};
use crate::forms::ai::RoadmapRequest;
use crate::models::Roadmap;
use crate::providers::{GenerationProvider, GenerationRequest};
use serde_json::{json, Value};
use std::sync::Arc;

pub const FLOW_NAME: &str = "project_roadmap";

const PROMPT: &str = "You are a Senior Software Architect and Career Mentor. A user wants to build a \
project to enhance their portfolio for a specific job role. Your task is to provide a detailed, \
actionable roadmap to help them build it.

Consider the user's existing skills and desired job role to recommend a practical and impressive tech stack.

User Information:
- Desired Job Role: {{jobRole}}
- Existing Skills: {{userSkills}}

Project Idea:
- Title: {{projectTitle}}
- Description: {{projectDescription}}

Generate a clear and concise project roadmap with the following sections:

1. Tech Stack: recommend specific languages, frameworks, databases and tools relevant to the project and the user's career goals.
2. Architecture: a high-level overview of the main components (e.g. frontend, backend, database) and how they interact.
3. Steps: a step-by-step guide from project setup to deployment. Each step has a clear title and a description of what needs to be done.
";

impl PromptFields for RoadmapRequest {
    const FIELDS: &'static [&'static str] =
        &["projectTitle", "projectDescription", "userSkills", "jobRole"];

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "projectTitle" => Some(&self.project_title),
            "projectDescription" => Some(&self.project_description),
            "userSkills" => Some(&self.user_skills),
            "jobRole" => Some(&self.job_role),
            _ => None,
        }
    }
}

pub struct ProjectRoadmapFlow {
    provider: Arc<dyn GenerationProvider>,
    model: String,
    template: PromptTemplate<RoadmapRequest>,
}

impl ProjectRoadmapFlow {
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
                "techStack": {
                    "type": "array",
                    "description": "Recommended languages, frameworks, libraries and tools.",
                    "items": { "type": "string" }
                },
                "architecture": {
                    "type": "string",
                    "description": "High-level overview of the architecture and how components connect."
                },
                "steps": {
                    "type": "array",
                    "description": "Step-by-step plan to build the project, in execution order.",
                    "items": {
                        "type": "object",
                        "properties": {
                            "title": { "type": "string", "description": "A short, clear title for the step." },
                            "description": { "type": "string", "description": "The tasks involved in this step." }
                        },
                        "required": ["title", "description"]
                    }
                }
            },
            "required": ["techStack", "architecture", "steps"]
        })
    }

    pub fn render_prompt(&self, request: &RoadmapRequest) -> String {
        self.template.render(request)
    }

    #[tracing::instrument(name = "Project roadmap flow.", skip_all, fields(title = %request.project_title))]
    pub async fn run(&self, request: &RoadmapRequest) -> Result<Roadmap, FlowError> {
        schema::check_request(request)?;

        let generation = GenerationRequest::structured(
            FLOW_NAME,
            &self.model,
            self.render_prompt(request),
            Self::output_schema(),
        );

        dispatch_structured::<Roadmap>(self.provider.as_ref(), generation).await
    }
}
