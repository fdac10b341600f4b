use serde::{Deserialize, Serialize};
use serde_valid::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ProjectIdea {
    /// Short, catchy title
    #[validate(pattern = r"\S")]
    pub title: String,
    /// One or two sentences
    #[validate(pattern = r"\S")]
    pub description: String,
}

/// Structured output of the idea flow. Order is the provider's relevance order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProjectIdeas {
    #[validate(min_items = 1)]
    #[validate]
    pub project_ideas: Vec<ProjectIdea>,
}
