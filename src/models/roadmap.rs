use serde::{Deserialize, Serialize};
use serde_valid::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct RoadmapStep {
    #[validate(pattern = r"\S")]
    pub title: String,
    #[validate(pattern = r"\S")]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Roadmap {
    /// Recommended languages, frameworks and tools, in the provider's order
    pub tech_stack: Vec<String>,
    #[validate(pattern = r"\S")]
    pub architecture: String,
    /// Execution order
    #[validate(min_items = 1)]
    #[validate]
    pub steps: Vec<RoadmapStep>,
}
