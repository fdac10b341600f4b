use serde::{Deserialize, Serialize};
use serde_valid::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapRequest {
    #[validate(pattern = r"\S")]
    #[validate(max_length = 200)]
    pub project_title: String,
    #[validate(pattern = r"\S")]
    #[validate(max_length = 5000)]
    pub project_description: String,
    #[validate(pattern = r"\S")]
    #[validate(max_length = 500)]
    pub user_skills: String,
    #[validate(pattern = r"\S")]
    #[validate(max_length = 200)]
    pub job_role: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlong_title_is_invalid() {
        let request = RoadmapRequest {
            project_title: "x".repeat(201),
            project_description: "A site".to_string(),
            user_skills: "HTML".to_string(),
            job_role: "Web Developer".to_string(),
        };
        assert!(request.validate().is_err());
    }
}
