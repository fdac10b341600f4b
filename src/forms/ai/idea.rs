use serde::{Deserialize, Serialize};
use serde_valid::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct IdeaRequest {
    /// Free-form list, technical or not (e.g. "React, Figma, Marketing")
    #[validate(pattern = r"\S")]
    #[validate(max_length = 500)]
    pub skills: String,
    #[validate(pattern = r"\S")]
    #[validate(max_length = 200)]
    pub job_role: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camel_case_payload_is_accepted() {
        let request: IdeaRequest =
            serde_json::from_str(r#"{"skills": "React, Figma", "jobRole": "Frontend Developer"}"#)
                .unwrap();
        assert_eq!(request.job_role, "Frontend Developer");
        assert!(request.validate().is_ok());
    }

    #[test]
    fn missing_job_role_does_not_deserialize() {
        assert!(serde_json::from_str::<IdeaRequest>(r#"{"skills": "React"}"#).is_err());
    }

    #[test]
    fn empty_job_role_is_invalid() {
        let request = IdeaRequest {
            skills: "React".to_string(),
            job_role: String::new(),
        };
        assert!(request.validate().is_err());
    }
}
