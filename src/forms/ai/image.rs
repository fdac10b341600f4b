use serde::{Deserialize, Serialize};
use serde_valid::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ImageRequest {
    #[validate(pattern = r"\S")]
    #[validate(max_length = 200)]
    pub event_name: String,
    #[validate(pattern = r"\S")]
    #[validate(max_length = 5000)]
    pub event_description: String,
}
