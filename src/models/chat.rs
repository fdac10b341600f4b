use serde::{Deserialize, Serialize};
use serde_valid::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ChatResponse {
    #[validate(pattern = r"\S")]
    pub answer: String,
}
