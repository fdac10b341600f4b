use serde::{Deserialize, Serialize};
use serde_valid::Validate;

/// Register the current user for an event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterForm {
    #[validate(pattern = r"\S")]
    #[validate(max_length = 64)]
    pub event_id: String,
}
