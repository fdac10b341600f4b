use serde::{Deserialize, Serialize};
use serde_valid::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ImageResponse {
    /// `data:` URI or http(s) URL
    #[validate(pattern = r"^(data:[^,\s]+,\S+|https?://\S+)$")]
    pub image_url: String,
}
