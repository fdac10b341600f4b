use crate::models;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_valid::Validate;

/// Payload of the "Create Event" page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EventForm {
    #[validate(pattern = r"\S")]
    #[validate(max_length = 200)]
    pub name: String,
    pub date: NaiveDate,
    #[validate(pattern = r"\S")]
    #[validate(max_length = 200)]
    pub location: String,
    #[validate(pattern = r"\S")]
    #[validate(max_length = 5000)]
    pub description: String,
    /// Comma separated, e.g. "Tech, Networking, AI"
    #[validate(max_length = 500)]
    pub tags: Option<String>,
    #[validate(max_length = 2048)]
    pub image_url: Option<String>,
}

/// `GET /events?q=...`
#[derive(Debug, Default, Deserialize)]
pub struct EventQuery {
    pub q: Option<String>,
}

impl EventForm {
    pub fn tag_list(&self) -> Vec<String> {
        self.tags
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(str::to_string)
            .collect()
    }
}

impl From<EventForm> for models::Event {
    fn from(form: EventForm) -> Self {
        let tags = form.tag_list();
        models::Event {
            id: uuid::Uuid::new_v4().to_string(),
            name: form.name.trim().to_string(),
            date: form.date,
            location: form.location.trim().to_string(),
            description: form.description.trim().to_string(),
            image_url: form.image_url.filter(|url| !url.trim().is_empty()),
            tags,
        }
    }
}
