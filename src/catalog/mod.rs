//! In-memory event catalog.
//!
//! Events and the current user's applications live for the lifetime of the
//! process. The catalog is cheap to clone and shared between workers, every
//! read or write goes through one async `RwLock`.

use crate::models::{Application, ApplicationStatus, Event};
use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use chrono::NaiveDate;
use serde_json::json;
use std::sync::Arc;
use tokio::sync::RwLock;

pub mod application;
pub mod event;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("{0} not found")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
}

impl ResponseError for CatalogError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        HttpResponse::build(status).json(json!({
            "status": "Error",
            "code": status.as_u16(),
            "message": self.to_string(),
        }))
    }
}

#[derive(Debug, Default)]
pub(crate) struct CatalogData {
    pub(crate) events: Vec<Event>,
    pub(crate) applications: Vec<Application>,
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub(crate) data: Arc<RwLock<CatalogData>>,
}

impl Catalog {
    pub fn new(events: Vec<Event>, applications: Vec<Application>) -> Self {
        Self {
            data: Arc::new(RwLock::new(CatalogData {
                events,
                applications,
            })),
        }
    }

    /// Demo data shown on a fresh dashboard.
    pub fn seeded() -> Self {
        let events = vec![
            seed_event(
                "1",
                "Tech Conference 2024",
                (2024, 10, 15),
                "Bengaluru, India",
                "Two days of talks on cloud, AI and developer tooling from engineers across India.",
                &["Tech", "Networking", "AI"],
            ),
            seed_event(
                "2",
                "Startup Pitch Night",
                (2024, 9, 22),
                "Mumbai, India",
                "Early stage founders pitch to investors and mentors, followed by open networking.",
                &["Startups", "Business", "Networking"],
            ),
            seed_event(
                "3",
                "Design Workshop",
                (2024, 11, 5),
                "Pune, India",
                "Hands-on session on design systems, prototyping and usability testing.",
                &["Design", "UI/UX", "Workshop"],
            ),
            seed_event(
                "4",
                "Cloud Native Meetup",
                (2024, 12, 7),
                "Hyderabad, India",
                "Community meetup on Kubernetes, observability and running services in production.",
                &["Tech", "Cloud", "DevOps"],
            ),
            seed_event(
                "5",
                "Literary Fest",
                (2024, 10, 28),
                "Jaipur, India",
                "Authors, poets and readers meet for readings, panels and book launches.",
                &["Literature", "Culture"],
            ),
            seed_event(
                "6",
                "Hackathon 2024",
                (2024, 11, 15),
                "New Delhi, India",
                "48 hours to build something new. Teams of up to four, mentors on site.",
                &["Tech", "Hackathon", "Coding"],
            ),
        ];

        let applications = vec![
            seed_application("1", &events[0], ApplicationStatus::Approved),
            seed_application("2", &events[1], ApplicationStatus::Pending),
            seed_application("3", &events[2], ApplicationStatus::Rejected),
            seed_application("4", &events[4], ApplicationStatus::Approved),
            seed_application("5", &events[5], ApplicationStatus::Pending),
        ];

        Self::new(events, applications)
    }
}

fn seed_event(
    id: &str,
    name: &str,
    (year, month, day): (i32, u32, u32),
    location: &str,
    description: &str,
    tags: &[&str],
) -> Event {
    Event {
        id: id.to_string(),
        name: name.to_string(),
        date: NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default(),
        location: location.to_string(),
        description: description.to_string(),
        image_url: None,
        tags: tags.iter().map(|tag| tag.to_string()).collect(),
    }
}

fn seed_application(id: &str, event: &Event, status: ApplicationStatus) -> Application {
    Application {
        id: id.to_string(),
        event_id: event.id.clone(),
        event_name: event.name.clone(),
        event_date: event.date,
        status,
    }
}
