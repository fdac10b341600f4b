use super::{Catalog, CatalogError};
use crate::models::{self, ApplicationStatus};

pub async fn fetch_all(catalog: &Catalog) -> Vec<models::Application> {
    catalog.data.read().await.applications.clone()
}

/// Apply for an event. New applications start as `Pending`.
pub async fn register(
    catalog: &Catalog,
    event_id: &str,
) -> Result<models::Application, CatalogError> {
    let mut guard = catalog.data.write().await;
    let data = &mut *guard;

    let event = data
        .events
        .iter()
        .find(|event| event.id == event_id)
        .ok_or_else(|| CatalogError::NotFound(format!("Event {}", event_id)))?;

    if data.applications.iter().any(|app| app.event_id == event_id) {
        return Err(CatalogError::Conflict(format!(
            "Already registered for {}",
            event.name
        )));
    }

    let application = models::Application {
        id: uuid::Uuid::new_v4().to_string(),
        event_id: event.id.clone(),
        event_name: event.name.clone(),
        event_date: event.date,
        status: ApplicationStatus::Pending,
    };
    data.applications.push(application.clone());
    tracing::info!(application_id = %application.id, event_id, "Registered for event");

    Ok(application)
}

/// Unregister. Returns the removed application.
pub async fn delete(catalog: &Catalog, id: &str) -> Result<models::Application, CatalogError> {
    let mut data = catalog.data.write().await;
    let position = data
        .applications
        .iter()
        .position(|app| app.id == id)
        .ok_or_else(|| CatalogError::NotFound(format!("Application {}", id)))?;

    Ok(data.applications.remove(position))
}
