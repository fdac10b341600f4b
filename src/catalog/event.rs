use super::{Catalog, CatalogError};
use crate::models;

pub async fn fetch_all(catalog: &Catalog, query: Option<&str>) -> Vec<models::Event> {
    let data = catalog.data.read().await;
    data.events
        .iter()
        .filter(|event| query.map_or(true, |q| event.matches(q)))
        .cloned()
        .collect()
}

pub async fn fetch(catalog: &Catalog, id: &str) -> Option<models::Event> {
    tracing::debug!("Fetch event {}", id);
    let data = catalog.data.read().await;
    data.events.iter().find(|event| event.id == id).cloned()
}

pub async fn insert(catalog: &Catalog, event: models::Event) -> models::Event {
    tracing::info!(event_id = %event.id, "Saving new event");
    let mut data = catalog.data.write().await;
    data.events.push(event.clone());
    event
}

/// Attach a banner image to an event.
pub async fn set_image(
    catalog: &Catalog,
    id: &str,
    image_url: String,
) -> Result<models::Event, CatalogError> {
    let mut data = catalog.data.write().await;
    let event = data
        .events
        .iter_mut()
        .find(|event| event.id == id)
        .ok_or_else(|| CatalogError::NotFound(format!("Event {}", id)))?;

    event.image_url = Some(image_url);
    Ok(event.clone())
}
