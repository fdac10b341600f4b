use crate::catalog::{self, Catalog};
use crate::forms::EventQuery;
use crate::helpers::JsonResponse;
use crate::models;
use actix_web::{get, web, Responder, Result};

#[tracing::instrument(name = "Get all events.", skip(catalog))]
#[get("")]
pub async fn list(
    query: web::Query<EventQuery>,
    catalog: web::Data<Catalog>,
) -> Result<impl Responder> {
    let events = catalog::event::fetch_all(catalog.get_ref(), query.q.as_deref()).await;

    Ok(JsonResponse::build().set_list(events).ok("OK"))
}

#[tracing::instrument(name = "Get event.", skip(catalog))]
#[get("/{id}")]
pub async fn item(
    path: web::Path<(String,)>,
    catalog: web::Data<Catalog>,
) -> Result<impl Responder> {
    let (id,) = path.into_inner();

    match catalog::event::fetch(catalog.get_ref(), &id).await {
        Some(event) => Ok(JsonResponse::build().set_id(id).set_item(event).ok("OK")),
        None => Err(JsonResponse::<models::Event>::build().not_found("Event not found")),
    }
}
