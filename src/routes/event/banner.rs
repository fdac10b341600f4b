use crate::catalog::{self, Catalog};
use crate::flows::Flows;
use crate::forms::ai::ImageRequest;
use crate::helpers::JsonResponse;
use crate::models;
use actix_web::{post, web, Responder, Result};

/// Generate a poster for an existing event and keep it as the event image.
#[tracing::instrument(name = "Generate event banner.", skip(catalog, flows))]
#[post("/{id}/banner")]
pub async fn generate(
    path: web::Path<(String,)>,
    catalog: web::Data<Catalog>,
    flows: web::Data<Flows>,
) -> Result<impl Responder> {
    let (id,) = path.into_inner();

    let event = catalog::event::fetch(catalog.get_ref(), &id)
        .await
        .ok_or_else(|| JsonResponse::<models::Event>::build().not_found("Event not found"))?;

    let request = ImageRequest {
        event_name: event.name,
        event_description: event.description,
    };
    let image = flows.image.run(&request).await?;

    let event = catalog::event::set_image(catalog.get_ref(), &id, image.image_url).await?;

    Ok(JsonResponse::build().set_id(id).set_item(event).ok("Banner generated"))
}
