use crate::catalog::{self, Catalog};
use crate::forms;
use crate::helpers::JsonResponse;
use crate::models;
use actix_web::{post, web, Responder, Result};
use serde_valid::Validate;

#[tracing::instrument(name = "Add event.", skip_all)]
#[post("")]
pub async fn add(
    form: web::Json<forms::EventForm>,
    catalog: web::Data<Catalog>,
) -> Result<impl Responder> {
    if let Err(errors) = form.validate() {
        return Err(JsonResponse::<models::Event>::build().form_error(errors.to_string()));
    }

    let event: models::Event = form.into_inner().into();
    let event = catalog::event::insert(catalog.get_ref(), event).await;

    Ok(JsonResponse::build()
        .set_id(event.id.clone())
        .set_item(event)
        .created("Event created"))
}
