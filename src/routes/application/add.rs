use crate::catalog::{self, Catalog};
use crate::forms;
use crate::helpers::JsonResponse;
use crate::models;
use actix_web::{post, web, Responder, Result};
use serde_valid::Validate;

#[tracing::instrument(name = "Register for event.", skip(catalog))]
#[post("")]
pub async fn register(
    form: web::Json<forms::RegisterForm>,
    catalog: web::Data<Catalog>,
) -> Result<impl Responder> {
    if let Err(errors) = form.validate() {
        return Err(JsonResponse::<models::Application>::build().form_error(errors.to_string()));
    }

    let application = catalog::application::register(catalog.get_ref(), &form.event_id).await?;

    Ok(JsonResponse::build()
        .set_id(application.id.clone())
        .set_item(application)
        .created("Registered"))
}
