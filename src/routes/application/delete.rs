use crate::catalog::{self, Catalog};
use crate::helpers::JsonResponse;
use crate::models;
use actix_web::{delete, web, Responder, Result};

#[tracing::instrument(name = "Unregister from event.", skip(catalog))]
#[delete("/{id}")]
pub async fn item(
    path: web::Path<(String,)>,
    catalog: web::Data<Catalog>,
) -> Result<impl Responder> {
    let (id,) = path.into_inner();
    let application = catalog::application::delete(catalog.get_ref(), &id).await?;

    Ok(JsonResponse::<models::Application>::build()
        .set_id(application.id)
        .ok("Unregistered"))
}
