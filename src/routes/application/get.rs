use crate::catalog::{self, Catalog};
use crate::helpers::JsonResponse;
use actix_web::{get, web, Responder, Result};

#[tracing::instrument(name = "Get all applications.", skip_all)]
#[get("")]
pub async fn list(catalog: web::Data<Catalog>) -> Result<impl Responder> {
    let applications = catalog::application::fetch_all(catalog.get_ref()).await;

    Ok(JsonResponse::build().set_list(applications).ok("OK"))
}
