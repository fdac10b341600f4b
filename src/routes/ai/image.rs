use crate::flows::Flows;
use crate::forms::ai::ImageRequest;
use crate::helpers::JsonResponse;
use actix_web::{post, web, Responder, Result};

#[tracing::instrument(name = "AI event image.", skip_all)]
#[post("/image")]
pub async fn image_handler(
    form: web::Json<ImageRequest>,
    flows: web::Data<Flows>,
) -> Result<impl Responder> {
    let image = flows.image.run(&form).await?;

    Ok(JsonResponse::build().set_item(image).ok("OK"))
}
