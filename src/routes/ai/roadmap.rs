use crate::flows::Flows;
use crate::forms::ai::RoadmapRequest;
use crate::helpers::JsonResponse;
use actix_web::{post, web, Responder, Result};

#[tracing::instrument(name = "AI project roadmap.", skip_all)]
#[post("/roadmap")]
pub async fn roadmap_handler(
    form: web::Json<RoadmapRequest>,
    flows: web::Data<Flows>,
) -> Result<impl Responder> {
    let roadmap = flows.roadmap.run(&form).await?;

    Ok(JsonResponse::build().set_item(roadmap).ok("OK"))
}
