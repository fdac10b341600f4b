use crate::flows::Flows;
use crate::forms::ai::IdeaRequest;
use crate::helpers::JsonResponse;
use actix_web::{post, web, Responder, Result};

#[tracing::instrument(name = "AI project ideas.", skip_all)]
#[post("/ideas")]
pub async fn ideas_handler(
    form: web::Json<IdeaRequest>,
    flows: web::Data<Flows>,
) -> Result<impl Responder> {
    let ideas = flows.ideas.run(&form).await?;

    Ok(JsonResponse::build().set_list(ideas).ok("OK"))
}
