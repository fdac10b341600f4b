use crate::flows::Flows;
use crate::forms::ai::ChatRequest;
use crate::helpers::JsonResponse;
use actix_web::{post, web, Responder, Result};

#[tracing::instrument(name = "AI chat.", skip_all)]
#[post("/chat")]
pub async fn chat_handler(
    form: web::Json<ChatRequest>,
    flows: web::Data<Flows>,
) -> Result<impl Responder> {
    let response = flows.chat.run(&form).await?;

    Ok(JsonResponse::build().set_item(response).ok("OK"))
}
