use crate::catalog::Catalog;
use crate::configuration::Settings;
use crate::flows::Flows;
use crate::providers::GenerationProvider;
use crate::routes;
use actix_cors::Cors;
use actix_web::{dev::Server, error, http, web, App, HttpResponse, HttpServer};
use serde_json::json;
use std::net::TcpListener;
use std::sync::Arc;
use tracing_actix_web::TracingLogger;

pub async fn run(
    listener: TcpListener,
    settings: Settings,
    provider: Arc<dyn GenerationProvider>,
    catalog: Catalog,
) -> Result<Server, std::io::Error> {
    // a broken prompt template stops the server before it accepts traffic
    let flows = Flows::new(provider, &settings.ai)
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::InvalidData, err))?;
    let flows = web::Data::new(flows);
    let catalog = web::Data::new(catalog);

    let json_config = web::JsonConfig::default().error_handler(|err, _req| {
        let message = match &err {
            error::JsonPayloadError::Deserialize(err) => format!(
                "Invalid JSON at line {}, column {}: {}",
                err.line(),
                err.column(),
                err
            ),
            err => err.to_string(),
        };
        let response = HttpResponse::build(http::StatusCode::BAD_REQUEST).json(json!({
            "status": "Error",
            "code": 400,
            "kind": "INVALID_REQUEST",
            "message": message,
        }));
        error::InternalError::from_response(err, response).into()
    });

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(Cors::permissive())
            .service(web::scope("/health_check").service(routes::health_check))
            .service(
                web::scope("/ai")
                    .service(routes::ai::chat_handler)
                    .service(routes::ai::ideas_handler)
                    .service(routes::ai::roadmap_handler)
                    .service(routes::ai::image_handler),
            )
            .service(
                web::scope("/events")
                    .service(routes::event::get::list)
                    .service(routes::event::add::add)
                    .service(routes::event::get::item)
                    .service(routes::event::banner::generate),
            )
            .service(
                web::scope("/applications")
                    .service(routes::application::get::list)
                    .service(routes::application::add::register)
                    .service(routes::application::delete::item),
            )
            .app_data(json_config.clone())
            .app_data(flows.clone())
            .app_data(catalog.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
