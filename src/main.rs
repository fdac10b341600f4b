use eventra::catalog::Catalog;
use eventra::configuration::get_configuration;
use eventra::providers::create_provider;
use eventra::startup::run;
use eventra::telemetry::{get_subscriber, init_subscriber};
use std::net::TcpListener;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let subscriber = get_subscriber("eventra".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let settings = get_configuration().expect("Failed to read configuration.");

    tracing::info!(
        provider = %settings.ai.provider,
        enabled = settings.ai.enabled,
        text_model = %settings.ai.text_model,
        "Configuring generation provider"
    );
    let provider = create_provider(&settings.ai)
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::Other, err))?;

    let address = format!("{}:{}", settings.app_host, settings.app_port);
    tracing::info!("Start server at {:?}", &address);
    let listener =
        TcpListener::bind(&address).unwrap_or_else(|_| panic!("failed to bind to {}", address));

    run(listener, settings, provider, Catalog::seeded()).await?.await
}
