use eventra::catalog::Catalog;
use eventra::configuration::{AiSettings, Settings};
use eventra::providers::{DemoProvider, GenerationProvider};
use std::net::TcpListener;
use std::sync::Arc;

pub struct TestApp {
    pub address: String,
    pub catalog: Catalog,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }
}

pub fn test_settings() -> Settings {
    Settings {
        app_port: 0,
        app_host: "127.0.0.1".to_string(),
        ai: AiSettings::default(),
    }
}

// we have to run server in another thread
pub async fn spawn_app_with_provider(provider: Arc<dyn GenerationProvider>) -> TestApp {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    let catalog = Catalog::seeded();
    let server = eventra::startup::run(listener, test_settings(), provider, catalog.clone())
        .await
        .expect("Failed to bind address.");

    let _ = tokio::spawn(server);

    TestApp { address, catalog }
}

#[allow(dead_code)]
pub async fn spawn_app() -> TestApp {
    spawn_app_with_provider(Arc::new(DemoProvider)).await
}
