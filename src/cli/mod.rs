//! `eventra` terminal client.
//!
//! Runs the flows in-process against the configured provider, the same way
//! the HTTP server does, without going through HTTP.

use crate::configuration::get_configuration;
use crate::flows::{FlowError, Flows, TemplateError};
use crate::providers::{create_provider, ProviderError};
use async_trait::async_trait;

pub mod commands;
pub mod progress;
pub mod render;

pub use commands::{ChatCommand, IdeasCommand, ImageCommand, RoadmapCommand};

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("{0}")]
    Provider(#[from] ProviderError),
    #[error("{0}")]
    Template(#[from] TemplateError),
    #[error("{} ({})", .0, .0.kind())]
    Flow(#[from] FlowError),
    #[error("Prompt error: {0}")]
    Dialog(#[from] dialoguer::Error),
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Image error: {0}")]
    Image(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[async_trait]
pub trait CallableTrait {
    async fn call(&self, flows: &Flows) -> Result<(), CliError>;
}

/// Flows wired to the provider named in `configuration.yaml` / `EVENTRA__*`.
pub fn load_flows() -> Result<Flows, CliError> {
    let settings = get_configuration()?;
    let provider = create_provider(&settings.ai)?;
    Ok(Flows::new(provider, &settings.ai)?)
}
