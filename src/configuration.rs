use std::fmt;

#[derive(Debug, Clone, serde::Deserialize)]
pub struct Settings {
    pub app_port: u16,
    pub app_host: String,
    #[serde(default)]
    pub ai: AiSettings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AiProviderType {
    Gemini,
    Openai,
}

impl fmt::Display for AiProviderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gemini => write!(f, "gemini"),
            Self::Openai => write!(f, "openai"),
        }
    }
}

impl Default for AiProviderType {
    fn default() -> Self {
        Self::Gemini
    }
}

#[derive(Clone, serde::Deserialize)]
pub struct AiSettings {
    /// When disabled the server answers every flow with canned demo output
    #[serde(default = "AiSettings::default_enabled")]
    pub enabled: bool,
    #[serde(default)]
    pub provider: AiProviderType,
    /// Override for the provider base URL (proxies, compatible gateways, tests)
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default = "AiSettings::default_text_model")]
    pub text_model: String,
    #[serde(default = "AiSettings::default_image_model")]
    pub image_model: String,
    #[serde(default = "AiSettings::default_timeout_secs")]
    pub timeout_secs: u64,
    /// Loaded from the environment only, see `AiSettings::api_key_from_env`
    #[serde(skip)]
    pub api_key: Option<String>,
}

impl AiSettings {
    const fn default_enabled() -> bool {
        true
    }

    fn default_text_model() -> String {
        "gemini-2.0-flash".to_string()
    }

    fn default_image_model() -> String {
        "gemini-2.0-flash-preview-image-generation".to_string()
    }

    const fn default_timeout_secs() -> u64 {
        60
    }

    // EVENTRA_AI_API_KEY wins over the provider specific variables
    pub fn api_key_from_env(provider: AiProviderType) -> Option<String> {
        let fallbacks: &[&str] = match provider {
            AiProviderType::Gemini => &["GEMINI_API_KEY", "GOOGLE_API_KEY"],
            AiProviderType::Openai => &["OPENAI_API_KEY"],
        };

        std::iter::once("EVENTRA_AI_API_KEY")
            .chain(fallbacks.iter().copied())
            .filter_map(|name| std::env::var(name).ok())
            .find(|value| !value.trim().is_empty())
    }
}

impl Default for AiSettings {
    fn default() -> Self {
        Self {
            enabled: Self::default_enabled(),
            provider: AiProviderType::default(),
            endpoint: None,
            text_model: Self::default_text_model(),
            image_model: Self::default_image_model(),
            timeout_secs: Self::default_timeout_secs(),
            api_key: None,
        }
    }
}

impl fmt::Debug for AiSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AiSettings")
            .field("enabled", &self.enabled)
            .field("provider", &self.provider)
            .field("endpoint", &self.endpoint)
            .field("text_model", &self.text_model)
            .field("image_model", &self.image_model)
            .field("timeout_secs", &self.timeout_secs)
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .finish()
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // configuration.yaml in the working directory, then EVENTRA__AI__TEXT_MODEL style overrides
    let settings = config::Config::builder()
        .set_default("app_host", "127.0.0.1")?
        .set_default("app_port", 8000)?
        .add_source(config::File::with_name("configuration").required(false))
        .add_source(config::Environment::with_prefix("EVENTRA").separator("__"))
        .build()?;

    let mut config: Settings = settings.try_deserialize()?;
    config.ai.api_key = AiSettings::api_key_from_env(config.ai.provider);

    Ok(config)
}
