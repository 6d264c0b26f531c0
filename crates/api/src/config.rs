use serde::Deserialize;
use std::sync::OnceLock;

static CONFIG: OnceLock<ApiConfig> = OnceLock::new();

/// `config.toml` from the workspace root, embedded so the web build has it.
const EMBEDDED_CONFIG: &str = include_str!("../../../config.toml");

pub const DEFAULT_BASE_URL: &str = "http://localhost:8081/syos_web_war_exploded";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings for the backend.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    api: ApiConfig,
}

/// Parse config text, then apply `override_url` and sanity checks.
///
/// Invalid values are replaced by their defaults with a warning; this
/// never fails.
pub fn parse_config(contents: &str, override_url: Option<&str>) -> ApiConfig {
    let mut config = match toml::from_str::<ConfigFile>(contents) {
        Ok(file) => file.api,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to parse config.toml, using defaults");
            ApiConfig::default()
        }
    };

    if let Some(url) = override_url.map(str::trim).filter(|u| !u.is_empty()) {
        config.base_url = url.to_string();
    }

    let trimmed = config.base_url.trim().trim_end_matches('/');
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        config.base_url = trimmed.to_string();
    } else {
        tracing::warn!(base_url = %config.base_url, "Invalid API base URL, using default");
        config.base_url = default_base_url();
    }

    if config.timeout_secs == 0 {
        tracing::warn!("API timeout of 0 seconds is not allowed, using default");
        config.timeout_secs = DEFAULT_TIMEOUT_SECS;
    }

    config
}

/// The process-wide config, loaded on first use.
pub fn api_config() -> &'static ApiConfig {
    CONFIG.get_or_init(|| {
        let config = parse_config(EMBEDDED_CONFIG, option_env!("SYOS_API_URL"));
        tracing::info!(base_url = %config.base_url, "API configuration loaded");
        config
    })
}
