mod types;

pub use types::*;

use crate::Result;
use std::env;
use std::path::Path;
use tracing::{debug, warn};

const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Environment variables consulted for the API key, in priority order.
pub const API_KEY_VARS: [&str; 2] = ["API_KEY", "GEMINI_API_KEY"];

pub async fn load() -> Result<Config> {
    let explicit = env::var("CONFIG_PATH").ok();
    let config_path = explicit
        .clone()
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());

    let mut config = if explicit.is_none() && !Path::new(&config_path).exists() {
        debug!("No {} found, using built-in defaults", config_path);
        Config::default()
    } else {
        load_from(&config_path).await?
    };

    if let Some(key) = api_key_from_env() {
        debug!("Using API key from environment");
        config.llm.api_key = key;
    }

    if config.llm.api_key.is_empty() {
        warn!("No API key configured; generation requests will fail");
    }

    Ok(config)
}

pub async fn load_from(path: impl AsRef<Path>) -> Result<Config> {
    let path = path.as_ref();
    debug!("Loading configuration from: {}", path.display());

    let config_str = tokio::fs::read_to_string(path).await?;
    parse(&config_str)
}

pub fn parse(yaml: &str) -> Result<Config> {
    if yaml.trim().is_empty() {
        return Ok(Config::default());
    }
    Ok(serde_yaml::from_str(yaml)?)
}

fn api_key_from_env() -> Option<String> {
    API_KEY_VARS
        .iter()
        .filter_map(|name| env::var(name).ok())
        .find(|value| !value.is_empty())
}
