use std::fs;
use std::path::Path;

use serde::Deserialize;

use campus_router_core::Landmark;

use crate::error::CliError;

const DEFAULT_ENDPOINT: &str = "https://api.mapbox.com";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_RETRIES: u32 = 3;

/// Runtime configuration: routing provider settings plus the ordered
/// landmark table. The landmark order fixes the node ids.
#[derive(Debug, Clone, Deserialize)]
pub struct RouterConfig {
    #[serde(default)]
    pub mapbox: MapboxConfig,
    pub landmarks: Vec<Landmark>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MapboxConfig {
    pub endpoint: String,
    pub access_token: Option<String>,
    pub timeout_secs: u64,
    pub retries: u32,
}

impl Default for MapboxConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            access_token: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            retries: DEFAULT_RETRIES,
        }
    }
}

pub fn load_config(path: &Path) -> Result<RouterConfig, CliError> {
    let raw = fs::read_to_string(path).map_err(|e| {
        CliError::Config(format!("cannot read config file {}: {e}", path.display()))
    })?;
    let config: RouterConfig = toml::from_str(&raw)?;
    if config.landmarks.is_empty() {
        return Err(CliError::Config(format!(
            "config file {} lists no landmarks",
            path.display()
        )));
    }
    Ok(config)
}
