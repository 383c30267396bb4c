use serde::{Deserialize, Serialize};
use std::fs;
use std::sync::OnceLock;
use anyhow::{Context, Result};
use regex::Regex;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub system_config: SystemConfig,
    #[serde(default)]
    pub translate_config: TranslateConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Widget sessions untouched for this long are dropped
    #[serde(default = "default_session_idle_secs")]
    pub session_idle_secs: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    12393
}

fn default_session_idle_secs() -> u64 {
    30 * 60
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslateConfig {
    #[serde(default = "default_provider")]
    pub provider: String,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

fn default_provider() -> String {
    "libretranslate".to_string()
}

fn default_endpoint() -> String {
    "https://libretranslate.com/translate".to_string()
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            session_idle_secs: default_session_idle_secs(),
        }
    }
}

impl Default for TranslateConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            endpoint: default_endpoint(),
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file: {}", path))?;
        Self::parse(&content, path)
    }

    /// Parse configuration text; `path` only selects the format by extension.
    pub fn parse(content: &str, path: &str) -> Result<Self> {
        let content = substitute_env_vars(content);

        let path_lower = path.to_lowercase();
        if path_lower.ends_with(".json") {
            Ok(serde_json::from_str(&content)?)
        } else {
            Ok(serde_yaml::from_str(&content)?)
        }
    }
}

/// Replace `${VAR_NAME}` with the environment value, leaving unknown
/// variables as written.
fn substitute_env_vars(content: &str) -> String {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    let pattern = PATTERN.get_or_init(|| Regex::new(r"\$\{(\w+)\}").unwrap());
    pattern
        .replace_all(content, |caps: &regex::Captures| {
            std::env::var(&caps[1]).unwrap_or_else(|_| caps[0].to_string())
        })
        .into_owned()
}
