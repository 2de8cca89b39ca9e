//! Runtime configuration
//!
//! Configuration is environment-derived and loaded once at startup. An
//! optional KEY=VALUE overlay file (dotenv style, via `--config`) supplies
//! defaults; process environment variables always win. The resulting
//! `Config` is immutable for the process lifetime.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{Result, SwitchboardError};

/// Environment variable names
pub const ENV_API_KEY: &str = "SWITCHBOARD_API_KEY";
pub const ENV_MODEL: &str = "SWITCHBOARD_MODEL";
pub const ENV_BASE_URL: &str = "SWITCHBOARD_BASE_URL";
pub const ENV_TEMPERATURE: &str = "SWITCHBOARD_TEMPERATURE";
pub const ENV_MAX_TOKENS: &str = "SWITCHBOARD_MAX_TOKENS";
pub const ENV_VERBOSE: &str = "SWITCHBOARD_VERBOSE";

/// Default model identifier
pub const DEFAULT_MODEL: &str = "grok-4-0709";

/// Default API base URL (OpenAI-compatible endpoint)
pub const DEFAULT_BASE_URL: &str = "https://api.x.ai/v1";

/// Default sampling temperature
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Default response token limit
pub const DEFAULT_MAX_TOKENS: u32 = 1000;

/// Process configuration, resolved once at startup
#[derive(Debug, Clone, Serialize)]
pub struct Config {
    /// API key for the model endpoint; absence is only an error once a
    /// chat session is started
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
            verbose: false,
        }
    }
}

impl Config {
    /// Load configuration from the environment, with an optional KEY=VALUE
    /// overlay file
    pub fn load(overlay: Option<&PathBuf>) -> Result<Self> {
        let file_vars = match overlay {
            Some(path) => {
                let vars = parse_env_file(path)?;
                log::info!("Loaded config overlay from: {}", path.display());
                vars
            }
            None => HashMap::new(),
        };

        Self::resolve(|key| std::env::var(key).ok().or_else(|| file_vars.get(key).cloned()))
    }

    /// Resolve configuration through a variable lookup
    fn resolve(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let temperature = match lookup(ENV_TEMPERATURE) {
            Some(raw) => raw
                .parse::<f32>()
                .map_err(|_| SwitchboardError::Config(format!("{} is not a number: '{}'", ENV_TEMPERATURE, raw)))?,
            None => defaults.temperature,
        };

        let max_tokens = match lookup(ENV_MAX_TOKENS) {
            Some(raw) => raw
                .parse::<u32>()
                .map_err(|_| SwitchboardError::Config(format!("{} is not an integer: '{}'", ENV_MAX_TOKENS, raw)))?,
            None => defaults.max_tokens,
        };

        let verbose = lookup(ENV_VERBOSE)
            .map(|raw| matches!(raw.to_lowercase().as_str(), "true" | "1" | "yes"))
            .unwrap_or(false);

        Ok(Self {
            api_key: lookup(ENV_API_KEY).filter(|k| !k.is_empty()),
            model: lookup(ENV_MODEL).unwrap_or(defaults.model),
            base_url: lookup(ENV_BASE_URL).unwrap_or(defaults.base_url),
            temperature,
            max_tokens,
            verbose,
        })
    }

    /// API key masked for display
    pub fn masked_key(&self) -> String {
        match &self.api_key {
            Some(key) => {
                let prefix: String = key.chars().take(8).collect();
                format!("{}...{}", prefix, "*".repeat(10))
            }
            None => "Not set".to_string(),
        }
    }

    /// Whether an API key is available
    pub fn api_key_set(&self) -> bool {
        self.api_key.is_some()
    }
}

/// Parse a dotenv-style KEY=VALUE file
fn parse_env_file(path: &Path) -> Result<HashMap<String, String>> {
    let content = fs::read_to_string(path)
        .map_err(|e| SwitchboardError::Config(format!("Failed to read {}: {}", path.display(), e)))?;

    let mut vars = HashMap::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            let value = value.trim().trim_matches('"').trim_matches('\'');
            vars.insert(key.trim().to_string(), value.to_string());
        }
    }
    Ok(vars)
}
