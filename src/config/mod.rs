//! Configuration management
//!
//! This module handles loading and parsing configuration for jotpad.
//! Configuration can be loaded from:
//! - config.yml file
//! - Environment variables (override file settings)
//!
//! Missing optional values are filled with sensible defaults.

use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Content store and derived view configuration
    #[serde(default)]
    pub content: ContentConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServerConfig {
    /// Host address to bind to
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,
    /// CORS allowed origin
    #[serde(default = "default_cors_origin")]
    pub cors_origin: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origin: default_cors_origin(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_cors_origin() -> String {
    "http://localhost:3000".to_string()
}

/// Content configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContentConfig {
    /// Start with the built-in sample categories and articles
    #[serde(default = "default_seed")]
    pub seed: bool,
    /// Number of articles in the "recent" view
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,
    /// Number of articles in the "related" view
    #[serde(default = "default_related_limit")]
    pub related_limit: usize,
    /// Fixed seed for related-article shuffling; entropy when absent
    #[serde(default)]
    pub related_seed: Option<u64>,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            recent_limit: default_recent_limit(),
            related_limit: default_related_limit(),
            related_seed: None,
        }
    }
}

fn default_seed() -> bool {
    true
}

fn default_recent_limit() -> usize {
    6
}

fn default_related_limit() -> usize {
    3
}

/// Error type for configuration parsing
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    FileRead {
        path: String,
        source: std::io::Error,
    },
    #[error("Failed to parse config file '{path}': {message}")]
    ParseError { path: String, message: String },
}

impl Config {
    /// Load configuration from file
    ///
    /// If the file doesn't exist, returns default configuration.
    /// If the file exists but is invalid YAML, returns an error with details.
    pub fn load(path: &std::path::Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.display().to_string(),
            source: e,
        })?;

        // Handle empty file - return defaults
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: format_yaml_error(&e),
        })?;

        Ok(config)
    }

    /// Load configuration from file with environment variable overrides
    ///
    /// Environment variables follow the pattern:
    /// - JOTPAD_SERVER_HOST
    /// - JOTPAD_SERVER_PORT
    /// - JOTPAD_SERVER_CORS_ORIGIN
    /// - JOTPAD_CONTENT_SEED
    /// - JOTPAD_CONTENT_RECENT_LIMIT
    /// - JOTPAD_CONTENT_RELATED_LIMIT
    /// - JOTPAD_CONTENT_RELATED_SEED
    pub fn load_with_env(path: &std::path::Path) -> anyhow::Result<Self> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment variable overrides to the configuration.
    ///
    /// Values that fail to parse are ignored.
    fn apply_env_overrides(&mut self) {
        if let Ok(host) = std::env::var("JOTPAD_SERVER_HOST") {
            self.server.host = host;
        }
        if let Some(port) = env_parse::<u16>("JOTPAD_SERVER_PORT") {
            self.server.port = port;
        }
        if let Ok(cors_origin) = std::env::var("JOTPAD_SERVER_CORS_ORIGIN") {
            self.server.cors_origin = cors_origin;
        }

        if let Some(seed) = env_parse::<bool>("JOTPAD_CONTENT_SEED") {
            self.content.seed = seed;
        }
        if let Some(limit) = env_parse::<usize>("JOTPAD_CONTENT_RECENT_LIMIT") {
            self.content.recent_limit = limit;
        }
        if let Some(limit) = env_parse::<usize>("JOTPAD_CONTENT_RELATED_LIMIT") {
            self.content.related_limit = limit;
        }
        if let Some(seed) = env_parse::<u64>("JOTPAD_CONTENT_RELATED_SEED") {
            self.content.related_seed = Some(seed);
        }
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok()?.trim().to_lowercase().parse().ok()
}

/// Format YAML parsing error with location and context
fn format_yaml_error(e: &serde_yaml::Error) -> String {
    if let Some(location) = e.location() {
        format!(
            "at line {}, column {}: {}",
            location.line(),
            location.column(),
            e
        )
    } else {
        e.to_string()
    }
}

// Shared mutex for config tests that modify environment variables.
#[cfg(test)]
static CONFIG_ENV_MUTEX: std::sync::Mutex<()> = std::sync::Mutex::new(());


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    fn valid_config_strategy() -> impl Strategy<Value = Config> {
        (
            "[a-z][a-z0-9.-]{0,20}",
            1u16..=65535,
            any::<bool>(),
            0usize..50,
            0usize..50,
            proptest::option::of(any::<u64>()),
        )
            .prop_map(|(host, port, seed, recent_limit, related_limit, related_seed)| Config {
                server: ServerConfig {
                    host,
                    port,
                    cors_origin: default_cors_origin(),
                },
                content: ContentConfig {
                    seed,
                    recent_limit,
                    related_limit,
                    related_seed,
                },
            })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Serializing a config to YAML and parsing it back yields the same config
        #[test]
        fn config_roundtrip(config in valid_config_strategy()) {
            let yaml = serde_yaml::to_string(&config).expect("serialize config");
            let parsed: Config = serde_yaml::from_str(&yaml).expect("parse config");
            prop_assert_eq!(parsed, config);
        }
    }
}
