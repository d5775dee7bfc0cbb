//! # Client Configuration
//!
//! Where the backend lives and how chatty the client is.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     COURSELY_API_URL=https://api.coursely.uz                           │
//! │     COURSELY_ENV=development                                           │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/storefront/storefront.toml (Linux)                       │
//! │     ~/Library/Application Support/uz.coursely.storefront/ (macOS)      │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     http://localhost:8080, production                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # storefront.toml
//! [api]
//! base_url = "https://api.coursely.uz"
//! connect_timeout_secs = 10
//! request_timeout_secs = 30
//!
//! [runtime]
//! environment = "development"   # development | production
//! log_requests = true           # defaults to true in development
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::error::{ApiError, ApiResult};

// =============================================================================
// Environment
// =============================================================================

/// Deployment environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development: every request is logged at `info`.
    Development,
    #[default]
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Production => write!(f, "production"),
        }
    }
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "production" | "prod" => Ok(Environment::Production),
            _ => Err(format!("Unknown environment: {}", s)),
        }
    }
}

// =============================================================================
// Sections
// =============================================================================

/// Backend connection settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiSettings {
    /// Backend base URL. Endpoints are appended verbatim.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// TCP connect timeout in seconds.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,

    /// Whole-request timeout in seconds.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// User-Agent header.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_connect_timeout() -> u64 {
    10
}

fn default_request_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("coursely-storefront/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for ApiSettings {
    fn default() -> Self {
        ApiSettings {
            base_url: default_base_url(),
            connect_timeout_secs: default_connect_timeout(),
            request_timeout_secs: default_request_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

/// Runtime behaviour settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeSettings {
    #[serde(default)]
    pub environment: Environment,

    /// Explicit request-logging switch. Unset means "on in development".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_requests: Option<bool>,
}

// =============================================================================
// Client Config
// =============================================================================

/// Complete client configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiSettings,

    #[serde(default)]
    pub runtime: RuntimeSettings,
}

impl ClientConfig {
    /// Creates a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Default config pointed at `base_url`.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let mut config = Self::default();
        config.api.base_url = base_url.into();
        config
    }

    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (storefront.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> ApiResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading storefront config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load storefront config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Saves configuration to file.
    pub fn save(&self, config_path: Option<PathBuf>) -> ApiResult<()> {
        let path = config_path
            .or_else(Self::default_config_path)
            .ok_or_else(|| ApiError::ConfigSaveFailed("No config path available".into()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| ApiError::ConfigSaveFailed(e.to_string()))?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents).map_err(|e| ApiError::ConfigSaveFailed(e.to_string()))?;

        info!(?path, "Storefront config saved");
        Ok(())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ApiResult<()> {
        let url = url::Url::parse(self.base_url())?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ApiError::InvalidUrl(format!(
                "API URL must start with http:// or https://, got: {}",
                self.api.base_url
            )));
        }

        if self.api.connect_timeout_secs == 0 {
            return Err(ApiError::InvalidConfig(
                "connect_timeout_secs must be greater than 0".into(),
            ));
        }

        if self.api.request_timeout_secs == 0 {
            return Err(ApiError::InvalidConfig(
                "request_timeout_secs must be greater than 0".into(),
            ));
        }

        Ok(())
    }

    /// Applies environment variable overrides.
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Applies overrides from `lookup`, keyed by environment variable name.
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup("COURSELY_API_URL") {
            debug!(url = %url, "Overriding API URL from environment");
            self.api.base_url = url;
        }

        if let Some(env) = lookup("COURSELY_ENV") {
            match env.parse() {
                Ok(parsed) => self.runtime.environment = parsed,
                Err(_) => warn!(environment = %env, "Unknown environment in COURSELY_ENV"),
            }
        }

        if let Some(flag) = lookup("COURSELY_LOG_REQUESTS") {
            match flag.to_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => self.runtime.log_requests = Some(true),
                "0" | "false" | "no" | "off" => self.runtime.log_requests = Some(false),
                _ => warn!(value = %flag, "Ignoring COURSELY_LOG_REQUESTS"),
            }
        }

        if let Some(secs) = lookup("COURSELY_CONNECT_TIMEOUT_SECS") {
            if let Ok(secs) = secs.parse::<u64>() {
                self.api.connect_timeout_secs = secs;
            }
        }

        if let Some(secs) = lookup("COURSELY_REQUEST_TIMEOUT_SECS") {
            if let Ok(secs) = secs.parse::<u64>() {
                self.api.request_timeout_secs = secs;
            }
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("uz", "coursely", "storefront")
            .map(|dirs| dirs.config_dir().join("storefront.toml"))
    }

    // =========================================================================
    // Convenience Methods
    // =========================================================================

    /// Base URL without trailing slashes.
    pub fn base_url(&self) -> &str {
        self.api.base_url.trim_end_matches('/')
    }

    /// Returns true if every request should be logged at `info`.
    pub fn log_requests(&self) -> bool {
        self.runtime
            .log_requests
            .unwrap_or(self.runtime.environment == Environment::Development)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.api.connect_timeout_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.api.request_timeout_secs)
    }
}
