//! Configuration loading and constants.
//!
//! Loads application configuration from a TOML file and defines constants for
//! HTTP cache headers, password rules, placeholder upstream defaults, logging,
//! and default paths. `AppConfig` is the root configuration struct; every
//! section is optional and falls back to the defaults below.

use std::path::{Path, PathBuf};

use const_format::formatcp;
use serde::Deserialize;

// =============================================================================
// HTTP Response Cache Control
// =============================================================================

/// Index payload is static for the lifetime of the process
pub const HTTP_CACHE_INDEX_MAX_AGE: u32 = 60;

pub const CACHE_CONTROL_INDEX: &str =
    formatcp!("public, max-age={}", HTTP_CACHE_INDEX_MAX_AGE);

/// Generated credentials and random placeholders must never be served from a cache
pub const CACHE_CONTROL_NO_STORE: &str = "no-store";

// =============================================================================
// Password Constants
// =============================================================================

/// Minimum accepted password length (inclusive)
pub const MIN_PASSWORD_LENGTH: i64 = 8;

/// Length used when the request does not name one
pub const DEFAULT_PASSWORD_LENGTH: i64 = 8;

/// Longest character password generated unless configured otherwise
pub const DEFAULT_MAX_PASSWORD_LENGTH: usize = 4096;

/// Number of dictionary words joined into a passphrase
pub const PASSPHRASE_WORD_COUNT: usize = 3;

// =============================================================================
// Placeholder Upstream Constants
// =============================================================================

/// Default upstream serving placeholder posts
pub const DEFAULT_PLACEHOLDER_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Highest post id requested from the upstream (ids start at 1)
pub const DEFAULT_MAX_POST_ID: u32 = 10;

// =============================================================================
// Default Paths and Strings
// =============================================================================

/// Default configuration file path
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "keysmith=debug,tower_http=info";

/// Default bind address
pub const DEFAULT_HTTP_HOST: &str = "127.0.0.1";
pub const DEFAULT_HTTP_PORT: u16 = 8000;

pub const DEFAULT_WELCOME_MESSAGE: &str =
    "Welcome to Keysmith! Generate passwords and fetch placeholder content.";

/// User-Agent sent on outbound requests
pub const DEFAULT_USER_AGENT: &str = formatcp!("keysmith/{}", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub http: HttpServerConfig,
    /// Index payload settings
    #[serde(default)]
    pub site: SiteConfig,
    /// Upstream used by the placeholder route
    #[serde(default)]
    pub placeholders: PlaceholderConfig,
    /// Character password limits
    #[serde(default)]
    pub password: PasswordConfig,
    #[serde(default)]
    pub passphrase: PassphraseConfig,
    /// Outbound HTTP client settings
    #[serde(default)]
    pub outbound: OutboundConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpServerConfig {
    #[serde(default = "HttpServerConfig::default_host")]
    pub host: String,
    #[serde(default = "HttpServerConfig::default_port")]
    pub port: u16,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
        }
    }
}

impl HttpServerConfig {
    fn default_host() -> String {
        DEFAULT_HTTP_HOST.to_string()
    }

    fn default_port() -> u16 {
        DEFAULT_HTTP_PORT
    }

    /// `host:port` as advertised on the index route when no public URL is set
    pub fn authority(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    #[serde(default = "SiteConfig::default_welcome_message")]
    pub welcome_message: String,
    /// Public base URL shown on the index route. Defaults to the bind address.
    pub base_url: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            welcome_message: Self::default_welcome_message(),
            base_url: None,
        }
    }
}

impl SiteConfig {
    fn default_welcome_message() -> String {
        DEFAULT_WELCOME_MESSAGE.to_string()
    }
}

/// Placeholder upstream configuration
#[derive(Debug, Clone, Deserialize)]
pub struct PlaceholderConfig {
    /// Base URL; posts are fetched from `{base_url}/posts/{id}`
    #[serde(default = "PlaceholderConfig::default_base_url")]
    pub base_url: String,
    /// Post ids are drawn uniformly from `1..=max_post_id`
    #[serde(default = "PlaceholderConfig::default_max_post_id")]
    pub max_post_id: u32,
}

impl Default for PlaceholderConfig {
    fn default() -> Self {
        Self {
            base_url: Self::default_base_url(),
            max_post_id: Self::default_max_post_id(),
        }
    }
}

impl PlaceholderConfig {
    fn default_base_url() -> String {
        DEFAULT_PLACEHOLDER_BASE_URL.to_string()
    }

    fn default_max_post_id() -> u32 {
        DEFAULT_MAX_POST_ID
    }

    /// URL of a single post
    pub fn post_url(&self, id: u32) -> String {
        format!("{}/posts/{}", self.base_url.trim_end_matches('/'), id)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PasswordConfig {
    /// Upper bound on `length` for character passwords
    #[serde(default = "PasswordConfig::default_max_length")]
    pub max_length: usize,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            max_length: Self::default_max_length(),
        }
    }
}

impl PasswordConfig {
    fn default_max_length() -> usize {
        DEFAULT_MAX_PASSWORD_LENGTH
    }
}

/// Passphrase dictionary configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PassphraseConfig {
    /// Newline-separated word list. The built-in list is used when unset.
    pub word_list: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutboundConfig {
    /// Whole-request timeout in seconds. Unset means no timeout.
    pub timeout_seconds: Option<u64>,
    #[serde(default = "OutboundConfig::default_user_agent")]
    pub user_agent: String,
}

impl Default for OutboundConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: None,
            user_agent: Self::default_user_agent(),
        }
    }
}

impl OutboundConfig {
    fn default_user_agent() -> String {
        DEFAULT_USER_AGENT.to_string()
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable
    #[default]
    Text,
    /// Structured, one JSON object per line
    Json,
}

/// Logging configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub format: LogFormat,
}

impl AppConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.placeholders.max_post_id == 0 {
            return Err(ConfigError::Validation(
                "placeholders.max_post_id must be at least 1".to_string(),
            ));
        }

        let url = reqwest::Url::parse(&self.placeholders.base_url).map_err(|e| {
            ConfigError::Validation(format!(
                "placeholders.base_url '{}' is not a valid URL: {}",
                self.placeholders.base_url, e
            ))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::Validation(format!(
                "placeholders.base_url must use http or https, got '{}'",
                url.scheme()
            )));
        }

        if self.password.max_length < MIN_PASSWORD_LENGTH as usize {
            return Err(ConfigError::Validation(format!(
                "password.max_length must be at least {}",
                MIN_PASSWORD_LENGTH
            )));
        }

        if self.outbound.timeout_seconds == Some(0) {
            return Err(ConfigError::Validation(
                "outbound.timeout_seconds must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Base URL advertised on the index route
    pub fn public_base_url(&self) -> String {
        self.site
            .base_url
            .clone()
            .unwrap_or_else(|| self.http.authority())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Configuration error: {0}")]
    Validation(String),
}
