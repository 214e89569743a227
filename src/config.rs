//! Top-level application configuration.
//!
//! Configuration is stored in `config.yaml` under the platform config
//! directory (or wherever `LOOKAHEAD_CONFIG` points) and includes:
//! - Widget settings (placeholder, suggestion limit, debounce delay)
//! - Endpoints for the lookup API and the fallback search page
//! - Cache sizing and request timeout
//! - An optional GitHub token

use std::env;
use std::fmt;
use std::fs;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{LookaheadError, Result};
use crate::types::{
    DEFAULT_API_URL, DEFAULT_DELAY_MS, DEFAULT_LIMIT, DEFAULT_PLACEHOLDER, DEFAULT_SEARCH_URL_BASE,
};

/// Environment variable overriding the config file location.
pub const CONFIG_PATH_ENV: &str = "LOOKAHEAD_CONFIG";

/// Keys accepted by `lookahead config set`.
pub const CONFIG_KEYS: &[&str] = &[
    "placeholder",
    "limit",
    "delay_ms",
    "api_url",
    "search_url_base",
    "cache_capacity",
    "request_timeout",
    "github.token",
];

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Placeholder text for the empty search box
    #[serde(default = "default_placeholder")]
    pub placeholder: String,

    /// Maximum number of suggestions shown (default: 15)
    #[serde(default = "default_limit")]
    pub limit: usize,

    /// Debounce window in milliseconds (default: 300)
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,

    /// Lookup endpoint prefix; the encoded query is appended
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Page prefix opened for Enter without a highlighted suggestion
    #[serde(default = "default_search_url_base")]
    pub search_url_base: String,

    /// Maximum number of cached queries; unbounded when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_capacity: Option<usize>,

    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,

    /// Authentication tokens
    #[serde(default)]
    pub auth: AuthConfig,
}

fn default_placeholder() -> String {
    DEFAULT_PLACEHOLDER.to_string()
}

fn default_limit() -> usize {
    DEFAULT_LIMIT
}

fn default_delay_ms() -> u64 {
    DEFAULT_DELAY_MS
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_search_url_base() -> String {
    DEFAULT_SEARCH_URL_BASE.to_string()
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            placeholder: default_placeholder(),
            limit: default_limit(),
            delay_ms: default_delay_ms(),
            api_url: default_api_url(),
            search_url_base: default_search_url_base(),
            cache_capacity: None,
            request_timeout: default_request_timeout(),
            auth: AuthConfig::default(),
        }
    }
}

/// Authentication configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<GitHubAuth>,
}

/// GitHub authentication
#[derive(Clone, Serialize, Deserialize)]
pub struct GitHubAuth {
    pub token: String,
}

impl fmt::Debug for GitHubAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GitHubAuth")
            .field("token", &"[REDACTED]")
            .finish()
    }
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Result<PathBuf> {
        if let Ok(path) = env::var(CONFIG_PATH_ENV)
            && !path.is_empty()
        {
            return Ok(PathBuf::from(path));
        }

        let dirs = directories::ProjectDirs::from("", "", "lookahead").ok_or_else(|| {
            LookaheadError::Config("cannot determine configuration directory".to_string())
        })?;
        Ok(dirs.config_dir().join("config.yaml"))
    }

    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from file, or return default if not found
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            LookaheadError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read config at {}: {}", path.display(), e),
            ))
        })?;
        let config: Config = serde_yaml_ng::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to the default location
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// Save configuration to file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| {
                LookaheadError::Io(std::io::Error::new(
                    e.kind(),
                    format!(
                        "Failed to create directory for config at {}: {}",
                        parent.display(),
                        e
                    ),
                ))
            })?;
        }

        let content = serde_yaml_ng::to_string(self)?;
        fs::write(path, content).map_err(|e| {
            LookaheadError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to write config at {}: {}", path.display(), e),
            ))
        })?;

        // The file may hold a token: owner read/write only
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let permissions = std::fs::Permissions::from_mode(0o600);
            std::fs::set_permissions(path, permissions)?;
        }

        Ok(())
    }

    /// Reject values the widget cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.limit == 0 {
            return Err(LookaheadError::InvalidConfigValue {
                key: "limit".to_string(),
                value: "0".to_string(),
                reason: "must be a positive integer".to_string(),
            });
        }
        if self.cache_capacity == Some(0) {
            return Err(LookaheadError::InvalidConfigValue {
                key: "cache_capacity".to_string(),
                value: "0".to_string(),
                reason: "must be positive, or unset for an unbounded cache".to_string(),
            });
        }
        if self.api_url.trim().is_empty() {
            return Err(LookaheadError::Config("api_url cannot be empty".to_string()));
        }
        Ok(())
    }

    /// Set a value by its dotted key name
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let invalid = |reason: &str| LookaheadError::InvalidConfigValue {
            key: key.to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
        };

        match key {
            "placeholder" => self.placeholder = value.to_string(),
            "limit" => {
                self.limit = value
                    .parse()
                    .ok()
                    .filter(|n| *n > 0)
                    .ok_or_else(|| invalid("must be a positive integer"))?;
            }
            "delay_ms" => {
                self.delay_ms = value
                    .parse()
                    .map_err(|_| invalid("must be a non-negative integer"))?;
            }
            "api_url" => self.api_url = value.to_string(),
            "search_url_base" => self.search_url_base = value.to_string(),
            "cache_capacity" => {
                self.cache_capacity = match value {
                    "" | "none" | "unbounded" => None,
                    n => Some(
                        n.parse()
                            .ok()
                            .filter(|n| *n > 0)
                            .ok_or_else(|| invalid("must be a positive integer or 'none'"))?,
                    ),
                };
            }
            "request_timeout" => {
                self.request_timeout = value
                    .parse()
                    .ok()
                    .filter(|n| *n > 0)
                    .ok_or_else(|| invalid("must be a positive number of seconds"))?;
            }
            "github.token" => self.set_github_token(value.to_string()),
            _ => return Err(LookaheadError::UnknownConfigKey(key.to_string())),
        }

        Ok(())
    }

    /// Get GitHub token from environment variable or config
    pub fn github_token(&self) -> Option<String> {
        if let Ok(token) = env::var("GITHUB_TOKEN")
            && !token.is_empty()
        {
            return Some(token);
        }

        self.auth.github.as_ref().map(|g| g.token.clone())
    }

    /// Set GitHub token
    pub fn set_github_token(&mut self, token: String) {
        self.auth.github = Some(GitHubAuth { token });
    }

    /// Debounce window as a duration
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    /// Request timeout as a duration
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }

    /// Cache capacity, `None` meaning unbounded
    pub fn cache_capacity(&self) -> Option<NonZeroUsize> {
        self.cache_capacity.and_then(NonZeroUsize::new)
    }
}
