use crate::remote::FetchError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LookaheadError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("unknown config key '{0}'. Valid keys: {keys}", keys = crate::config::CONFIG_KEYS.join(", "))]
    UnknownConfigKey(String),

    #[error("invalid value '{value}' for '{key}': {reason}")]
    InvalidConfigValue {
        key: String,
        value: String,
        reason: String,
    },

    #[error("{0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("failed to open '{url}': {reason}")]
    Navigation { url: String, reason: String },

    #[error("TUI error: {0}")]
    Tui(String),
}

pub type Result<T> = std::result::Result<T, LookaheadError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_config_key_lists_valid_keys() {
        let message = LookaheadError::UnknownConfigKey("colour".to_string()).to_string();
        assert!(message.starts_with("unknown config key 'colour'"));
        assert!(message.contains("github.token"));
    }

    #[test]
    fn test_fetch_error_is_transparent() {
        let err: LookaheadError = crate::remote::FetchError::Network("timed out".to_string()).into();
        assert_eq!(err.to_string(), "network error: timed out");
    }
}
