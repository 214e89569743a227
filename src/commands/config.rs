//! Configuration commands.
//!
//! - `config show`: Display current configuration
//! - `config path`: Print the config file location
//! - `config set`: Set a configuration value

use owo_colors::OwoColorize;
use serde_json::json;

use crate::commands::print_json;
use crate::config::Config;
use crate::error::Result;

/// Mask a sensitive value by showing only the first 2 and last 2 characters
fn mask_sensitive_value(value: &str) -> String {
    let char_count = value.chars().count();
    if char_count > 4 {
        let first: String = value.chars().take(2).collect();
        let last: String = value.chars().skip(char_count - 2).collect();
        format!("{first}...{last}")
    } else {
        "****".to_string()
    }
}

fn cache_capacity_label(config: &Config) -> String {
    match config.cache_capacity {
        Some(n) => n.to_string(),
        None => "unbounded".to_string(),
    }
}

/// Show current configuration
pub fn cmd_config_show(json: bool) -> Result<()> {
    let config = Config::load()?;
    let path = Config::config_path()?;
    let token = config.github_token().map(|t| mask_sensitive_value(&t));

    if json {
        return print_json(&json!({
            "placeholder": config.placeholder,
            "limit": config.limit,
            "delay_ms": config.delay_ms,
            "api_url": config.api_url,
            "search_url_base": config.search_url_base,
            "cache_capacity": config.cache_capacity,
            "request_timeout": config.request_timeout,
            "auth": {
                "github_token_configured": token.is_some(),
            },
            "config_file": path.to_string_lossy(),
        }));
    }

    let mut text_output = String::new();
    text_output.push_str(&format!("{}\n\n", "Configuration:".cyan().bold()));

    let rows = [
        ("placeholder", config.placeholder.clone()),
        ("limit", config.limit.to_string()),
        ("delay_ms", config.delay_ms.to_string()),
        ("api_url", config.api_url.clone()),
        ("search_url_base", config.search_url_base.clone()),
        ("cache_capacity", cache_capacity_label(&config)),
        ("request_timeout", format!("{}s", config.request_timeout)),
    ];
    for (key, value) in rows {
        text_output.push_str(&format!("{}: {value}\n", key.cyan()));
    }

    text_output.push('\n');
    text_output.push_str(&format!("{}:\n", "auth".cyan()));
    let github_status = match token {
        Some(masked) => format!("{} ({masked})", "configured".green()),
        None => "not configured".dimmed().to_string(),
    };
    text_output.push_str(&format!("  github.token: {github_status}\n\n"));
    text_output.push_str(&format!(
        "{}",
        format!("Config file: {}", path.display()).dimmed()
    ));

    println!("{text_output}");
    Ok(())
}

/// Print the config file path
pub fn cmd_config_path() -> Result<()> {
    println!("{}", Config::config_path()?.display());
    Ok(())
}

/// Set a configuration value
pub fn cmd_config_set(key: &str, value: &str, json: bool) -> Result<()> {
    let mut config = Config::load()?;
    config.set(key, value)?;
    config.validate()?;
    let path = config.save()?;

    // Never echo the token back
    let shown = if key == "github.token" {
        mask_sensitive_value(value)
    } else {
        value.to_string()
    };

    if json {
        return print_json(&json!({
            "action": "config_set",
            "key": key,
            "value": shown,
            "config_file": path.to_string_lossy(),
            "success": true,
        }));
    }

    println!("Set {} to {}", key.cyan(), shown);
    Ok(())
}
