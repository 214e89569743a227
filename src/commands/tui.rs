//! Interactive search screen (`lookahead tui`)

use std::sync::Arc;

use iocraft::prelude::*;

use crate::config::Config;
use crate::controller::DataController;
use crate::error::{LookaheadError, Result};
use crate::remote::GitHubSearchClient;
use crate::tui::AutocompleteApp;
use crate::widget::WidgetSettings;

/// Overrides from the command line
#[derive(Debug, Clone, Copy, Default)]
pub struct TuiOptions {
    pub limit: Option<usize>,
    pub delay_ms: Option<u64>,
}

/// Resolve the effective configuration for a TUI run.
pub fn effective_config(mut config: Config, options: TuiOptions) -> Result<Config> {
    if let Some(limit) = options.limit {
        config.set("limit", &limit.to_string())?;
    }
    if let Some(delay_ms) = options.delay_ms {
        config.delay_ms = delay_ms;
    }
    Ok(config)
}

/// Launch the search TUI
pub async fn cmd_tui(options: TuiOptions) -> Result<()> {
    let config = effective_config(Config::load()?, options)?;

    let client = GitHubSearchClient::from_config(&config)?;
    let controller = Arc::new(DataController::with_cache_capacity(
        client,
        config.delay(),
        config.cache_capacity(),
    ));
    let settings = WidgetSettings::from(&config);
    tracing::info!(limit = settings.limit, delay_ms = config.delay_ms, "starting search screen");

    element!(AutocompleteApp(controller: Some(controller), settings))
        .fullscreen()
        .await
        .map_err(|e| LookaheadError::Tui(e.to_string()))
}
