mod config;
mod search;
mod tui;

pub use config::{cmd_config_path, cmd_config_set, cmd_config_show};
pub use search::cmd_search;
pub use tui::{TuiOptions, cmd_tui, effective_config};

use crate::error::Result;

/// Print a value as pretty JSON on stdout
pub fn print_json(value: &serde_json::Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
