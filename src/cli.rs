use clap::{Parser, Subcommand};

use crate::commands::{
    TuiOptions, cmd_config_path, cmd_config_set, cmd_config_show, cmd_search, cmd_tui,
};

#[derive(Parser)]
#[command(name = "lookahead")]
#[command(about = "Search GitHub users as you type")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive search screen (the default)
    Tui {
        /// Maximum number of suggestions shown
        #[arg(short, long)]
        limit: Option<usize>,

        /// Debounce delay in milliseconds
        #[arg(short, long)]
        delay: Option<u64>,
    },

    /// Look up users once and print the results
    #[command(visible_alias = "s")]
    Search {
        /// Query text
        query: String,

        /// Maximum number of results
        #[arg(short, long)]
        limit: Option<usize>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the config file location
    Path,
    /// Set a configuration value
    Set {
        /// Configuration key (placeholder, limit, delay_ms, api_url,
        /// search_url_base, cache_capacity, request_timeout, github.token)
        key: String,
        /// Value to set
        value: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Commands {
    /// Whether the command takes over the terminal
    pub fn is_interactive(&self) -> bool {
        matches!(self, Commands::Tui { .. })
    }

    /// Execute the command
    pub async fn run(self) -> crate::error::Result<()> {
        match self {
            Commands::Tui { limit, delay } => {
                cmd_tui(TuiOptions {
                    limit,
                    delay_ms: delay,
                })
                .await
            }
            Commands::Search { query, limit, json } => cmd_search(&query, limit, json).await,
            Commands::Config { action } => match action {
                ConfigAction::Show { json } => cmd_config_show(json),
                ConfigAction::Path => cmd_config_path(),
                ConfigAction::Set { key, value, json } => cmd_config_set(&key, &value, json),
            },
        }
    }
}

impl Cli {
    /// The subcommand to run, defaulting to the search screen
    pub fn into_command(self) -> Commands {
        self.command.unwrap_or(Commands::Tui {
            limit: None,
            delay: None,
        })
    }
}
