pub mod cache;
pub mod cli;
pub mod commands;
pub mod config;
pub mod controller;
pub mod debounce;
pub mod error;
pub mod highlight;
pub mod logging;
pub mod navigator;
pub mod remote;
pub mod session;
pub mod tui;
pub mod types;
pub mod widget;

pub use cache::QueryCache;
pub use config::Config;
pub use controller::{DataController, FetchSnapshot};
pub use debounce::Debouncer;
pub use error::{LookaheadError, Result};
pub use highlight::{HighlightedText, highlight_match};
pub use navigator::{BrowserNavigator, Navigator, RecordingNavigator};
pub use remote::{FetchError, GitHubSearchClient, SearchClient};
pub use session::AutocompleteSession;
pub use types::UserRecord;
pub use widget::{Autocomplete, Effect, Suggestion, WidgetEvent, WidgetSettings, WidgetView};
