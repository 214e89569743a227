//! Core data types and user-facing constants.

use serde::{Deserialize, Serialize};

/// Default debounce window between the last keystroke and the lookup.
pub const DEFAULT_DELAY_MS: u64 = 300;

/// Default maximum number of suggestions shown in the dropdown.
pub const DEFAULT_LIMIT: usize = 15;

/// Default placeholder shown in an empty search box.
pub const DEFAULT_PLACEHOLDER: &str = "Type to search...";

/// Endpoint prefix for user lookups; the encoded query is appended.
pub const DEFAULT_API_URL: &str = "https://api.github.com/search/users?q=";

/// Prefix for the page opened when Enter is pressed without a highlight.
pub const DEFAULT_SEARCH_URL_BASE: &str = "https://github.com/";

pub const NO_RESULTS_MESSAGE: &str = "No matches found";
pub const LOADING_MESSAGE: &str = "Loading...";
pub const ERROR_MESSAGE: &str = "An error occurred. Please try again.";

/// A user returned by the lookup API.
///
/// Only the fields the widget needs are retained; everything else in the
/// API payload is dropped at the client boundary.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: u64,
    pub login: String,
    pub profile_url: String,
}

impl UserRecord {
    pub fn new(id: u64, login: impl Into<String>, profile_url: impl Into<String>) -> Self {
        Self {
            id,
            login: login.into(),
            profile_url: profile_url.into(),
        }
    }
}

/// Returns true when the query carries no searchable text.
pub fn is_blank(query: &str) -> bool {
    query.trim().is_empty()
}
