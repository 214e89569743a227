//! Remote user lookup.
//!
//! The widget only needs one operation from the outside world: turn a query
//! string into an ordered list of users. `SearchClient` is that seam, and
//! `GitHubSearchClient` is the production implementation backed by the
//! GitHub user search API.

pub mod error;
pub mod github;

use serde::Deserialize;

use crate::types::UserRecord;

pub use error::FetchError;
pub use github::GitHubSearchClient;

/// Common interface for user lookup backends
pub trait SearchClient: Send + Sync {
    /// Look up users matching `query`, in the order the backend ranks them.
    fn search_users(
        &self,
        query: &str,
    ) -> impl std::future::Future<Output = Result<Vec<UserRecord>, FetchError>> + Send;
}

/// Response body of the user search endpoint.
#[derive(Debug, Deserialize)]
struct SearchResponse {
    items: Vec<SearchItem>,
}

/// A single user item from the search results. Other fields are ignored.
#[derive(Debug, Deserialize)]
struct SearchItem {
    id: u64,
    login: String,
    html_url: String,
}

impl From<SearchItem> for UserRecord {
    fn from(item: SearchItem) -> Self {
        UserRecord {
            id: item.id,
            login: item.login,
            profile_url: item.html_url,
        }
    }
}

/// Parse a search response body into user records.
pub fn parse_search_response(body: &str) -> Result<Vec<UserRecord>, FetchError> {
    let response: SearchResponse = serde_json::from_str(body)?;
    Ok(response.items.into_iter().map(UserRecord::from).collect())
}
