//! One-shot user search (`lookahead search`)
//!
//! Runs a single lookup against the configured endpoint, without the
//! debounce or cache, and prints the results.

use owo_colors::OwoColorize;
use serde_json::json;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::commands::print_json;
use crate::config::Config;
use crate::error::{LookaheadError, Result};
use crate::remote::{GitHubSearchClient, SearchClient};
use crate::types::{NO_RESULTS_MESSAGE, UserRecord, is_blank};

/// A row in the search results table
#[derive(Tabled)]
struct UserRow {
    #[tabled(rename = "Login")]
    login: String,
    #[tabled(rename = "ID")]
    id: u64,
    #[tabled(rename = "Profile")]
    profile: String,
}

impl From<&UserRecord> for UserRow {
    fn from(user: &UserRecord) -> Self {
        Self {
            login: user.login.clone(),
            id: user.id,
            profile: user.profile_url.clone(),
        }
    }
}

/// Execute the search command
///
/// `limit` overrides the configured suggestion limit.
pub async fn cmd_search(query: &str, limit: Option<usize>, json: bool) -> Result<()> {
    if is_blank(query) {
        return Err(LookaheadError::InvalidInput(
            "Search query cannot be empty".to_string(),
        ));
    }
    if limit == Some(0) {
        return Err(LookaheadError::InvalidInput(
            "--limit must be a positive integer".to_string(),
        ));
    }

    let config = Config::load()?;
    let limit = limit.unwrap_or(config.limit);
    let client = GitHubSearchClient::from_config(&config)?;

    let mut users = client.search_users(query).await?;
    users.truncate(limit);

    if json {
        print_json(&json!({
            "query": query,
            "count": users.len(),
            "users": users,
        }))?;
        return Ok(());
    }

    println!("Search results for: \"{}\"\n", query.cyan());

    if users.is_empty() {
        println!("{}", NO_RESULTS_MESSAGE.dimmed());
    } else {
        let rows: Vec<UserRow> = users.iter().map(UserRow::from).collect();
        let mut table = Table::new(rows);
        table.with(Style::rounded());
        println!("{table}");
    }

    println!("\n{} result(s)", users.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_empty_query_error() {
        let result = cmd_search("", None, false).await;
        let err_msg = result.unwrap_err().to_string();
        assert!(err_msg.contains("cannot be empty"));
    }

    #[tokio::test]
    async fn test_whitespace_query_error() {
        let result = cmd_search("   ", None, true).await;
        let err_msg = result.unwrap_err().to_string();
        assert!(err_msg.contains("cannot be empty"));
    }

    #[tokio::test]
    async fn test_zero_limit_error() {
        let result = cmd_search("octocat", Some(0), false).await;
        let err_msg = result.unwrap_err().to_string();
        assert!(err_msg.contains("--limit"));
    }

    #[test]
    fn test_row_from_user() {
        let user = UserRecord::new(583231, "octocat", "https://github.com/octocat");
        let row = UserRow::from(&user);
        assert_eq!(row.login, "octocat");
        assert_eq!(row.id, 583231);
        assert_eq!(row.profile, "https://github.com/octocat");
    }
}
