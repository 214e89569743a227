#[path = "common/mod.rs"]
mod common;

use common::LookaheadTest;

#[test]
fn test_help_lists_commands() {
    let lookahead = LookaheadTest::new();

    let output = lookahead.run_success(&["--help"]);
    assert!(output.contains("tui"));
    assert!(output.contains("search"));
    assert!(output.contains("config"));
}

#[test]
fn test_version() {
    let lookahead = LookaheadTest::new();

    let output = lookahead.run_success(&["--version"]);
    assert!(output.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_search_rejects_blank_query() {
    let lookahead = LookaheadTest::new();

    let stderr = lookahead.run_failure(&["search", "   "]);
    assert!(stderr.contains("cannot be empty"));
}

#[test]
fn test_search_rejects_zero_limit() {
    let lookahead = LookaheadTest::new();

    let stderr = lookahead.run_failure(&["search", "octocat", "--limit", "0"]);
    assert!(stderr.contains("--limit"));
}

#[test]
fn test_search_reports_network_failure() {
    let lookahead = LookaheadTest::new();
    lookahead.write_config("api_url: \"http://127.0.0.1:9/search/users?q=\"\nrequest_timeout: 2\n");

    let stderr = lookahead.run_failure(&["search", "octocat"]);
    assert!(stderr.contains("network error"));
}

#[test]
fn test_unknown_subcommand_fails() {
    let lookahead = LookaheadTest::new();

    let stderr = lookahead.run_failure(&["frobnicate"]);
    assert!(stderr.contains("frobnicate"));
}
