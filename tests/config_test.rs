#[path = "common/mod.rs"]
mod common;

use common::LookaheadTest;

// ============================================================================
// Config command tests
// ============================================================================

#[test]
fn test_config_path_uses_env_override() {
    let lookahead = LookaheadTest::new();

    let output = lookahead.run_success(&["config", "path"]);
    assert_eq!(output.trim(), lookahead.config_path().to_string_lossy());
}

#[test]
fn test_config_show_defaults() {
    let lookahead = LookaheadTest::new();

    let output = lookahead.run_success(&["config", "show"]);
    assert!(output.contains("Configuration"));
    assert!(output.contains("delay_ms"));
    assert!(output.contains("unbounded"));
    assert!(output.contains("not configured"));
}

#[test]
fn test_config_show_json() {
    let lookahead = LookaheadTest::new();

    let output = lookahead.run_success(&["config", "show", "--json"]);
    let json: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(json["limit"], 15);
    assert_eq!(json["api_url"], "https://api.github.com/search/users?q=");
    assert_eq!(json["auth"]["github_token_configured"], false);
}

#[test]
fn test_config_set_persists() {
    let lookahead = LookaheadTest::new();

    lookahead.run_success(&["config", "set", "limit", "5"]);
    lookahead.run_success(&["config", "set", "cache_capacity", "32"]);

    let yaml = lookahead.read_config();
    assert!(yaml.contains("limit: 5"));
    assert!(yaml.contains("cache_capacity: 32"));

    let output = lookahead.run_success(&["config", "show", "--json"]);
    let json: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(json["limit"], 5);
    assert_eq!(json["cache_capacity"], 32);
}

#[test]
fn test_config_set_token_is_masked() {
    let lookahead = LookaheadTest::new();

    let output = lookahead.run_success(&["config", "set", "github.token", "ghp_supersecret"]);
    assert!(!output.contains("ghp_supersecret"));
    assert!(output.contains("gh...et"));

    let shown = lookahead.run_success(&["config", "show"]);
    assert!(!shown.contains("ghp_supersecret"));
    assert!(shown.contains("configured"));
}

#[test]
fn test_config_set_invalid_key() {
    let lookahead = LookaheadTest::new();

    let stderr = lookahead.run_failure(&["config", "set", "colour", "blue"]);
    assert!(stderr.contains("unknown config key"));
    assert!(stderr.contains("github.token"));
}

#[test]
fn test_config_set_invalid_value() {
    let lookahead = LookaheadTest::new();

    let stderr = lookahead.run_failure(&["config", "set", "limit", "0"]);
    assert!(stderr.contains("must be a positive integer"));
    assert!(!lookahead.config_path().exists());
}

#[test]
fn test_invalid_config_file_is_reported() {
    let lookahead = LookaheadTest::new();
    lookahead.write_config("limit: [not, a, number]\n");

    let stderr = lookahead.run_failure(&["config", "show"]);
    assert!(stderr.contains("YAML parse error"));
}
