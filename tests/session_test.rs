//! End-to-end widget behavior: typing, debouncing, caching, selection.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use tokio::time::sleep;

use lookahead::{
    AutocompleteSession, DataController, Effect, FetchError, RecordingNavigator, SearchClient,
    Suggestion, UserRecord, WidgetEvent, WidgetSettings,
};

const DELAY: Duration = Duration::from_millis(300);

/// Canned GitHub: fixed answers per query, optional latency, call counting.
#[derive(Default)]
struct CannedGitHub {
    answers: HashMap<String, Vec<&'static str>>,
    latency: HashMap<String, Duration>,
    failures: HashMap<String, FetchError>,
    calls: AtomicUsize,
}

impl CannedGitHub {
    fn answer(mut self, query: &str, logins: Vec<&'static str>) -> Self {
        self.answers.insert(query.to_string(), logins);
        self
    }

    fn slow(mut self, query: &str, latency: Duration) -> Self {
        self.latency.insert(query.to_string(), latency);
        self
    }

    fn failing(mut self, query: &str, error: FetchError) -> Self {
        self.failures.insert(query.to_string(), error);
        self
    }
}

impl SearchClient for CannedGitHub {
    async fn search_users(&self, query: &str) -> Result<Vec<UserRecord>, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(latency) = self.latency.get(query) {
            sleep(*latency).await;
        }
        if let Some(error) = self.failures.get(query) {
            return Err(error.clone());
        }
        Ok(self
            .answers
            .get(query)
            .map(|logins| {
                logins
                    .iter()
                    .enumerate()
                    .map(|(i, login)| {
                        UserRecord::new(i as u64 + 1, *login, format!("https://github.com/{login}"))
                    })
                    .collect()
            })
            .unwrap_or_default())
    }
}

fn session(
    client: CannedGitHub,
    limit: usize,
) -> AutocompleteSession<CannedGitHub, RecordingNavigator> {
    let controller = Arc::new(DataController::new(client, DELAY));
    let settings = WidgetSettings {
        limit,
        ..WidgetSettings::default()
    };
    AutocompleteSession::new(settings, controller, RecordingNavigator::new())
}

fn type_text(
    s: &mut AutocompleteSession<CannedGitHub, RecordingNavigator>,
    text: &str,
) {
    let mut typed = String::new();
    for c in text.chars() {
        typed.push(c);
        s.dispatch(WidgetEvent::InputChanged(typed.clone()));
    }
}

fn calls(s: &AutocompleteSession<CannedGitHub, RecordingNavigator>) -> usize {
    s.controller().client().calls.load(Ordering::SeqCst)
}

#[tokio::test(start_paused = true)]
async fn test_typing_octo_shows_three_unhighlighted_rows() {
    let client =
        CannedGitHub::default().answer("octo", vec!["abhishek", "github-user", "john-doe"]);
    let mut s = session(client, 5);

    s.dispatch(WidgetEvent::FocusGained);
    type_text(&mut s, "octo");
    assert_eq!(calls(&s), 0);

    sleep(DELAY + Duration::from_millis(50)).await;

    assert_eq!(calls(&s), 1);
    let view = s.view();
    assert!(view.dropdown_visible);
    assert_eq!(view.highlight, None);
    let logins: Vec<&str> = view.suggestions.iter().map(Suggestion::label).collect();
    assert_eq!(logins, vec!["abhishek", "github-user", "john-doe"]);
}

#[tokio::test(start_paused = true)]
async fn test_retyping_a_query_is_served_from_cache() {
    let client = CannedGitHub::default()
        .answer("octo", vec!["octocat"])
        .answer("octocat", vec!["octocat"]);
    let mut s = session(client, 5);

    type_text(&mut s, "octo");
    sleep(DELAY * 2).await;
    type_text(&mut s, "octocat");
    sleep(DELAY * 2).await;
    assert_eq!(calls(&s), 2);

    // Backspace to a query seen before
    for text in ["octoca", "octoc", "octo"] {
        s.dispatch(WidgetEvent::InputChanged(text.to_string()));
    }
    sleep(DELAY * 2).await;

    assert_eq!(calls(&s), 2);
    assert_eq!(s.view().suggestions.len(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_slow_response_for_old_query_never_wins() {
    let client = CannedGitHub::default()
        .answer("ab", vec!["abby"])
        .answer("abc", vec!["abc-corp"])
        .slow("ab", Duration::from_secs(3));
    let mut s = session(client, 5);

    s.dispatch(WidgetEvent::InputChanged("ab".to_string()));
    sleep(DELAY + Duration::from_millis(10)).await;
    assert!(s.view().is_loading);

    s.dispatch(WidgetEvent::InputChanged("abc".to_string()));
    sleep(DELAY + Duration::from_millis(10)).await;
    sleep(Duration::from_secs(5)).await;

    let view = s.view();
    assert!(!view.is_loading);
    let logins: Vec<&str> = view.suggestions.iter().map(Suggestion::label).collect();
    assert_eq!(logins, vec!["abc-corp"]);
}

#[tokio::test(start_paused = true)]
async fn test_failed_lookup_shows_error_and_hides_dropdown() {
    let client = CannedGitHub::default().failing(
        "abc",
        FetchError::Status {
            status: 403,
            message: "Forbidden".to_string(),
        },
    );
    let mut s = session(client, 5);

    s.dispatch(WidgetEvent::FocusGained);
    type_text(&mut s, "abc");
    sleep(DELAY * 2).await;

    let view = s.view();
    assert!(!view.dropdown_visible);
    assert!(!view.is_loading);
    assert_eq!(view.error.as_deref(), Some("GitHub API error: Forbidden (403)"));
    assert!(!s.controller().is_cached("abc"));
}

#[tokio::test(start_paused = true)]
async fn test_no_matches_message() {
    let mut s = session(CannedGitHub::default(), 5);

    s.dispatch(WidgetEvent::FocusGained);
    type_text(&mut s, "zzzz");
    sleep(DELAY * 2).await;

    let view = s.view();
    assert!(view.dropdown_visible);
    assert_eq!(view.suggestions, vec![Suggestion::Empty]);
    assert_eq!(view.suggestions[0].label(), "No matches found");
}

#[tokio::test(start_paused = true)]
async fn test_keyboard_selection_opens_profile() {
    let client =
        CannedGitHub::default().answer("octo", vec!["abhishek", "github-user", "john-doe"]);
    let mut s = session(client, 5);

    s.dispatch(WidgetEvent::FocusGained);
    type_text(&mut s, "octo");
    sleep(DELAY * 2).await;

    s.dispatch(WidgetEvent::ArrowUp);
    assert_eq!(s.view().highlight, Some(2));

    let effects = s.dispatch(WidgetEvent::Enter);
    assert_eq!(
        effects,
        vec![
            Effect::QueryChanged("john-doe".to_string()),
            Effect::Blur,
            Effect::OpenExternal("https://github.com/john-doe".to_string()),
        ]
    );
    assert_eq!(
        s.navigator().opened(),
        vec!["https://github.com/john-doe".to_string()]
    );

    let view = s.view();
    assert_eq!(view.query, "john-doe");
    assert!(!view.dropdown_visible);
    assert!(!view.focused);
}

#[tokio::test(start_paused = true)]
async fn test_enter_without_highlight_opens_search_page() {
    let mut s = session(CannedGitHub::default().answer("octo", vec!["octocat"]), 5);

    type_text(&mut s, "octo");
    sleep(DELAY * 2).await;
    s.dispatch(WidgetEvent::Enter);

    assert_eq!(s.navigator().opened(), vec!["https://github.com/octo".to_string()]);
}

#[tokio::test(start_paused = true)]
async fn test_limit_caps_rows() {
    let client = CannedGitHub::default().answer("a", vec!["a1", "a2", "a3", "a4", "a5", "a6"]);
    let mut s = session(client, 3);

    type_text(&mut s, "a");
    sleep(DELAY * 2).await;

    assert_eq!(s.view().suggestions.len(), 3);
}

#[tokio::test(start_paused = true)]
async fn test_clear_cancels_pending_lookup() {
    let mut s = session(CannedGitHub::default().answer("octo", vec!["octocat"]), 5);

    type_text(&mut s, "octo");
    sleep(Duration::from_millis(100)).await;
    s.dispatch(WidgetEvent::ClearClicked);
    sleep(DELAY * 2).await;

    assert_eq!(calls(&s), 0);
    let view = s.view();
    assert_eq!(view.query, "");
    assert!(!view.show_clear);
    assert!(view.suggestions.is_empty());
}
