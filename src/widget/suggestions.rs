//! Rows of the suggestion dropdown.
//!
//! The dropdown never renders an empty list: while a lookup is running it
//! shows a single loading row, and a settled lookup with no users shows a
//! single "no matches" row. Neither placeholder can be highlighted or
//! selected.

use crate::controller::FetchSnapshot;
use crate::types::{LOADING_MESSAGE, NO_RESULTS_MESSAGE, UserRecord, is_blank};

/// A single dropdown row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Suggestion {
    User {
        user: UserRecord,
        highlighted: bool,
    },
    Loading,
    Empty,
}

impl Suggestion {
    pub fn is_selectable(&self) -> bool {
        matches!(self, Suggestion::User { .. })
    }

    /// Text shown for the row
    pub fn label(&self) -> &str {
        match self {
            Suggestion::User { user, .. } => &user.login,
            Suggestion::Loading => LOADING_MESSAGE,
            Suggestion::Empty => NO_RESULTS_MESSAGE,
        }
    }
}

/// Users that would be shown for `fetch`, capped at `limit`.
///
/// Empty while loading or failed: the placeholder and error states have no
/// selectable rows.
pub fn selectable_users(fetch: &FetchSnapshot, limit: usize) -> &[UserRecord] {
    if fetch.is_loading || fetch.error.is_some() {
        return &[];
    }
    &fetch.data[..fetch.data.len().min(limit)]
}

/// Build the dropdown rows for the current fetch state.
pub fn build_suggestions(
    fetch: &FetchSnapshot,
    query: &str,
    limit: usize,
    highlight: Option<usize>,
) -> Vec<Suggestion> {
    if fetch.is_loading {
        return vec![Suggestion::Loading];
    }

    let users = selectable_users(fetch, limit);
    if users.is_empty() {
        return if is_blank(query) {
            Vec::new()
        } else {
            vec![Suggestion::Empty]
        };
    }

    users
        .iter()
        .enumerate()
        .map(|(index, user)| Suggestion::User {
            user: user.clone(),
            highlighted: highlight == Some(index),
        })
        .collect()
}
