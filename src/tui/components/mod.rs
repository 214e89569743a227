//! Reusable TUI components

pub mod footer;
pub mod search_box;
pub mod suggestion_list;

pub use footer::{Footer, Shortcut, blurred_shortcuts, search_shortcuts};
pub use search_box::{ClearButton, SearchBox};
pub use suggestion_list::{SuggestionList, SuggestionRow};
