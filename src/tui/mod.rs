//! Terminal UI for the user search widget
//!
//! The widget state machine and data controller do the work; this module
//! only turns terminal input into `WidgetEvent`s and draws `WidgetView`s.

pub mod app;
pub mod components;
pub mod keymap;
pub mod theme;

pub use app::{AutocompleteApp, AutocompleteAppProps};
pub use theme::{Theme, theme};
