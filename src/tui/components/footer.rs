//! Keyboard shortcuts bar

use iocraft::prelude::*;

use crate::tui::theme::theme;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shortcut {
    /// The key or key combination (e.g. "Esc", "C-u")
    pub key: String,
    pub action: String,
}

impl Shortcut {
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
        }
    }
}

#[derive(Default, Props)]
pub struct FooterProps {
    pub shortcuts: Vec<Shortcut>,
}

#[component]
pub fn Footer(props: &FooterProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    element! {
        View(
            width: 100pct,
            min_height: 1,
            flex_direction: FlexDirection::Row,
            flex_wrap: FlexWrap::Wrap,
            flex_shrink: 0.0,
            padding_left: 1,
            padding_right: 1,
            column_gap: 2,
            background_color: theme.border,
        ) {
            #(props.shortcuts.iter().map(|shortcut| {
                let key = shortcut.key.clone();
                let action = shortcut.action.clone();
                element! {
                    View(flex_direction: FlexDirection::Row) {
                        Text(
                            content: format!("[{}]", key),
                            color: theme.highlight,
                            weight: Weight::Bold,
                        )
                        Text(
                            content: format!(" {}", action),
                            color: theme.text,
                        )
                    }
                }
            }))
        }
    }
}

/// Shortcuts shown while the input has focus
pub fn search_shortcuts() -> Vec<Shortcut> {
    vec![
        Shortcut::new("Up/Down", "Highlight"),
        Shortcut::new("Enter", "Open"),
        Shortcut::new("Tab", "Close List"),
        Shortcut::new("C-u", "Clear"),
        Shortcut::new("Esc", "Quit"),
    ]
}

/// Shortcuts shown after a selection moved focus away
pub fn blurred_shortcuts() -> Vec<Shortcut> {
    vec![Shortcut::new("/", "Search"), Shortcut::new("Esc", "Quit")]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shortcut_lists_end_with_quit() {
        for shortcuts in [search_shortcuts(), blurred_shortcuts()] {
            assert_eq!(shortcuts.last(), Some(&Shortcut::new("Esc", "Quit")));
        }
    }
}
