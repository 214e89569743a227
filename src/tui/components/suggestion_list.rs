//! Dropdown of matching users

use iocraft::prelude::*;

use crate::highlight::highlight_match;
use crate::tui::theme::theme;
use crate::widget::Suggestion;

#[derive(Default, Props)]
pub struct SuggestionListProps {
    pub suggestions: Vec<Suggestion>,
    /// Current query, used to emphasize the matched part of each login
    pub query: String,
    pub on_hover: Option<Handler<usize>>,
    pub on_select: Option<Handler<usize>>,
}

#[component]
pub fn SuggestionList(props: &SuggestionListProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    element! {
        View(
            width: 100pct,
            flex_direction: FlexDirection::Column,
            border_style: BorderStyle::Round,
            border_color: theme.border,
            padding_left: 1,
            padding_right: 1,
        ) {
            #(props.suggestions.iter().enumerate().map(|(index, suggestion)| {
                match suggestion {
                    Suggestion::User { user, highlighted } => element! {
                        SuggestionRow(
                            index,
                            login: user.login.clone(),
                            profile_url: user.profile_url.clone(),
                            query: props.query.clone(),
                            is_highlighted: *highlighted,
                            on_hover: props.on_hover.clone(),
                            on_select: props.on_select.clone(),
                        )
                    }.into_any(),
                    placeholder => element! {
                        View(height: 1) {
                            Text(content: placeholder.label().to_string(), color: theme.text_dimmed)
                        }
                    }.into_any(),
                }
            }))
        }
    }
}

#[derive(Default, Props)]
pub struct SuggestionRowProps {
    pub index: usize,
    pub login: String,
    pub profile_url: String,
    pub query: String,
    pub is_highlighted: bool,
    pub on_hover: Option<Handler<usize>>,
    pub on_select: Option<Handler<usize>>,
}

/// One selectable user. Pointer movement highlights it, a click picks it.
#[component]
pub fn SuggestionRow(props: &SuggestionRowProps, mut hooks: Hooks) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let index = props.index;
    let on_hover = props.on_hover.clone();
    let on_select = props.on_select.clone();

    hooks.use_local_terminal_events(move |event| {
        if let TerminalEvent::FullscreenMouse(mouse_event) = event {
            match mouse_event.kind {
                MouseEventKind::Moved => {
                    if let Some(ref handler) = on_hover {
                        handler(index);
                    }
                }
                MouseEventKind::Down(_) => {
                    if let Some(ref handler) = on_select {
                        handler(index);
                    }
                }
                _ => {}
            }
        }
    });

    let parts = highlight_match(&props.login, &props.query);
    let background = if props.is_highlighted {
        Some(theme.highlight)
    } else {
        None
    };

    element! {
        View(
            height: 1,
            width: 100pct,
            flex_direction: FlexDirection::Row,
            background_color: background,
        ) {
            Text(content: parts.before, color: theme.text)
            Text(content: parts.matched, color: theme.search_match, weight: Weight::Bold)
            Text(content: parts.after, color: theme.text)
            View(flex_grow: 1.0)
            Text(content: props.profile_url.clone(), color: theme.text_dimmed)
        }
    }
}
