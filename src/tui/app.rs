//! GitHub user search screen (`lookahead tui`)
//!
//! Layout:
//! ```text
//! +------------------------------------------+
//! | Title                                     |
//! +------------------------------------------+
//! | SearchBox                               x |
//! +------------------------------------------+
//! | error line (only when the lookup failed)  |
//! | SuggestionList                            |
//! +------------------------------------------+
//! | Footer                                    |
//! +------------------------------------------+
//! ```

use std::sync::Arc;

use iocraft::prelude::*;

use crate::controller::{DataController, FetchSnapshot};
use crate::navigator::BrowserNavigator;
use crate::remote::GitHubSearchClient;
use crate::session::AutocompleteSession;
use crate::tui::components::{Footer, SearchBox, SuggestionList, blurred_shortcuts, search_shortcuts};
use crate::tui::keymap::{KeyAction, map_key};
use crate::tui::theme::theme;
use crate::types::ERROR_MESSAGE;
use crate::widget::{WidgetEvent, WidgetSettings};

type TuiSession = AutocompleteSession<GitHubSearchClient, BrowserNavigator>;

#[derive(Default, Props)]
pub struct AutocompleteAppProps {
    pub controller: Option<Arc<DataController<GitHubSearchClient>>>,
    pub settings: WidgetSettings,
}

/// Run `event` through the session against the rendered fetch state and
/// mirror the resulting query into the input state.
fn dispatch(
    session: &mut State<Option<TuiSession>>,
    input: &mut State<String>,
    fetch: State<FetchSnapshot>,
    event: WidgetEvent,
) {
    let rendered = fetch.read().clone();
    let query = {
        let mut guard = session.write();
        let Some(session) = guard.as_mut() else {
            return;
        };
        session.dispatch_with(event, &rendered);
        session.widget().query().to_string()
    };

    if *input.read() != query {
        input.set(query);
    }
}

#[component]
pub fn AutocompleteApp<'a>(props: &AutocompleteAppProps, mut hooks: Hooks) -> impl Into<AnyElement<'a>> {
    let (width, height) = hooks.use_terminal_size();
    let mut system = hooks.use_context_mut::<SystemContext>();
    let theme = theme();

    let mut session: State<Option<TuiSession>> = hooks.use_state({
        let controller = props.controller.clone();
        let settings = props.settings.clone();
        move || {
            controller.map(|controller| AutocompleteSession::new(settings, controller, BrowserNavigator))
        }
    });
    let mut input = hooks.use_state(String::new);
    let mut fetch: State<FetchSnapshot> = hooks.use_state(FetchSnapshot::default);
    let mut should_exit = hooks.use_state(|| false);
    let mut started = hooks.use_state(|| false);

    // Re-render whenever the controller publishes
    hooks.use_future({
        let receiver = props.controller.as_ref().map(|c| c.subscribe());
        async move {
            let Some(mut receiver) = receiver else {
                return;
            };
            while receiver.changed().await.is_ok() {
                let snapshot = receiver.borrow_and_update().clone();
                fetch.set(snapshot);
            }
        }
    });

    if !started.get() {
        started.set(true);
        dispatch(&mut session, &mut input, fetch, WidgetEvent::FocusGained);
    }

    // Typing goes through the input component; forward it to the widget
    let typed = input.to_string();
    let changed = session
        .read()
        .as_ref()
        .is_some_and(|s| s.widget().query() != typed);
    if changed {
        dispatch(&mut session, &mut input, fetch, WidgetEvent::InputChanged(typed));
    }

    let hover_handler: Handler<usize> = hooks.use_async_handler(move |index: usize| {
        let mut session = session;
        let mut input = input;
        async move {
            dispatch(&mut session, &mut input, fetch, WidgetEvent::PointerHover(index));
        }
    });

    let select_handler: Handler<usize> = hooks.use_async_handler(move |index: usize| {
        let mut session = session;
        let mut input = input;
        async move {
            dispatch(&mut session, &mut input, fetch, WidgetEvent::PointerSelect(index));
        }
    });

    let clear_handler: Handler<()> = hooks.use_async_handler(move |()| {
        let mut session = session;
        let mut input = input;
        async move {
            dispatch(&mut session, &mut input, fetch, WidgetEvent::ClearClicked);
        }
    });

    hooks.use_terminal_events(move |event| {
        if let TerminalEvent::Key(KeyEvent {
            code,
            kind,
            modifiers,
            ..
        }) = event
            && kind != KeyEventKind::Release
        {
            let focused = session
                .read()
                .as_ref()
                .is_some_and(|s| s.widget().is_focused());
            match map_key(code, modifiers, focused) {
                KeyAction::Widget(event) => dispatch(&mut session, &mut input, fetch, event),
                KeyAction::Quit => should_exit.set(true),
                KeyAction::Ignore => {}
            }
        }
    });

    if should_exit.get() {
        system.exit();
    }

    let Some(view) = session.read().as_ref().map(|s| s.view_with(&fetch.read())) else {
        return element! {
            View(width, height, padding: 1) {
                Text(content: "No search controller provided", color: theme.error)
            }
        };
    };

    let shortcuts = if view.focused {
        search_shortcuts()
    } else {
        blurred_shortcuts()
    };

    element! {
        View(
            width,
            height,
            flex_direction: FlexDirection::Column,
            background_color: theme.background,
        ) {
            View(height: 1, padding_left: 1) {
                Text(content: "GitHub user search", color: theme.title, weight: Weight::Bold)
            }

            View(
                flex_grow: 1.0,
                flex_direction: FlexDirection::Column,
                width: 100pct,
                padding_left: 1,
                padding_right: 1,
            ) {
                SearchBox(
                    value: Some(input),
                    placeholder: view.placeholder.clone(),
                    has_focus: view.focused,
                    show_clear: view.show_clear,
                    on_clear: Some(clear_handler),
                )

                #(view.error.as_ref().map(|detail| element! {
                    View(flex_direction: FlexDirection::Column, padding_left: 1) {
                        Text(content: ERROR_MESSAGE, color: theme.error, weight: Weight::Bold)
                        Text(content: detail.clone(), color: theme.text_dimmed)
                    }
                }))

                #(if view.dropdown_visible {
                    Some(element! {
                        SuggestionList(
                            suggestions: view.suggestions.clone(),
                            query: view.query.clone(),
                            on_hover: Some(hover_handler),
                            on_select: Some(select_handler),
                        )
                    })
                } else {
                    None
                })
            }

            Footer(shortcuts)
        }
    }
}
