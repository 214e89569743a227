//! Query input with placeholder and clear marker

use iocraft::prelude::*;

use crate::tui::theme::theme;

#[derive(Default, Props)]
pub struct SearchBoxProps {
    /// State for the query text
    pub value: Option<State<String>>,
    pub placeholder: String,
    pub has_focus: bool,
    /// Show the clear marker on the right
    pub show_clear: bool,
    /// Invoked when the clear marker is clicked
    pub on_clear: Option<Handler<()>>,
}

#[component]
pub fn SearchBox(props: &SearchBoxProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let border_color = if props.has_focus {
        theme.border_focused
    } else {
        theme.border
    };

    let Some(mut value) = props.value else {
        return element! {
            View(
                flex_direction: FlexDirection::Row,
                border_style: BorderStyle::Round,
                border_color: border_color,
                padding_left: 1,
                padding_right: 1,
                height: 3,
            ) {
                Text(content: "No value state provided", color: theme.text_dimmed)
            }
        };
    };

    let is_empty = value.read().is_empty();

    element! {
        View(
            flex_direction: FlexDirection::Row,
            border_style: BorderStyle::Round,
            border_color: border_color,
            padding_left: 1,
            padding_right: 1,
            height: 3,
        ) {
            View(
                margin_right: 1,
                justify_content: JustifyContent::Center,
            ) {
                Text(content: "/", color: theme.text_dimmed)
            }
            #(if is_empty {
                // Keep a one-cell input for the cursor and show the placeholder beside it
                Some(element! {
                    View(flex_grow: 1.0, flex_direction: FlexDirection::Row) {
                        View(width: 1) {
                            TextInput(
                                value: value.to_string(),
                                has_focus: props.has_focus,
                                on_change: move |new_value| value.set(new_value),
                                color: theme.text,
                            )
                        }
                        Text(content: props.placeholder.clone(), color: theme.text_dimmed)
                    }
                })
            } else {
                Some(element! {
                    View(flex_grow: 1.0) {
                        TextInput(
                            value: value.to_string(),
                            has_focus: props.has_focus,
                            on_change: move |new_value| value.set(new_value),
                            color: theme.text,
                        )
                    }
                })
            })
            #(if props.show_clear {
                Some(element! {
                    View(margin_left: 1, justify_content: JustifyContent::Center) {
                        ClearButton(on_click: props.on_clear.clone())
                    }
                })
            } else {
                None
            })
        }
    }
}

#[derive(Default, Props)]
pub struct ClearButtonProps {
    pub on_click: Option<Handler<()>>,
}

/// The "x" marker
///
/// `use_local_terminal_events` only reports events inside the marker, so
/// there is no signal for the pointer leaving it; the marker keeps one style.
#[component]
pub fn ClearButton(props: &ClearButtonProps, mut hooks: Hooks) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let on_click = props.on_click.clone();

    hooks.use_local_terminal_events(move |event| {
        if let TerminalEvent::FullscreenMouse(mouse_event) = event
            && is_click(mouse_event.kind)
            && let Some(ref handler) = on_click
        {
            handler(());
        }
    });

    element! {
        Text(content: "x", color: theme.text_dimmed)
    }
}

fn is_click(kind: MouseEventKind) -> bool {
    matches!(kind, MouseEventKind::Down(_))
}
