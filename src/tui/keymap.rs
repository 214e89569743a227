//! Key bindings for the search screen
//!
//! Text entry itself goes through the input component; only keys that mean
//! something to the widget state machine (or to the app) are mapped here.

use iocraft::prelude::{KeyCode, KeyModifiers};

use crate::widget::WidgetEvent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    Widget(WidgetEvent),
    Quit,
    Ignore,
}

pub fn map_key(code: KeyCode, modifiers: KeyModifiers, focused: bool) -> KeyAction {
    if modifiers.contains(KeyModifiers::CONTROL) {
        return match code {
            KeyCode::Char('c') | KeyCode::Char('q') => KeyAction::Quit,
            KeyCode::Char('u') => KeyAction::Widget(WidgetEvent::ClearClicked),
            _ => KeyAction::Ignore,
        };
    }

    match code {
        KeyCode::Esc => KeyAction::Quit,
        KeyCode::Down => KeyAction::Widget(WidgetEvent::ArrowDown),
        KeyCode::Up => KeyAction::Widget(WidgetEvent::ArrowUp),
        KeyCode::Enter => KeyAction::Widget(WidgetEvent::Enter),
        KeyCode::Tab => KeyAction::Widget(WidgetEvent::Tab),
        // Once a selection has blurred the input, "/" brings focus back
        KeyCode::Char('/') if !focused => KeyAction::Widget(WidgetEvent::FocusGained),
        _ => KeyAction::Ignore,
    }
}
