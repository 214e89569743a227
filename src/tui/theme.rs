//! Colors for the terminal UI

use iocraft::prelude::Color;

#[derive(Debug, Clone)]
pub struct Theme {
    pub border: Color,
    pub border_focused: Color,
    pub background: Color,
    pub text: Color,
    pub text_dimmed: Color,
    /// Background of the highlighted suggestion
    pub highlight: Color,
    /// Matched part of a login
    pub search_match: Color,
    pub error: Color,
    pub title: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            border: Color::Rgb {
                r: 120,
                g: 120,
                b: 120,
            },
            border_focused: Color::Blue,
            background: Color::Reset,
            text: Color::White,
            text_dimmed: Color::Rgb {
                r: 120,
                g: 120,
                b: 120,
            },
            highlight: Color::Blue,
            search_match: Color::Yellow,
            error: Color::Red,
            title: Color::Cyan,
        }
    }
}

pub static THEME: std::sync::LazyLock<Theme> = std::sync::LazyLock::new(Theme::default);

pub fn theme() -> &'static Theme {
    &THEME
}
