//! Input widget state machine.
//!
//! `Autocomplete` owns the text in the box, whether the dropdown is open, and
//! which suggestion is highlighted. `handle` is a pure transition: it takes
//! one event plus the current fetch state, updates the widget, and returns
//! the effects the host has to carry out (new query to observe, URL to open,
//! focus changes). Nothing in here touches the network, a timer or a
//! terminal.

pub mod suggestions;

use crate::config::Config;
use crate::controller::FetchSnapshot;
use crate::types::{
    DEFAULT_LIMIT, DEFAULT_PLACEHOLDER, DEFAULT_SEARCH_URL_BASE, UserRecord, is_blank,
};

pub use suggestions::{Suggestion, build_suggestions, selectable_users};

/// Static widget settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetSettings {
    pub placeholder: String,
    /// Maximum number of suggestions shown, always positive
    pub limit: usize,
    /// Prefix for the page opened on Enter without a highlight
    pub search_url_base: String,
}

impl Default for WidgetSettings {
    fn default() -> Self {
        Self {
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            limit: DEFAULT_LIMIT,
            search_url_base: DEFAULT_SEARCH_URL_BASE.to_string(),
        }
    }
}

impl From<&Config> for WidgetSettings {
    fn from(config: &Config) -> Self {
        Self {
            placeholder: config.placeholder.clone(),
            limit: config.limit.max(1),
            search_url_base: config.search_url_base.clone(),
        }
    }
}

/// Input events the widget understands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetEvent {
    InputChanged(String),
    FocusGained,
    FocusLost,
    ArrowDown,
    ArrowUp,
    Enter,
    Tab,
    /// Pointer moved over the visible row at this index
    PointerHover(usize),
    /// Pointer picked the visible row at this index
    PointerSelect(usize),
    ClearClicked,
}

/// Side effects requested by a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// The query text changed; the data controller must observe it
    QueryChanged(String),
    /// Open a page outside the widget
    OpenExternal(String),
    /// The input should give up focus
    Blur,
    /// The input should take focus
    Focus,
}

/// Everything the presentation needs to draw the widget
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetView {
    pub query: String,
    pub placeholder: String,
    pub focused: bool,
    pub dropdown_visible: bool,
    pub highlight: Option<usize>,
    pub suggestions: Vec<Suggestion>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub show_clear: bool,
}

#[derive(Debug, Clone)]
pub struct Autocomplete {
    settings: WidgetSettings,
    query: String,
    dropdown_open: bool,
    highlight: Option<usize>,
    focused: bool,
}

impl Autocomplete {
    pub fn new(settings: WidgetSettings) -> Self {
        Self {
            settings,
            query: String::new(),
            dropdown_open: false,
            highlight: None,
            focused: false,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_dropdown_open(&self) -> bool {
        self.dropdown_open
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn settings(&self) -> &WidgetSettings {
        &self.settings
    }

    /// Highlight as it applies to the rows currently on screen: `None`
    /// while loading or failed, and never past the last visible row.
    pub fn highlight(&self, fetch: &FetchSnapshot) -> Option<usize> {
        let count = selectable_users(fetch, self.settings.limit).len();
        self.highlight.filter(|index| *index < count)
    }

    /// URL opened for Enter without a highlighted suggestion. The raw query
    /// is appended as typed.
    pub fn search_url(&self) -> String {
        format!("{}{}", self.settings.search_url_base, self.query)
    }

    /// Apply one event and return the effects the host must perform.
    pub fn handle(&mut self, event: WidgetEvent, fetch: &FetchSnapshot) -> Vec<Effect> {
        match event {
            WidgetEvent::InputChanged(text) => self.input_changed(text),
            WidgetEvent::FocusGained => {
                self.focused = true;
                self.dropdown_open = true;
                Vec::new()
            }
            WidgetEvent::FocusLost => {
                self.focused = false;
                self.dropdown_open = false;
                Vec::new()
            }
            WidgetEvent::ArrowDown => {
                self.move_highlight(fetch, Direction::Down);
                Vec::new()
            }
            WidgetEvent::ArrowUp => {
                self.move_highlight(fetch, Direction::Up);
                Vec::new()
            }
            WidgetEvent::Enter => self.enter(fetch),
            WidgetEvent::Tab => {
                self.dropdown_open = false;
                self.highlight = None;
                Vec::new()
            }
            WidgetEvent::PointerHover(index) => {
                let count = selectable_users(fetch, self.settings.limit).len();
                if index < count && self.highlight != Some(index) {
                    self.highlight = Some(index);
                }
                Vec::new()
            }
            WidgetEvent::PointerSelect(index) => {
                match selectable_users(fetch, self.settings.limit).get(index) {
                    Some(user) => self.select(user.clone()),
                    None => Vec::new(),
                }
            }
            WidgetEvent::ClearClicked => {
                let mut effects = Vec::new();
                if !self.query.is_empty() {
                    self.query.clear();
                    effects.push(Effect::QueryChanged(String::new()));
                }
                self.dropdown_open = false;
                self.highlight = None;
                self.focused = true;
                effects.push(Effect::Focus);
                effects
            }
        }
    }

    /// Render state for the current fetch state.
    pub fn view(&self, fetch: &FetchSnapshot) -> WidgetView {
        let highlight = self.highlight(fetch);
        WidgetView {
            query: self.query.clone(),
            placeholder: self.settings.placeholder.clone(),
            focused: self.focused,
            dropdown_visible: self.dropdown_open && !is_blank(&self.query) && fetch.error.is_none(),
            highlight,
            suggestions: build_suggestions(fetch, &self.query, self.settings.limit, highlight),
            is_loading: fetch.is_loading,
            error: fetch.error.clone(),
            show_clear: !self.query.is_empty(),
        }
    }

    fn input_changed(&mut self, text: String) -> Vec<Effect> {
        self.dropdown_open = !is_blank(&text);
        if text == self.query {
            return Vec::new();
        }
        self.query = text;
        self.highlight = None;
        vec![Effect::QueryChanged(self.query.clone())]
    }

    fn move_highlight(&mut self, fetch: &FetchSnapshot, direction: Direction) {
        let count = selectable_users(fetch, self.settings.limit).len();
        if count == 0 {
            return;
        }
        let last = count - 1;
        let current = self.highlight(fetch);

        self.highlight = Some(match (direction, current) {
            (Direction::Down, Some(index)) if index < last => index + 1,
            (Direction::Down, _) => 0,
            (Direction::Up, Some(index)) if index > 0 => index - 1,
            (Direction::Up, _) => last,
        });
    }

    fn enter(&mut self, fetch: &FetchSnapshot) -> Vec<Effect> {
        if let Some(index) = self.highlight(fetch) {
            let user = selectable_users(fetch, self.settings.limit)[index].clone();
            return self.select(user);
        }
        if !is_blank(&self.query) {
            return vec![Effect::OpenExternal(self.search_url())];
        }
        Vec::new()
    }

    fn select(&mut self, user: UserRecord) -> Vec<Effect> {
        let mut effects = Vec::new();
        if self.query != user.login {
            self.query = user.login.clone();
            effects.push(Effect::QueryChanged(self.query.clone()));
        }
        self.dropdown_open = false;
        self.highlight = None;
        self.focused = false;
        effects.push(Effect::Blur);
        effects.push(Effect::OpenExternal(user.profile_url));
        effects
    }
}

#[derive(Debug, Clone, Copy)]
enum Direction {
    Up,
    Down,
}
