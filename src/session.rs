//! Wiring between the widget, the data controller and navigation.
//!
//! The widget decides, the session carries out: every effect returned by
//! `Autocomplete::handle` is executed here, in order.

use std::sync::Arc;

use crate::controller::{DataController, FetchSnapshot};
use crate::navigator::Navigator;
use crate::remote::SearchClient;
use crate::widget::{Autocomplete, Effect, WidgetEvent, WidgetSettings, WidgetView};

pub struct AutocompleteSession<C: SearchClient + 'static, N: Navigator> {
    widget: Autocomplete,
    controller: Arc<DataController<C>>,
    navigator: N,
}

impl<C: SearchClient + 'static, N: Navigator> AutocompleteSession<C, N> {
    pub fn new(settings: WidgetSettings, controller: Arc<DataController<C>>, navigator: N) -> Self {
        Self {
            widget: Autocomplete::new(settings),
            controller,
            navigator,
        }
    }

    /// Feed one event through the widget and run the resulting effects.
    ///
    /// Focus effects are returned for the presentation to apply; query and
    /// navigation effects are handled here. A failed navigation is logged and
    /// does not interrupt the session.
    pub fn dispatch(&mut self, event: WidgetEvent) -> Vec<Effect> {
        let fetch = self.controller.snapshot();
        self.dispatch_with(event, &fetch)
    }

    /// Like `dispatch`, but against the fetch state the caller last rendered,
    /// so highlight and selection act on the rows actually on screen.
    pub fn dispatch_with(&mut self, event: WidgetEvent, fetch: &FetchSnapshot) -> Vec<Effect> {
        let effects = self.widget.handle(event, fetch);

        for effect in &effects {
            match effect {
                Effect::QueryChanged(query) => {
                    self.controller.observe(query);
                }
                Effect::OpenExternal(url) => {
                    if let Err(e) = self.navigator.open_external(url) {
                        tracing::warn!("{e}");
                    }
                }
                Effect::Blur | Effect::Focus => {}
            }
        }

        effects
    }

    pub fn view(&self) -> WidgetView {
        self.widget.view(&self.controller.snapshot())
    }

    /// Render against an explicit fetch state, e.g. one just received from a
    /// subscription.
    pub fn view_with(&self, fetch: &FetchSnapshot) -> WidgetView {
        self.widget.view(fetch)
    }

    pub fn widget(&self) -> &Autocomplete {
        &self.widget
    }

    pub fn controller(&self) -> &Arc<DataController<C>> {
        &self.controller
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }
}
