//! Opening pages outside the widget.

use parking_lot::Mutex;

use crate::error::{LookaheadError, Result};

pub trait Navigator: Send + Sync {
    fn open_external(&self, url: &str) -> Result<()>;
}

/// Opens URLs with the system's default browser.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn open_external(&self, url: &str) -> Result<()> {
        tracing::debug!(%url, "opening in browser");
        open::that(url).map_err(|e| LookaheadError::Navigation {
            url: url.to_string(),
            reason: e.to_string(),
        })
    }
}

/// Records every URL instead of opening it.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    opened: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn opened(&self) -> Vec<String> {
        self.opened.lock().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn open_external(&self, url: &str) -> Result<()> {
        self.opened.lock().push(url.to_string());
        Ok(())
    }
}

impl<N: Navigator + ?Sized> Navigator for std::sync::Arc<N> {
    fn open_external(&self, url: &str) -> Result<()> {
        (**self).open_external(url)
    }
}
