//! Application state management
use parking_lot::RwLock;
use std::sync::Arc;
use tabnest_core::{Config, CoreError, Result, TabWidget};

/// Thread-safe application state wrapper
#[derive(Clone, Default)]
pub struct AppState {
    widget: Arc<RwLock<Option<TabWidget>>>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `document_json` and bind a widget to it, replacing any
    /// previous one
    pub fn initialize(&self, document_json: &str, config: Config) -> Result<()> {
        let widget = TabWidget::from_json(document_json, config)?;
        *self.widget.write() = Some(widget);
        Ok(())
    }

    pub fn with_widget<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&TabWidget) -> Result<T>,
    {
        let guard = self.widget.read();
        match guard.as_ref() {
            Some(widget) => f(widget),
            None => Err(CoreError::NotInitialized),
        }
    }

    pub fn with_widget_mut<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut TabWidget) -> Result<T>,
    {
        let mut guard = self.widget.write();
        match guard.as_mut() {
            Some(widget) => f(widget),
            None => Err(CoreError::NotInitialized),
        }
    }
}
