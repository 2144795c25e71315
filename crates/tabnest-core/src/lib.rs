//! tabnest Core
//!
//! Binds the tab controllers to a host document. [`TabWidget`] is built once
//! from a fully constructed document, registers every tab it finds and then
//! turns pointer and keyboard input on those tabs into selection changes.

mod config;
mod error;
mod widget;

pub use config::Config;
pub use error::CoreError;
pub use widget::{Dispatch, InputEvent, SetState, TabWidget};

// Re-export core components
pub use tabnest_dom::{Document, DomError, Marker, Markers, NodeId, NodeSpec};
pub use tabnest_navigation::{Key, KeyAction, KeyOutcome, NavCommand, NavigationError};
pub use tabnest_tabs::{
    audit, NestedSelection, Selection, SetId, TabError, TabRegistry, TabSetMarkup, Violation,
};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging. Output goes to stderr so stdout stays free for
/// rendered documents.
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
