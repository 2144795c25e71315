//! Tab error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TabError {
    /// The document does not form a well-formed tab widget around this node
    #[error("Structure error: {0}")]
    Structure(String),

    #[error("Tab not found: {0}")]
    NotFound(String),

    #[error("Document error: {0}")]
    Dom(#[from] tabnest_dom::DomError),
}
