//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Document error: {0}")]
    Dom(#[from] tabnest_dom::DomError),

    #[error("Tab error: {0}")]
    Tab(#[from] tabnest_tabs::TabError),

    #[error("Navigation error: {0}")]
    Navigation(#[from] tabnest_navigation::NavigationError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("No tab with id {0:?}")]
    UnknownTab(String),

    #[error("Tab widget not initialized")]
    NotInitialized,
}
