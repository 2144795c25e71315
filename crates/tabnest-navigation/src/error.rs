//! Navigation error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum NavigationError {
    #[error("Tab error: {0}")]
    Tab(#[from] tabnest_tabs::TabError),
}
