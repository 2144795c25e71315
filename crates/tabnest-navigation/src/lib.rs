//! tabnest Keyboard Navigation
//!
//! Key handling for a focused tab:
//! - `ArrowRight` / `ArrowLeft` → move to the next / previous tab, wrapping
//! - `Enter` / `Space` → activate the focused tab
//! - anything else → ignored, left to the host

mod command;
mod error;
mod key;
mod keyboard;

pub use command::NavCommand;
pub use error::NavigationError;
pub use key::Key;
pub use keyboard::{KeyAction, KeyOutcome, KeyboardController};

pub type Result<T> = std::result::Result<T, NavigationError>;
