//! tabnest Host Document
//!
//! A small arena-backed element tree standing in for the host UI document.
//! It owns element lookup, attribute storage, focus and HTML rendering so the
//! tab controllers above it only deal in [`NodeId`]s and attribute writes.

mod document;
mod error;
mod html;
mod markers;
mod node;
mod spec;

pub use document::{Descendants, Document};
pub use error::DomError;
pub use html::escape_html;
pub use markers::{aria, Marker, Markers};
pub use node::{Node, NodeId};
pub use spec::NodeSpec;

pub type Result<T> = std::result::Result<T, DomError>;
