//! tabnest Tab Sets
//!
//! Selection semantics for nested tab widgets:
//!
//! ```text
//! TabSet
//!   ├── Tab ─────────┐ aria-labelledby
//!   └── Panel  <─────┘
//!         └── TabSet (nested, optional)
//! ```
//!
//! [`TabRegistry`] resolves the document into this tree once. The
//! [`SelectionMachine`] then writes `aria-selected`, `tabindex` and `hidden`
//! so that every set has exactly one selected tab and one visible panel.

mod audit;
mod cascade;
mod error;
mod machine;
mod markup;
mod registry;
mod state;
mod tab;
mod tabset;

#[cfg(test)]
mod testing;

pub use audit::{audit, Violation};
pub use cascade::{CascadeSnapshot, NestedSelection};
pub use error::TabError;
pub use machine::SelectionMachine;
pub use markup::TabSetMarkup;
pub use registry::TabRegistry;
pub use state::Selection;
pub use tab::{Panel, Tab};
pub use tabset::{SetId, TabSet};

pub type Result<T> = std::result::Result<T, TabError>;
