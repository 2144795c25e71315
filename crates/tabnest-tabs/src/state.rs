//! Tab selection state
//!
//! ```text
//! Unselected  aria-selected="false"  tabindex="-1"
//!   ↓ activate
//! Selected    aria-selected="true"   tabindex="0"
//! ```
//!
//! Focusability is derived: only the selected tab takes part in sequential
//! focus navigation; its siblings are reached with the arrow keys.

use serde::{Deserialize, Serialize};
use tabnest_dom::{aria, Document, NodeId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Selection {
    Selected,
    Unselected,
}

impl Selection {
    pub fn from_selected(selected: bool) -> Self {
        if selected {
            Selection::Selected
        } else {
            Selection::Unselected
        }
    }

    /// Selection of `tab` as written in `doc`; a missing or unreadable
    /// `aria-selected` counts as unselected
    pub fn read(doc: &Document, tab: NodeId) -> Self {
        doc.attribute(tab, aria::SELECTED)
            .and_then(|value| value.parse().ok())
            .unwrap_or(Selection::Unselected)
    }

    pub fn is_selected(&self) -> bool {
        matches!(self, Selection::Selected)
    }

    pub fn is_focusable(&self) -> bool {
        self.is_selected()
    }

    /// Value of the `aria-selected` attribute
    pub fn aria_selected(&self) -> &'static str {
        match self {
            Selection::Selected => "true",
            Selection::Unselected => "false",
        }
    }

    /// Value of the `tabindex` attribute
    pub fn tabindex(&self) -> &'static str {
        match self {
            Selection::Selected => "0",
            Selection::Unselected => "-1",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Selection::Selected => "selected",
            Selection::Unselected => "unselected",
        }
    }
}

impl std::fmt::Display for Selection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Selection {
    type Err = String;

    /// Parses an `aria-selected` value. ARIA treats anything but `"true"` as
    /// not selected, but unknown tokens are reported so callers can decide.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "true" => Ok(Selection::Selected),
            "false" | "" => Ok(Selection::Unselected),
            _ => Err(format!("Unknown aria-selected value: {}", s)),
        }
    }
}
