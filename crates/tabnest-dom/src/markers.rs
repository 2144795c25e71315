//! Marker attributes that identify tab widget parts in a document

use serde::{Deserialize, Serialize};

use crate::node::Node;

/// ARIA and HTML attribute names written by the tab controllers
pub mod aria {
    pub const ROLE: &str = "role";
    pub const SELECTED: &str = "aria-selected";
    pub const LABELLED_BY: &str = "aria-labelledby";
    pub const CONTROLS: &str = "aria-controls";
    pub const TABINDEX: &str = "tabindex";
    pub const HIDDEN: &str = "hidden";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Marker {
    /// Boundary of one tab set, used for nearest-ancestor lookup
    TabSet,
    /// Container of the tab buttons (structural only)
    TabList,
    Tab,
    TabPanel,
}

impl Marker {
    /// Registration order for a node carrying several markers. A panel that
    /// is also a set container joins its enclosing set before opening its own.
    pub const ALL: [Marker; 4] = [
        Marker::TabPanel,
        Marker::TabSet,
        Marker::TabList,
        Marker::Tab,
    ];
}

/// Attribute names carrying each [`Marker`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Markers {
    pub tab_set: String,
    pub tab_list: String,
    pub tab: String,
    pub tab_panel: String,
}

impl Markers {
    pub fn attribute(&self, marker: Marker) -> &str {
        match marker {
            Marker::TabSet => &self.tab_set,
            Marker::TabList => &self.tab_list,
            Marker::Tab => &self.tab,
            Marker::TabPanel => &self.tab_panel,
        }
    }

    /// Every marker `node` carries, in [`Marker::ALL`] order
    pub fn classify<'a>(&'a self, node: &'a Node) -> impl Iterator<Item = Marker> + 'a {
        Marker::ALL
            .into_iter()
            .filter(move |marker| node.has_attribute(self.attribute(*marker)))
    }
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            tab_set: "data-tabset".to_string(),
            tab_list: "data-tablist".to_string(),
            tab: "data-tab".to_string(),
            tab_panel: "data-tabpanel".to_string(),
        }
    }
}
