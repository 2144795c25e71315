//! Tab and panel records resolved from the document

use tabnest_dom::NodeId;

use crate::tabset::SetId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    /// Document node carrying the tab marker
    pub node: NodeId,
    /// Element `id`, referenced by the panel's `aria-labelledby`
    pub element_id: Option<String>,
    /// Owning set; `None` when no tab-set marker encloses the tab
    pub set: Option<SetId>,
    /// Ordinal within the owning set's tab sequence
    pub position: usize,
}

impl Tab {
    /// Whether `panel` is the panel this tab controls
    pub fn controls(&self, panel: &Panel) -> bool {
        match (&self.element_id, &panel.labelled_by) {
            (Some(id), Some(labelled_by)) => id == labelled_by,
            _ => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panel {
    pub node: NodeId,
    pub labelled_by: Option<String>,
    pub set: SetId,
    /// First tab set found inside the panel, if any
    pub nested: Option<SetId>,
}
