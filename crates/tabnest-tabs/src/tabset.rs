//! Tab set records

use serde::{Deserialize, Serialize};
use tabnest_dom::NodeId;

/// Index of a tab set in its registry, in document order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SetId(pub(crate) usize);

impl SetId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for SetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "set-{}", self.0)
    }
}

#[derive(Debug, Clone)]
pub struct TabSet {
    pub(crate) id: SetId,
    pub(crate) node: NodeId,
    pub(crate) element_id: Option<String>,
    pub(crate) parent: Option<SetId>,
    pub(crate) tabs: Vec<NodeId>,
    pub(crate) panels: Vec<NodeId>,
    pub(crate) defect: Option<String>,
}

impl TabSet {
    pub(crate) fn new(
        id: SetId,
        node: NodeId,
        element_id: Option<String>,
        parent: Option<SetId>,
    ) -> Self {
        Self {
            id,
            node,
            element_id,
            parent,
            tabs: Vec::new(),
            panels: Vec::new(),
            defect: None,
        }
    }

    pub fn id(&self) -> SetId {
        self.id
    }

    pub fn node(&self) -> NodeId {
        self.node
    }

    pub fn element_id(&self) -> Option<&str> {
        self.element_id.as_deref()
    }

    /// Enclosing set, for sets nested inside another set's panel
    pub fn parent(&self) -> Option<SetId> {
        self.parent
    }

    /// Tabs owned by this set (nested sets' tabs excluded), in order
    pub fn tabs(&self) -> &[NodeId] {
        &self.tabs
    }

    pub fn panels(&self) -> &[NodeId] {
        &self.panels
    }

    pub fn first_tab(&self) -> Option<NodeId> {
        self.tabs.first().copied()
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    /// Why the set cannot be operated on, if it is malformed
    pub fn defect(&self) -> Option<&str> {
        self.defect.as_deref()
    }

    pub fn is_well_formed(&self) -> bool {
        self.defect.is_none()
    }

    /// Human readable label for logs
    pub fn label(&self) -> String {
        match &self.element_id {
            Some(id) => format!("{} ({})", self.id, id),
            None => self.id.to_string(),
        }
    }
}
