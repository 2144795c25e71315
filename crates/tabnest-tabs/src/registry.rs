//! Tab Registry
//!
//! Resolves the marker attributes of a document into an explicit tree of tab
//! sets, tabs and panels. Built once at initialization; every later lookup
//! (owning set, panel of a tab, nested set of a panel) is a map access rather
//! than a walk over the document.

use std::collections::{HashMap, HashSet};

use tabnest_dom::{aria, Document, Marker, Markers, NodeId};

use crate::error::TabError;
use crate::state::Selection;
use crate::tab::{Panel, Tab};
use crate::tabset::{SetId, TabSet};
use crate::Result;

#[derive(Debug, Clone)]
pub struct TabRegistry {
    sets: Vec<TabSet>,
    tabs: HashMap<NodeId, Tab>,
    panels: HashMap<NodeId, Panel>,
    /// Every tab node in document order, including tabs outside any set
    tab_order: Vec<NodeId>,
    set_by_node: HashMap<NodeId, SetId>,
}

impl TabRegistry {
    /// Scan `doc` once and build the tab tree.
    ///
    /// Malformed sets are kept but flagged (see [`TabSet::defect`]); the
    /// selection machine refuses to touch them.
    pub fn build(doc: &Document, markers: &Markers) -> Self {
        let mut registry = Self {
            sets: Vec::new(),
            tabs: HashMap::new(),
            panels: HashMap::new(),
            tab_order: Vec::new(),
            set_by_node: HashMap::new(),
        };

        // Pre-order guarantees enclosing sets are registered first.
        for node_id in doc.ids() {
            let Some(node) = doc.node(node_id) else {
                continue;
            };
            for marker in markers.classify(node) {
                match marker {
                    Marker::TabPanel => registry.register_panel(doc, markers, node_id),
                    Marker::TabSet => registry.register_set(doc, markers, node_id),
                    Marker::Tab => registry.register_tab(doc, markers, node_id),
                    Marker::TabList => {}
                }
            }
        }

        registry.link_nested(doc, markers);
        registry.validate();

        tracing::info!(
            sets = registry.sets.len(),
            tabs = registry.tabs.len(),
            panels = registry.panels.len(),
            "Built tab registry"
        );

        registry
    }

    fn enclosing_set(&self, doc: &Document, markers: &Markers, node: NodeId) -> Option<SetId> {
        let parent = doc.node(node)?.parent()?;
        let set_node = doc.closest(parent, markers.attribute(Marker::TabSet))?;
        self.set_by_node.get(&set_node).copied()
    }

    fn register_set(&mut self, doc: &Document, markers: &Markers, node: NodeId) {
        let id = SetId(self.sets.len());
        let parent = self.enclosing_set(doc, markers, node);
        let element_id = doc.attribute(node, "id").map(str::to_string);

        self.sets.push(TabSet::new(id, node, element_id, parent));
        self.set_by_node.insert(node, id);
    }

    fn register_tab(&mut self, doc: &Document, markers: &Markers, node: NodeId) {
        let set = self.enclosing_set(doc, markers, node);
        let position = match set {
            Some(set_id) => {
                let tabs = &mut self.sets[set_id.0].tabs;
                tabs.push(node);
                tabs.len() - 1
            }
            None => {
                tracing::warn!(node = %node, "Tab has no enclosing tab set");
                0
            }
        };

        self.tabs.insert(
            node,
            Tab {
                node,
                element_id: doc.attribute(node, "id").map(str::to_string),
                set,
                position,
            },
        );
        self.tab_order.push(node);
    }

    fn register_panel(&mut self, doc: &Document, markers: &Markers, node: NodeId) {
        let Some(set) = self.enclosing_set(doc, markers, node) else {
            tracing::warn!(node = %node, "Tab panel has no enclosing tab set, ignoring");
            return;
        };

        self.sets[set.0].panels.push(node);
        self.panels.insert(
            node,
            Panel {
                node,
                labelled_by: doc.attribute(node, aria::LABELLED_BY).map(str::to_string),
                set,
                nested: None,
            },
        );
    }

    /// A panel's nested set is the first set below it in document order,
    /// provided that set is a direct child set of the panel's own set.
    /// A panel that is itself a set container is not its own nested set.
    fn link_nested(&mut self, doc: &Document, markers: &Markers) {
        let set_marker = markers.attribute(Marker::TabSet);
        let (sets, set_by_node) = (&self.sets, &self.set_by_node);
        for panel in self.panels.values_mut() {
            panel.nested = doc
                .query_first(panel.node, set_marker)
                .and_then(|node| set_by_node.get(&node).copied())
                .filter(|nested| sets[nested.0].parent == Some(panel.set));
        }
    }

    fn validate(&mut self) {
        for index in 0..self.sets.len() {
            let defect = self.find_defect(&self.sets[index]);
            if let Some(reason) = &defect {
                tracing::warn!(set = %self.sets[index].label(), reason = %reason, "Malformed tab set");
            }
            self.sets[index].defect = defect;
        }
    }

    fn find_defect(&self, set: &TabSet) -> Option<String> {
        let mut seen = HashSet::new();
        for tab in set.tabs.iter().filter_map(|node| self.tabs.get(node)) {
            if let Some(id) = &tab.element_id {
                if !seen.insert(id.as_str()) {
                    return Some(format!("duplicate tab id {id:?}"));
                }
            }
        }

        for panel in set.panels.iter().filter_map(|node| self.panels.get(node)) {
            match &panel.labelled_by {
                Some(labelled_by) if seen.contains(labelled_by.as_str()) => {}
                Some(labelled_by) => {
                    return Some(format!(
                        "panel {} is labelled by unknown tab {labelled_by:?}",
                        panel.node
                    ));
                }
                None => {
                    return Some(format!("panel {} has no aria-labelledby", panel.node));
                }
            }
        }

        None
    }

    // === Lookups ===

    pub fn sets(&self) -> &[TabSet] {
        &self.sets
    }

    pub fn set(&self, id: SetId) -> Option<&TabSet> {
        self.sets.get(id.0)
    }

    /// Sets not nested in any other set
    pub fn roots(&self) -> impl Iterator<Item = &TabSet> {
        self.sets.iter().filter(|set| set.parent.is_none())
    }

    pub fn tab(&self, node: NodeId) -> Option<&Tab> {
        self.tabs.get(&node)
    }

    pub fn panel(&self, node: NodeId) -> Option<&Panel> {
        self.panels.get(&node)
    }

    /// Every tab node in document order
    pub fn tab_nodes(&self) -> &[NodeId] {
        &self.tab_order
    }

    pub fn tab_by_element_id(&self, element_id: &str) -> Option<NodeId> {
        self.tab_order.iter().copied().find(|node| {
            self.tabs
                .get(node)
                .and_then(|tab| tab.element_id.as_deref())
                == Some(element_id)
        })
    }

    /// The well-formed set owning `tab`.
    ///
    /// Fails with [`TabError::Structure`] when the tab sits outside any set
    /// or its set is malformed.
    pub fn set_of(&self, tab: NodeId) -> Result<&TabSet> {
        self.locate(tab).map(|(set, _)| set)
    }

    /// The well-formed set owning `tab` and the tab's index in it
    pub fn locate(&self, tab: NodeId) -> Result<(&TabSet, usize)> {
        let record = self
            .tabs
            .get(&tab)
            .ok_or_else(|| TabError::NotFound(tab.to_string()))?;
        let set = record
            .set
            .and_then(|id| self.set(id))
            .ok_or_else(|| TabError::Structure(format!("tab {tab} has no enclosing tab set")))?;
        if let Some(reason) = set.defect() {
            return Err(TabError::Structure(format!("{}: {reason}", set.label())));
        }
        Ok((set, record.position))
    }

    /// First tab of `set` marked selected in `doc`
    pub fn selected_in(&self, doc: &Document, set: &TabSet) -> Option<NodeId> {
        set.tabs
            .iter()
            .copied()
            .find(|tab| Selection::read(doc, *tab).is_selected())
    }

    /// Panel controlled by `tab` within `set`
    pub fn panel_of(&self, set: &TabSet, tab: NodeId) -> Option<&Panel> {
        let tab = self.tabs.get(&tab)?;
        set.panels
            .iter()
            .filter_map(|node| self.panels.get(node))
            .find(|panel| tab.controls(panel))
    }

    /// Every set nested below `root` at any depth, outer sets first
    pub fn descendants(&self, root: SetId) -> Vec<SetId> {
        // Sets are in document order, so a parent always precedes its children.
        let mut inside = HashSet::from([root]);
        let mut result = Vec::new();
        for set in self.sets.iter().skip(root.0 + 1) {
            if let Some(parent) = set.parent {
                if inside.contains(&parent) {
                    inside.insert(set.id);
                    result.push(set.id);
                }
            }
        }
        result
    }
}
