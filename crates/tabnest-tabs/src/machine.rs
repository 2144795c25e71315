//! Selection State Machine
//!
//! Applies one tab's selection to its whole set: the target becomes the only
//! selected and focusable tab, its panel the only visible one. When the
//! revealed panel contains a nested set, that set's first tab is selected too
//! (forced-first-child), recursively.

use tabnest_dom::{aria, Document, NodeId};

use crate::error::TabError;
use crate::registry::TabRegistry;
use crate::state::Selection;
use crate::tabset::{SetId, TabSet};
use crate::Result;

pub struct SelectionMachine<'a> {
    doc: &'a mut Document,
    registry: &'a TabRegistry,
    /// Cosmetic class toggled on the visible panel; empty disables it
    show_class: &'a str,
}

impl<'a> SelectionMachine<'a> {
    pub fn new(doc: &'a mut Document, registry: &'a TabRegistry, show_class: &'a str) -> Self {
        Self {
            doc,
            registry,
            show_class,
        }
    }

    pub fn document(&self) -> &Document {
        &*self.doc
    }

    pub fn registry(&self) -> &'a TabRegistry {
        self.registry
    }

    /// Current selection of `tab` as written in the document
    pub fn selection(&self, tab: NodeId) -> Selection {
        Selection::read(self.doc, tab)
    }

    /// First tab of `set` marked selected in the document
    pub fn selected_tab(&self, set: &TabSet) -> Option<NodeId> {
        self.registry.selected_in(self.doc, set)
    }

    /// Select `tab` within its set and show its panel.
    ///
    /// Fails with [`TabError::Structure`] before touching the document when
    /// the tab has no well-formed enclosing set.
    pub fn activate(&mut self, tab: NodeId) -> Result<()> {
        let registry = self.registry;
        let set = registry.set_of(tab)?;
        self.apply(set, tab)
    }

    /// Select the first tab of `set` (forced-first-child rule).
    ///
    /// Returns the activated tab, or `None` for a set without tabs.
    pub fn activate_first(&mut self, set: SetId) -> Result<Option<NodeId>> {
        let registry = self.registry;
        let set = registry
            .set(set)
            .ok_or_else(|| TabError::NotFound(set.to_string()))?;
        if let Some(reason) = set.defect() {
            return Err(TabError::Structure(format!("{}: {reason}", set.label())));
        }
        let Some(first) = set.first_tab() else {
            return Ok(None);
        };
        self.apply(set, first)?;
        Ok(Some(first))
    }

    pub fn focus(&mut self, tab: NodeId) -> Result<()> {
        self.doc.focus(tab)?;
        Ok(())
    }

    fn apply(&mut self, set: &TabSet, target: NodeId) -> Result<()> {
        let registry = self.registry;
        let target_tab = registry
            .tab(target)
            .ok_or_else(|| TabError::NotFound(target.to_string()))?;

        for &tab in set.tabs() {
            let selection = Selection::from_selected(tab == target);
            self.doc
                .set_attribute(tab, aria::SELECTED, selection.aria_selected())?;
            self.doc.set_attribute(tab, aria::TABINDEX, selection.tabindex())?;
        }

        let mut revealed = None;
        for &node in set.panels() {
            let Some(panel) = registry.panel(node) else {
                continue;
            };
            let visible = target_tab.controls(panel);
            self.doc.set_hidden(node, !visible)?;
            if !self.show_class.is_empty() {
                if visible {
                    self.doc.add_class(node, self.show_class)?;
                } else {
                    self.doc.remove_class(node, self.show_class)?;
                }
            }
            if visible && revealed.is_none() {
                revealed = panel.nested;
            }
        }

        tracing::debug!(
            set = %set.label(),
            tab = %target,
            position = target_tab.position,
            "Tab selected"
        );

        if let Some(nested) = revealed {
            match self.activate_first(nested) {
                Ok(_) => {}
                Err(TabError::Structure(reason)) => {
                    tracing::warn!(set = %nested, reason = %reason, "Skipping nested tab set");
                }
                Err(e) => return Err(e),
            }
        }

        Ok(())
    }
}
