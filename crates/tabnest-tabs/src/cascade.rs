//! Cascade Resolver
//!
//! After a set's selection changes, every set nested below it is brought back
//! to its default tab: the one currently selected, else the first. Nested sets
//! are processed outer-first, since activating an outer set may itself change
//! what its children hold (forced-first-child).

use serde::{Deserialize, Serialize};
use tabnest_dom::NodeId;

use crate::machine::SelectionMachine;
use crate::tabset::SetId;
use crate::Result;

/// What nested sets show after their ancestor's tab is clicked
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NestedSelection {
    /// Restore the tab each nested set had before the click
    #[default]
    Remembered,
    /// Activate first, then reset from the resulting state; a revealed
    /// nested set therefore shows its first tab
    ForcedFirst,
}

impl NestedSelection {
    pub fn as_str(&self) -> &'static str {
        match self {
            NestedSelection::Remembered => "remembered",
            NestedSelection::ForcedFirst => "forced_first",
        }
    }
}

impl std::fmt::Display for NestedSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Default tab of each nested set, recorded before a parent activation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CascadeSnapshot {
    entries: Vec<(SetId, NodeId)>,
}

impl CascadeSnapshot {
    pub fn get(&self, set: SetId) -> Option<NodeId> {
        self.entries
            .iter()
            .find(|(id, _)| *id == set)
            .map(|(_, tab)| *tab)
    }

    pub fn iter(&self) -> impl Iterator<Item = (SetId, NodeId)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SelectionMachine<'_> {
    /// Selected tab of `set`, else its first tab
    pub fn default_tab(&self, set: SetId) -> Option<NodeId> {
        let set = self.registry().set(set)?;
        self.selected_tab(set).or_else(|| set.first_tab())
    }

    /// Record the default tab of every set nested below `root`
    pub fn capture(&self, root: SetId) -> CascadeSnapshot {
        self.snapshot_of(self.registry().descendants(root))
    }

    fn snapshot_of(&self, sets: impl IntoIterator<Item = SetId>) -> CascadeSnapshot {
        let entries = sets
            .into_iter()
            .filter_map(|set| self.default_tab(set).map(|tab| (set, tab)))
            .collect();
        CascadeSnapshot { entries }
    }

    /// Re-apply a snapshot in order. Returns how many sets were applied.
    pub fn restore(&mut self, snapshot: &CascadeSnapshot) -> usize {
        snapshot
            .iter()
            .filter(|(set, tab)| self.activate_in_cascade(*set, *tab))
            .count()
    }

    /// Re-establish the default tab of every set nested below `root`,
    /// reading each default only once its ancestors have been processed.
    /// Returns how many sets were applied.
    pub fn reset_descendants(&mut self, root: SetId) -> usize {
        let mut applied = 0;
        for set in self.registry().descendants(root) {
            if let Some(tab) = self.default_tab(set) {
                if self.activate_in_cascade(set, tab) {
                    applied += 1;
                }
            }
        }

        tracing::debug!(root = %root, applied, "Reset nested tab sets");

        applied
    }

    /// Bring every set in the document to its default tab, outer sets first,
    /// using the defaults found before any write.
    pub fn normalize(&mut self) -> usize {
        let all = self.registry().sets().iter().map(|set| set.id());
        let snapshot = self.snapshot_of(all);
        let applied = self.restore(&snapshot);

        tracing::info!(sets = applied, "Normalized tab sets");

        applied
    }

    /// Select `tab` as a direct user choice, then settle its nested sets
    /// according to `policy`.
    pub fn select(&mut self, tab: NodeId, policy: NestedSelection) -> Result<()> {
        let set = self.registry().set_of(tab)?.id();

        match policy {
            NestedSelection::Remembered => {
                let snapshot = self.capture(set);
                self.activate(tab)?;
                self.restore(&snapshot);
            }
            NestedSelection::ForcedFirst => {
                self.activate(tab)?;
                self.reset_descendants(set);
            }
        }

        Ok(())
    }

    /// Malformed nested sets are skipped so the rest of the cascade proceeds.
    fn activate_in_cascade(&mut self, set: SetId, tab: NodeId) -> bool {
        match self.activate(tab) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(set = %set, tab = %tab, error = %e, "Skipping tab set in cascade");
                false
            }
        }
    }
}
