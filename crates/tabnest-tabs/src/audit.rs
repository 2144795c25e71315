//! Invariant checks over a document's tab sets

use tabnest_dom::{aria, Document, NodeId};

use crate::registry::TabRegistry;
use crate::state::Selection;
use crate::tabset::SetId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// A set must have exactly one selected tab
    SelectionCount { set: SetId, selected: usize },
    /// `tabindex` disagrees with `aria-selected`
    Focusability { set: SetId, tab: NodeId },
    /// A panel is visible while its tab is not selected, or the reverse
    Visibility { set: SetId, panel: NodeId },
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Violation::SelectionCount { set, selected } => {
                write!(f, "{set} has {selected} selected tabs")
            }
            Violation::Focusability { set, tab } => {
                write!(f, "{set}: tabindex of {tab} does not match its selection")
            }
            Violation::Visibility { set, panel } => {
                write!(f, "{set}: visibility of panel {panel} does not match its tab")
            }
        }
    }
}

/// Check every well-formed, non-empty set for the selection invariants
pub fn audit(doc: &Document, registry: &TabRegistry) -> Vec<Violation> {
    let mut violations = Vec::new();

    let selection = |tab: NodeId| Selection::read(doc, tab);

    for set in registry.sets() {
        if !set.is_well_formed() || set.is_empty() {
            continue;
        }

        let selected = set
            .tabs()
            .iter()
            .filter(|tab| selection(**tab).is_selected())
            .count();
        if selected != 1 {
            violations.push(Violation::SelectionCount {
                set: set.id(),
                selected,
            });
        }

        for &tab in set.tabs() {
            if doc.attribute(tab, aria::TABINDEX) != Some(selection(tab).tabindex()) {
                violations.push(Violation::Focusability { set: set.id(), tab });
            }
        }

        for &node in set.panels() {
            let Some(panel) = registry.panel(node) else {
                continue;
            };
            let shown_by_tab = set
                .tabs()
                .iter()
                .filter_map(|tab| registry.tab(*tab))
                .any(|tab| tab.controls(panel) && selection(tab.node).is_selected());
            if doc.is_hidden(node) == shown_by_tab {
                violations.push(Violation::Visibility {
                    set: set.id(),
                    panel: node,
                });
            }
        }
    }

    violations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::Fixture;

    #[test]
    fn test_markup_is_consistent() {
        let fx = Fixture::deep();
        assert_eq!(audit(&fx.doc, &fx.registry), Vec::<Violation>::new());
    }

    #[test]
    fn test_detects_double_selection() {
        let mut fx = Fixture::flat(&["a", "b"]);
        let b = fx.node("b");
        fx.doc.set_attribute(b, "aria-selected", "true").unwrap();

        let violations = audit(&fx.doc, &fx.registry);
        let set = fx.registry.sets()[0].id();
        assert!(violations.contains(&Violation::SelectionCount { set, selected: 2 }));
        assert!(violations.contains(&Violation::Focusability { set, tab: b }));
        assert!(violations.contains(&Violation::Visibility {
            set,
            panel: fx.node("panel-b")
        }));
    }
}
