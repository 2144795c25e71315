//! Tab widget: initialization and event binding
//!
//! The widget owns the document. Every tab present at construction is bound
//! exactly once; tabs that only appear later are never picked up.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use tabnest_dom::{Document, NodeId};
use tabnest_navigation::{Key, KeyOutcome, KeyboardController, NavigationError};
use tabnest_tabs::{audit, SelectionMachine, SetId, TabError, TabRegistry, Violation};

use crate::config::Config;
use crate::error::CoreError;
use crate::Result;

/// Input delivered by the host to a node of the document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputEvent {
    Click { target: NodeId },
    KeyDown { target: NodeId, key: Key },
}

impl InputEvent {
    pub fn target(&self) -> NodeId {
        match self {
            InputEvent::Click { target } | InputEvent::KeyDown { target, .. } => *target,
        }
    }
}

/// What became of a dispatched event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum Dispatch {
    /// Target is not a bound tab
    Unbound,
    /// A key the widget does not handle
    Ignored,
    Handled { default_prevented: bool },
    /// The tab's structure is broken; nothing was changed
    Abandoned,
}

/// Read-only view of one tab set
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SetState {
    pub set: SetId,
    pub element_id: Option<String>,
    pub parent: Option<SetId>,
    /// Id of the selected tab, or its node handle when it has none
    pub selected: Option<String>,
    pub visible_panels: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defect: Option<String>,
}

pub struct TabWidget {
    config: Config,
    document: Document,
    registry: TabRegistry,
    keyboard: KeyboardController,
    /// Tabs found at initialization
    bindings: HashSet<NodeId>,
}

impl TabWidget {
    /// Bind to a fully constructed document
    pub fn new(document: Document, config: Config) -> Result<Self> {
        config.validate()?;

        let registry = TabRegistry::build(&document, &config.markers);
        let bindings: HashSet<NodeId> = registry.tab_nodes().iter().copied().collect();

        let mut widget = Self {
            config,
            document,
            registry,
            keyboard: KeyboardController::new(),
            bindings,
        };

        if widget.config.normalize_on_init {
            widget.machine().normalize();
        }

        tracing::info!(
            tabs = widget.bindings.len(),
            sets = widget.registry.sets().len(),
            policy = %widget.config.nested_selection,
            "Tab widget initialized"
        );

        Ok(widget)
    }

    pub fn from_json(json: &str, config: Config) -> Result<Self> {
        Self::new(Document::from_json(json)?, config)
    }

    fn machine(&mut self) -> SelectionMachine<'_> {
        SelectionMachine::new(&mut self.document, &self.registry, &self.config.show_class)
    }

    // === Event binding ===

    /// Route one host event. Structure errors are logged and the event is
    /// dropped; they never escape as failures.
    pub fn dispatch(&mut self, event: &InputEvent) -> Dispatch {
        let target = event.target();
        if !self.bindings.contains(&target) {
            tracing::trace!(target = %target, "Event on unbound node");
            return Dispatch::Unbound;
        }

        let result = match event {
            InputEvent::Click { target } => self.click(*target).map(|()| Dispatch::Handled {
                default_prevented: false,
            }),
            InputEvent::KeyDown { target, key } => {
                self.key_down(*target, key).map(|outcome| {
                    if outcome.is_handled() {
                        Dispatch::Handled {
                            default_prevented: outcome.default_prevented,
                        }
                    } else {
                        Dispatch::Ignored
                    }
                })
            }
        };

        match result {
            Ok(dispatch) => dispatch,
            Err(e) if is_structure_error(&e) => {
                tracing::warn!(target = %target, error = %e, "Tab event abandoned");
                Dispatch::Abandoned
            }
            Err(e) => {
                tracing::error!(target = %target, error = %e, "Tab event failed");
                Dispatch::Abandoned
            }
        }
    }

    /// Pointer activation of `tab`
    pub fn click(&mut self, tab: NodeId) -> Result<()> {
        let policy = self.config.nested_selection;
        self.machine().select(tab, policy)?;
        Ok(())
    }

    /// Key press while `tab` has focus
    pub fn key_down(&mut self, tab: NodeId, key: &Key) -> Result<KeyOutcome> {
        let mut machine =
            SelectionMachine::new(&mut self.document, &self.registry, &self.config.show_class);
        Ok(self.keyboard.on_key(&mut machine, tab, key)?)
    }

    /// Bound tab with the given element id
    pub fn tab(&self, element_id: &str) -> Result<NodeId> {
        self.registry
            .tab_by_element_id(element_id)
            .ok_or_else(|| CoreError::UnknownTab(element_id.to_string()))
    }

    // === Inspection ===

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn registry(&self) -> &TabRegistry {
        &self.registry
    }

    pub fn is_bound(&self, node: NodeId) -> bool {
        self.bindings.contains(&node)
    }

    pub fn states(&self) -> Vec<SetState> {
        self.registry
            .sets()
            .iter()
            .map(|set| SetState {
                set: set.id(),
                element_id: set.element_id().map(str::to_string),
                parent: set.parent(),
                selected: self
                    .registry
                    .selected_in(&self.document, set)
                    .map(|tab| self.describe(tab)),
                visible_panels: set
                    .panels()
                    .iter()
                    .filter(|panel| !self.document.is_hidden(**panel))
                    .map(|panel| self.describe(*panel))
                    .collect(),
                defect: set.defect().map(str::to_string),
            })
            .collect()
    }

    pub fn violations(&self) -> Vec<Violation> {
        audit(&self.document, &self.registry)
    }

    pub fn to_html(&self) -> String {
        self.document.to_html()
    }

    fn describe(&self, node: NodeId) -> String {
        self.document
            .attribute(node, "id")
            .map(str::to_string)
            .unwrap_or_else(|| node.to_string())
    }
}

fn is_structure_error(error: &CoreError) -> bool {
    matches!(
        error,
        CoreError::Tab(TabError::Structure(_))
            | CoreError::Navigation(NavigationError::Tab(TabError::Structure(_)))
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use tabnest_dom::{Markers, NodeSpec};
    use tabnest_tabs::{NestedSelection, TabSetMarkup};

    fn nested_doc() -> Document {
        let markers = Markers::default();
        let inner = TabSetMarkup::new("inner").tab("c1").tab("c2");
        let outer = TabSetMarkup::new("outer")
            .tab("p1")
            .tab_with("p2", inner.build(&markers));
        Document::from_spec(NodeSpec::element("main").child(outer.build(&markers))).unwrap()
    }

    fn bare_set() -> NodeSpec {
        NodeSpec::element("div").flag("data-tabset").children([
            NodeSpec::element("div").flag("data-tablist").children([
                NodeSpec::element("button").flag("data-tab").attr("id", "a"),
                NodeSpec::element("button").flag("data-tab").attr("id", "b"),
            ]),
            NodeSpec::element("div")
                .flag("data-tabpanel")
                .attr("id", "panel-a")
                .attr("aria-labelledby", "a"),
            NodeSpec::element("div")
                .flag("data-tabpanel")
                .attr("id", "panel-b")
                .attr("aria-labelledby", "b"),
        ])
    }

    fn widget(policy: NestedSelection) -> TabWidget {
        let config = Config {
            nested_selection: policy,
            ..Config::default()
        };
        TabWidget::new(nested_doc(), config).unwrap()
    }

    fn click(widget: &mut TabWidget, id: &str) -> Dispatch {
        let target = widget.tab(id).unwrap();
        widget.dispatch(&InputEvent::Click { target })
    }

    fn selected(widget: &TabWidget, id: &str) -> bool {
        let node = widget.tab(id).unwrap();
        widget.document().attribute(node, "aria-selected") == Some("true")
    }

    #[test]
    fn test_click_selects_and_reveals() {
        let mut w = widget(NestedSelection::Remembered);

        let dispatch = click(&mut w, "p2");

        assert_eq!(dispatch, Dispatch::Handled { default_prevented: false });
        assert!(selected(&w, "p2"));
        assert!(selected(&w, "c1"));
        let panel = w.document().element_by_id("panel-p2").unwrap();
        assert!(!w.document().is_hidden(panel));
        assert!(w.document().has_class(panel, "is-show"));
        assert_eq!(w.violations(), Vec::<Violation>::new());
    }

    #[test]
    fn test_remembered_policy_restores_nested_choice() {
        let mut w = widget(NestedSelection::Remembered);
        for id in ["p2", "c2", "p1", "p2"] {
            click(&mut w, id);
        }

        assert!(selected(&w, "c2"));
        assert!(!selected(&w, "c1"));
    }

    #[test]
    fn test_forced_first_policy_resets_nested_choice() {
        let mut w = widget(NestedSelection::ForcedFirst);
        for id in ["p2", "c2", "p1", "p2"] {
            click(&mut w, id);
        }

        assert!(selected(&w, "c1"));
        assert!(!selected(&w, "c2"));
    }

    #[test]
    fn test_key_down_moves_selection() {
        let mut w = widget(NestedSelection::Remembered);
        let p1 = w.tab("p1").unwrap();

        let dispatch = w.dispatch(&InputEvent::KeyDown {
            target: p1,
            key: Key::ArrowLeft,
        });

        assert_eq!(dispatch, Dispatch::Handled { default_prevented: true });
        assert!(selected(&w, "p2"));
        assert_eq!(w.document().focused(), w.tab("p2").ok());

        let ignored = w.dispatch(&InputEvent::KeyDown {
            target: p1,
            key: Key::parse("Escape"),
        });
        assert_eq!(ignored, Dispatch::Ignored);
    }

    #[test]
    fn test_unbound_target() {
        let mut w = widget(NestedSelection::Remembered);
        let before = w.to_html();
        let root = w.document().root();

        assert_eq!(w.dispatch(&InputEvent::Click { target: root }), Dispatch::Unbound);
        assert_eq!(w.to_html(), before);
    }

    #[test]
    fn test_orphan_tab_event_is_abandoned() {
        let doc = Document::from_spec(
            NodeSpec::element("main")
                .child(bare_set())
                .child(NodeSpec::element("button").flag("data-tab").attr("id", "lost")),
        )
        .unwrap();
        let mut w = TabWidget::new(doc, Config::default()).unwrap();
        let before = w.to_html();
        let lost = w.tab("lost").unwrap();

        assert!(w.is_bound(lost));
        assert_eq!(w.dispatch(&InputEvent::Click { target: lost }), Dispatch::Abandoned);
        assert_eq!(
            w.dispatch(&InputEvent::KeyDown {
                target: lost,
                key: Key::Enter
            }),
            Dispatch::Abandoned
        );
        assert_eq!(w.to_html(), before);
    }

    #[test]
    fn test_init_normalizes_unmarked_set() {
        let doc = Document::from_spec(bare_set()).unwrap();
        let w = TabWidget::new(doc, Config::default()).unwrap();

        assert!(selected(&w, "a"));
        assert!(!selected(&w, "b"));
        let states = w.states();
        assert_eq!(states.len(), 1);
        assert_eq!(states[0].selected.as_deref(), Some("a"));
        assert_eq!(states[0].visible_panels, vec!["panel-a".to_string()]);
    }

    #[test]
    fn test_init_without_normalization_leaves_document() {
        let doc = Document::from_spec(bare_set()).unwrap();
        let before = doc.to_html();
        let config = Config {
            normalize_on_init: false,
            ..Config::default()
        };
        let w = TabWidget::new(doc, config).unwrap();

        assert_eq!(w.to_html(), before);
        assert!(!w.violations().is_empty());
    }

    #[test]
    fn test_panel_doubling_as_set_is_hidden_with_its_tab() {
        let markers = Markers::default();
        let container = TabSetMarkup::new("panel-p2")
            .tab("c1")
            .tab("c2")
            .build(&markers)
            .flag("data-tabpanel")
            .attr("aria-labelledby", "p2");
        let outer = NodeSpec::element("div").flag("data-tabset").children([
            NodeSpec::element("div").flag("data-tablist").children([
                NodeSpec::element("button").flag("data-tab").attr("id", "p1"),
                NodeSpec::element("button").flag("data-tab").attr("id", "p2"),
            ]),
            NodeSpec::element("div")
                .flag("data-tabpanel")
                .attr("id", "panel-p1")
                .attr("aria-labelledby", "p1"),
            container,
        ]);
        let mut w = TabWidget::new(Document::from_spec(outer).unwrap(), Config::default()).unwrap();

        click(&mut w, "p1");

        let doc = w.document();
        assert!(!doc.is_hidden(doc.element_by_id("panel-p1").unwrap()));
        assert!(doc.is_hidden(doc.element_by_id("panel-p2").unwrap()));
        assert_eq!(w.states()[0].visible_panels, vec!["panel-p1".to_string()]);
        assert_eq!(w.violations(), Vec::<Violation>::new());
    }

    #[test]
    fn test_unknown_tab_id() {
        let w = widget(NestedSelection::Remembered);
        assert!(matches!(w.tab("nope"), Err(CoreError::UnknownTab(_))));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = Config {
            show_class: "a b".to_string(),
            ..Config::default()
        };
        let result = TabWidget::new(nested_doc(), config);
        assert!(matches!(result, Err(CoreError::Config(_))));
    }

    const TAB_IDS: [&str; 4] = ["p1", "p2", "c1", "c2"];
    const KEYS: [&str; 5] = ["ArrowRight", "ArrowLeft", "Enter", " ", "Tab"];

    proptest! {
        #[test]
        fn prop_any_input_sequence_keeps_sets_consistent(
            forced in any::<bool>(),
            events in prop::collection::vec((0..TAB_IDS.len(), prop::option::of(0..KEYS.len())), 0..40),
        ) {
            let policy = if forced {
                NestedSelection::ForcedFirst
            } else {
                NestedSelection::Remembered
            };
            let mut w = widget(policy);

            for (tab, key) in events {
                let target = w.tab(TAB_IDS[tab]).unwrap();
                let event = match key {
                    Some(key) => InputEvent::KeyDown { target, key: Key::parse(KEYS[key]) },
                    None => InputEvent::Click { target },
                };
                prop_assert_ne!(w.dispatch(&event), Dispatch::Abandoned);
                prop_assert_eq!(w.violations(), Vec::<Violation>::new());
            }
        }
    }
}
