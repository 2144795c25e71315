//! Shared fixtures for unit tests

use tabnest_dom::{Document, Markers, NodeId, NodeSpec};

use crate::machine::SelectionMachine;
use crate::markup::TabSetMarkup;
use crate::registry::TabRegistry;
use crate::state::Selection;

pub(crate) struct Fixture {
    pub doc: Document,
    pub registry: TabRegistry,
}

impl Fixture {
    pub fn new(root: NodeSpec) -> Self {
        let doc = Document::from_spec(NodeSpec::element("main").child(root)).unwrap();
        let registry = TabRegistry::build(&doc, &Markers::default());
        Self { doc, registry }
    }

    /// One set with the given tabs
    pub fn flat(tabs: &[&str]) -> Self {
        let markup = tabs
            .iter()
            .fold(TabSetMarkup::new("flat"), |markup, id| markup.tab(*id));
        Self::new(markup.build(&Markers::default()))
    }

    /// `outer [p1, p2 -> inner [c1, c2]]`
    pub fn nested() -> Self {
        let markers = Markers::default();
        let inner = TabSetMarkup::new("inner").tab("c1").tab("c2");
        let outer = TabSetMarkup::new("outer")
            .tab("p1")
            .tab_with("p2", inner.build(&markers));
        Self::new(outer.build(&markers))
    }

    /// `outer [p1, p2 -> mid [m1, m2 -> leaf [l1, l2]]]`
    pub fn deep() -> Self {
        let markers = Markers::default();
        let leaf = TabSetMarkup::new("leaf").tab("l1").tab("l2");
        let mid = TabSetMarkup::new("mid")
            .tab("m1")
            .tab_with("m2", leaf.build(&markers));
        let outer = TabSetMarkup::new("outer")
            .tab("p1")
            .tab_with("p2", mid.build(&markers));
        Self::new(outer.build(&markers))
    }

    /// `crossed [a, b]` with panels in the opposite order; `panel-b` holds
    /// `inner [c1, c2]`
    pub fn crossed() -> Self {
        let inner = TabSetMarkup::new("inner")
            .tab("c1")
            .tab("c2")
            .build(&Markers::default());
        Self::new(
            NodeSpec::element("div")
                .flag("data-tabset")
                .attr("id", "crossed")
                .children([
                    tab_list(&[("a", true), ("b", false)]),
                    panel("b", true).child(inner),
                    panel("a", false),
                ]),
        )
    }

    /// `outer [p1, p2]` where `panel-p2` is itself the container of
    /// `panel-p2 [c1, c2]`
    pub fn panel_set() -> Self {
        let inner = TabSetMarkup::new("panel-p2")
            .tab("c1")
            .tab("c2")
            .build(&Markers::default())
            .flag("data-tabpanel")
            .flag("hidden")
            .attr("aria-labelledby", "p2");
        Self::new(
            NodeSpec::element("div")
                .flag("data-tabset")
                .attr("id", "outer")
                .children([
                    tab_list(&[("p1", true), ("p2", false)]),
                    panel("p1", false),
                    inner,
                ]),
        )
    }

    /// A well-formed set plus a tab outside any set
    pub fn with_orphan() -> Self {
        let set = TabSetMarkup::new("flat").tab("a").build(&Markers::default());
        Self::new(
            NodeSpec::element("div").child(set).child(
                NodeSpec::element("button")
                    .flag("data-tab")
                    .attr("id", "lost"),
            ),
        )
    }

    pub fn machine(&mut self) -> SelectionMachine<'_> {
        SelectionMachine::new(&mut self.doc, &self.registry, "is-show")
    }

    pub fn node(&self, element_id: &str) -> NodeId {
        self.doc
            .element_by_id(element_id)
            .unwrap_or_else(|| panic!("no element with id {element_id}"))
    }

    pub fn is_selected(&self, tab: &str) -> bool {
        self.doc.attribute(self.node(tab), "aria-selected") == Some("true")
    }

    pub fn is_panel_visible(&self, tab: &str) -> bool {
        !self.doc.is_hidden(self.node(&format!("panel-{tab}")))
    }
}

fn tab_list(tabs: &[(&str, bool)]) -> NodeSpec {
    NodeSpec::element("div")
        .flag("data-tablist")
        .children(tabs.iter().map(|(id, selected)| {
            let selection = Selection::from_selected(*selected);
            NodeSpec::element("button")
                .flag("data-tab")
                .attr("id", *id)
                .attr("aria-selected", selection.aria_selected())
                .attr("tabindex", selection.tabindex())
        }))
}

fn panel(tab: &str, hidden: bool) -> NodeSpec {
    let panel = NodeSpec::element("div")
        .flag("data-tabpanel")
        .attr("id", format!("panel-{tab}"))
        .attr("aria-labelledby", tab);
    if hidden {
        panel.flag("hidden")
    } else {
        panel
    }
}
