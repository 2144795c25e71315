//! Builder for accessible tab set markup.
//!
//! Produces the structure the registry expects, with the first tab selected
//! and every other panel hidden:
//!
//! ```html
//! <div data-tabset id="os">
//!   <div role="tablist" data-tablist>
//!     <button role="tab" id="mac" aria-controls="panel-mac"
//!             aria-selected="true" tabindex="0" data-tab>mac</button>
//!     <button role="tab" id="linux" aria-controls="panel-linux"
//!             aria-selected="false" tabindex="-1" data-tab>linux</button>
//!   </div>
//!   <div role="tabpanel" id="panel-mac" aria-labelledby="mac" data-tabpanel></div>
//!   <div role="tabpanel" id="panel-linux" aria-labelledby="linux" data-tabpanel hidden></div>
//! </div>
//! ```

use tabnest_dom::{aria, Marker, Markers, NodeSpec};

use crate::state::Selection;

#[derive(Debug, Clone)]
struct Entry {
    id: String,
    label: String,
    content: Vec<NodeSpec>,
}

#[derive(Debug, Clone)]
pub struct TabSetMarkup {
    id: String,
    entries: Vec<Entry>,
}

impl TabSetMarkup {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            entries: Vec::new(),
        }
    }

    /// Add a tab whose label is its id and whose panel is empty
    pub fn tab(self, id: impl Into<String>) -> Self {
        let id = id.into();
        self.labelled_tab(id.clone(), id, Vec::new())
    }

    /// Add a tab whose panel holds `content`
    pub fn tab_with(self, id: impl Into<String>, content: NodeSpec) -> Self {
        let id = id.into();
        self.labelled_tab(id.clone(), id, vec![content])
    }

    pub fn labelled_tab(
        mut self,
        id: impl Into<String>,
        label: impl Into<String>,
        content: Vec<NodeSpec>,
    ) -> Self {
        self.entries.push(Entry {
            id: id.into(),
            label: label.into(),
            content,
        });
        self
    }

    pub fn build(&self, markers: &Markers) -> NodeSpec {
        let mut list = NodeSpec::element("div")
            .attr(aria::ROLE, "tablist")
            .flag(markers.attribute(Marker::TabList));
        let mut panels = Vec::with_capacity(self.entries.len());

        for (idx, entry) in self.entries.iter().enumerate() {
            let selection = Selection::from_selected(idx == 0);
            let panel_id = format!("panel-{}", entry.id);

            list = list.child(
                NodeSpec::element("button")
                    .attr(aria::ROLE, "tab")
                    .attr("id", entry.id.as_str())
                    .attr(aria::CONTROLS, panel_id.as_str())
                    .attr(aria::SELECTED, selection.aria_selected())
                    .attr(aria::TABINDEX, selection.tabindex())
                    .flag(markers.attribute(Marker::Tab))
                    .text(entry.label.as_str()),
            );

            let mut panel = NodeSpec::element("div")
                .attr(aria::ROLE, "tabpanel")
                .attr("id", panel_id)
                .attr(aria::LABELLED_BY, entry.id.as_str())
                .flag(markers.attribute(Marker::TabPanel))
                .children(entry.content.iter().cloned());
            if !selection.is_selected() {
                panel = panel.flag(aria::HIDDEN);
            }
            panels.push(panel);
        }

        NodeSpec::element("div")
            .attr("id", self.id.as_str())
            .flag(markers.attribute(Marker::TabSet))
            .child(list)
            .children(panels)
    }
}
