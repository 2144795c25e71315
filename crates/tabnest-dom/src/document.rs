//! Document tree and its query, attribute and focus primitives

use crate::error::DomError;
use crate::markers::aria;
use crate::node::{Node, NodeId};
use crate::spec::NodeSpec;
use crate::Result;

/// Static element tree.
///
/// Nodes are stored in pre-order, so a [`NodeId`] also gives document order.
/// The shape never changes after construction; only attributes, classes and
/// focus do.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Node>,
    focused: Option<NodeId>,
}

impl Document {
    pub fn from_spec(spec: NodeSpec) -> Result<Self> {
        let mut doc = Self {
            nodes: Vec::new(),
            focused: None,
        };
        doc.insert(spec, None)?;

        tracing::debug!(nodes = doc.nodes.len(), "Built document");

        Ok(doc)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let spec: NodeSpec = serde_json::from_str(json)?;
        Self::from_spec(spec)
    }

    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        let spec: NodeSpec = serde_json::from_value(value)?;
        Self::from_spec(spec)
    }

    fn insert(&mut self, spec: NodeSpec, parent: Option<NodeId>) -> Result<NodeId> {
        if spec.tag.trim().is_empty() {
            return Err(DomError::InvalidDocument(
                "element tag cannot be empty".to_string(),
            ));
        }
        if !is_markup_name(&spec.tag) {
            return Err(DomError::InvalidDocument(format!(
                "invalid element tag {:?}",
                spec.tag
            )));
        }
        if let Some(name) = spec.attributes.keys().find(|name| !is_markup_name(name)) {
            return Err(DomError::InvalidDocument(format!(
                "invalid attribute name {name:?} on <{}>",
                spec.tag
            )));
        }

        let id = NodeId(self.nodes.len());
        let mut node = Node::new(spec.tag, parent);
        node.attributes = spec.attributes;
        node.text = spec.text;
        for class in spec.classes {
            if !node.has_class(&class) {
                node.classes.push(class);
            }
        }
        self.nodes.push(node);

        for child in spec.children {
            let child_id = self.insert(child, Some(id))?;
            self.nodes[id.0].children.push(child_id);
        }

        Ok(id)
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut Node> {
        self.nodes.get_mut(id.0).ok_or(DomError::UnknownNode(id))
    }

    /// Iterate over every node handle in document order
    pub fn ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.nodes.len()).map(NodeId)
    }

    // === Attributes ===

    pub fn attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.node(id).and_then(|node| node.attribute(name))
    }

    pub fn has_attribute(&self, id: NodeId, name: &str) -> bool {
        self.node(id).is_some_and(|node| node.has_attribute(name))
    }

    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) -> Result<()> {
        self.node_mut(id)?
            .attributes
            .insert(name.to_string(), value.to_string());
        Ok(())
    }

    pub fn remove_attribute(&mut self, id: NodeId, name: &str) -> Result<()> {
        self.node_mut(id)?.attributes.remove(name);
        Ok(())
    }

    pub fn is_hidden(&self, id: NodeId) -> bool {
        self.node(id).is_some_and(Node::is_hidden)
    }

    pub fn set_hidden(&mut self, id: NodeId, hidden: bool) -> Result<()> {
        if hidden {
            self.set_attribute(id, aria::HIDDEN, "")
        } else {
            self.remove_attribute(id, aria::HIDDEN)
        }
    }

    // === Classes ===

    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.node(id).is_some_and(|node| node.has_class(class))
    }

    pub fn add_class(&mut self, id: NodeId, class: &str) -> Result<()> {
        let node = self.node_mut(id)?;
        if !node.has_class(class) {
            node.classes.push(class.to_string());
        }
        Ok(())
    }

    pub fn remove_class(&mut self, id: NodeId, class: &str) -> Result<()> {
        self.node_mut(id)?.classes.retain(|c| c != class);
        Ok(())
    }

    // === Focus ===

    pub fn focus(&mut self, id: NodeId) -> Result<()> {
        if self.node(id).is_none() {
            return Err(DomError::UnknownNode(id));
        }
        if self.focused != Some(id) {
            tracing::trace!(node = %id, "Focus moved");
        }
        self.focused = Some(id);
        Ok(())
    }

    pub fn focused(&self) -> Option<NodeId> {
        self.focused
    }

    // === Queries ===

    /// Find the first node whose `id` attribute equals `element_id`
    pub fn element_by_id(&self, element_id: &str) -> Option<NodeId> {
        self.ids().find(|id| self.attribute(*id, "id") == Some(element_id))
    }

    /// All nodes below `id` in document order, excluding `id` itself
    pub fn descendants(&self, id: NodeId) -> Descendants<'_> {
        let stack = self
            .node(id)
            .map(|node| node.children.iter().rev().copied().collect())
            .unwrap_or_default();
        Descendants { doc: self, stack }
    }

    /// Nearest node carrying `attribute`, starting at `id` itself and walking up
    pub fn closest(&self, id: NodeId, attribute: &str) -> Option<NodeId> {
        let mut current = Some(id);
        while let Some(candidate) = current {
            let node = self.node(candidate)?;
            if node.has_attribute(attribute) {
                return Some(candidate);
            }
            current = node.parent;
        }
        None
    }

    /// First descendant of `within` carrying `attribute`
    pub fn query_first(&self, within: NodeId, attribute: &str) -> Option<NodeId> {
        self.descendants(within)
            .find(|id| self.has_attribute(*id, attribute))
    }
}

/// Tag and attribute names are written to HTML unescaped, so they may not
/// contain whitespace, controls, quotes or markup delimiters.
fn is_markup_name(name: &str) -> bool {
    !name.is_empty()
        && !name.chars().any(|c| {
            c.is_whitespace() || c.is_control() || matches!(c, '"' | '\'' | '<' | '>' | '/' | '=')
        })
}

/// Pre-order walk below a node; see [`Document::descendants`]
pub struct Descendants<'a> {
    doc: &'a Document,
    stack: Vec<NodeId>,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        if let Some(node) = self.doc.node(id) {
            self.stack.extend(node.children.iter().rev().copied());
        }
        Some(id)
    }
}
