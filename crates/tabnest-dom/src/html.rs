//! HTML serialization of a document

use crate::document::Document;
use crate::node::NodeId;

/// Escape text for use in HTML content and double-quoted attribute values.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

impl Document {
    /// Serialize the whole document.
    ///
    /// Attributes are written in name order; empty values are written as
    /// bare boolean attributes (`hidden`, `data-tab`).
    pub fn to_html(&self) -> String {
        self.outer_html(self.root()).unwrap_or_default()
    }

    pub fn outer_html(&self, id: NodeId) -> Option<String> {
        self.node(id)?;
        let mut output = String::new();
        self.write_node(id, &mut output);
        Some(output)
    }

    fn write_node(&self, id: NodeId, output: &mut String) {
        let Some(node) = self.node(id) else {
            return;
        };

        output.push('<');
        output.push_str(node.tag());

        if !node.classes().is_empty() {
            output.push_str(&format!(
                r#" class="{}""#,
                escape_html(&node.classes().join(" "))
            ));
        }

        for (name, value) in node.attributes() {
            if value.is_empty() {
                output.push_str(&format!(" {name}"));
            } else {
                output.push_str(&format!(r#" {name}="{}""#, escape_html(value)));
            }
        }
        output.push('>');

        if let Some(text) = node.text() {
            output.push_str(&escape_html(text));
        }
        for child in node.children() {
            self.write_node(*child, output);
        }

        output.push_str(&format!("</{}>", node.tag()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::NodeSpec;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_tab_markup() {
        let doc = Document::from_spec(
            NodeSpec::element("div").flag("data-tabset").children([
                NodeSpec::element("button")
                    .attr("id", "a")
                    .attr("aria-selected", "true")
                    .text("Install <macOS>"),
                NodeSpec::element("div")
                    .attr("aria-labelledby", "a")
                    .class("is-show")
                    .flag("hidden"),
            ]),
        )
        .unwrap();

        assert_eq!(
            doc.to_html(),
            concat!(
                r#"<div data-tabset>"#,
                r#"<button aria-selected="true" id="a">Install &lt;macOS&gt;</button>"#,
                r#"<div class="is-show" aria-labelledby="a" hidden></div>"#,
                r#"</div>"#
            )
        );
    }

    #[test]
    fn test_escape_attribute_quotes() {
        assert_eq!(escape_html(r#"a "b" & 'c'"#), "a &quot;b&quot; &amp; &#39;c&#39;");
    }

    #[test]
    fn test_outer_html_unknown_node() {
        let doc = Document::from_spec(NodeSpec::element("p")).unwrap();
        assert_eq!(doc.outer_html(NodeId(5)), None);
        assert_eq!(doc.to_html(), "<p></p>");
    }
}
