use crate::error::DocumentError;
use roxmltree::{Document, Node};

/// An element of the shape document, reduced to what contour extraction needs.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Element {
    pub name: String,
    /// The `d` attribute, if present.
    pub path_data: Option<String>,
    pub children: Vec<Element>,
}

impl Element {
    pub fn leaf(name: &str, path_data: Option<&str>) -> Self {
        Element {
            name: name.to_string(),
            path_data: path_data.map(str::to_string),
            children: vec![],
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Childless elements, depth-first in document order.
    pub fn leaves(&self) -> Vec<&Element> {
        let mut out = vec![];
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a Element>) {
        if self.is_leaf() {
            out.push(self);
            return;
        }
        for child in &self.children {
            child.collect_leaves(out);
        }
    }
}

/// Parses SVG text into an element tree rooted at the document element.
pub fn parse_document(text: &str) -> Result<Element, DocumentError> {
    let doc = Document::parse(text)?;
    Ok(visit_node(doc.root_element()))
}

fn visit_node(node: Node<'_, '_>) -> Element {
    Element {
        name: node.tag_name().name().to_string(),
        path_data: node.attribute("d").map(str::to_string),
        children: node
            .children()
            .filter(Node::is_element)
            .map(visit_node)
            .collect(),
    }
}
