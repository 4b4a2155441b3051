//! Live-DOM adapter for the page-structure extractor.

use crate::dom;
use a11ybar_core::{PageDocument, PageNode, PageStructure};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Node, NodeList};

const HEADING_SELECTOR: &str = "h1, h2, h3, h4, h5, h6";

#[derive(Debug, Clone)]
pub struct DomNode(pub Node);

impl PageNode for DomNode {
    fn element_tag(&self) -> Option<String> {
        self.0.dyn_ref::<Element>().map(Element::tag_name)
    }

    fn text_data(&self) -> Option<String> {
        if self.0.node_type() == Node::TEXT_NODE {
            Some(self.0.node_value().unwrap_or_default())
        } else {
            None
        }
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0
            .dyn_ref::<Element>()
            .and_then(|el| el.get_attribute(name))
    }

    fn child_nodes(&self) -> Vec<Self> {
        nodes(&self.0.child_nodes())
    }

    fn rendered_text(&self) -> String {
        self.0.dyn_ref::<HtmlElement>().map_or_else(
            || self.0.text_content().unwrap_or_default(),
            HtmlElement::inner_text,
        )
    }
}

/// A browser document seen through [`PageDocument`].
pub struct LiveDocument(pub Document);

impl LiveDocument {
    fn select(&self, selector: &str) -> Vec<DomNode> {
        match self.0.query_selector_all(selector) {
            Ok(list) => nodes(&list),
            Err(err) => {
                log::warn!("query {selector:?} failed: {}", dom::js_error_message(&err));
                Vec::new()
            }
        }
    }
}

impl PageDocument for LiveDocument {
    type Node = DomNode;

    fn anchors(&self) -> Vec<DomNode> {
        self.select("a")
    }

    fn headings(&self) -> Vec<DomNode> {
        self.select(HEADING_SELECTOR)
    }
}

fn nodes(list: &NodeList) -> Vec<DomNode> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(DomNode)
        .collect()
}

/// Snapshot the current page. Empty outside a browser.
#[must_use]
pub fn snapshot() -> PageStructure {
    dom::document().map_or_else(PageStructure::default, |doc| {
        a11ybar_core::extract(&LiveDocument(doc))
    })
}
