//! Page structure snapshot: the document's links and its heading forest.
//!
//! Extraction walks any tree exposed through [`PageNode`]/[`PageDocument`], so
//! the same code runs against the browser DOM and against test fixtures. It
//! never fails and never mutates the document.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static HEADING_TAG: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"^H\d$").ok());

/// Read-only view of one document node.
pub trait PageNode: Sized {
    /// Tag name for element nodes, `None` for everything else.
    fn element_tag(&self) -> Option<String>;
    /// Character data for text nodes, `None` for everything else.
    fn text_data(&self) -> Option<String>;
    fn attribute(&self, name: &str) -> Option<String>;
    fn child_nodes(&self) -> Vec<Self>;
    /// Rendered text of the node as the browser reports it.
    fn rendered_text(&self) -> String;
}

/// Document-level queries the extractor needs.
pub trait PageDocument {
    type Node: PageNode;

    /// Every `<a>` element in document order.
    fn anchors(&self) -> Vec<Self::Node>;
    /// Every `h1`..`h6` element in document order.
    fn headings(&self) -> Vec<Self::Node>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkEntry {
    pub href: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadingNode {
    pub tag_name: String,
    pub inner_text: String,
    pub inner_texts: Vec<String>,
    pub children: Vec<HeadingNode>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct PageStructure {
    pub links: Vec<LinkEntry>,
    pub headings: Vec<HeadingNode>,
}

impl PageStructure {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.links.is_empty() && self.headings.is_empty()
    }
}

/// Take a snapshot of `doc`.
pub fn extract<D: PageDocument>(doc: &D) -> PageStructure {
    PageStructure {
        links: collect_links(doc),
        headings: collect_headings(doc),
    }
}

/// Anchors with a non-empty `href`, labelled by their text or, failing that,
/// by the `href` itself.
pub fn collect_links<D: PageDocument>(doc: &D) -> Vec<LinkEntry> {
    doc.anchors()
        .iter()
        .filter_map(|anchor| {
            let href = anchor.attribute("href").filter(|h| !h.is_empty())?;
            let mut raw = String::new();
            gather_text(anchor, &mut raw);
            let text = raw.trim();
            let text = if text.is_empty() {
                href.clone()
            } else {
                text.to_string()
            };
            Some(LinkEntry { href, text })
        })
        .collect()
}

/// One tree per heading element, in document order. A heading nested inside
/// another shows up both as its own root and as a child of the outer one.
pub fn collect_headings<D: PageDocument>(doc: &D) -> Vec<HeadingNode> {
    doc.headings().iter().map(heading_node).collect()
}

fn gather_text<N: PageNode>(node: &N, out: &mut String) {
    for child in node.child_nodes() {
        if let Some(text) = child.text_data() {
            out.push_str(&text);
        } else {
            gather_text(&child, out);
        }
    }
}

fn is_heading_tag(tag: &str) -> bool {
    HEADING_TAG
        .as_ref()
        .is_some_and(|re| re.is_match(&tag.to_ascii_uppercase()))
}

fn heading_node<N: PageNode>(node: &N) -> HeadingNode {
    let mut out = HeadingNode {
        tag_name: node.element_tag().unwrap_or_default().to_ascii_lowercase(),
        inner_text: node.rendered_text(),
        ..HeadingNode::default()
    };
    harvest(node, Some(&mut out.inner_texts), &mut out.children);
    out
}

// Wrapper elements contribute their nested headings but not their text.
fn harvest<N: PageNode>(
    node: &N,
    mut texts: Option<&mut Vec<String>>,
    children: &mut Vec<HeadingNode>,
) {
    for child in node.child_nodes() {
        if let Some(tag) = child.element_tag() {
            if is_heading_tag(&tag) {
                children.push(heading_node(&child));
            } else {
                harvest(&child, None, children);
            }
        } else if let (Some(texts), Some(text)) = (texts.as_deref_mut(), child.text_data()) {
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                texts.push(trimmed.to_string());
            }
        }
    }
}
