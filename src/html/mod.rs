//! Owned HTML tree - the visual tree the section renderers produce
//!
//! A deliberately small element model: tag, attributes, children. Renderers
//! build trees with the [`el`] / [`text`] constructors and chained builder
//! methods; the composition root renders the tree to a string once. All
//! text and attribute values are escaped at render time, so renderers never
//! deal with escaping themselves.

use std::fmt::Write as _;

/// Tags that never carry children and render without a closing tag
const VOID_TAGS: [&str; 6] = ["img", "input", "br", "hr", "meta", "link"];

/// One node of the visual tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    /// Escaped at render time
    Text(String),
    /// Emitted verbatim; the caller vouches for the markup
    Raw(String),
}

/// An element with attributes and children
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: &'static str,
    attrs: Vec<(&'static str, String)>,
    children: Vec<Node>,
}

/// Build an element node
pub fn el(tag: &'static str) -> Element {
    Element {
        tag,
        attrs: Vec::new(),
        children: Vec::new(),
    }
}

/// Build a text node
pub fn text(value: impl Into<String>) -> Node {
    Node::Text(value.into())
}

/// Build a raw node; the caller vouches for the markup
pub fn raw(value: impl Into<String>) -> Node {
    Node::Raw(value.into())
}

impl Element {
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    /// Attribute added only when `value` is `Some`
    pub fn attr_opt(self, name: &'static str, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(v) => self.attr(name, v),
            None => self,
        }
    }

    pub fn class(self, value: impl Into<String>) -> Self {
        self.attr("class", value)
    }

    pub fn id(self, value: impl Into<String>) -> Self {
        self.attr("id", value)
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    /// Child added only when `node` is `Some`
    pub fn child_opt(self, node: Option<impl Into<Node>>) -> Self {
        match node {
            Some(n) => self.child(n),
            None => self,
        }
    }

    pub fn children(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(nodes);
        self
    }

    pub fn text(self, value: impl Into<String>) -> Self {
        self.child(text(value))
    }

    pub fn tag(&self) -> &'static str {
        self.tag
    }

    /// Value of an attribute, if set
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl Node {
    /// Render the tree to markup
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.write(&mut out);
        out
    }

    fn write(&self, out: &mut String) {
        match self {
            Node::Text(value) => out.push_str(&escape_text(value)),
            Node::Raw(value) => out.push_str(value),
            Node::Element(element) => element.write(out),
        }
    }

    /// Depth-first walk over every element in the tree
    pub fn walk_elements<'a>(&'a self, visit: &mut dyn FnMut(&'a Element)) {
        if let Node::Element(element) = self {
            visit(element);
            for child in &element.children {
                child.walk_elements(visit);
            }
        }
    }
}

impl Element {
    fn write(&self, out: &mut String) {
        let _ = write!(out, "<{}", self.tag);
        for (name, value) in &self.attrs {
            let _ = write!(out, " {}=\"{}\"", name, escape_attr(value));
        }
        if VOID_TAGS.contains(&self.tag) {
            out.push_str(">");
            return;
        }
        out.push('>');
        for child in &self.children {
            child.write(out);
        }
        let _ = write!(out, "</{}>", self.tag);
    }
}

fn escape_text(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_nested_elements() {
        let node: Node = el("div")
            .class("card")
            .child(el("h3").text("Title"))
            .child(text("body"))
            .into();
        assert_eq!(node.render(), "<div class=\"card\"><h3>Title</h3>body</div>");
    }

    #[test]
    fn escapes_text_and_attributes() {
        let node: Node = el("a")
            .attr("href", "https://x.test/?a=1&b=\"2\"")
            .text("<b> & more")
            .into();
        assert_eq!(
            node.render(),
            "<a href=\"https://x.test/?a=1&amp;b=&quot;2&quot;\">&lt;b&gt; &amp; more</a>"
        );
    }

    #[test]
    fn void_tags_have_no_closing_tag() {
        let node: Node = el("img").attr("src", "a.png").into();
        assert_eq!(node.render(), "<img src=\"a.png\">");
    }

    #[test]
    fn walk_visits_every_element() {
        let node: Node = el("div")
            .child(el("span").child(el("b")))
            .child(el("p"))
            .into();
        let mut tags = Vec::new();
        node.walk_elements(&mut |e| tags.push(e.tag()));
        assert_eq!(tags, vec!["div", "span", "b", "p"]);
    }

    #[test]
    fn attr_opt_and_child_opt_skip_none() {
        let with_none: Node = el("a")
            .attr_opt("target", None::<String>)
            .child_opt(None::<Node>)
            .into();
        assert_eq!(with_none.render(), "<a></a>");
    }
}
