//! HTML node tree.
//!
//! A [`Node`] is either a concrete leaf, an [`Element`] with attributes and
//! children, a fragment wrapping many children into one node, or a deferred
//! widget that is only resolved when the tree is serialized during deck
//! assembly.

use std::borrow::Cow;

use crate::error::RenderError;
use crate::widget::Deferred;

/// Elements serialized without a closing tag.
const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "input", "link", "meta"];

/// Escape text for use in HTML content and attribute values.
pub fn escape_html(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"']) {
        return Cow::Borrowed(s);
    }
    let mut out = String::with_capacity(s.len() + 16);
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Node in the document tree.
#[derive(Clone, Debug)]
pub enum Node {
    /// Tag with attributes and children.
    Element(Element),
    /// Text, escaped on output.
    Text(String),
    /// Markup inserted verbatim.
    Raw(String),
    /// Children without an enclosing tag.
    Fragment(Vec<Node>),
    /// Widget rendered lazily during deck assembly.
    Deferred(Deferred),
}

impl Node {
    /// Create a text node.
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    /// Create a node emitted verbatim.
    pub fn raw(s: impl Into<String>) -> Self {
        Self::Raw(s.into())
    }

    /// Serialize a tree that contains no deferred widgets.
    ///
    /// Widgets only render during [`Deck::assemble`](crate::Deck::assemble);
    /// meeting one here is [`RenderError::Unresolved`].
    pub fn to_html(&self) -> Result<String, RenderError> {
        let mut out = String::new();
        self.write_html(&mut out, &mut Unresolved)?;
        Ok(out)
    }

    /// Serialize into `out`, resolving deferred nodes depth-first, left to right.
    pub(crate) fn write_html(
        &self,
        out: &mut String,
        resolver: &mut dyn Resolve,
    ) -> Result<(), RenderError> {
        match self {
            Self::Element(element) => element.write_html(out, resolver),
            Self::Text(text) => {
                out.push_str(&escape_html(text));
                Ok(())
            }
            Self::Raw(markup) => {
                out.push_str(markup);
                Ok(())
            }
            Self::Fragment(children) => {
                for child in children {
                    child.write_html(out, resolver)?;
                }
                Ok(())
            }
            Self::Deferred(deferred) => resolver.write_deferred(deferred, out),
        }
    }

    /// Visit every deferred node reachable without rendering anything.
    pub(crate) fn for_each_deferred(&self, f: &mut impl FnMut(&Deferred)) {
        match self {
            Self::Element(element) => {
                for child in &element.children {
                    child.for_each_deferred(f);
                }
            }
            Self::Fragment(children) => {
                for child in children {
                    child.for_each_deferred(f);
                }
            }
            Self::Deferred(deferred) => f(deferred),
            Self::Text(_) | Self::Raw(_) => {}
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

impl From<&str> for Node {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<String> for Node {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<Vec<Node>> for Node {
    fn from(children: Vec<Node>) -> Self {
        Self::Fragment(children)
    }
}

/// Wrap many children into a single node.
pub fn wrap(children: impl IntoIterator<Item = Node>) -> Node {
    Node::Fragment(children.into_iter().collect())
}

/// HTML element with ordered attributes and children.
#[derive(Clone, Debug)]
pub struct Element {
    tag: &'static str,
    attrs: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    /// Create an empty element.
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Value of an attribute, if set.
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Set an attribute, replacing any previous value.
    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        if let Some(slot) = self.attrs.iter_mut().find(|(k, _)| *k == name) {
            slot.1 = value;
        } else {
            self.attrs.push((name, value));
        }
        self
    }

    /// Add a class, keeping classes set earlier.
    #[must_use]
    pub fn class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        if let Some(slot) = self.attrs.iter_mut().find(|(k, _)| k == "class") {
            slot.1.push(' ');
            slot.1.push_str(&class);
            self
        } else {
            self.attr("class", class)
        }
    }

    /// Set the `id` attribute.
    #[must_use]
    pub fn id(self, id: impl Into<String>) -> Self {
        self.attr("id", id)
    }

    /// Append a child.
    #[must_use]
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Append many children.
    #[must_use]
    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    fn write_html(&self, out: &mut String, resolver: &mut dyn Resolve) -> Result<(), RenderError> {
        out.push('<');
        out.push_str(self.tag);
        for (name, value) in &self.attrs {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&escape_html(value));
            out.push('"');
        }
        out.push('>');
        if VOID_ELEMENTS.contains(&self.tag) {
            return Ok(());
        }
        for child in &self.children {
            child.write_html(out, resolver)?;
        }
        out.push_str("</");
        out.push_str(self.tag);
        out.push('>');
        Ok(())
    }
}

/// Renders deferred nodes during serialization.
pub(crate) trait Resolve {
    /// Render `deferred` and serialize its output into `out`.
    fn write_deferred(
        &mut self,
        deferred: &Deferred,
        out: &mut String,
    ) -> Result<(), RenderError>;
}

struct Unresolved;

impl Resolve for Unresolved {
    fn write_deferred(
        &mut self,
        deferred: &Deferred,
        _out: &mut String,
    ) -> Result<(), RenderError> {
        Err(RenderError::Unresolved {
            widget: deferred.name(),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::navbar::Navbar;
    use crate::tags::{a, br, div, li, p, ul};

    #[test]
    fn test_escape_html_plain_borrowed() {
        assert!(matches!(escape_html("plain"), Cow::Borrowed("plain")));
    }

    #[test]
    fn test_escape_html_special_chars() {
        assert_eq!(
            escape_html(r#"<a href="x">&</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_element_with_attributes_and_children() {
        let node: Node = div()
            .class("slide")
            .id("3")
            .child(p("Hello"))
            .child("world")
            .into();
        assert_eq!(
            node.to_html().unwrap(),
            r#"<div class="slide" id="3"><p>Hello</p>world</div>"#
        );
    }

    #[test]
    fn test_void_element_has_no_closing_tag() {
        let node: Node = p("a").child(br()).child("b").into();
        assert_eq!(node.to_html().unwrap(), "<p>a<br>b</p>");
    }

    #[test]
    fn test_class_accumulates() {
        let el = li("1").class("shell").class("dark");
        assert_eq!(el.get_attr("class"), Some("shell dark"));
    }

    #[test]
    fn test_attr_replaces_value() {
        let el = a("#1").attr("href", "#2");
        assert_eq!(el.get_attr("href"), Some("#2"));
    }

    #[test]
    fn test_attribute_values_escaped() {
        let node: Node = a("/search?q=\"x\"&y").into();
        assert_eq!(
            node.to_html().unwrap(),
            r#"<a href="/search?q=&quot;x&quot;&amp;y"></a>"#
        );
    }

    #[test]
    fn test_raw_not_escaped() {
        let node = wrap([Node::raw("<b>bold</b>"), Node::text("<i>")]);
        assert_eq!(node.to_html().unwrap(), "<b>bold</b>&lt;i&gt;");
    }

    #[test]
    fn test_wrap_emits_children_only() {
        let node = wrap([p("one").into(), ul().child(li("two")).into()]);
        assert_eq!(
            node.to_html().unwrap(),
            "<p>one</p><ul><li>two</li></ul>"
        );
    }

    #[test]
    fn test_deferred_outside_deck_is_unresolved() {
        let nav = Rc::new(RefCell::new(Navbar::new()));
        let node = wrap([p("x").into(), Node::stateful(&nav)]);

        let err = node.to_html().unwrap_err();

        assert!(matches!(err, RenderError::Unresolved { widget: "Navbar" }));
        assert_eq!(nav.borrow().current(), 1);
    }

    #[test]
    fn test_for_each_deferred_finds_nested_widgets() {
        let nav = Rc::new(RefCell::new(Navbar::new()));
        let node = wrap([
            div().child(Node::stateful(&nav)).into(),
            Node::stateful(&nav),
        ]);

        let mut count = 0;
        node.for_each_deferred(&mut |_| count += 1);

        assert_eq!(count, 2);
    }
}
