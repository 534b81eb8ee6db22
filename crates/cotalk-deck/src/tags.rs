//! Shorthand constructors for the elements a deck uses.
//!
//! Containers start empty; text-like elements take their first child.

use crate::node::{Element, Node};

pub fn div() -> Element {
    Element::new("div")
}

pub fn nav() -> Element {
    Element::new("nav")
}

pub fn ul() -> Element {
    Element::new("ul")
}

pub fn pre() -> Element {
    Element::new("pre")
}

pub fn br() -> Element {
    Element::new("br")
}

pub fn h1(content: impl Into<Node>) -> Element {
    Element::new("h1").child(content)
}

pub fn h2(content: impl Into<Node>) -> Element {
    Element::new("h2").child(content)
}

pub fn p(content: impl Into<Node>) -> Element {
    Element::new("p").child(content)
}

pub fn span(content: impl Into<Node>) -> Element {
    Element::new("span").child(content)
}

pub fn li(content: impl Into<Node>) -> Element {
    Element::new("li").child(content)
}

pub fn code(content: impl Into<Node>) -> Element {
    Element::new("code").child(content)
}

/// Link to `href`; add the label with [`Element::child`].
pub fn a(href: impl Into<String>) -> Element {
    Element::new("a").attr("href", href)
}
