//! Slide index navigation.
//!
//! Renders `<nav><ul>` with one anchor link per slide (`#1`..`#N`) and marks
//! the entry for the slide being rendered with `class="current"`.

use crate::error::RenderError;
use crate::node::Node;
use crate::tags::{a, li, nav, ul};
use crate::widget::{StatefulWidget, Widget, WidgetContext};

/// Navigation index that tracks the current slide by counting its own renders.
///
/// Share one instance across every slide and let
/// [`Deck::finalize_slide_count`](crate::Deck::finalize_slide_count) set `max`.
#[derive(Debug)]
pub struct Navbar {
    current: usize,
    max: usize,
}

impl Navbar {
    pub fn new() -> Self {
        Self { current: 1, max: 0 }
    }

    /// Slide marked active by the next render.
    pub fn current(&self) -> usize {
        self.current
    }

    /// Number of links rendered.
    pub fn max(&self) -> usize {
        self.max
    }
}

impl Default for Navbar {
    fn default() -> Self {
        Self::new()
    }
}

impl StatefulWidget for Navbar {
    fn produce_node(&mut self) -> Result<Node, RenderError> {
        let node = slide_index(self.current, self.max);
        self.current += 1;
        Ok(node)
    }

    fn calls(&self) -> usize {
        self.current - 1
    }

    fn set_slide_count(&mut self, total: usize) {
        self.max = total;
    }
}

/// Navigation index rendered from the slide position it is given.
#[derive(Debug, Default)]
pub struct SlideNav;

impl Widget for SlideNav {
    fn render(&self, cx: &WidgetContext) -> Result<Node, RenderError> {
        Ok(slide_index(cx.slide, cx.total))
    }
}

/// Links `1..=total`, marking `active` as current.
fn slide_index(active: usize, total: usize) -> Node {
    let items = (1..=total).map(|i| -> Node {
        let item = li(a(format!("#{i}")).child(i.to_string()));
        if i == active {
            item.class("current").into()
        } else {
            item.into()
        }
    });
    nav().child(ul().children(items)).into()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn produce_html(navbar: &mut Navbar) -> String {
        navbar.produce_node().unwrap().to_html().unwrap()
    }

    #[test]
    fn test_navbar_marks_current() {
        let mut navbar = Navbar::new();
        navbar.set_slide_count(3);

        assert_eq!(
            produce_html(&mut navbar),
            concat!(
                "<nav><ul>",
                r##"<li class="current"><a href="#1">1</a></li>"##,
                r##"<li><a href="#2">2</a></li>"##,
                r##"<li><a href="#3">3</a></li>"##,
                "</ul></nav>",
            )
        );
        assert_eq!(navbar.current(), 2);
        assert_eq!(navbar.calls(), 1);
    }

    #[test]
    fn test_navbar_advances_each_call() {
        let mut navbar = Navbar::new();
        navbar.set_slide_count(3);

        for expected in 1..=3 {
            let html = produce_html(&mut navbar);
            assert_eq!(html.matches("class=\"current\"").count(), 1);
            assert!(html.contains(&format!(
                r##"<li class="current"><a href="#{expected}">{expected}</a></li>"##
            )));
        }
    }

    #[test]
    fn test_navbar_over_called_marks_nothing() {
        let mut navbar = Navbar::new();
        navbar.set_slide_count(2);
        produce_html(&mut navbar);
        produce_html(&mut navbar);

        let html = produce_html(&mut navbar);

        assert!(!html.contains("current"));
        assert_eq!(html.matches("<li>").count(), 2);
        assert_eq!(navbar.calls(), 3);
    }

    #[test]
    fn test_navbar_unset_max_is_empty() {
        let mut navbar = Navbar::new();
        assert_eq!(produce_html(&mut navbar), "<nav><ul></ul></nav>");
        assert_eq!(produce_html(&mut navbar), "<nav><ul></ul></nav>");
    }

    #[test]
    fn test_slide_nav_is_pure() {
        let cx = WidgetContext {
            slide: 2,
            total: 3,
            occurrence: 2,
        };
        let first = SlideNav.render(&cx).unwrap().to_html().unwrap();
        let second = SlideNav.render(&cx).unwrap().to_html().unwrap();

        assert_eq!(first, second);
        assert!(first.contains(r##"<li class="current"><a href="#2">2</a></li>"##));
    }
}
