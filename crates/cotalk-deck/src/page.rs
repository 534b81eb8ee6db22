//! Page assembly.
//!
//! Turns a finalized [`Deck`] into one HTML document: a head with the title,
//! the viewport directive and the concatenated stylesheets, then one
//! `div.slide` per slide with a 1-based `id`. Serializing the slides is where
//! every deferred widget renders.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use crate::css::Stylesheet;
use crate::deck::Deck;
use crate::error::RenderError;
use crate::node::{Element, Node, Resolve};
use crate::tags::div;
use crate::widget::{Deferred, WidgetContext, WidgetKey};

const VIEWPORT: &str = "width=device-width, initial-scale=1";

/// Assembled HTML document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Page {
    pub filename: String,
    pub html: String,
}

impl Page {
    /// Write the page into `dir`, creating it if needed.
    ///
    /// Returns the path of the written file.
    pub fn write_to(&self, dir: &Path) -> std::io::Result<PathBuf> {
        std::fs::create_dir_all(dir)?;
        let path = dir.join(&self.filename);
        std::fs::write(&path, &self.html)?;
        Ok(path)
    }
}

/// Resolves widgets with the position of the slide being serialized.
struct SlideWalk {
    cx: WidgetContext,
    fired: HashMap<WidgetKey, usize>,
    /// Widgets recorded by the deck when their slide was added.
    tracked: HashSet<WidgetKey>,
    /// Widgets whose output is being serialized, innermost last.
    active: Vec<WidgetKey>,
    /// Widgets only reached through another widget's output, in encounter order.
    untracked: Vec<&'static str>,
}

impl SlideWalk {
    fn new(deck: &Deck) -> Self {
        Self {
            cx: WidgetContext {
                slide: 0,
                total: deck.len(),
                occurrence: 0,
            },
            fired: HashMap::new(),
            tracked: deck.widgets().iter().map(|w| w.deferred.key()).collect(),
            active: Vec::new(),
            untracked: Vec::new(),
        }
    }
}

impl Resolve for SlideWalk {
    fn write_deferred(
        &mut self,
        deferred: &Deferred,
        out: &mut String,
    ) -> Result<(), RenderError> {
        let key = deferred.key();
        if self.active.contains(&key) {
            return Err(RenderError::Reentrant {
                widget: deferred.name(),
            });
        }

        let occurrence = {
            let fired = self.fired.entry(key).or_insert(0);
            *fired += 1;
            *fired
        };
        if occurrence == 1 && !self.tracked.contains(&key) {
            tracing::debug!(widget = deferred.name(), "Found widget nested in widget output");
            deferred.set_slide_count(self.cx.total);
            self.untracked.push(deferred.name());
        }

        let node = deferred.resolve(&WidgetContext {
            occurrence,
            ..self.cx
        })?;
        self.active.push(key);
        let written = node.write_html(out, self);
        self.active.pop();
        written
    }
}

pub(crate) fn assemble(deck: &Deck) -> Result<Page, RenderError> {
    let total = deck.len();
    let styles = Stylesheet::concat(deck.stylesheets());
    let mut walk = SlideWalk::new(deck);

    let mut html = String::with_capacity(8192);
    html.push_str("<!DOCTYPE html>\n<html>\n");
    Node::from(head(&deck.title, &styles)).write_html(&mut html, &mut walk)?;
    html.push_str("\n<body>\n");
    for (i, content) in deck.slides().iter().enumerate() {
        let index = i + 1;
        walk.cx.slide = index;
        let slide = div()
            .class("slide")
            .id(index.to_string())
            .child(content.clone());
        Node::from(slide).write_html(&mut html, &mut walk)?;
        html.push('\n');
        tracing::debug!(slide = index, "Rendered slide");
    }
    html.push_str("</body>\n</html>\n");

    if deck.validates_calls() {
        check_calls(deck, &walk)?;
    }

    tracing::info!(
        title = %deck.title,
        slides = total,
        bytes = html.len(),
        "Assembled deck"
    );
    Ok(Page {
        filename: deck.filename().to_owned(),
        html,
    })
}

fn head(title: &str, styles: &Stylesheet) -> Element {
    Element::new("head")
        .child(Element::new("title").child(title))
        .child(
            Element::new("meta")
                .attr("name", "viewport")
                .attr("content", VIEWPORT),
        )
        .child(Element::new("style").child(Node::raw(styles.to_css())))
}

/// Every widget must be tracked by the deck and have rendered exactly once
/// per occurrence.
fn check_calls(deck: &Deck, walk: &SlideWalk) -> Result<(), RenderError> {
    if let Some(&widget) = walk.untracked.first() {
        return Err(RenderError::UntrackedWidget { widget });
    }
    for tracked in deck.widgets() {
        let actual = match &tracked.deferred {
            Deferred::Stateful { widget, .. } => widget.borrow().calls(),
            Deferred::Positional { .. } => {
                walk.fired.get(&tracked.deferred.key()).copied().unwrap_or(0)
            }
        };
        if actual != tracked.occurrences {
            return Err(RenderError::CallCountMismatch {
                widget: tracked.deferred.name(),
                expected: tracked.occurrences,
                actual,
            });
        }
    }
    Ok(())
}
