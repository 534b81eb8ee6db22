//! Deck of slides.
//!
//! Slides are appended in order and may embed shared widgets. Because the
//! number of slides is unknown while they are added, the deck must be told
//! when the last one is in ([`Deck::finalize_slide_count`]) before it can be
//! assembled into a [`Page`].

use crate::css::Stylesheet;
use crate::error::RenderError;
use crate::node::{Node, wrap};
use crate::page::{self, Page};
use crate::widget::Deferred;

/// Default filename of the assembled page.
pub const DEFAULT_FILENAME: &str = "index.html";

/// Ordered slides, title and stylesheets of a presentation.
#[derive(Debug)]
pub struct Deck {
    /// Page title.
    pub title: String,
    slides: Vec<Node>,
    stylesheets: Vec<Stylesheet>,
    widgets: Vec<TrackedWidget>,
    finalized: bool,
    validate_calls: bool,
    filename: String,
}

/// Widget instance referenced by one or more slides.
#[derive(Debug)]
pub(crate) struct TrackedWidget {
    pub(crate) deferred: Deferred,
    pub(crate) occurrences: usize,
}

impl Deck {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            slides: Vec::new(),
            stylesheets: Vec::new(),
            widgets: Vec::new(),
            finalized: false,
            validate_calls: false,
            filename: DEFAULT_FILENAME.to_owned(),
        }
    }

    /// Check during assembly that every widget rendered once per occurrence.
    ///
    /// A stateful widget that was rendered before assembly, or a deck that is
    /// assembled a second time, fails with [`RenderError::CallCountMismatch`].
    /// A widget only reachable through another widget's output fails with
    /// [`RenderError::UntrackedWidget`].
    #[must_use]
    pub fn with_call_validation(mut self) -> Self {
        self.validate_calls = true;
        self
    }

    /// Filename of the assembled page.
    #[must_use]
    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = filename.into();
        self
    }

    /// Append a stylesheet; the first one is the base theme.
    pub fn add_stylesheet(&mut self, stylesheet: Stylesheet) {
        self.stylesheets.push(stylesheet);
    }

    /// Append a slide wrapping `content`.
    ///
    /// Widgets in `content` are recorded but not rendered. Appending after
    /// [`finalize_slide_count`](Self::finalize_slide_count) requires
    /// finalizing again.
    pub fn slide(&mut self, content: impl IntoIterator<Item = Node>) {
        let node = wrap(content);
        node.for_each_deferred(&mut |deferred| self.track(deferred));
        self.slides.push(node);
        self.finalized = false;
    }

    fn track(&mut self, deferred: &Deferred) {
        let key = deferred.key();
        if let Some(tracked) = self.widgets.iter_mut().find(|w| w.deferred.key() == key) {
            tracked.occurrences += 1;
        } else {
            self.widgets.push(TrackedWidget {
                deferred: deferred.clone(),
                occurrences: 1,
            });
        }
    }

    /// Broadcast the final slide count to every stateful widget in the deck.
    pub fn finalize_slide_count(&mut self) {
        let total = self.slides.len();
        for tracked in &self.widgets {
            tracked.deferred.set_slide_count(total);
        }
        self.finalized = true;
        tracing::debug!(slides = total, widgets = self.widgets.len(), "Finalized slide count");
    }

    /// Render the deck into one HTML page.
    ///
    /// Widgets render here, in slide order, left to right. Stateful widgets
    /// advance on every call, so assembling twice marks different navbar
    /// entries the second time; positional widgets render identically.
    pub fn assemble(&self) -> Result<Page, RenderError> {
        if !self.finalized {
            return Err(RenderError::NotFinalized);
        }
        page::assemble(self)
    }

    pub fn slides(&self) -> &[Node] {
        &self.slides
    }

    pub fn stylesheets(&self) -> &[Stylesheet] {
        &self.stylesheets
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    /// Number of occurrences of the widget embedded by `node`.
    ///
    /// Returns 0 for nodes that are not widgets or not in the deck.
    pub fn occurrences(&self, node: &Node) -> usize {
        let Node::Deferred(deferred) = node else {
            return 0;
        };
        let key = deferred.key();
        self.widgets
            .iter()
            .find(|w| w.deferred.key() == key)
            .map_or(0, |w| w.occurrences)
    }

    pub(crate) fn widgets(&self) -> &[TrackedWidget] {
        &self.widgets
    }

    pub(crate) fn validates_calls(&self) -> bool {
        self.validate_calls
    }

    pub(crate) fn filename(&self) -> &str {
        &self.filename
    }
}
