//! Widget contracts for nodes rendered lazily during deck assembly.
//!
//! Widgets are added to slides before the final slide count is known. Two
//! contracts exist:
//!
//! - [`StatefulWidget`]: reads and advances internal counters every time it
//!   produces a node. Position knowledge comes purely from call order, so it
//!   must be rendered exactly once per occurrence, in document order.
//! - [`Widget`]: pure rendering from an explicit [`WidgetContext`]. Assembling
//!   a deck twice produces identical output.
//!
//! Both are shared by reference across slides and embedded in the tree with
//! [`Node::stateful`] or [`Node::widget`].

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::error::RenderError;
use crate::node::Node;

/// Widget whose output depends on how many times it has rendered.
pub trait StatefulWidget {
    /// Produce the node for the next occurrence and advance internal counters.
    ///
    /// Not idempotent: callers must invoke it once per occurrence, in order.
    fn produce_node(&mut self) -> Result<Node, RenderError>;

    /// Number of nodes produced so far.
    fn calls(&self) -> usize;

    /// Receive the final slide count of the deck this widget appears in.
    fn set_slide_count(&mut self, _total: usize) {}
}

/// Widget rendered from its position in the deck.
pub trait Widget {
    fn render(&self, cx: &WidgetContext) -> Result<Node, RenderError>;
}

/// Position of a widget occurrence during assembly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WidgetContext {
    /// 1-based index of the slide being rendered.
    pub slide: usize,
    /// Number of slides in the deck.
    pub total: usize,
    /// 1-based count of this widget's occurrences rendered so far, this one included.
    pub occurrence: usize,
}

/// Identity of a shared widget instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WidgetKey(usize);

/// Widget reference stored in the node tree.
#[derive(Clone)]
pub enum Deferred {
    Stateful {
        widget: Rc<RefCell<dyn StatefulWidget>>,
        name: &'static str,
    },
    Positional {
        widget: Rc<dyn Widget>,
        name: &'static str,
    },
}

impl Deferred {
    /// Identity shared by every occurrence of the same instance.
    pub fn key(&self) -> WidgetKey {
        let addr = match self {
            Self::Stateful { widget, .. } => Rc::as_ptr(widget).cast::<()>().addr(),
            Self::Positional { widget, .. } => Rc::as_ptr(widget).cast::<()>().addr(),
        };
        WidgetKey(addr)
    }

    /// Short type name of the widget.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Stateful { name, .. } | Self::Positional { name, .. } => *name,
        }
    }

    /// Pass the deck's slide count to a stateful widget.
    pub(crate) fn set_slide_count(&self, total: usize) {
        if let Self::Stateful { widget, .. } = self {
            widget.borrow_mut().set_slide_count(total);
        }
    }

    /// Render one occurrence.
    pub(crate) fn resolve(&self, cx: &WidgetContext) -> Result<Node, RenderError> {
        match self {
            Self::Stateful { widget, name } => widget
                .try_borrow_mut()
                .map_err(|_| RenderError::Reentrant { widget: *name })?
                .produce_node(),
            Self::Positional { widget, .. } => widget.render(cx),
        }
    }
}

impl fmt::Debug for Deferred {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            Self::Stateful { .. } => "Stateful",
            Self::Positional { .. } => "Positional",
        };
        f.debug_struct("Deferred")
            .field("kind", &kind)
            .field("name", &self.name())
            .finish()
    }
}

impl Node {
    /// Embed a shared stateful widget.
    pub fn stateful<W: StatefulWidget + 'static>(widget: &Rc<RefCell<W>>) -> Self {
        let widget: Rc<RefCell<dyn StatefulWidget>> = Rc::<RefCell<W>>::clone(widget);
        Self::Deferred(Deferred::Stateful {
            widget,
            name: short_type_name::<W>(),
        })
    }

    /// Embed a shared positional widget.
    pub fn widget<W: Widget + 'static>(widget: &Rc<W>) -> Self {
        let widget: Rc<dyn Widget> = Rc::<W>::clone(widget);
        Self::Deferred(Deferred::Positional {
            widget,
            name: short_type_name::<W>(),
        })
    }
}

/// Type name without its module path.
fn short_type_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}
