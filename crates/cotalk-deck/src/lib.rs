//! Slide deck composition and deferred rendering for cotalk.
//!
//! A [`Deck`] collects slides built from [`Node`] trees. Nodes can embed
//! widgets whose output depends on where they appear (the navigation index,
//! the Nth example). Widgets are not rendered when slides are added; they
//! render while [`Deck::assemble`] serializes the slides, in slide order.
//!
//! # Architecture
//!
//! - [`node`] and [`tags`]: HTML node tree and element shorthands
//! - [`Stylesheet`]: ordered CSS rules, concatenated without cascade resolution
//! - [`StatefulWidget`] / [`Widget`]: counter-driven and position-driven widgets
//! - [`Navbar`] / [`SlideNav`]: slide index with the current slide marked
//! - [`SequentialExample`] / [`ExampleSeries`]: numbered example source with
//!   captured benchmark output
//! - [`DocLookup`]: package documentation from an external command
//! - [`AssetSource`]: bytes by logical path for snippets and captured output
//!
//! # Example
//!
//! ```
//! use std::rc::Rc;
//! use cotalk_deck::{Deck, Node, SlideNav, Stylesheet, tags::h1};
//!
//! let nav = Rc::new(SlideNav);
//! let mut deck = Deck::new("Talk");
//! let mut css = Stylesheet::new();
//! css.style("body", ["margin:0"]);
//! deck.add_stylesheet(css);
//! deck.slide([h1("Hello").into(), Node::widget(&nav)]);
//! deck.slide([h1("World").into(), Node::widget(&nav)]);
//! deck.finalize_slide_count();
//!
//! let page = deck.assemble().unwrap();
//! assert!(page.html.contains(r#"<div class="slide" id="2">"#));
//! ```

mod assets;
mod css;
mod deck;
mod docs;
mod error;
mod example;
mod navbar;
pub mod node;
mod page;
pub mod source;
pub mod tags;
mod widget;

pub use assets::{AssetSource, BundledAssets, DirAssets, MemoryAssets, load_str};
pub use css::{Rule, Stylesheet};
pub use deck::{DEFAULT_FILENAME, Deck};
pub use docs::{DocFailure, DocLookup, PackageDoc};
pub use error::RenderError;
pub use example::{ExampleSeries, ExampleSource, SequentialExample};
pub use navbar::{Navbar, SlideNav};
pub use node::{Element, Node, escape_html, wrap};
pub use page::Page;
pub use widget::{Deferred, StatefulWidget, Widget, WidgetContext, WidgetKey};
