//! Render error type.

/// Error returned when a deck or one of its widgets fails to render.
///
/// Missing assets and documentation lookups share this type so the caller of
/// [`Deck::assemble`](crate::Deck::assemble) decides what is fatal.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// [`Deck::assemble`](crate::Deck::assemble) was called before
    /// [`Deck::finalize_slide_count`](crate::Deck::finalize_slide_count).
    #[error("Slide count not finalized before assembly")]
    NotFinalized,
    /// Asset missing from the asset source.
    #[error("Asset not found: {path}")]
    MissingAsset {
        /// Logical asset path.
        path: String,
    },
    /// Asset is not UTF-8 text.
    #[error("Asset is not valid UTF-8: {path}")]
    InvalidUtf8 {
        /// Logical asset path.
        path: String,
    },
    /// Source file has no unit with the requested name.
    #[error("No unit named `{name}` in {path}")]
    MissingUnit {
        /// Logical path of the source file.
        path: String,
        /// Unit name (e.g. `alg3`).
        name: String,
    },
    /// External documentation command failed.
    #[error("Documentation lookup for {package} failed: {message}")]
    DocCommand {
        /// Package passed to the command.
        package: String,
        /// Spawn error or exit status.
        message: String,
    },
    /// Stateful widget was rendered a different number of times than it
    /// occurs in the deck.
    #[error("Widget {widget} rendered {actual} times, expected {expected}")]
    CallCountMismatch {
        /// Widget type name.
        widget: &'static str,
        /// Occurrences in the deck.
        expected: usize,
        /// Nodes produced.
        actual: usize,
    },
    /// Widget produced a node that renders the widget itself.
    #[error("Widget {widget} rendered itself recursively")]
    Reentrant {
        /// Widget type name.
        widget: &'static str,
    },
    /// Widget reached only through another widget's output, so the deck
    /// cannot count its occurrences.
    #[error("Widget {widget} is only embedded in another widget's output")]
    UntrackedWidget {
        /// Widget type name.
        widget: &'static str,
    },
    /// Deferred node serialized outside of deck assembly.
    #[error("Widget {widget} can only be rendered while assembling a deck")]
    Unresolved {
        /// Widget type name.
        widget: &'static str,
    },
}
