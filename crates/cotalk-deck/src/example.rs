//! Numbered examples paired with their captured benchmark output.
//!
//! The Nth example is the function labeled `{prefix}{N}` in the example
//! source file, shown above the output captured in
//! `testdata/{label}_bench.html` and the command that produced it.

use std::rc::Rc;

use crate::assets::AssetSource;
use crate::error::RenderError;
use crate::node::{Node, wrap};
use crate::source::{shell, source_unit};
use crate::widget::{StatefulWidget, Widget, WidgetContext};

const DEFAULT_PREFIX: &str = "alg";
const DEFAULT_COMMAND: &str = "cargo bench --bench algorithms -- {name}";

/// Where numbered examples and their output come from.
#[derive(Clone)]
pub struct ExampleSource {
    assets: Rc<dyn AssetSource>,
    file: String,
    prefix: String,
    command: String,
}

impl ExampleSource {
    /// Examples in `file`, labeled `alg1`, `alg2`, ...
    pub fn new(assets: Rc<dyn AssetSource>, file: impl Into<String>) -> Self {
        Self {
            assets,
            file: file.into(),
            prefix: DEFAULT_PREFIX.to_owned(),
            command: DEFAULT_COMMAND.to_owned(),
        }
    }

    /// Label prefix; the example number is appended.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Command line shown above captured output. `{name}` is replaced by the label.
    #[must_use]
    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = command.into();
        self
    }

    pub fn label(&self, n: usize) -> String {
        format!("{}{n}", self.prefix)
    }

    /// Logical path of the output captured for `label`.
    pub fn output_path(label: &str) -> String {
        format!("testdata/{}_bench.html", label.to_lowercase())
    }

    /// Render example `n` (1-based).
    pub fn render(&self, n: usize) -> Result<Node, RenderError> {
        let label = self.label(n);
        tracing::debug!(label = %label, file = %self.file, "Rendering example");
        let source = source_unit(self.assets.as_ref(), &self.file, &label)?;
        let command = format!("$ {}", self.command.replace("{name}", &label));
        let output = shell(self.assets.as_ref(), &command, &Self::output_path(&label))?;
        Ok(wrap([source, output]))
    }
}

/// Example that shows the next label each time it renders.
pub struct SequentialExample {
    source: ExampleSource,
    current: usize,
}

impl SequentialExample {
    pub fn new(source: ExampleSource) -> Self {
        Self { source, current: 1 }
    }

    /// Number of the example rendered next.
    pub fn current(&self) -> usize {
        self.current
    }
}

impl StatefulWidget for SequentialExample {
    fn produce_node(&mut self) -> Result<Node, RenderError> {
        let n = self.current;
        self.current += 1;
        self.source.render(n)
    }

    fn calls(&self) -> usize {
        self.current - 1
    }
}

/// Example numbered by its occurrence among the slides that embed it.
pub struct ExampleSeries {
    source: ExampleSource,
}

impl ExampleSeries {
    pub fn new(source: ExampleSource) -> Self {
        Self { source }
    }
}

impl Widget for ExampleSeries {
    fn render(&self, cx: &WidgetContext) -> Result<Node, RenderError> {
        self.source.render(cx.occurrence)
    }
}
