//! Package documentation fetched from an external command.

use std::process::Command;
use std::rc::Rc;

use crate::error::RenderError;
use crate::node::{Node, wrap};
use crate::source::source_block;
use crate::tags::a;
use crate::widget::{Widget, WidgetContext};

/// Base URL linked below each documentation block.
const DOCS_URL: &str = "https://docs.rs/";

/// What a failed documentation lookup turns into.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DocFailure {
    /// Log a warning and render an empty block.
    #[default]
    Empty,
    /// Return the error.
    Fatal,
}

/// Runs `command… <package>` and renders its standard output.
#[derive(Clone, Debug)]
pub struct DocLookup {
    command: Vec<String>,
    on_failure: DocFailure,
}

impl DocLookup {
    /// `command` holds the program and leading arguments.
    pub fn new(command: Vec<String>) -> Self {
        Self {
            command,
            on_failure: DocFailure::default(),
        }
    }

    #[must_use]
    pub fn with_failure_policy(mut self, on_failure: DocFailure) -> Self {
        self.on_failure = on_failure;
        self
    }

    /// Standard output of the command for `package`.
    pub fn lookup(&self, package: &str) -> Result<String, RenderError> {
        let fail = |message: String| RenderError::DocCommand {
            package: package.to_owned(),
            message,
        };
        let (program, args) = self
            .command
            .split_first()
            .ok_or_else(|| fail("no documentation command configured".to_owned()))?;

        let output = Command::new(program)
            .args(args)
            .arg(package)
            .output()
            .map_err(|e| fail(format!("{program}: {e}")))?;
        if !output.status.success() {
            return Err(fail(format!("{program} exited with {}", output.status)));
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    /// Documentation block for `package` followed by a docs.rs link.
    ///
    /// With [`DocFailure::Empty`] a failed lookup renders an empty block.
    pub fn node(&self, package: &str) -> Result<Node, RenderError> {
        let text = match self.lookup(package) {
            Ok(text) => text,
            Err(e) if self.on_failure == DocFailure::Empty => {
                tracing::warn!(package, error = %e, "Documentation lookup failed, rendering empty block");
                String::new()
            }
            Err(e) => return Err(e),
        };
        Ok(wrap([
            source_block(&text),
            a(format!("{DOCS_URL}{package}"))
                .attr("target", "_blank")
                .child(format!("docs.rs/{package}"))
                .into(),
        ]))
    }

    /// Deferred block for `package`, looked up during deck assembly.
    pub fn package(self: &Rc<Self>, package: impl Into<String>) -> Rc<PackageDoc> {
        Rc::new(PackageDoc {
            lookup: Rc::clone(self),
            package: package.into(),
        })
    }
}

/// Documentation block rendered when the deck is assembled.
#[derive(Debug)]
pub struct PackageDoc {
    lookup: Rc<DocLookup>,
    package: String,
}

impl Widget for PackageDoc {
    fn render(&self, _cx: &WidgetContext) -> Result<Node, RenderError> {
        self.lookup.node(&self.package)
    }
}
