//! Source snippet and shell output blocks.

use crate::assets::{AssetSource, load_str};
use crate::error::RenderError;
use crate::node::Node;
use crate::tags::{br, code, div, pre};

/// Modifiers allowed in front of `fn` when locating a unit.
const FN_MODIFIERS: &[&str] = &["pub(crate) ", "pub ", "const ", "async ", "unsafe "];

/// Replace tabs with four spaces.
fn expand_tabs(text: &str) -> String {
    text.replace('\t', "    ")
}

/// `div.srcfile > pre > code` around `text`.
pub fn source_block(text: &str) -> Node {
    div()
        .class("srcfile")
        .child(pre().child(code(expand_tabs(text))))
        .into()
}

/// Block with the whole file at `path`.
pub fn source_file(assets: &dyn AssetSource, path: &str) -> Result<Node, RenderError> {
    let text = load_str(assets, path)?;
    Ok(source_block(&text))
}

/// Block with the unit `name` from the file at `path`.
pub fn source_unit(assets: &dyn AssetSource, path: &str, name: &str) -> Result<Node, RenderError> {
    let text = load_str(assets, path)?;
    let unit = extract_unit(&text, name).ok_or_else(|| RenderError::MissingUnit {
        path: path.to_owned(),
        name: name.to_owned(),
    })?;
    Ok(source_block(&unit))
}

/// `pre.shell.dark` with the command line, a line break, and the captured
/// output at `path` inserted verbatim.
pub fn shell(assets: &dyn AssetSource, command: &str, path: &str) -> Result<Node, RenderError> {
    let output = load_str(assets, path)?;
    Ok(pre()
        .class("shell")
        .class("dark")
        .child(command)
        .child(br())
        .child(Node::raw(output))
        .into())
}

/// Extract the top-level function `name` from `source`.
///
/// The unit starts at the doc comments and attributes directly above
/// `fn name(` and ends at the first following line that is exactly `}`.
/// Single-line definitions ending in `}` are returned as-is.
pub fn extract_unit(source: &str, name: &str) -> Option<String> {
    let lines: Vec<&str> = source.lines().collect();
    let start = lines.iter().position(|line| defines_fn(line, name))?;

    let mut first = start;
    while first > 0 {
        let above = lines[first - 1].trim_start();
        if above.starts_with("///") || above.starts_with("#[") {
            first -= 1;
        } else {
            break;
        }
    }

    let definition = lines[start].trim_end();
    let end = if definition.ends_with('}') && definition.contains('{') {
        start
    } else {
        start + lines[start..].iter().position(|line| line.trim_end() == "}")?
    };

    Some(lines[first..=end].join("\n"))
}

fn defines_fn(line: &str, name: &str) -> bool {
    let mut rest = line;
    while let Some(stripped) = FN_MODIFIERS.iter().find_map(|m| rest.strip_prefix(m)) {
        rest = stripped;
    }
    rest.strip_prefix("fn ")
        .and_then(|r| r.strip_prefix(name))
        .is_some_and(|r| r.starts_with('(') || r.starts_with('<'))
}
