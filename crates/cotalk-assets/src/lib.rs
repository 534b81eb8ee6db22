//! Talk assets for the cotalk slide deck generator.
//!
//! Provides a single API for reading the example sources and pre-captured
//! benchmark output under `talk/` in both embedded and filesystem modes:
//!
//! - **`embed` feature on**: Assets are compiled into the binary via `rust-embed`
//! - **`embed` feature off**: Assets are read from `talk/` at runtime

use std::borrow::Cow;
use std::path::Path;

/// Embedded talk assets (only available with `embed` feature).
#[cfg(feature = "embed")]
#[derive(rust_embed::RustEmbed)]
#[folder = "../../talk"]
#[exclude = "target/*"]
#[exclude = "Cargo.lock"]
struct Assets;

/// Directory for filesystem-based asset loading (dev mode).
///
/// Anchored at the workspace so builds work from any working directory.
#[cfg(not(feature = "embed"))]
pub const DEV_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../talk");

/// Get a talk asset by logical path (relative to `talk/`).
///
/// Returns the file contents if the asset exists, `None` otherwise.
#[cfg(feature = "embed")]
pub fn get(path: &str) -> Option<Cow<'static, [u8]>> {
    Assets::get(path).map(|f| f.data)
}

/// Get a talk asset by logical path (relative to `talk/`).
///
/// Returns the file contents if the asset exists, `None` otherwise.
#[cfg(not(feature = "embed"))]
pub fn get(path: &str) -> Option<Cow<'static, [u8]>> {
    if !is_logical_path(path) {
        return None;
    }
    let full_path = Path::new(DEV_DIR).join(path);
    std::fs::read(&full_path).ok().map(Cow::Owned)
}

/// Iterate all available asset paths.
#[cfg(feature = "embed")]
pub fn iter() -> impl Iterator<Item = Cow<'static, str>> {
    Assets::iter()
}

/// Iterate all available asset paths.
#[cfg(not(feature = "embed"))]
pub fn iter() -> impl Iterator<Item = Cow<'static, str>> {
    walk_dir(Path::new(DEV_DIR)).into_iter().map(Cow::Owned)
}

/// Whether `path` stays inside the asset root.
///
/// Logical paths are forward-slash separated and relative; absolute paths and
/// `..` segments are rejected.
pub fn is_logical_path(path: &str) -> bool {
    !path.is_empty()
        && !Path::new(path).is_absolute()
        && !path.starts_with('/')
        && path.split(['/', '\\']).all(|seg| seg != "..")
}

/// Recursively walk a directory and return paths relative to `base`.
#[cfg(not(feature = "embed"))]
fn walk_dir(base: &Path) -> Vec<String> {
    let mut result = Vec::new();
    walk_dir_inner(base, base, &mut result);
    result.sort();
    result
}

#[cfg(not(feature = "embed"))]
fn walk_dir_inner(base: &Path, dir: &Path, result: &mut Vec<String>) {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            // build output of the talk examples
            if entry.file_name() != "target" {
                walk_dir_inner(base, &path, result);
            }
        } else if let Ok(rel) = path.strip_prefix(base) {
            // Normalize to forward slashes
            result.push(rel.to_string_lossy().replace('\\', "/"));
        }
    }
}
