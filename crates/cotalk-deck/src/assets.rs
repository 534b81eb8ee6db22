//! Asset sources for source snippets and captured output.
//!
//! Widgets read assets by logical path (e.g. `testdata/alg1_bench.html`)
//! through the [`AssetSource`] trait. This enables:
//!
//! - the bundled talk assets via [`BundledAssets`]
//! - a directory on disk via [`DirAssets`]
//! - in-memory fixtures via [`MemoryAssets`] for tests

use std::borrow::Cow;
use std::collections::HashMap;
use std::path::PathBuf;

use crate::error::RenderError;

/// Read-only lookup of asset bytes by logical path.
pub trait AssetSource {
    /// Asset contents, or `None` if the path does not exist.
    fn get(&self, path: &str) -> Option<Cow<'_, [u8]>>;
}

/// Assets shipped with `cotalk-assets`.
#[derive(Debug, Default)]
pub struct BundledAssets;

impl AssetSource for BundledAssets {
    fn get(&self, path: &str) -> Option<Cow<'_, [u8]>> {
        cotalk_assets::get(path)
    }
}

/// Assets read from a directory.
#[derive(Debug)]
pub struct DirAssets {
    root: PathBuf,
}

impl DirAssets {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl AssetSource for DirAssets {
    fn get(&self, path: &str) -> Option<Cow<'_, [u8]>> {
        if !cotalk_assets::is_logical_path(path) {
            return None;
        }
        std::fs::read(self.root.join(path)).ok().map(Cow::Owned)
    }
}

/// In-memory assets.
///
/// # Example
///
/// ```
/// use cotalk_deck::{AssetSource, MemoryAssets};
///
/// let assets = MemoryAssets::new().with_file("alg.rs", "pub fn alg1() {}");
/// assert!(assets.get("alg.rs").is_some());
/// ```
#[derive(Debug, Default)]
pub struct MemoryAssets {
    files: HashMap<String, Vec<u8>>,
}

impl MemoryAssets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file at `path`.
    #[must_use]
    pub fn with_file(mut self, path: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        self.files.insert(path.into(), content.into());
        self
    }
}

impl AssetSource for MemoryAssets {
    fn get(&self, path: &str) -> Option<Cow<'_, [u8]>> {
        self.files.get(path).map(|data| Cow::Borrowed(data.as_slice()))
    }
}

/// Load an asset as UTF-8 text.
pub fn load_str(assets: &dyn AssetSource, path: &str) -> Result<String, RenderError> {
    let data = assets.get(path).ok_or_else(|| RenderError::MissingAsset {
        path: path.to_owned(),
    })?;
    String::from_utf8(data.into_owned()).map_err(|_| RenderError::InvalidUtf8 {
        path: path.to_owned(),
    })
}
