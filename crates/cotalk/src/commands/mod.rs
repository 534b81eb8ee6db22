//! CLI command implementations.

pub(crate) mod assets;
pub(crate) mod build;

pub(crate) use assets::AssetsArgs;
pub(crate) use build::BuildArgs;
