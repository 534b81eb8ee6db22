//! `cotalk build` command implementation.

use std::path::PathBuf;
use std::rc::Rc;

use clap::Args;
use cotalk_config::{CliSettings, Config, DocsFailure};
use cotalk_deck::{AssetSource, BundledAssets, DirAssets, DocFailure, DocLookup};

use crate::error::CliError;
use crate::output::Output;
use crate::talk;

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    /// Output directory for the rendered page (default: ./build).
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Read talk assets from this directory instead of the bundled ones.
    #[arg(long, env = "COTALK_ASSETS_DIR")]
    assets_dir: Option<PathBuf>,

    /// Fail the build when a documentation lookup fails.
    #[arg(long)]
    strict_docs: bool,

    /// Path to configuration file (default: auto-discover cotalk.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

impl BuildArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            output_dir: self.output_dir,
            assets_dir: self.assets_dir,
            docs_on_failure: self.strict_docs.then_some(DocsFailure::Fatal),
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let assets: Rc<dyn AssetSource> = match &config.assets_resolved.dir {
            Some(dir) => {
                output.info(&format!("Assets: {}", dir.display()));
                Rc::new(DirAssets::new(dir))
            }
            None => {
                output.info("Assets: bundled");
                Rc::new(BundledAssets)
            }
        };
        let docs = Rc::new(
            DocLookup::new(config.docs.command.clone())
                .with_failure_policy(doc_failure(config.docs.on_failure)),
        );

        let deck = talk::presentation(assets, &docs)?
            .with_filename(config.output_resolved.filename.clone());
        output.detail(&format!("{} slides", deck.len()));

        let page = deck.assemble()?;
        let path = page.write_to(&config.output_resolved.dir)?;

        output.success(&format!("Deck written to {}", path.display()));
        Ok(())
    }
}

fn doc_failure(policy: DocsFailure) -> DocFailure {
    match policy {
        DocsFailure::Empty => DocFailure::Empty,
        DocsFailure::Fatal => DocFailure::Fatal,
    }
}
