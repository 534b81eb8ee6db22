//! `cotalk assets` command implementation.

use clap::Args;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the assets command.
#[derive(Args)]
pub(crate) struct AssetsArgs {
    /// Only list paths starting with this prefix (e.g. `testdata/`).
    #[arg(long)]
    prefix: Option<String>,
}

impl AssetsArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let prefix = self.prefix.unwrap_or_default();
        let mut count = 0;
        for path in cotalk_assets::iter().filter(|p| p.starts_with(prefix.as_str())) {
            output.info(&path);
            count += 1;
        }
        output.detail(&format!("{count} assets"));
        Ok(())
    }
}
