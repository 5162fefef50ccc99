use crate::args;
use crate::error::*;

/// Validate the site configuration
#[derive(Clone, Debug, PartialEq, Eq, clap::Args)]
pub(crate) struct CheckArgs {
    #[command(flatten, next_help_heading = "CONFIG")]
    pub(crate) config: args::ConfigArgs,
}

impl CheckArgs {
    pub(crate) fn run(&self) -> Result<()> {
        let site = self.config.load_config()?;
        log::info!(
            "Configuration is valid ({} locales, {} rewrites, {} head tags)",
            site.locales.len(),
            site.rewrites.len(),
            site.head.len()
        );
        Ok(())
    }
}
