use crate::args;
use crate::error::*;

/// Print site debug information
#[derive(Clone, Debug, PartialEq, Eq, clap::Subcommand)]
pub(crate) enum DebugCommands {
    /// Prints the resolved config
    Config {
        #[command(flatten, next_help_heading = "CONFIG")]
        config: args::ConfigArgs,
    },

    /// Prints the `<head>` tags as HTML
    Head {
        #[command(flatten, next_help_heading = "CONFIG")]
        config: args::ConfigArgs,
    },
}

impl DebugCommands {
    pub(crate) fn run(&self) -> Result<()> {
        match self {
            Self::Config { config } => {
                let site = config.load_config()?;
                println!("{site}");
            }
            Self::Head { config } => {
                let site = config.load_config()?;
                println!("{}", site.head_html());
            }
        }

        Ok(())
    }
}
