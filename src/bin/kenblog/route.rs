use crate::args;
use crate::error::*;

/// Print the public form of source paths after the rewrite rules
#[derive(Clone, Debug, PartialEq, Eq, clap::Args)]
pub(crate) struct RewriteArgs {
    /// Source paths, e.g. `en/blog/post-1`
    #[arg(required = true)]
    pub(crate) paths: Vec<String>,

    #[command(flatten, next_help_heading = "CONFIG")]
    pub(crate) config: args::ConfigArgs,
}

impl RewriteArgs {
    pub(crate) fn run(&self) -> Result<()> {
        let site = self.config.load_config()?;
        let rewrites = site.rewrites.compile()?;
        for path in &self.paths {
            println!("{}", rewrites.apply(path));
        }
        Ok(())
    }
}

/// Print the locale serving each URL path
#[derive(Clone, Debug, PartialEq, Eq, clap::Args)]
pub(crate) struct LocaleArgs {
    /// URL paths, e.g. `/zh/posts/`
    #[arg(required = true)]
    pub(crate) paths: Vec<String>,

    #[command(flatten, next_help_heading = "CONFIG")]
    pub(crate) config: args::ConfigArgs,
}

impl LocaleArgs {
    pub(crate) fn run(&self) -> Result<()> {
        let site = self.config.load_config()?;
        for path in &self.paths {
            let Some((key, locale)) = site.locale_for(path) else {
                bail!("No locale serves `{path}`");
            };
            println!("{key} ({})", locale.lang);
        }
        Ok(())
    }
}
