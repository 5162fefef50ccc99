mod args;
mod check;
mod debug;
mod error;
mod route;

use clap::Parser;

use crate::error::*;

/// Check and inspect the ken blog's site configuration
#[derive(Debug, clap::Parser)]
#[command(name = "kenblog", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity<clap_verbosity_flag::InfoLevel>,

    #[command(flatten)]
    color: colorchoice_clap::Color,
}

#[derive(Clone, Debug, PartialEq, Eq, clap::Subcommand)]
enum Command {
    Check(check::CheckArgs),
    Rewrite(route::RewriteArgs),
    Locale(route::LocaleArgs),
    #[command(subcommand)]
    Debug(debug::DebugCommands),
}

impl Command {
    fn run(&self) -> Result<()> {
        match self {
            Self::Check(cmd) => cmd.run(),
            Self::Rewrite(cmd) => cmd.run(),
            Self::Locale(cmd) => cmd.run(),
            Self::Debug(cmd) => cmd.run(),
        }
    }
}

fn main() {
    human_panic::setup_panic!();
    let result = run();
    proc_exit::exit(result);
}

fn run() -> proc_exit::ExitResult {
    let cli = Cli::parse();

    cli.color.write_global();
    let colored_stderr =
        anstream::AutoStream::choice(&std::io::stderr()) != anstream::ColorChoice::Never;
    args::init_logging(cli.verbose.log_level(), colored_stderr);

    if let Err(err) = cli.command.run() {
        log::error!("{err:#}");
        return proc_exit::Code::FAILURE.ok();
    }

    Ok(())
}

#[test]
fn verify_cli() {
    use clap::CommandFactory;
    Cli::command().debug_assert();
}
