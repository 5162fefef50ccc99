use std::env;
use std::io::Write;
use std::path;

use kenblog::config::SiteConfig;

use crate::error::*;

#[derive(Clone, Debug, PartialEq, Eq, clap::Args)]
pub(crate) struct ConfigArgs {
    /// Config file to use [default: _kenblog.yml, else the built-in site]
    #[arg(short, long, value_name = "FILE")]
    config: Option<path::PathBuf>,
}

impl ConfigArgs {
    pub(crate) fn load_config(&self) -> Result<SiteConfig> {
        let cwd = env::current_dir().unwrap_or_else(|_| path::PathBuf::from("."));
        kenblog::load(self.config.as_deref(), &cwd)
    }
}

pub(crate) fn init_logging(level: Option<log::Level>, colored: bool) {
    let Some(level) = level else {
        return;
    };

    let mut builder = env_logger::Builder::new();
    builder.write_style(if colored {
        env_logger::WriteStyle::Always
    } else {
        env_logger::WriteStyle::Never
    });
    builder.filter(None, level.to_level_filter());

    if level == log::Level::Trace {
        builder.format_timestamp_secs();
    } else {
        let palette = Palette::new(colored);
        builder.format(move |f, record| {
            let style = palette.style(record.level());
            let level = format!("[{}]", record.level()).to_lowercase();
            writeln!(
                f,
                "{}{:8}{} {}",
                style.render(),
                level,
                style.render_reset(),
                record.args()
            )
        });
    }

    builder.init();
}

#[derive(Copy, Clone, Debug)]
struct Palette {
    error: anstyle::Style,
    warn: anstyle::Style,
    info: anstyle::Style,
    debug: anstyle::Style,
}

impl Palette {
    fn new(colored: bool) -> Self {
        if colored {
            Self {
                error: anstyle::AnsiColor::Red.on_default() | anstyle::Effects::BOLD,
                warn: anstyle::AnsiColor::Yellow.on_default(),
                info: anstyle::AnsiColor::Green.on_default(),
                debug: anstyle::AnsiColor::Blue.on_default(),
            }
        } else {
            Self {
                error: anstyle::Style::new(),
                warn: anstyle::Style::new(),
                info: anstyle::Style::new(),
                debug: anstyle::Style::new(),
            }
        }
    }

    fn style(&self, level: log::Level) -> anstyle::Style {
        match level {
            log::Level::Error => self.error,
            log::Level::Warn => self.warn,
            log::Level::Info => self.info,
            log::Level::Debug | log::Level::Trace => self.debug,
        }
    }
}
