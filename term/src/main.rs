//! Terminal Teeko: arrow keys or WASD move the cursor, space places, picks and drops.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

mod app;
mod config;
mod input;
mod logging;
mod render;

use app::{App, TerminalGuard};
use config::TermConfig;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Settings file; defaults apply when it does not exist
    #[arg(short, long, default_value = "teeko.toml")]
    config: PathBuf,

    /// Cursor blink interval in milliseconds
    #[arg(long)]
    flash_ms: Option<u64>,

    /// Skip the title screen
    #[arg(long)]
    no_splash: bool,

    /// Where log output goes
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Args {
    fn apply(&self, config: &mut TermConfig) {
        if let Some(flash_ms) = self.flash_ms {
            config.flash_interval_ms = flash_ms;
        }
        if self.no_splash {
            config.show_start_screen = false;
        }
        if let Some(log_file) = &self.log_file {
            config.log_file = log_file.clone();
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = TermConfig::load_or_default(&args.config)
        .with_context(|| format!("failed to load {}", args.config.display()))?;
    args.apply(&mut config);
    config.validate().context("invalid settings")?;

    logging::init(&config.log_file, args.verbose.log_level())?;
    log::debug!("{config:?}");

    let mut stdout = io::stdout();
    let _guard = TerminalGuard::enter(&mut stdout)?;
    App::new(stdout, config).run()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_file_settings() {
        let args = Args::parse_from([
            "teeko",
            "--flash-ms",
            "300",
            "--no-splash",
            "--log-file",
            "x.log",
        ]);
        let mut config = TermConfig::default();
        args.apply(&mut config);

        assert_eq!(config.flash_interval_ms, 300);
        assert!(!config.show_start_screen);
        assert_eq!(config.log_file, PathBuf::from("x.log"));
        assert_eq!(config.poll_interval_ms, 10);
    }

    #[test]
    fn no_flags_keep_file_settings() {
        let args = Args::parse_from(["teeko"]);
        let mut config = TermConfig::default();
        args.apply(&mut config);

        assert_eq!(config, TermConfig::default());
        assert_eq!(args.config, PathBuf::from("teeko.toml"));
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
