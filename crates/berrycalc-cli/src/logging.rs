//! Tracing subscriber setup
//!
//! `RUST_LOG` wins when set; otherwise the level follows `-v`/`-q`. The
//! interactive calculator owns the terminal, so its logs go to `--log-file`
//! or nowhere.

use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Where log lines are written
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Standard error
    Stderr,
    /// Appended to a file
    File(PathBuf),
    /// Dropped
    Discard,
}

impl LogTarget {
    /// Picks the target for a run
    #[must_use]
    pub fn for_run(config: &CliConfig, interactive: bool) -> Self {
        match (&config.log_file, interactive) {
            (Some(path), _) => Self::File(path.clone()),
            (None, true) => Self::Discard,
            (None, false) => Self::Stderr,
        }
    }
}

/// Builds the level filter for a configuration
#[must_use]
pub fn env_filter(config: &CliConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.verbosity.filter_directive()))
}

/// Installs the global subscriber
pub fn init(config: &CliConfig, interactive: bool) -> CliResult<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_target(false);

    let installed = match LogTarget::for_run(config, interactive) {
        LogTarget::Stderr => builder.with_writer(std::io::stderr).try_init(),
        LogTarget::File(path) => {
            let file = OpenOptions::new().create(true).append(true).open(&path)?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        LogTarget::Discard => builder.with_writer(std::io::sink).try_init(),
    };
    installed.map_err(|err| CliError::logging(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interactive_without_log_file_discards() {
        let config = CliConfig::new();
        assert_eq!(LogTarget::for_run(&config, true), LogTarget::Discard);
        assert_eq!(LogTarget::for_run(&config, false), LogTarget::Stderr);
    }

    #[test]
    fn test_log_file_always_wins() {
        let config = CliConfig::new().with_log_file(Some(PathBuf::from("calc.log")));
        assert_eq!(
            LogTarget::for_run(&config, true),
            LogTarget::File(PathBuf::from("calc.log"))
        );
        assert_eq!(
            LogTarget::for_run(&config, false),
            LogTarget::File(PathBuf::from("calc.log"))
        );
    }
}
