//! BerryCalc CLI library
//!
//! Terminal host and scripting front end for the [`berrycalc`] engine.
//! The binary is a thin wrapper; everything it does lives here so it can be
//! tested without a terminal.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)] // Error types are self-documenting

mod commands;
mod config;
mod error;
pub mod handlers;
pub mod logging;
pub mod terminal;
pub mod ui;

pub use commands::{Cli, ColorArg, Commands, PressArgs};
pub use config::{CliConfig, ColorChoice, Verbosity, DEFAULT_STATE_FILE};
pub use error::{CliError, CliResult};
pub use logging::LogTarget;
pub use ui::Palette;
