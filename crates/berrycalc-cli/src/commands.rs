//! CLI command definitions using clap

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::DEFAULT_STATE_FILE;

/// BerryCalc: keypad calculator for the LightBerry handheld shell
#[derive(Parser, Debug)]
#[command(name = "berrycalc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorArg,

    /// State file holding history, memory and mode
    #[arg(long, env = "BERRYCALC_STATE", default_value = DEFAULT_STATE_FILE, global = true)]
    pub state: PathBuf,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Subcommand to run (defaults to the interactive calculator)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the interactive calculator in the terminal
    Run,

    /// Press buttons by label and print the display
    ///
    /// Labels are the printed button texts (7, +, ×, √, MR, ...) or their
    /// ASCII spellings (*, /, sqrt, pi).
    Press(PressArgs),

    /// Print the saved state as JSON
    State,
}

/// Arguments for the press command
#[derive(Parser, Debug)]
pub struct PressArgs {
    /// Start from an empty state instead of loading the state file
    #[arg(long)]
    pub fresh: bool,

    /// Also print the calculation history
    #[arg(long)]
    pub history: bool,

    /// Do not write the state file afterwards
    #[arg(long)]
    pub dry_run: bool,

    /// Button labels, pressed in order
    #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
    pub labels: Vec<String>,
}

/// Color argument for CLI
#[derive(ValueEnum, Clone, Debug, Default)]
pub enum ColorArg {
    /// Automatic color detection
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorArg> for crate::config::ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}
