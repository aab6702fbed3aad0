//! BerryCalc CLI: keypad calculator in the terminal
//!
//! ## Usage
//!
//! ```bash
//! berrycalc                           # Interactive calculator
//! berrycalc press 5 + 3 =             # Press buttons, print the display
//! berrycalc press --history 2 x 2 =   # Also print the history
//! berrycalc state                     # Show the saved state
//! ```

use berrycalc_cli::{
    handlers, logging, terminal, Cli, CliConfig, CliResult, Commands, ColorChoice, Verbosity,
};
use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();

    // Build configuration from CLI args
    let config = build_config(&cli);
    config.color.apply();

    let interactive = matches!(cli.command, None | Some(Commands::Run));
    logging::init(&config, interactive)?;

    match cli.command {
        None | Some(Commands::Run) => terminal::run_interactive(&config),
        Some(Commands::Press(args)) => handlers::execute_press(&config, &args),
        Some(Commands::State) => handlers::execute_state(&config),
    }
}

fn build_config(cli: &Cli) -> CliConfig {
    let verbosity = Verbosity::from_flags(cli.quiet, cli.verbose);
    let color: ColorChoice = cli.color.clone().into();

    CliConfig::new()
        .with_verbosity(verbosity)
        .with_color(color)
        .with_state_path(cli.state.clone())
        .with_log_file(cli.log_file.clone())
}
