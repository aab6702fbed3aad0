//! Press command handler

use crate::commands::PressArgs;
use crate::config::CliConfig;
use crate::error::CliResult;
use berrycalc::clock::Clock;
use berrycalc::engine::CalculatorEngine;
use berrycalc::keypad::ButtonKind;
use berrycalc::persistence::SavedState;
use console::style;
use tracing::info;

/// Execute the press command
pub fn execute_press(config: &CliConfig, args: &PressArgs) -> CliResult<()> {
    let state = if args.fresh {
        SavedState::default()
    } else {
        SavedState::load(&config.state_path)?
    };

    let mut engine = CalculatorEngine::new();
    engine.import_state(state);
    press_labels(&mut engine, &args.labels)?;

    println!("{}", render_press_output(&engine, args.history));

    if args.dry_run {
        info!("dry run, state not saved");
    } else {
        engine.export_state().save(&config.state_path)?;
        info!(path = %config.state_path.display(), "state saved");
    }
    Ok(())
}

/// Presses buttons by label.
///
/// Every label is parsed before anything is pressed, so an unknown label
/// leaves the engine untouched. Buttons shown on the active keypad are
/// pressed through the grid; the rest (such as `sin` on the basic keypad)
/// run directly.
pub fn press_labels<C: Clock>(
    engine: &mut CalculatorEngine<C>,
    labels: &[String],
) -> CliResult<()> {
    let kinds = labels
        .iter()
        .map(|label| label.parse::<ButtonKind>())
        .collect::<Result<Vec<_>, _>>()?;

    for kind in kinds {
        match engine.keypad().find(kind) {
            Some(index) => engine.press_button(index),
            None => engine.apply_button(kind),
        }
    }
    Ok(())
}

/// Formats the display (and optionally the history) for printing
#[must_use]
pub fn render_press_output<C: Clock>(engine: &CalculatorEngine<C>, with_history: bool) -> String {
    let display = if engine.is_error() {
        style(engine.display()).red().bold().to_string()
    } else {
        style(engine.display()).bold().to_string()
    };
    if !with_history {
        return display;
    }

    let mut output = display;
    for line in engine.history().iter() {
        output.push('\n');
        output.push_str(&style(line).dim().to_string());
    }
    output
}
