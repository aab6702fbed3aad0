//! Interactive terminal host
//!
//! Owns the terminal for the lifetime of the calculator: raw mode, the
//! alternate screen and mouse capture are restored even when the loop fails.
//! State is loaded on entry and saved when the user leaves with Escape.

use crate::config::CliConfig;
use crate::error::CliResult;
use crate::ui::{self, Palette};
use berrycalc::engine::CalculatorEngine;
use berrycalc::input::{Command, InputEvent, KeyPress, NavCommand};
use berrycalc::persistence::SavedState;
use berrycalc::render::RenderData;
use crossterm::cursor::{Hide, Show};
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    MouseButton, MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use std::io::{self, Write};
use std::time::Duration;
use tracing::{debug, info};

/// How long to wait for input before repainting
const FRAME_INTERVAL: Duration = Duration::from_millis(33);

/// Runs the calculator until the user leaves
pub fn run_interactive(config: &CliConfig) -> CliResult<()> {
    let state = SavedState::load(&config.state_path)?;
    let mut engine = CalculatorEngine::new();
    engine.import_state(state);
    info!(path = %config.state_path.display(), "calculator opened");

    let palette = Palette::default();
    let mut stdout = io::stdout();
    enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, Hide)?;

    let result = event_loop(&mut stdout, &mut engine, &palette);
    let restored = restore_terminal(&mut stdout, disable_raw_mode);
    settle(result, restored)?;

    engine.export_state().save(&config.state_path)?;
    info!(path = %config.state_path.display(), "state saved");
    Ok(())
}

/// Puts the terminal back. Every step runs even when an earlier one fails;
/// the first failure is returned.
fn restore_terminal<W: Write>(
    out: &mut W,
    disable_raw: impl FnOnce() -> io::Result<()>,
) -> io::Result<()> {
    let raw = disable_raw();
    let screen = execute!(out, Show, DisableMouseCapture, LeaveAlternateScreen);
    raw.and(screen)
}

/// Loop errors take precedence over restore errors
fn settle(result: CliResult<()>, restored: io::Result<()>) -> CliResult<()> {
    result?;
    Ok(restored?)
}

fn event_loop<W: Write>(
    out: &mut W,
    engine: &mut CalculatorEngine,
    palette: &Palette,
) -> CliResult<()> {
    loop {
        engine.tick();
        ui::paint(out, &engine.render_data(), palette)?;

        if !event::poll(FRAME_INTERVAL)? {
            continue;
        }
        let Some(input) = translate(&event::read()?, &engine.render_data()) else {
            continue;
        };
        if engine.handle_input(input) == Some(Command::Back) {
            debug!("leaving calculator");
            return Ok(());
        }
    }
}

/// Converts a terminal event into engine input.
///
/// Only key presses count (repeats and releases are dropped). Ctrl+C leaves
/// like Escape, and a left click becomes a tap on the button under it.
#[must_use]
pub fn translate(event: &Event, data: &RenderData<'_>) -> Option<InputEvent> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                return Some(NavCommand::Back.into());
            }
            Some(KeyPress::from(*key).into())
        }
        Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
            ui::surface_point(data, mouse.column, mouse.row)
                .map(|(x, y)| InputEvent::Pointer { x, y })
        }
        _ => None,
    }
}
