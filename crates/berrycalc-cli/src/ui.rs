//! Terminal painter for the calculator
//!
//! The frame is laid out as plain text first ([`frame_lines`]) so the layout
//! can be tested without a terminal; [`paint`] then writes the same lines
//! with colors from an injected [`Palette`].
//!
//! ```text
//! Calculator               i: help
//! +------------------------------+
//! |+                          42 |
//! +------------------------------+
//!
//! [  C   ]   CE      √       ÷
//!    7       8       9       ×
//! ```

use berrycalc::render::{ButtonCell, RenderData};
use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{
    Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
};
use crossterm::terminal::{Clear, ClearType};
use std::io::{self, Write};

/// Terminal columns per keypad button
pub const CELL_WIDTH: u16 = 8;

/// Terminal row of the first keypad row
pub const KEYPAD_TOP: u16 = 5;

const INFO_HINT: &str = "i: help";

const HELP_LINES: [&str; 6] = [
    "arrows  move      enter  press",
    "0-9 .   enter     + - * /  op",
    "=       equals    m      mode",
    "alt+w..c 1-9      alt+v     0",
    "i       help      esc    quit",
    "mouse   tap a button",
];

/// Colors used by the painter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Regular text
    pub text: Color,
    /// Operator and equals buttons
    pub accent: Color,
    /// Focused button
    pub focus: Color,
    /// Background of a button flashing as pressed
    pub pressed: Color,
    /// Display text while the error latch is set
    pub error: Color,
    /// Borders and hints
    pub muted: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            text: Color::White,
            accent: Color::Yellow,
            focus: Color::Cyan,
            pressed: Color::DarkBlue,
            error: Color::Red,
            muted: Color::DarkGrey,
        }
    }
}

/// Width of the frame in terminal columns
fn frame_width(data: &RenderData<'_>) -> usize {
    data.keypad.dimensions().1 * usize::from(CELL_WIDTH)
}

/// Text of one keypad button, brackets marking focus
#[must_use]
pub fn cell_text(cell: &ButtonCell) -> String {
    let inner = usize::from(CELL_WIDTH) - 2;
    let (open, close) = if cell.selected { ('[', ']') } else { (' ', ' ') };
    format!("{open}{:^inner$}{close}", cell.kind.label())
}

fn title_line(data: &RenderData<'_>) -> String {
    let width = frame_width(data);
    let pad = width.saturating_sub(data.title.chars().count() + INFO_HINT.len());
    format!("{}{}{INFO_HINT}", data.title, " ".repeat(pad))
}

fn border_line(data: &RenderData<'_>) -> String {
    format!("+{}+", "-".repeat(frame_width(data).saturating_sub(2)))
}

fn display_line(data: &RenderData<'_>) -> String {
    let inner = frame_width(data).saturating_sub(4);
    let op = data.pending.map_or(" ", |op| op.symbol());
    format!("|{op}{:>inner$} |", data.display)
}

/// Lays out a frame as plain text, one string per terminal row
#[must_use]
pub fn frame_lines(data: &RenderData<'_>) -> Vec<String> {
    let mut lines = vec![
        title_line(data),
        border_line(data),
        display_line(data),
        border_line(data),
        String::new(),
    ];

    let (rows, _) = data.keypad.dimensions();
    let mut row_text = vec![String::new(); rows];
    for cell in data.cells() {
        if let Some(text) = row_text.get_mut(cell.row) {
            text.push_str(&cell_text(&cell));
        }
    }
    lines.extend(row_text);

    if data.show_info {
        lines.push(String::new());
        lines.extend(HELP_LINES.iter().map(|line| (*line).to_string()));
    }
    lines
}

/// Maps a terminal cell to the centre of the button drawn there, in
/// handheld surface coordinates
#[must_use]
pub fn surface_point(data: &RenderData<'_>, column: u16, row: u16) -> Option<(u16, u16)> {
    let grid_row = usize::from(row.checked_sub(KEYPAD_TOP)?);
    let grid_col = usize::from(column / CELL_WIDTH);
    let (rows, cols) = data.keypad.dimensions();
    if grid_row >= rows || grid_col >= cols {
        return None;
    }
    let rect = data.keypad.button_rect(grid_row * cols + grid_col)?;
    Some((rect.x + rect.width / 2, rect.y + rect.height / 2))
}

/// Paints a frame to `out` and flushes it
pub fn paint<W: Write>(out: &mut W, data: &RenderData<'_>, palette: &Palette) -> io::Result<()> {
    queue!(out, Clear(ClearType::All))?;

    let lines = frame_lines(data);
    let mut row: u16 = 0;
    for (index, line) in lines.iter().enumerate() {
        queue!(out, MoveTo(0, row))?;
        match index {
            0 => {
                queue!(
                    out,
                    SetAttribute(Attribute::Bold),
                    SetForegroundColor(palette.text),
                    Print(data.title),
                    SetAttribute(Attribute::Reset),
                    SetForegroundColor(palette.muted),
                    Print(&line[data.title.len()..]),
                )?;
            }
            1 | 3 => queue!(out, SetForegroundColor(palette.muted), Print(line))?,
            2 => {
                let color = if data.error { palette.error } else { palette.text };
                queue!(out, SetForegroundColor(color), Print(line))?;
            }
            _ => queue!(out, SetForegroundColor(palette.muted), Print(line))?,
        }
        queue!(out, ResetColor)?;
        row = row.saturating_add(1);
    }

    // Keypad cells are repainted over their plain text with styling
    for cell in data.cells() {
        let x = cell.col as u16 * CELL_WIDTH;
        let y = KEYPAD_TOP + cell.row as u16;
        let fg = if cell.selected {
            palette.focus
        } else if cell.kind.is_accented() {
            palette.accent
        } else {
            palette.text
        };
        queue!(out, MoveTo(x, y), SetForegroundColor(fg))?;
        if cell.pressed {
            queue!(out, SetBackgroundColor(palette.pressed))?;
        }
        if cell.selected {
            queue!(out, SetAttribute(Attribute::Bold))?;
        }
        queue!(
            out,
            Print(cell_text(&cell)),
            SetAttribute(Attribute::Reset),
            ResetColor
        )?;
    }
    out.flush()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use berrycalc::prelude::*;

    fn engine() -> CalculatorEngine<ManualClock> {
        CalculatorEngine::with_clock(EngineConfig::default(), ManualClock::at(0))
    }

    #[test]
    fn test_frame_layout_basic() {
        let e = engine();
        let lines = frame_lines(&e.render_data());
        // title, box (3 rows), spacer, 5 keypad rows
        assert_eq!(lines.len(), 10);
        assert!(lines[0].starts_with("Calculator"));
        assert!(lines[0].ends_with("i: help"));
        assert!(lines[2].ends_with("0 |"));
        assert!(lines[5].starts_with("[  C   ]"));
        assert!(lines[9].contains("Mode"));
    }

    #[test]
    fn test_frame_lines_have_frame_width() {
        let e = engine();
        let lines = frame_lines(&e.render_data());
        for line in &lines[..4] {
            assert_eq!(line.chars().count(), 32, "{line:?}");
        }
        for line in &lines[5..] {
            assert_eq!(line.chars().count(), 32, "{line:?}");
        }
    }

    #[test]
    fn test_display_line_shows_pending_operator() {
        let mut e = engine();
        for c in ['4', '2', '+'] {
            e.handle_input(KeyPress::char(c).into());
        }
        let lines = frame_lines(&e.render_data());
        assert!(lines[2].starts_with("|+"));
        assert!(lines[2].ends_with("42 |"));
    }

    #[test]
    fn test_info_panel() {
        let mut e = engine();
        e.handle_input(KeyPress::char('i').into());
        let lines = frame_lines(&e.render_data());
        assert!(lines.iter().any(|line| line.contains("esc    quit")));
    }

    #[test]
    fn test_advanced_frame_has_seven_rows() {
        let mut e = engine();
        e.toggle_mode();
        let lines = frame_lines(&e.render_data());
        assert_eq!(lines.len(), 12);
        assert!(lines[0].starts_with("Calculator (Advanced)"));
        assert!(lines[5].contains("sin"));
        assert!(lines[11].contains("π"));
    }

    #[test]
    fn test_surface_point_hits_same_button() {
        let e = engine();
        let data = e.render_data();
        // Column 9 is inside the second cell; row KEYPAD_TOP + 1 is the 7-8-9 row
        let (x, y) = surface_point(&data, 9, KEYPAD_TOP + 1).unwrap();
        assert_eq!(e.keypad().hit_test(x, y), Some(5));
    }

    #[test]
    fn test_surface_point_outside_keypad() {
        let e = engine();
        let data = e.render_data();
        assert_eq!(surface_point(&data, 0, 2), None);
        assert_eq!(surface_point(&data, 40, KEYPAD_TOP), None);
        assert_eq!(surface_point(&data, 0, KEYPAD_TOP + 5), None);
    }

    #[test]
    fn test_paint_writes_display() {
        let mut e = engine();
        for c in ['1', '2', '3'] {
            e.handle_input(KeyPress::char(c).into());
        }
        let mut out = Vec::new();
        paint(&mut out, &e.render_data(), &Palette::default()).unwrap();
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains("123"));
        assert!(text.contains("Calculator"));
    }
}
