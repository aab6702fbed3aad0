//! Keypad layouts, button kinds and focus navigation
//!
//! Two fixed layouts exist. Buttons are stored row-major, so a selection is
//! a single index and `index / cols`, `index % cols` give its cell.
//!
//! ```text
//! Basic (4x5)            Advanced (4x7)
//! [C ] [CE] [√ ] [÷ ]    [sin] [cos] [tan] [log]
//! [7 ] [8 ] [9 ] [× ]    [MC ] [MR ] [M+ ] [M- ]
//! [4 ] [5 ] [6 ] [- ]    [C  ] [CE ] [√  ] [÷  ]
//! [1 ] [2 ] [3 ] [+ ]    [7  ] [8  ] [9  ] [×  ]
//! [0 ] [. ] [= ] [Mode]  [4  ] [5  ] [6  ] [-  ]
//!                        [1  ] [2  ] [3  ] [+  ]
//!                        [0  ] [.  ] [=  ] [π  ]
//! ```

use crate::core::{MemoryOp, Operator, UnaryFunction};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const DIGIT_LABELS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

/// Keypad mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
pub enum Mode {
    /// Digits, arithmetic, √ and the mode key
    #[default]
    Basic,
    /// Adds trig, log, memory and π rows
    Advanced,
}

impl Mode {
    /// Returns the other mode
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Basic => Self::Advanced,
            Self::Advanced => Self::Basic,
        }
    }

    /// Returns true for [`Mode::Advanced`]
    #[must_use]
    pub const fn is_advanced(self) -> bool {
        matches!(self, Self::Advanced)
    }

    /// Builds a mode from the persisted `advanced_mode` flag
    #[must_use]
    pub const fn from_advanced(advanced: bool) -> Self {
        if advanced {
            Self::Advanced
        } else {
            Self::Basic
        }
    }

    /// Header shown above the display
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Basic => "Calculator",
            Self::Advanced => "Calculator (Advanced)",
        }
    }
}

/// What a keypad button does when pressed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ButtonKind {
    /// Enter a digit (0-9)
    Digit(u8),
    /// Enter a decimal point
    Decimal,
    /// Begin or chain a binary operation
    Operator(Operator),
    /// Evaluate the pending operation
    Equals,
    /// C: full reset
    Clear,
    /// CE: reset the display only
    ClearEntry,
    /// Switch between basic and advanced layouts
    ModeToggle,
    /// Apply a single-operand function
    Unary(UnaryFunction),
    /// Load π
    Pi,
    /// Memory register operation
    Memory(MemoryOp),
}

impl ButtonKind {
    /// Returns the label printed on the button
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Digit(d) => DIGIT_LABELS.get(usize::from(d)).copied().unwrap_or("?"),
            Self::Decimal => ".",
            Self::Operator(op) => op.symbol(),
            Self::Equals => "=",
            Self::Clear => "C",
            Self::ClearEntry => "CE",
            Self::ModeToggle => "Mode",
            Self::Unary(f) => f.label(),
            Self::Pi => "π",
            Self::Memory(op) => op.label(),
        }
    }

    /// Operators and equals get an accented style
    #[must_use]
    pub const fn is_accented(self) -> bool {
        matches!(self, Self::Operator(_) | Self::Equals)
    }
}

impl fmt::Display for ButtonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Label that names no keypad button
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown button label: {0:?}")]
pub struct UnknownLabel(pub String);

impl FromStr for ButtonKind {
    type Err = UnknownLabel;

    /// Parses a keypad label. ASCII spellings (`*`, `/`, `x`, `sqrt`, `pi`)
    /// are accepted alongside the printed symbols.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(d) = DIGIT_LABELS.iter().position(|label| *label == s) {
            return Ok(Self::Digit(d as u8));
        }
        let kind = match s {
            "." => Self::Decimal,
            "+" => Self::Operator(Operator::Add),
            "-" => Self::Operator(Operator::Subtract),
            "×" | "*" | "x" => Self::Operator(Operator::Multiply),
            "÷" | "/" => Self::Operator(Operator::Divide),
            "=" => Self::Equals,
            "C" | "c" => Self::Clear,
            "CE" | "ce" => Self::ClearEntry,
            "Mode" | "mode" => Self::ModeToggle,
            "√" | "sqrt" => Self::Unary(UnaryFunction::SquareRoot),
            "sin" => Self::Unary(UnaryFunction::Sine),
            "cos" => Self::Unary(UnaryFunction::Cosine),
            "tan" => Self::Unary(UnaryFunction::Tangent),
            "log" => Self::Unary(UnaryFunction::Log10),
            "π" | "pi" => Self::Pi,
            "MC" | "mc" => Self::Memory(MemoryOp::Clear),
            "MR" | "mr" => Self::Memory(MemoryOp::Recall),
            "M+" | "m+" => Self::Memory(MemoryOp::Add),
            "M-" | "m-" => Self::Memory(MemoryOp::Subtract),
            _ => return Err(UnknownLabel(s.to_string())),
        };
        Ok(kind)
    }
}

/// Focus movement on the keypad grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// One row up
    Up,
    /// One row down
    Down,
    /// One cell left, stopping at the row start
    Left,
    /// One cell right, stopping at the row end
    Right,
}

/// Pixel rectangle of a button on the 400-px handheld surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonRect {
    /// Left edge
    pub x: u16,
    /// Top edge
    pub y: u16,
    /// Width
    pub width: u16,
    /// Height
    pub height: u16,
}

impl ButtonRect {
    /// Returns true if the point lies inside the rectangle
    #[must_use]
    pub const fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && y >= self.y && x < self.x + self.width && y < self.y + self.height
    }
}

/// Button sizes for a layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    /// Horizontal pitch between button columns
    pub button_width: u16,
    /// Button height
    pub button_height: u16,
    /// Y coordinate of the first row
    pub grid_top: u16,
}

impl Geometry {
    /// Width of the handheld drawing surface
    pub const SURFACE_WIDTH: u16 = 400;
    /// Left margin of the grid
    pub const MARGIN: u16 = 10;
    /// Gap between buttons
    pub const GAP: u16 = 2;

    /// Geometry for a mode with `cols` columns
    #[must_use]
    pub const fn for_mode(mode: Mode, cols: usize) -> Self {
        let cols = if cols == 0 { 1 } else { cols as u16 };
        let button_width = (Self::SURFACE_WIDTH - 2 * Self::MARGIN) / cols;
        match mode {
            Mode::Basic => Self {
                button_width,
                button_height: 28,
                grid_top: 70,
            },
            Mode::Advanced => Self {
                button_width,
                button_height: 18,
                grid_top: 80,
            },
        }
    }

    /// Rectangle of the button at `(row, col)`
    #[must_use]
    pub const fn rect(&self, row: usize, col: usize) -> ButtonRect {
        ButtonRect {
            x: Self::MARGIN + col as u16 * self.button_width,
            y: self.grid_top + row as u16 * (self.button_height + Self::GAP),
            width: self.button_width - Self::GAP,
            height: self.button_height,
        }
    }
}

/// A keypad layout for one mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keypad {
    mode: Mode,
    /// Buttons in row-major order
    buttons: Vec<ButtonKind>,
    rows: usize,
    cols: usize,
    geometry: Geometry,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new(Mode::Basic)
    }
}

impl Keypad {
    /// Builds the layout for `mode`
    #[must_use]
    pub fn new(mode: Mode) -> Self {
        use ButtonKind::{Clear, ClearEntry, Decimal, Digit, Equals, ModeToggle, Pi};

        let add = ButtonKind::Operator(Operator::Add);
        let sub = ButtonKind::Operator(Operator::Subtract);
        let mul = ButtonKind::Operator(Operator::Multiply);
        let div = ButtonKind::Operator(Operator::Divide);
        let sqrt = ButtonKind::Unary(UnaryFunction::SquareRoot);

        let mut buttons = Vec::with_capacity(28);
        if mode.is_advanced() {
            buttons.extend([
                ButtonKind::Unary(UnaryFunction::Sine),
                ButtonKind::Unary(UnaryFunction::Cosine),
                ButtonKind::Unary(UnaryFunction::Tangent),
                ButtonKind::Unary(UnaryFunction::Log10),
                ButtonKind::Memory(MemoryOp::Clear),
                ButtonKind::Memory(MemoryOp::Recall),
                ButtonKind::Memory(MemoryOp::Add),
                ButtonKind::Memory(MemoryOp::Subtract),
            ]);
        }
        buttons.extend([
            Clear,
            ClearEntry,
            sqrt,
            div,
            Digit(7),
            Digit(8),
            Digit(9),
            mul,
            Digit(4),
            Digit(5),
            Digit(6),
            sub,
            Digit(1),
            Digit(2),
            Digit(3),
            add,
            Digit(0),
            Decimal,
            Equals,
        ]);
        // Advanced has no mode key; the `m` shortcut still switches back
        buttons.push(if mode.is_advanced() { Pi } else { ModeToggle });

        let cols = 4;
        let rows = buttons.len() / cols;
        Self {
            mode,
            buttons,
            rows,
            cols,
            geometry: Geometry::for_mode(mode, cols),
        }
    }

    /// Returns the mode this layout belongs to
    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns the pixel geometry
    #[must_use]
    pub const fn geometry(&self) -> Geometry {
        self.geometry
    }

    /// Gets a button by index
    #[must_use]
    pub fn get(&self, index: usize) -> Option<ButtonKind> {
        self.buttons.get(index).copied()
    }

    /// Gets a button by row and column
    #[must_use]
    pub fn get_at(&self, row: usize, col: usize) -> Option<ButtonKind> {
        if row < self.rows && col < self.cols {
            self.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Converts an index into `(row, col)`
    #[must_use]
    pub fn position(&self, index: usize) -> Option<(usize, usize)> {
        (index < self.buttons.len()).then(|| (index / self.cols, index % self.cols))
    }

    /// Finds the index of the first button of a given kind
    #[must_use]
    pub fn find(&self, kind: ButtonKind) -> Option<usize> {
        self.buttons.iter().position(|b| *b == kind)
    }

    /// Returns an iterator over buttons with their (row, col) positions
    pub fn buttons_with_positions(&self) -> impl Iterator<Item = ((usize, usize), ButtonKind)> + '_ {
        self.buttons
            .iter()
            .enumerate()
            .map(move |(i, b)| ((i / self.cols, i % self.cols), *b))
    }

    /// Rectangle of the button at `index`
    #[must_use]
    pub fn button_rect(&self, index: usize) -> Option<ButtonRect> {
        self.position(index)
            .map(|(row, col)| self.geometry.rect(row, col))
    }

    /// Converts a surface point to a button index
    #[must_use]
    pub fn hit_test(&self, x: u16, y: u16) -> Option<usize> {
        (0..self.buttons.len()).find(|&i| {
            self.button_rect(i)
                .is_some_and(|rect| rect.contains(x, y))
        })
    }

    /// Moves a selection one step, clamped to the grid.
    ///
    /// Up/down jump a full row; left/right stay within the current row.
    #[must_use]
    pub fn step(&self, from: usize, direction: Direction) -> usize {
        let last = self.buttons.len().saturating_sub(1);
        let from = from.min(last);
        match direction {
            Direction::Up => from.saturating_sub(self.cols),
            Direction::Down => (from + self.cols).min(last),
            Direction::Left if from % self.cols > 0 => from - 1,
            Direction::Right if from % self.cols < self.cols - 1 && from < last => from + 1,
            Direction::Left | Direction::Right => from,
        }
    }
}
