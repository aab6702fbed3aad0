//! Snapshot handed to the external painter each frame

use crate::core::Operator;
use crate::keypad::{ButtonKind, ButtonRect, Keypad, Mode};
use std::borrow::Cow;

/// Everything a painter needs to draw the calculator.
///
/// Borrowed from the engine; build a new one per frame.
#[derive(Debug, Clone)]
pub struct RenderData<'a> {
    /// Header text
    pub title: &'static str,
    /// Display text, truncated for presentation
    pub display: Cow<'a, str>,
    /// Active layout
    pub keypad: &'a Keypad,
    /// Focused button index
    pub selected: usize,
    /// Button currently flashing as pressed
    pub pressed: Option<usize>,
    /// Active mode
    pub mode: Mode,
    /// Info flag
    pub show_info: bool,
    /// Error latch
    pub error: bool,
    /// Operator waiting for its right operand
    pub pending: Option<Operator>,
}

/// One keypad button as it should be painted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonCell {
    /// Row-major index
    pub index: usize,
    /// Grid row
    pub row: usize,
    /// Grid column
    pub col: usize,
    /// Button kind
    pub kind: ButtonKind,
    /// Pixel rectangle on the handheld surface
    pub rect: ButtonRect,
    /// Has focus
    pub selected: bool,
    /// Is flashing
    pub pressed: bool,
}

impl RenderData<'_> {
    /// Iterates the buttons with their paint state
    pub fn cells(&self) -> impl Iterator<Item = ButtonCell> + '_ {
        let geometry = self.keypad.geometry();
        let cols = self.keypad.dimensions().1;
        self.keypad
            .buttons_with_positions()
            .map(move |((row, col), kind)| {
                let index = row * cols + col;
                ButtonCell {
                    index,
                    row,
                    col,
                    kind,
                    rect: geometry.rect(row, col),
                    selected: index == self.selected,
                    pressed: self.pressed == Some(index),
                }
            })
    }
}
