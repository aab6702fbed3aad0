//! Calculator engine: input state machine, focus navigation and memory
//!
//! All state lives here and is mutated only through [`CalculatorEngine`]
//! methods. Arithmetic failures never escape: they set the error latch and
//! show the configured error token until the next entry or clear.

use crate::clock::{Clock, MonotonicClock};
use crate::config::EngineConfig;
use crate::core::{
    format_number, parse_operand, round_to_places, truncate_for_display, History, MemoryOp,
    Operator, UnaryFunction,
};
use crate::error::{CalcError, CalcResult};
use crate::input::{Command, InputEvent, KeyAction, KeyMap};
use crate::keypad::{ButtonKind, Direction, Keypad, Mode};
use crate::persistence::SavedState;
use crate::render::RenderData;
use tracing::{debug, trace};

/// Operator waiting for its right operand
#[derive(Debug, Clone, Copy, PartialEq)]
struct PendingOperation {
    operator: Operator,
    lhs: f64,
}

/// Button flashing after a press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PressFlash {
    index: usize,
    at_ms: u64,
}

/// The calculator widget's state machine
#[derive(Debug)]
pub struct CalculatorEngine<C = MonotonicClock> {
    config: EngineConfig,
    clock: C,
    key_map: KeyMap,
    display: String,
    pending: Option<PendingOperation>,
    /// Next digit starts a new number
    fresh_input: bool,
    /// Current number already has a decimal point
    decimal_entered: bool,
    error: bool,
    memory: f64,
    history: History,
    keypad: Keypad,
    selected: usize,
    pressed: Option<PressFlash>,
    show_info: bool,
}

impl Default for CalculatorEngine<MonotonicClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorEngine<MonotonicClock> {
    /// Creates an engine with default configuration and a wall clock
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Creates an engine with custom configuration and a wall clock
    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self::with_clock(config, MonotonicClock::new())
    }
}

impl<C: Clock> CalculatorEngine<C> {
    /// Creates an engine driven by `clock`
    #[must_use]
    pub fn with_clock(config: EngineConfig, clock: C) -> Self {
        let history = History::with_capacity(config.history_limit);
        Self {
            config,
            clock,
            key_map: KeyMap::new(),
            display: "0".to_string(),
            pending: None,
            fresh_input: true,
            decimal_entered: false,
            error: false,
            memory: 0.0,
            history,
            keypad: Keypad::new(Mode::Basic),
            selected: 0,
            pressed: None,
            show_info: false,
        }
    }

    // ----- Accessors -----

    /// Current display text (never truncated)
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Error latch
    #[must_use]
    pub const fn is_error(&self) -> bool {
        self.error
    }

    /// Whether the next digit starts a new number
    #[must_use]
    pub const fn is_fresh_input(&self) -> bool {
        self.fresh_input
    }

    /// Operator waiting for its right operand
    #[must_use]
    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending.map(|p| p.operator)
    }

    /// Left operand of the pending operation
    #[must_use]
    pub fn pending_operand(&self) -> Option<f64> {
        self.pending.map(|p| p.lhs)
    }

    /// Memory register
    #[must_use]
    pub const fn memory(&self) -> f64 {
        self.memory
    }

    /// Completed calculations
    #[must_use]
    pub const fn history(&self) -> &History {
        &self.history
    }

    /// Active mode
    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.keypad.mode()
    }

    /// Active layout
    #[must_use]
    pub const fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Focused button index
    #[must_use]
    pub const fn selected(&self) -> usize {
        self.selected
    }

    /// Button currently flashing as pressed
    #[must_use]
    pub fn pressed(&self) -> Option<usize> {
        self.pressed.map(|p| p.index)
    }

    /// Info flag
    #[must_use]
    pub const fn show_info(&self) -> bool {
        self.show_info
    }

    /// Engine configuration
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    // ----- Input -----

    /// Handles one input event.
    ///
    /// Returns [`Command::Back`] when the user asks to leave; the engine
    /// keeps its state in that case. Unknown keys are ignored.
    pub fn handle_input(&mut self, event: InputEvent) -> Option<Command> {
        match event {
            InputEvent::Key(key) => {
                let action = self.key_map.resolve(key);
                trace!(?key, ?action, "key");
                action.and_then(|action| self.apply_action(action))
            }
            InputEvent::Nav(nav) => self.apply_action(nav.into()),
            InputEvent::Pointer { x, y } => {
                if let Some(index) = self.keypad.hit_test(x, y) {
                    self.press_button(index);
                }
                None
            }
        }
    }

    /// Performs a resolved key action
    pub fn apply_action(&mut self, action: KeyAction) -> Option<Command> {
        match action {
            KeyAction::Back => return Some(Command::Back),
            KeyAction::ToggleInfo => self.show_info = !self.show_info,
            KeyAction::Move(direction) => self.move_selection(direction),
            KeyAction::Activate => self.press_button(self.selected),
            KeyAction::ToggleMode => self.toggle_mode(),
            KeyAction::Digit(d) => self.input_digit(d),
            KeyAction::Decimal => self.input_decimal(),
            KeyAction::Operator(op) => self.input_operator(op),
            KeyAction::Equals => self.evaluate(),
        }
        None
    }

    /// Moves the focus one cell, clamped to the grid
    pub fn move_selection(&mut self, direction: Direction) {
        self.selected = self.keypad.step(self.selected, direction);
    }

    /// Presses the button at `index` in the active layout.
    ///
    /// Indexes outside the grid are ignored.
    pub fn press_button(&mut self, index: usize) {
        let Some(kind) = self.keypad.get(index) else {
            return;
        };
        self.apply_button(kind);
        self.pressed = Some(PressFlash {
            index,
            at_ms: self.clock.now_ms(),
        });
    }

    /// Runs the behavior of a button kind without touching the highlight
    pub fn apply_button(&mut self, kind: ButtonKind) {
        match kind {
            ButtonKind::Digit(d) => self.input_digit(d),
            ButtonKind::Decimal => self.input_decimal(),
            ButtonKind::Operator(op) => self.input_operator(op),
            ButtonKind::Equals => self.evaluate(),
            ButtonKind::Clear => self.clear_all(),
            ButtonKind::ClearEntry => self.clear_entry(),
            ButtonKind::ModeToggle => self.toggle_mode(),
            ButtonKind::Unary(function) => self.apply_unary(function),
            ButtonKind::Pi => self.load_pi(),
            ButtonKind::Memory(op) => self.apply_memory(op),
        }
    }

    // ----- Entry -----

    /// Enters a digit (0-9); other values are ignored
    pub fn input_digit(&mut self, digit: u8) {
        let Some(c) = char::from_digit(u32::from(digit), 10) else {
            return;
        };
        if self.error {
            self.clear_all();
        }
        if self.fresh_input {
            self.display.clear();
            self.display.push(c);
            self.fresh_input = false;
            self.decimal_entered = false;
        } else if self.display.len() < self.config.entry_limit {
            self.display.push(c);
        }
    }

    /// Enters a decimal point
    pub fn input_decimal(&mut self) {
        if self.error {
            self.clear_all();
        }
        if self.fresh_input {
            self.display.clear();
            self.display.push_str("0.");
            self.fresh_input = false;
            self.decimal_entered = true;
        } else if !self.decimal_entered && self.display.len() < self.config.entry_limit {
            self.display.push('.');
            self.decimal_entered = true;
        }
    }

    /// Begins an operation, evaluating any pending one first
    pub fn input_operator(&mut self, operator: Operator) {
        if self.error {
            self.clear_all();
        }
        if self.pending.is_some() {
            self.evaluate();
        }
        match parse_operand(&self.display) {
            Ok(lhs) => {
                self.pending = Some(PendingOperation { operator, lhs });
                self.fresh_input = true;
                self.decimal_entered = false;
            }
            Err(err) => self.latch(&err),
        }
    }

    /// Evaluates the pending operation (the `=` key).
    ///
    /// On failure the operator stays pending, so pressing `=` again
    /// reproduces the error.
    pub fn evaluate(&mut self) {
        let Some(pending) = self.pending else {
            return;
        };
        let outcome = parse_operand(&self.display).and_then(|rhs| {
            pending
                .operator
                .apply(pending.lhs, rhs)
                .map(|result| (rhs, result))
        });
        match outcome {
            Ok((rhs, result)) => {
                self.history
                    .record(pending.lhs, pending.operator, rhs, result);
                self.display = format_number(result);
                self.pending = None;
                self.fresh_input = true;
                self.decimal_entered = false;
            }
            Err(err) => self.latch(&err),
        }
    }

    /// C: resets display, operands, operator and flags; keeps memory and history
    pub fn clear_all(&mut self) {
        self.display = "0".to_string();
        self.pending = None;
        self.fresh_input = true;
        self.decimal_entered = false;
        self.error = false;
    }

    /// CE: resets the display only; the pending operation survives
    pub fn clear_entry(&mut self) {
        self.display = "0".to_string();
        self.fresh_input = true;
        self.decimal_entered = false;
        self.error = false;
    }

    /// Switches layouts.
    ///
    /// The display, pending operation and memory are kept, but the next
    /// digit starts a new number.
    pub fn toggle_mode(&mut self) {
        self.set_mode(self.keypad.mode().toggled());
        self.fresh_input = true;
    }

    fn set_mode(&mut self, mode: Mode) {
        self.keypad = Keypad::new(mode);
        self.selected = 0;
        debug!(?mode, "keypad mode");
    }

    // ----- Functions -----

    /// Applies a unary function to the display value
    pub fn apply_unary(&mut self, function: UnaryFunction) {
        match self.unary_result(function) {
            Ok(value) => self.show_result(value),
            Err(err) => self.latch(&err),
        }
    }

    fn unary_result(&self, function: UnaryFunction) -> CalcResult<f64> {
        let value = parse_operand(&self.display)?;
        let result = function.apply(value)?;
        Ok(round_to_places(result, crate::core::format::DECIMAL_PLACES))
    }

    /// Loads π (eight decimal places).
    ///
    /// Ignored while the error latch is set, so the error token stays on the
    /// display until new entry, `C` or `CE` clears it.
    pub fn load_pi(&mut self) {
        if !self.error {
            self.show_result(std::f64::consts::PI);
        }
    }

    /// Runs a memory-register operation.
    ///
    /// `MR` is ignored while the error latch is set, leaving the error token
    /// on the display. `MC` still clears the register, and `M+`/`M-` latch
    /// again because the display does not parse as a number.
    pub fn apply_memory(&mut self, op: MemoryOp) {
        match op {
            MemoryOp::Clear => self.memory = 0.0,
            MemoryOp::Recall if self.error => {}
            MemoryOp::Recall => self.show_result(self.memory),
            MemoryOp::Add | MemoryOp::Subtract => {
                let operator = if op == MemoryOp::Add {
                    Operator::Add
                } else {
                    Operator::Subtract
                };
                let updated = parse_operand(&self.display)
                    .and_then(|value| operator.apply(self.memory, value));
                match updated {
                    Ok(memory) => self.memory = memory,
                    Err(err) => self.latch(&err),
                }
            }
        }
    }

    /// Shows a computed value; the next digit starts a new number
    fn show_result(&mut self, value: f64) {
        self.display = format_number(value);
        self.fresh_input = true;
    }

    fn latch(&mut self, err: &CalcError) {
        debug!(%err, display = %self.display, "error latched");
        self.display.clone_from(&self.config.error_token);
        self.error = true;
    }

    // ----- Frame -----

    /// Clears the press highlight once its flash time has passed
    pub fn update(&mut self, now_ms: u64) {
        if let Some(flash) = self.pressed {
            if now_ms.saturating_sub(flash.at_ms) > self.config.press_flash_ms {
                self.pressed = None;
            }
        }
    }

    /// [`update`](Self::update) using the engine's clock
    pub fn tick(&mut self) {
        let now = self.clock.now_ms();
        self.update(now);
    }

    /// Snapshot for the painter
    #[must_use]
    pub fn render_data(&self) -> RenderData<'_> {
        RenderData {
            title: self.mode().title(),
            display: truncate_for_display(&self.display, self.config.presentation_width),
            keypad: &self.keypad,
            selected: self.selected,
            pressed: self.pressed(),
            mode: self.mode(),
            show_info: self.show_info,
            error: self.error,
            pending: self.pending_operator(),
        }
    }

    // ----- Persistence -----

    /// Captures history, memory and mode
    #[must_use]
    pub fn export_state(&self) -> SavedState {
        SavedState {
            history: self.history.to_vec(),
            memory: self.memory,
            advanced_mode: self.mode().is_advanced(),
        }
    }

    /// Restores history, memory and mode; everything else returns to defaults
    pub fn import_state(&mut self, state: SavedState) {
        let SavedState {
            history,
            memory,
            advanced_mode,
        } = state;
        self.history = History::from_lines(history, self.config.history_limit);
        self.memory = memory;
        self.clear_all();
        self.pressed = None;
        self.show_info = false;
        self.set_mode(Mode::from_advanced(advanced_mode));
        debug!(
            entries = self.history.len(),
            memory = self.memory,
            advanced_mode,
            "imported state"
        );
    }
}
