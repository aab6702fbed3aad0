//! BerryCalc - calculator widget engine for the LightBerry handheld shell
//!
//! The engine owns all calculator state and is driven by discrete input
//! events: keyboard presses, d-pad navigation commands and pointer taps.
//! Painting is left to the host, which pulls a [`render::RenderData`]
//! snapshot each frame.
//!
//! # Design
//!
//! - **Error latch**: arithmetic failures never escape the engine; the display
//!   shows `Error` until the next entry or clear
//! - **Fixed layouts**: a 4x5 basic keypad and a 4x7 advanced keypad with
//!   trig, log, memory and π
//! - **Persistence**: history, memory and mode round-trip through JSON
//!
//! # Example
//!
//! ```rust
//! use berrycalc::prelude::*;
//!
//! let mut engine = CalculatorEngine::new();
//!
//! for c in ['4', '2', '*', '2', '='] {
//!     engine.handle_input(KeyPress::char(c).into());
//! }
//! assert_eq!(engine.display(), "84");
//! assert_eq!(engine.history().last(), Some("42 × 2 = 84"));
//!
//! // Failures latch instead of returning errors
//! engine.apply_button("÷".parse().unwrap());
//! engine.apply_button(ButtonKind::Digit(0));
//! engine.evaluate();
//! assert!(engine.is_error());
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod clock;
pub mod config;
pub mod core;
pub mod engine;
pub mod error;
pub mod input;
pub mod keypad;
pub mod persistence;
pub mod render;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::clock::{Clock, ManualClock, MonotonicClock};
    pub use crate::config::EngineConfig;
    pub use crate::core::{format_number, History, MemoryOp, Operator, UnaryFunction};
    pub use crate::engine::CalculatorEngine;
    pub use crate::error::{CalcError, CalcResult, StateError};
    pub use crate::input::{
        Command, InputEvent, KeyAction, KeyCode, KeyMap, KeyModifiers, KeyPress, NavCommand,
    };
    pub use crate::keypad::{ButtonKind, Direction, Keypad, Mode, UnknownLabel};
    pub use crate::persistence::SavedState;
    pub use crate::render::{ButtonCell, RenderData};
}
