//! Command handlers - extracted from main.rs for testability
//!
//! Each handler module contains the execution logic for one subcommand,
//! its pure helpers, and tests.

pub mod press;
pub mod state;

pub use press::{execute_press, press_labels, render_press_output};
pub use state::{execute_state, render_state};
