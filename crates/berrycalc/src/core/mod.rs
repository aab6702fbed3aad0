//! Arithmetic, formatting and history used by the engine

pub mod format;
pub mod history;
mod operations;

pub use format::{format_number, is_integral, round_to_places, truncate_for_display};
pub use history::History;
pub use operations::{parse_operand, MemoryOp, Operator, UnaryFunction};
