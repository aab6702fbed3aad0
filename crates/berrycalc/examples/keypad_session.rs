//! Drives the calculator engine with navigation commands, the way a d-pad
//! host would, and prints each step.
//!
//! Run with: cargo run -p berrycalc --example keypad_session

use berrycalc::prelude::*;

fn show(engine: &CalculatorEngine, step: &str) {
    let data = engine.render_data();
    let selected = engine
        .keypad()
        .get(data.selected)
        .map_or("?", ButtonKind::label);
    println!(
        "{step:<14} display={:<14} focus={selected:<4} pending={:?}",
        data.display, data.pending
    );
}

fn main() {
    let mut engine = CalculatorEngine::new();
    show(&engine, "start");

    // C -> 7 -> 8 and press it
    for nav in [NavCommand::Down, NavCommand::Right, NavCommand::Activate] {
        engine.handle_input(nav.into());
    }
    show(&engine, "press 8");

    // Typed keys go through the same key map
    for c in ['*', '4', '='] {
        engine.handle_input(KeyPress::char(c).into());
    }
    show(&engine, "× 4 =");

    // Switch to the advanced keypad and take the square root
    engine.handle_input(KeyPress::char('m').into());
    engine.apply_button(ButtonKind::Unary(UnaryFunction::SquareRoot));
    show(&engine, "advanced √");

    for line in engine.history().iter() {
        println!("history: {line}");
    }
    println!("state: {}", engine.export_state().to_json().unwrap_or_default());
}
