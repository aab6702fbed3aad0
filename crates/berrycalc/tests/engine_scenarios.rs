//! End-to-end calculator scenarios driven through the public input API

use berrycalc::prelude::*;
use tempfile::TempDir;

fn engine() -> CalculatorEngine<ManualClock> {
    CalculatorEngine::with_clock(EngineConfig::default(), ManualClock::at(0))
}

fn press_all(engine: &mut CalculatorEngine<ManualClock>, labels: &[&str]) {
    for label in labels {
        let kind: ButtonKind = label.parse().unwrap();
        // Press through the grid when the button is visible, as a user would
        match engine.keypad().find(kind) {
            Some(index) => engine.press_button(index),
            None => engine.apply_button(kind),
        }
    }
}

#[test]
fn scenario_five_plus_three() {
    let mut e = engine();
    press_all(&mut e, &["5", "+", "3", "="]);
    assert_eq!(e.display(), "8");
    assert_eq!(e.history().to_vec(), vec!["5 + 3 = 8".to_string()]);
}

#[test]
fn scenario_divide_by_zero() {
    let mut e = engine();
    press_all(&mut e, &["9", "÷", "0", "="]);
    assert_eq!(e.display(), e.config().error_token);
    assert!(e.is_error());
}

#[test]
fn scenario_divide_by_zero_repeats_on_equals() {
    let mut e = engine();
    press_all(&mut e, &["9", "÷", "0", "=", "="]);
    assert!(e.is_error());
    assert_eq!(e.pending_operator(), Some(Operator::Divide));
    assert!(e.history().is_empty());
}

#[test]
fn scenario_history_keeps_ten_most_recent() {
    let mut e = engine();
    for n in 1..=11 {
        press_all(&mut e, &["C"]);
        for c in n.to_string().chars() {
            e.input_digit(c.to_digit(10).unwrap() as u8);
        }
        press_all(&mut e, &["+", "0", "="]);
    }
    let lines = e.history().to_vec();
    assert_eq!(lines.len(), 10);
    assert!(!lines.contains(&"1 + 0 = 1".to_string()));
    assert_eq!(lines.first().map(String::as_str), Some("2 + 0 = 2"));
    assert_eq!(lines.last().map(String::as_str), Some("11 + 0 = 11"));
}

#[test]
fn scenario_domain_errors() {
    for labels in [
        &["1", "-", "2", "=", "√"][..],
        &["0", "log"][..],
        &["5", "-", "1", "0", "=", "log"][..],
    ] {
        let mut e = engine();
        e.toggle_mode();
        press_all(&mut e, labels);
        assert!(e.is_error(), "{labels:?} should latch");
    }

    let mut e = engine();
    press_all(&mut e, &["4", "√"]);
    assert_eq!(e.display(), "2");
}

#[test]
fn scenario_mode_toggle_preserves_calculation() {
    let mut e = engine();
    press_all(&mut e, &["2", "+", "2", "=", "M+", "×", "3"]);
    e.handle_input(NavCommand::Down.into());
    e.handle_input(KeyPress::char('m').into());

    assert_eq!(e.mode(), Mode::Advanced);
    assert_eq!(e.selected(), 0);
    assert_eq!(e.keypad().button_count(), 28);
    assert_eq!(e.display(), "3");
    assert_eq!(e.memory(), 4.0);
    assert_eq!(e.history().len(), 1);

    press_all(&mut e, &["="]);
    assert_eq!(e.display(), "12");
}

#[test]
fn scenario_mode_key_on_basic_grid() {
    let mut e = engine();
    let index = e.keypad().find(ButtonKind::ModeToggle).unwrap();
    e.press_button(index);
    assert_eq!(e.mode(), Mode::Advanced);
    assert_eq!(e.render_data().title, "Calculator (Advanced)");
}

#[test]
fn scenario_memory_recall_overwritten_by_digit() {
    let mut e = engine();
    e.toggle_mode();
    press_all(&mut e, &["6", "M+", "C", "MR"]);
    assert_eq!(e.display(), "6");
    press_all(&mut e, &["1"]);
    assert_eq!(e.display(), "1");
}

#[test]
fn scenario_state_file_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("calculator.json");

    let mut e = engine();
    e.toggle_mode();
    press_all(&mut e, &["7", "×", "6", "=", "M+", "π"]);
    e.export_state().save(&path).unwrap();

    let mut restored = engine();
    restored.import_state(SavedState::load(&path).unwrap());
    assert_eq!(restored.history().to_vec(), e.history().to_vec());
    assert_eq!(restored.memory(), 42.0);
    assert_eq!(restored.mode(), Mode::Advanced);
    assert_eq!(restored.display(), "0");
    assert_eq!(restored.pending_operator(), None);
}

#[test]
fn scenario_escape_leaves_state_alone() {
    let mut e = engine();
    press_all(&mut e, &["1", "+"]);
    assert_eq!(
        e.handle_input(NavCommand::Back.into()),
        Some(Command::Back)
    );
    assert_eq!(e.pending_operator(), Some(Operator::Add));
    assert_eq!(e.display(), "1");
}

#[test]
fn scenario_press_highlight_lifetime() {
    let clock = ManualClock::at(5_000);
    let mut e = CalculatorEngine::with_clock(EngineConfig::default(), clock.clone());
    e.handle_input(NavCommand::Activate.into());
    assert_eq!(e.render_data().pressed, Some(0));

    clock.advance(150);
    e.tick();
    assert_eq!(e.pressed(), Some(0));

    clock.advance(100);
    e.tick();
    assert_eq!(e.pressed(), None);
}

#[test]
fn scenario_custom_error_token() {
    let config = EngineConfig::default().with_error_token("E");
    let mut e = CalculatorEngine::with_clock(config, ManualClock::at(0));
    press_all(&mut e, &["1", "÷", "0", "="]);
    assert_eq!(e.display(), "E");
}
