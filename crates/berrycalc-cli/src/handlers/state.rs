//! State command handler

use crate::config::CliConfig;
use crate::error::CliResult;
use berrycalc::persistence::SavedState;

/// Execute the state command
pub fn execute_state(config: &CliConfig) -> CliResult<()> {
    let state = SavedState::load(&config.state_path)?;
    println!("{}", render_state(&state)?);
    Ok(())
}

/// Pretty JSON for a saved state
pub fn render_state(state: &SavedState) -> CliResult<String> {
    Ok(state.to_json_pretty()?)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_render_default_state() {
        let json = render_state(&SavedState::default()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["history"], serde_json::json!([]));
        assert_eq!(value["memory"], serde_json::json!(0.0));
        assert_eq!(value["advanced_mode"], serde_json::json!(false));
    }

    #[test]
    fn test_render_is_indented() {
        let state = SavedState {
            history: vec!["1 + 1 = 2".into()],
            memory: 2.0,
            advanced_mode: true,
        };
        let json = render_state(&state).unwrap();
        assert!(json.contains("\n  \"history\""));
        assert!(json.contains("1 + 1 = 2"));
    }
}
