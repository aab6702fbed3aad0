//! Engine configuration

use serde::{Deserialize, Serialize};

/// Tunables for the calculator engine.
///
/// The defaults match the stock handheld build; tests rely on them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Maximum characters accepted during digit/decimal entry
    pub entry_limit: usize,
    /// Characters shown before the display is truncated with an ellipsis
    pub presentation_width: usize,
    /// Number of history records kept
    pub history_limit: usize,
    /// How long a pressed button stays highlighted, in milliseconds
    pub press_flash_ms: u64,
    /// Text shown while the error latch is set
    pub error_token: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            entry_limit: Self::DEFAULT_ENTRY_LIMIT,
            presentation_width: Self::DEFAULT_PRESENTATION_WIDTH,
            history_limit: Self::DEFAULT_HISTORY_LIMIT,
            press_flash_ms: Self::DEFAULT_PRESS_FLASH_MS,
            error_token: Self::DEFAULT_ERROR_TOKEN.to_string(),
        }
    }
}

impl EngineConfig {
    /// Default digit-entry cap
    pub const DEFAULT_ENTRY_LIMIT: usize = 10;
    /// Default presentation width
    pub const DEFAULT_PRESENTATION_WIDTH: usize = 12;
    /// Default history size
    pub const DEFAULT_HISTORY_LIMIT: usize = 10;
    /// Default press highlight duration
    pub const DEFAULT_PRESS_FLASH_MS: u64 = 200;
    /// Default error token
    pub const DEFAULT_ERROR_TOKEN: &'static str = "Error";

    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the digit-entry cap
    #[must_use]
    pub const fn with_entry_limit(mut self, limit: usize) -> Self {
        self.entry_limit = limit;
        self
    }

    /// Set the presentation width
    #[must_use]
    pub const fn with_presentation_width(mut self, width: usize) -> Self {
        self.presentation_width = width;
        self
    }

    /// Set the history size
    #[must_use]
    pub const fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }

    /// Set the press highlight duration
    #[must_use]
    pub const fn with_press_flash_ms(mut self, ms: u64) -> Self {
        self.press_flash_ms = ms;
        self
    }

    /// Set the error token
    #[must_use]
    pub fn with_error_token(mut self, token: impl Into<String>) -> Self {
        self.error_token = token.into();
        self
    }
}
