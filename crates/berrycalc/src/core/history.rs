//! Bounded record of completed calculations
//!
//! Entries are kept as rendered strings (`"5 + 3 = 8"`) because that is what
//! the state file stores and what the shell shows.

use crate::core::format::format_number;
use crate::core::operations::Operator;
use std::collections::VecDeque;

/// Calculation history, oldest first.
///
/// Pushing beyond `max_entries` evicts from the front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    entries: VecDeque<String>,
    max_entries: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    /// Default maximum history size
    pub const DEFAULT_MAX_ENTRIES: usize = 10;

    /// Creates a new history with default capacity
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_MAX_ENTRIES)
    }

    /// Creates a history with custom maximum size
    #[must_use]
    pub fn with_capacity(max_entries: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(max_entries),
            max_entries,
        }
    }

    /// Rebuilds a history from stored lines, keeping the newest `max_entries`
    #[must_use]
    pub fn from_lines<I>(lines: I, max_entries: usize) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut history = Self::with_capacity(max_entries);
        for line in lines {
            history.push(line);
        }
        history
    }

    /// Appends a raw line, evicting the oldest when full
    pub fn push(&mut self, line: String) {
        if self.max_entries == 0 {
            return;
        }
        while self.entries.len() >= self.max_entries {
            self.entries.pop_front();
        }
        self.entries.push_back(line);
    }

    /// Records `lhs op rhs = result` using display formatting for each number
    pub fn record(&mut self, lhs: f64, op: Operator, rhs: f64, result: f64) {
        let line = format!(
            "{} {} {} = {}",
            format_number(lhs),
            op.symbol(),
            format_number(rhs),
            format_number(result)
        );
        self.push(line);
    }

    /// Returns the number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the history is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the maximum number of entries
    #[must_use]
    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    /// Returns an iterator over the entries (oldest first)
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Returns the most recent entry
    #[must_use]
    pub fn last(&self) -> Option<&str> {
        self.entries.back().map(String::as_str)
    }

    /// Copies the entries out, oldest first
    #[must_use]
    pub fn to_vec(&self) -> Vec<String> {
        self.entries.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_new() {
        let history = History::new();
        assert!(history.is_empty());
        assert_eq!(history.max_entries(), 10);
    }

    #[test]
    fn test_record_formats_numbers() {
        let mut history = History::new();
        history.record(5.0, Operator::Add, 3.0, 8.0);
        assert_eq!(history.last(), Some("5 + 3 = 8"));
    }

    #[test]
    fn test_record_fractional_and_symbols() {
        let mut history = History::new();
        history.record(1.0, Operator::Divide, 3.0, 1.0 / 3.0);
        history.record(2.5, Operator::Multiply, -2.0, -5.0);
        assert_eq!(
            history.to_vec(),
            vec!["1 ÷ 3 = 0.33333333", "2.5 × -2 = -5"]
        );
    }

    #[test]
    fn test_eviction_keeps_newest() {
        let mut history = History::with_capacity(3);
        for i in 0..5 {
            history.push(format!("entry {i}"));
        }
        assert_eq!(history.len(), 3);
        assert_eq!(history.to_vec(), vec!["entry 2", "entry 3", "entry 4"]);
    }

    #[test]
    fn test_zero_capacity_keeps_nothing() {
        let mut history = History::with_capacity(0);
        history.push("1 + 1 = 2".into());
        assert!(history.is_empty());
    }

    #[test]
    fn test_from_lines_trims_oldest() {
        let lines: Vec<String> = (0..12).map(|i| format!("{i} + 0 = {i}")).collect();
        let history = History::from_lines(lines, 10);
        assert_eq!(history.len(), 10);
        assert_eq!(history.iter().next(), Some("2 + 0 = 2"));
        assert_eq!(history.last(), Some("11 + 0 = 11"));
    }

    #[test]
    fn test_from_lines_keeps_text_verbatim() {
        let lines = vec!["5.0 + 3.0 = 8.0".to_string()];
        let history = History::from_lines(lines.clone(), 10);
        assert_eq!(history.to_vec(), lines);
    }
}
