//! Keyboard and navigation input mapping
//!
//! Host events are translated into [`KeyAction`]s by a fixed key map. Keys
//! the map does not know are ignored.

use crate::core::Operator;
use crate::keypad::Direction;

/// Physical key identity, independent of any terminal library
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// Printable character
    Char(char),
    /// Return / Enter
    Enter,
    /// Escape
    Escape,
    /// Arrow up
    Up,
    /// Arrow down
    Down,
    /// Arrow left
    Left,
    /// Arrow right
    Right,
    /// Any key the calculator has no use for
    Other,
}

/// Modifier keys held during a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct KeyModifiers {
    /// Alt / Option
    pub alt: bool,
    /// Control
    pub ctrl: bool,
    /// Shift
    pub shift: bool,
}

impl KeyModifiers {
    /// No modifiers
    pub const NONE: Self = Self {
        alt: false,
        ctrl: false,
        shift: false,
    };

    /// Alt only
    pub const ALT: Self = Self {
        alt: true,
        ctrl: false,
        shift: false,
    };
}

/// A key-down event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyPress {
    /// Which key
    pub code: KeyCode,
    /// Held modifiers
    pub modifiers: KeyModifiers,
}

impl KeyPress {
    /// Create a key press
    #[must_use]
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Key press without modifiers
    #[must_use]
    pub const fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    /// Character key without modifiers
    #[must_use]
    pub const fn char(c: char) -> Self {
        Self::plain(KeyCode::Char(c))
    }

    /// Character key with Alt held
    #[must_use]
    pub const fn alt(c: char) -> Self {
        Self::new(KeyCode::Char(c), KeyModifiers::ALT)
    }
}

/// Discrete navigation commands from d-pad style hosts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavCommand {
    /// Move focus up
    Up,
    /// Move focus down
    Down,
    /// Move focus left
    Left,
    /// Move focus right
    Right,
    /// Press the focused button
    Activate,
    /// Leave the calculator
    Back,
}

/// Everything the engine accepts as input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputEvent {
    /// Keyboard key-down
    Key(KeyPress),
    /// Navigation command
    Nav(NavCommand),
    /// Tap or click at a surface coordinate
    Pointer {
        /// Surface x
        x: u16,
        /// Surface y
        y: u16,
    },
}

impl From<KeyPress> for InputEvent {
    fn from(key: KeyPress) -> Self {
        Self::Key(key)
    }
}

impl From<NavCommand> for InputEvent {
    fn from(nav: NavCommand) -> Self {
        Self::Nav(nav)
    }
}

/// Signals returned to the host shell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Leave the calculator and return to the shell
    Back,
}

/// Semantic action resolved from a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// Leave the calculator
    Back,
    /// Toggle the info flag
    ToggleInfo,
    /// Move the focus
    Move(Direction),
    /// Press the focused button
    Activate,
    /// Switch keypad mode
    ToggleMode,
    /// Enter a digit
    Digit(u8),
    /// Enter a decimal point
    Decimal,
    /// Enter an operator
    Operator(Operator),
    /// Evaluate
    Equals,
}

impl From<NavCommand> for KeyAction {
    fn from(nav: NavCommand) -> Self {
        match nav {
            NavCommand::Up => Self::Move(Direction::Up),
            NavCommand::Down => Self::Move(Direction::Down),
            NavCommand::Left => Self::Move(Direction::Left),
            NavCommand::Right => Self::Move(Direction::Right),
            NavCommand::Activate => Self::Activate,
            NavCommand::Back => Self::Back,
        }
    }
}

/// Handheld keyboard layout: Alt plus these letters types a digit
pub const ALT_DIGITS: [(char, u8); 10] = [
    ('w', 1),
    ('e', 2),
    ('r', 3),
    ('s', 4),
    ('d', 5),
    ('f', 6),
    ('z', 7),
    ('x', 8),
    ('c', 9),
    ('v', 0),
];

/// Maps key presses to calculator actions
#[derive(Debug, Default, Clone, Copy)]
pub struct KeyMap;

impl KeyMap {
    /// Creates the standard key map
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Maps a key press to an action, or `None` if the key is not used
    #[must_use]
    pub fn resolve(&self, key: KeyPress) -> Option<KeyAction> {
        let action = match key.code {
            KeyCode::Escape => KeyAction::Back,
            KeyCode::Up => KeyAction::Move(Direction::Up),
            KeyCode::Down => KeyAction::Move(Direction::Down),
            KeyCode::Left => KeyAction::Move(Direction::Left),
            KeyCode::Right => KeyAction::Move(Direction::Right),
            KeyCode::Enter => KeyAction::Activate,
            KeyCode::Char(c) => return Self::resolve_char(c, key.modifiers),
            KeyCode::Other => return None,
        };
        Some(action)
    }

    fn resolve_char(c: char, modifiers: KeyModifiers) -> Option<KeyAction> {
        match c {
            'i' | 'I' => return Some(KeyAction::ToggleInfo),
            'm' | 'M' => return Some(KeyAction::ToggleMode),
            '.' => return Some(KeyAction::Decimal),
            '=' => return Some(KeyAction::Equals),
            _ => {}
        }
        if let Some(d) = c.to_digit(10) {
            return Some(KeyAction::Digit(d as u8));
        }
        if let Some(op) = Operator::from_key(c) {
            return Some(KeyAction::Operator(op));
        }
        if modifiers.alt {
            return Self::alt_digit(c).map(KeyAction::Digit);
        }
        None
    }

    /// Looks up a letter in the Alt digit table
    #[must_use]
    pub fn alt_digit(c: char) -> Option<u8> {
        let c = c.to_ascii_lowercase();
        ALT_DIGITS
            .iter()
            .find(|(letter, _)| *letter == c)
            .map(|(_, digit)| *digit)
    }
}

#[cfg(feature = "tui")]
mod terminal {
    use super::{KeyCode, KeyModifiers, KeyPress};
    use crossterm::event as ct;

    impl From<ct::KeyCode> for KeyCode {
        fn from(code: ct::KeyCode) -> Self {
            match code {
                ct::KeyCode::Char(c) => Self::Char(c),
                ct::KeyCode::Enter => Self::Enter,
                ct::KeyCode::Esc => Self::Escape,
                ct::KeyCode::Up => Self::Up,
                ct::KeyCode::Down => Self::Down,
                ct::KeyCode::Left => Self::Left,
                ct::KeyCode::Right => Self::Right,
                _ => Self::Other,
            }
        }
    }

    impl From<ct::KeyModifiers> for KeyModifiers {
        fn from(modifiers: ct::KeyModifiers) -> Self {
            Self {
                alt: modifiers.contains(ct::KeyModifiers::ALT),
                ctrl: modifiers.contains(ct::KeyModifiers::CONTROL),
                shift: modifiers.contains(ct::KeyModifiers::SHIFT),
            }
        }
    }

    impl From<ct::KeyEvent> for KeyPress {
        fn from(event: ct::KeyEvent) -> Self {
            Self::new(event.code.into(), event.modifiers.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(key: KeyPress) -> Option<KeyAction> {
        KeyMap::new().resolve(key)
    }

    #[test]
    fn test_escape_is_back() {
        assert_eq!(
            resolve(KeyPress::plain(KeyCode::Escape)),
            Some(KeyAction::Back)
        );
    }

    #[test]
    fn test_arrows_move() {
        assert_eq!(
            resolve(KeyPress::plain(KeyCode::Up)),
            Some(KeyAction::Move(Direction::Up))
        );
        assert_eq!(
            resolve(KeyPress::plain(KeyCode::Right)),
            Some(KeyAction::Move(Direction::Right))
        );
    }

    #[test]
    fn test_enter_activates() {
        assert_eq!(
            resolve(KeyPress::plain(KeyCode::Enter)),
            Some(KeyAction::Activate)
        );
    }

    #[test]
    fn test_digit_keys() {
        for d in 0..=9u8 {
            let c = char::from(b'0' + d);
            assert_eq!(resolve(KeyPress::char(c)), Some(KeyAction::Digit(d)));
        }
    }

    #[test]
    fn test_operator_keys() {
        assert_eq!(
            resolve(KeyPress::char('*')),
            Some(KeyAction::Operator(Operator::Multiply))
        );
        assert_eq!(
            resolve(KeyPress::char('/')),
            Some(KeyAction::Operator(Operator::Divide))
        );
        assert_eq!(resolve(KeyPress::char('=')), Some(KeyAction::Equals));
        assert_eq!(resolve(KeyPress::char('.')), Some(KeyAction::Decimal));
    }

    #[test]
    fn test_letter_toggles() {
        assert_eq!(resolve(KeyPress::char('i')), Some(KeyAction::ToggleInfo));
        assert_eq!(resolve(KeyPress::char('m')), Some(KeyAction::ToggleMode));
    }

    #[test]
    fn test_alt_digit_table() {
        let expected = [
            ('w', 1),
            ('e', 2),
            ('r', 3),
            ('s', 4),
            ('d', 5),
            ('f', 6),
            ('z', 7),
            ('x', 8),
            ('c', 9),
            ('v', 0),
        ];
        for (letter, digit) in expected {
            assert_eq!(
                resolve(KeyPress::alt(letter)),
                Some(KeyAction::Digit(digit))
            );
        }
    }

    #[test]
    fn test_alt_letters_need_modifier() {
        assert_eq!(resolve(KeyPress::char('w')), None);
        assert_eq!(resolve(KeyPress::char('v')), None);
    }

    #[test]
    fn test_unmapped_keys_ignored() {
        assert_eq!(resolve(KeyPress::char('q')), None);
        assert_eq!(resolve(KeyPress::alt('q')), None);
        assert_eq!(resolve(KeyPress::plain(KeyCode::Other)), None);
    }

    #[test]
    fn test_nav_command_conversion() {
        assert_eq!(KeyAction::from(NavCommand::Back), KeyAction::Back);
        assert_eq!(KeyAction::from(NavCommand::Activate), KeyAction::Activate);
        assert_eq!(
            KeyAction::from(NavCommand::Down),
            KeyAction::Move(Direction::Down)
        );
    }

    #[cfg(feature = "tui")]
    #[test]
    fn test_crossterm_conversion() {
        use crossterm::event::{KeyCode as CtCode, KeyEvent, KeyModifiers as CtMods};

        let key: KeyPress = KeyEvent::new(CtCode::Char('e'), CtMods::ALT).into();
        assert_eq!(key, KeyPress::alt('e'));

        let key: KeyPress = KeyEvent::new(CtCode::Esc, CtMods::NONE).into();
        assert_eq!(key, KeyPress::plain(KeyCode::Escape));

        let key: KeyPress = KeyEvent::new(CtCode::F(1), CtMods::NONE).into();
        assert_eq!(key.code, KeyCode::Other);
    }
}
