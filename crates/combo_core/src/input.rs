//! Input event types for the combobox
//!
//! Keyboard events carry an explicit [`EventSource`] tag assigned where the
//! event is captured, so handlers never have to inspect which element
//! produced them.

/// Where a key event originated
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EventSource {
    /// The text field had focus (typing, cursor movement)
    Field,
    /// The list container had focus
    #[default]
    List,
}

/// Keyboard event
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyboardEvent {
    /// The key that was pressed or released
    pub key: Key,
    /// Whether the key was pressed or released
    pub state: KeyState,
}

impl KeyboardEvent {
    /// A key press
    pub fn pressed(key: Key) -> Self {
        Self {
            key,
            state: KeyState::Pressed,
        }
    }

    /// A key release
    pub fn released(key: Key) -> Self {
        Self {
            key,
            state: KeyState::Released,
        }
    }
}

/// Key press/release state
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyState {
    /// Key was pressed
    Pressed,
    /// Key was released
    Released,
}

/// Key codes relevant to a combobox
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    // Arrow keys
    Up,
    Down,
    Left,
    Right,

    // Special keys
    Enter,
    Escape,
    Tab,
    Backspace,
    Delete,
    Home,
    End,
    PageUp,
    PageDown,
    Space,

    // Character input (for text input)
    Char(char),

    // Unknown key
    Unknown,
}

impl Key {
    /// Parse a key name as used in event scripts (`down`, `up`, `enter`, ...)
    pub fn from_name(name: &str) -> Option<Key> {
        let key = match name.to_ascii_lowercase().as_str() {
            "up" | "arrowup" => Key::Up,
            "down" | "arrowdown" => Key::Down,
            "left" | "arrowleft" => Key::Left,
            "right" | "arrowright" => Key::Right,
            "enter" | "return" => Key::Enter,
            "escape" | "esc" => Key::Escape,
            "tab" => Key::Tab,
            "backspace" => Key::Backspace,
            "delete" | "del" => Key::Delete,
            "home" => Key::Home,
            "end" => Key::End,
            "pageup" => Key::PageUp,
            "pagedown" => Key::PageDown,
            "space" => Key::Space,
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Key::Char(c),
                    _ => return None,
                }
            }
        };
        Some(key)
    }
}

/// Result of handing a key event to the engine
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The engine consumed the key; the default action should be suppressed
    Handled,
    /// The key was not for the engine
    Ignored,
}

impl KeyOutcome {
    pub fn is_handled(&self) -> bool {
        matches!(self, KeyOutcome::Handled)
    }
}

/// Whether an event should keep bubbling to enclosing handlers
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Propagation {
    #[default]
    Continue,
    /// Enclosing handlers (the key container) must not see this event
    Stop,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_from_name() {
        assert_eq!(Key::from_name("down"), Some(Key::Down));
        assert_eq!(Key::from_name("ArrowUp"), Some(Key::Up));
        assert_eq!(Key::from_name("x"), Some(Key::Char('x')));
        assert_eq!(Key::from_name("hyper"), None);
    }

    #[test]
    fn test_keyboard_event_constructors() {
        let ev = KeyboardEvent::pressed(Key::Down);
        assert_eq!(ev.state, KeyState::Pressed);
        assert_eq!(ev.key, Key::Down);

        let up = KeyboardEvent::released(Key::Tab);
        assert_eq!(up.state, KeyState::Released);
    }

    #[test]
    fn test_default_source_is_list() {
        assert_eq!(EventSource::default(), EventSource::List);
    }
}
