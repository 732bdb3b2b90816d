//! Dropdown visibility
//!
//! Two states, no loading state. The dropdown is open exactly when the raw
//! input has text and nothing occupies the selection slot.

use combo_core::SelectionState;
use serde::{Deserialize, Serialize};

/// Dropdown visibility state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DropdownVisibility {
    #[default]
    Closed,
    Open,
}

impl DropdownVisibility {
    /// Derive the state from the raw input and the selection slot
    pub fn derive(input: &str, selection: &SelectionState) -> Self {
        if !input.is_empty() && selection.is_empty() {
            DropdownVisibility::Open
        } else {
            DropdownVisibility::Closed
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, DropdownVisibility::Open)
    }
}

/// Tracks the current visibility and reports transitions
#[derive(Clone, Copy, Debug, Default)]
pub struct VisibilityMachine {
    state: DropdownVisibility,
}

impl VisibilityMachine {
    pub fn new(input: &str, selection: &SelectionState) -> Self {
        Self {
            state: DropdownVisibility::derive(input, selection),
        }
    }

    pub fn state(&self) -> DropdownVisibility {
        self.state
    }

    /// Re-derive the state; returns the new state if it changed
    pub fn update(&mut self, input: &str, selection: &SelectionState) -> Option<DropdownVisibility> {
        let next = DropdownVisibility::derive(input, selection);
        if next == self.state {
            return None;
        }

        tracing::debug!(from = ?self.state, to = ?next, "dropdown visibility changed");
        self.state = next;
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use combo_core::PlaceholderElement;

    #[test]
    fn test_derive_truth_table() {
        let empty = SelectionState::Empty;
        let selected = SelectionState::Selected("mina".to_string());
        let sentinel = SelectionState::PlaceholderDisplay(PlaceholderElement::new("Pick"));

        assert_eq!(DropdownVisibility::derive("mi", &empty), DropdownVisibility::Open);
        assert_eq!(DropdownVisibility::derive("", &empty), DropdownVisibility::Closed);
        assert_eq!(DropdownVisibility::derive("mi", &selected), DropdownVisibility::Closed);
        assert_eq!(DropdownVisibility::derive("", &selected), DropdownVisibility::Closed);
        assert_eq!(DropdownVisibility::derive("mi", &sentinel), DropdownVisibility::Closed);
    }

    #[test]
    fn test_machine_transitions() {
        let mut machine = VisibilityMachine::new("", &SelectionState::Empty);
        assert_eq!(machine.state(), DropdownVisibility::Closed);

        assert_eq!(
            machine.update("r", &SelectionState::Empty),
            Some(DropdownVisibility::Open)
        );
        // Still open, no transition
        assert_eq!(machine.update("ri", &SelectionState::Empty), None);

        let selected = SelectionState::Selected("rina".to_string());
        assert_eq!(machine.update("ri", &selected), Some(DropdownVisibility::Closed));
        assert!(!machine.state().is_open());
    }
}
