//! Selection state and its one-time resolution
//!
//! The selection slot holds either nothing, a real selected label, or a rich
//! placeholder shown in place of a selection. Keeping the three cases apart
//! means a non-empty slot never has to be inspected to learn whether it is a
//! real choice.

use serde::{Deserialize, Serialize};

use crate::option::{label_for_value, ComboOption, OptionValue};

/// Rich placeholder content (icon + text) displayed in the field
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceholderElement {
    /// Text shown in the field
    pub text: String,
    /// Optional icon name drawn before the text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl PlaceholderElement {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            icon: None,
        }
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

/// Placeholder supplied by the caller
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Placeholder {
    /// Plain text used as the field's placeholder
    Text(String),
    /// Rich element used as the initial selection sentinel
    Rich(PlaceholderElement),
}

impl Default for Placeholder {
    fn default() -> Self {
        Placeholder::Text("Select an option".to_string())
    }
}

impl Placeholder {
    /// Placeholder text for the input element
    ///
    /// Rich placeholders live in the selection slot, so the input falls back
    /// to a generic hint.
    pub fn input_text(&self) -> &str {
        match self {
            Placeholder::Text(text) => text,
            Placeholder::Rich(_) => "Search...",
        }
    }
}

impl From<&str> for Placeholder {
    fn from(text: &str) -> Self {
        Placeholder::Text(text.to_string())
    }
}

impl From<String> for Placeholder {
    fn from(text: String) -> Self {
        Placeholder::Text(text)
    }
}

impl From<PlaceholderElement> for Placeholder {
    fn from(element: PlaceholderElement) -> Self {
        Placeholder::Rich(element)
    }
}

/// External selection control
#[derive(Clone, Debug, Default, PartialEq)]
pub enum SelectedValue {
    /// No external control; the widget manages its own selection
    #[default]
    Uncontrolled,
    /// Explicitly cleared by the caller
    Cleared,
    /// Controlled to the option with this value
    Value(OptionValue),
}

impl SelectedValue {
    pub fn value(&self) -> Option<&OptionValue> {
        match self {
            SelectedValue::Value(v) => Some(v),
            _ => None,
        }
    }
}

/// What the selection slot currently holds
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "content", rename_all = "snake_case")]
pub enum SelectionState {
    /// Nothing selected
    #[default]
    Empty,
    /// A label chosen from the list or committed as a new value
    Selected(String),
    /// A rich placeholder standing in for a selection (display only)
    PlaceholderDisplay(PlaceholderElement),
}

impl SelectionState {
    /// Whether the slot holds anything at all
    pub fn is_empty(&self) -> bool {
        matches!(self, SelectionState::Empty)
    }

    /// The selected label, if this is a real selection
    pub fn label(&self) -> Option<&str> {
        match self {
            SelectionState::Selected(label) => Some(label),
            _ => None,
        }
    }

    /// Text mirrored into the field
    pub fn display_text(&self) -> Option<&str> {
        match self {
            SelectionState::Empty => None,
            SelectionState::Selected(label) => Some(label),
            SelectionState::PlaceholderDisplay(element) => Some(&element.text),
        }
    }
}

/// Resolve the initial selection
///
/// 1. A controlled value is looked up by equality; a miss resolves to `Empty`.
/// 2. Otherwise a rich placeholder becomes the display sentinel.
/// 3. Otherwise nothing is selected.
pub fn resolve_selection(
    options: &[ComboOption],
    selected: &SelectedValue,
    placeholder: &Placeholder,
) -> SelectionState {
    if let Some(value) = selected.value() {
        return label_for_value(options, value)
            .map(|label| SelectionState::Selected(label.to_string()))
            .unwrap_or(SelectionState::Empty);
    }

    match placeholder {
        Placeholder::Rich(element) => SelectionState::PlaceholderDisplay(element.clone()),
        Placeholder::Text(_) => SelectionState::Empty,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn users() -> Vec<ComboOption> {
        vec![ComboOption::new(1, "mina"), ComboOption::new(2, "rina")]
    }

    #[test]
    fn test_resolve_controlled_value() {
        let state = resolve_selection(
            &users(),
            &SelectedValue::Value(OptionValue::Int(2)),
            &Placeholder::default(),
        );
        assert_eq!(state, SelectionState::Selected("rina".to_string()));
    }

    #[test]
    fn test_resolve_missing_value() {
        let rich = Placeholder::Rich(PlaceholderElement::new("Pick a user"));
        let state = resolve_selection(&users(), &SelectedValue::Value(OptionValue::Int(99)), &rich);
        // A controlled miss does not fall back to the placeholder sentinel
        assert_eq!(state, SelectionState::Empty);
    }

    #[test]
    fn test_resolve_rich_placeholder() {
        let element = PlaceholderElement::new("Pick a user").icon("user");
        let rich = Placeholder::Rich(element.clone());

        let state = resolve_selection(&users(), &SelectedValue::Uncontrolled, &rich);
        assert_eq!(state, SelectionState::PlaceholderDisplay(element.clone()));

        let state = resolve_selection(&users(), &SelectedValue::Cleared, &rich);
        assert_eq!(state, SelectionState::PlaceholderDisplay(element));
    }

    #[test]
    fn test_resolve_text_placeholder() {
        let state = resolve_selection(
            &users(),
            &SelectedValue::Uncontrolled,
            &Placeholder::from("Type to search..."),
        );
        assert!(state.is_empty());
    }

    #[test]
    fn test_selection_accessors() {
        let selected = SelectionState::Selected("mina".to_string());
        assert_eq!(selected.label(), Some("mina"));
        assert_eq!(selected.display_text(), Some("mina"));

        let sentinel = SelectionState::PlaceholderDisplay(PlaceholderElement::new("Pick"));
        assert_eq!(sentinel.label(), None);
        assert_eq!(sentinel.display_text(), Some("Pick"));
        assert!(!sentinel.is_empty());

        assert_eq!(SelectionState::Empty.display_text(), None);
    }

    #[test]
    fn test_placeholder_input_text() {
        assert_eq!(Placeholder::from("Find").input_text(), "Find");
        assert_eq!(
            Placeholder::Rich(PlaceholderElement::new("Pick")).input_text(),
            "Search..."
        );
    }
}
