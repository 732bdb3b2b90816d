//! Render description of a combobox
//!
//! A [`ComboboxView`] is what a backend needs to draw the widget: the field,
//! the clear control, the dropdown rows. It is plain data and serializes to
//! JSON for snapshots.

use std::fmt::Write as _;

use combo_core::{ComboboxEngine, SelectionState};
use serde::{Deserialize, Serialize};

use crate::visibility::DropdownVisibility;

/// Message shown in place of rows when the list is empty
pub const NO_RESULTS: &str = "No results found";

/// Combobox size variants
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComboboxSize {
    /// Small combobox (height: 32px, text: 13px)
    Small,
    /// Medium combobox (height: 44px, text: 14px)
    #[default]
    Medium,
    /// Large combobox (height: 52px, text: 16px)
    Large,
}

impl ComboboxSize {
    /// Get the field height for this size
    pub fn height(&self) -> f32 {
        match self {
            ComboboxSize::Small => 32.0,
            ComboboxSize::Medium => 44.0,
            ComboboxSize::Large => 52.0,
        }
    }

    /// Get the font size for this size
    pub fn font_size(&self) -> f32 {
        match self {
            ComboboxSize::Small => 13.0,
            ComboboxSize::Medium => 14.0,
            ComboboxSize::Large => 16.0,
        }
    }

    /// Get the horizontal padding for this size
    pub fn padding(&self) -> f32 {
        match self {
            ComboboxSize::Small => 8.0,
            ComboboxSize::Medium => 12.0,
            ComboboxSize::Large => 16.0,
        }
    }

    /// Maximum dropdown height before the list scrolls
    pub fn max_dropdown_height(&self) -> f32 {
        240.0
    }
}

/// The text field
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FieldView {
    /// Selection text, else the raw input, else empty
    pub value: String,
    /// Placeholder hint drawn when `value` is empty
    pub placeholder: String,
    /// The value comes from a placeholder sentinel, not a real selection
    pub is_sentinel: bool,
    /// Icon of the sentinel, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub disabled: bool,
}

/// One dropdown row
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RowView {
    pub index: usize,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub highlighted: bool,
    /// Last rendered row (observed for load-more)
    pub terminal: bool,
    /// The add/confirm affordance accepts clicks
    pub add_enabled: bool,
}

/// The dropdown list
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DropdownView {
    pub visibility: DropdownVisibility,
    pub rows: Vec<RowView>,
    /// Set when there are no rows
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<String>,
    pub max_height: f32,
}

/// Full render description
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComboboxView {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub size: ComboboxSize,
    pub height: f32,
    pub font_size: f32,
    pub padding: f32,
    pub field: FieldView,
    /// Clear control is rendered
    pub show_clear: bool,
    pub dropdown: DropdownView,
}

impl ComboboxView {
    /// Build the view for the engine's current state
    pub fn build(
        engine: &ComboboxEngine,
        input_value: &str,
        visibility: DropdownVisibility,
        size: ComboboxSize,
        label: Option<&str>,
    ) -> Self {
        let disabled = engine.is_disabled();
        let selection = engine.selection();

        let (value, is_sentinel, icon) = match selection {
            SelectionState::Empty => (input_value.to_string(), false, None),
            SelectionState::Selected(label) => (label.clone(), false, None),
            SelectionState::PlaceholderDisplay(element) => {
                (element.text.clone(), true, element.icon.clone())
            }
        };

        let field = FieldView {
            value,
            placeholder: engine.placeholder().input_text().to_string(),
            is_sentinel,
            icon,
            disabled,
        };

        let options = engine.filtered_options();
        let terminal = engine.terminal_index();
        let highlighted = engine.highlighted_index();
        let rows: Vec<RowView> = options
            .iter()
            .enumerate()
            .map(|(index, opt)| RowView {
                index,
                label: opt.label.clone(),
                image: opt.image.clone(),
                highlighted: highlighted == Some(index),
                terminal: terminal == Some(index),
                add_enabled: !disabled,
            })
            .collect();

        let empty_message = rows.is_empty().then(|| NO_RESULTS.to_string());

        Self {
            label: label.map(str::to_string),
            size,
            height: size.height(),
            font_size: size.font_size(),
            padding: size.padding(),
            field,
            show_clear: !selection.is_empty() && !disabled,
            dropdown: DropdownView {
                visibility,
                rows,
                empty_message,
                max_height: size.max_dropdown_height(),
            },
        }
    }

    /// Index of the last rendered row
    pub fn terminal_row(&self) -> Option<usize> {
        self.dropdown.rows.iter().rposition(|row| row.terminal)
    }

    /// Draw the view as plain text lines
    ///
    /// Used by the demo driver and in snapshots. The closed dropdown is not
    /// drawn.
    pub fn render_text(&self) -> String {
        let mut out = String::new();

        if let Some(ref label) = self.label {
            let _ = writeln!(out, "{}", label);
        }

        let shown = if self.field.value.is_empty() {
            format!("({})", self.field.placeholder)
        } else if let Some(ref icon) = self.field.icon {
            format!("<{}> {}", icon, self.field.value)
        } else {
            self.field.value.clone()
        };
        let width = self
            .dropdown
            .rows
            .iter()
            .map(|row| row.label.chars().count())
            .chain(std::iter::once(shown.chars().count()))
            .max()
            .unwrap_or(0)
            .max(16);

        let mut field_line = format!("[ {:<width$} ]", shown, width = width);
        if self.show_clear {
            field_line.push_str(" (x)");
        }
        if self.field.disabled {
            field_line.push_str(" disabled");
        }
        let _ = writeln!(out, "{}", field_line);

        if !self.dropdown.visibility.is_open() {
            return out;
        }

        if let Some(ref message) = self.dropdown.empty_message {
            let _ = writeln!(out, "    {}", message);
            return out;
        }

        for row in &self.dropdown.rows {
            let marker = if row.highlighted { ">" } else { " " };
            let add = if row.add_enabled { "[+]" } else { "[-]" };
            let mut line = format!("  {} {:<width$} {}", marker, row.label, add, width = width);
            if let Some(ref image) = row.image {
                let _ = write!(line, " <{}>", image);
            }
            let _ = writeln!(out, "{}", line);
        }

        out
    }
}
