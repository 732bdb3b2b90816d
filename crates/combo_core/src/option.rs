//! Combobox options
//!
//! An option is one selectable entry: a display label, a primitive value used
//! for identity, and an optional image reference. Options are supplied by the
//! caller and never mutated by the engine.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Primitive value carried by an option
///
/// Options are identified by value equality. A missing value (`None` on
/// [`ComboOption::value`]) plays the role of `null`. Numbers compare by
/// numeric value, so `Int(2)` equals `Float(2.0)`; text never equals a number.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    /// Integer value (ids, indices)
    Int(i64),
    /// Non-integer number
    Float(f64),
    /// Text value
    Text(String),
}

impl PartialEq for OptionValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (OptionValue::Int(a), OptionValue::Int(b)) => a == b,
            (OptionValue::Float(a), OptionValue::Float(b)) => a == b,
            (OptionValue::Int(a), OptionValue::Float(b))
            | (OptionValue::Float(b), OptionValue::Int(a)) => *a as f64 == *b,
            (OptionValue::Text(a), OptionValue::Text(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Int(v) => write!(f, "{}", v),
            OptionValue::Float(v) => write!(f, "{}", v),
            OptionValue::Text(v) => f.write_str(v),
        }
    }
}

impl From<i64> for OptionValue {
    fn from(v: i64) -> Self {
        OptionValue::Int(v)
    }
}

impl From<i32> for OptionValue {
    fn from(v: i32) -> Self {
        OptionValue::Int(v as i64)
    }
}

impl From<f64> for OptionValue {
    fn from(v: f64) -> Self {
        OptionValue::Float(v)
    }
}

impl From<&str> for OptionValue {
    fn from(v: &str) -> Self {
        OptionValue::Text(v.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(v: String) -> Self {
        OptionValue::Text(v)
    }
}

/// An option in the combobox list
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComboOption {
    /// Display and search text
    pub label: String,
    /// Identity of the option (`None` = null)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<OptionValue>,
    /// Optional image reference shown next to the label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl ComboOption {
    /// Create a new option with value and label
    pub fn new(value: impl Into<OptionValue>, label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: Some(value.into()),
            image: None,
        }
    }

    /// Create an option without a value
    pub fn unvalued(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: None,
            image: None,
        }
    }

    /// Attach an image reference
    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Check if this option's label contains the query (case-insensitive)
    ///
    /// The engine never filters; this is a helper for callers that do.
    pub fn matches(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        self.label.to_lowercase().contains(&query.to_lowercase())
    }
}

/// Find the label of the option whose value equals `value`
pub fn label_for_value<'a>(options: &'a [ComboOption], value: &OptionValue) -> Option<&'a str> {
    options
        .iter()
        .find(|opt| opt.value.as_ref() == Some(value))
        .map(|opt| opt.label.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_builder() {
        let opt = ComboOption::new(1, "mina").image("avatars/mina.png");
        assert_eq!(opt.value, Some(OptionValue::Int(1)));
        assert_eq!(opt.label, "mina");
        assert_eq!(opt.image.as_deref(), Some("avatars/mina.png"));

        let bare = ComboOption::unvalued("other");
        assert!(bare.value.is_none());
    }

    #[test]
    fn test_option_matches() {
        let opt = ComboOption::new("us", "United States");

        assert!(opt.matches(""));
        assert!(opt.matches("united"));
        assert!(opt.matches("STATES"));
        assert!(!opt.matches("canada"));
    }

    #[test]
    fn test_label_for_value() {
        let options = vec![ComboOption::new(1, "mina"), ComboOption::new(2, "rina")];

        assert_eq!(label_for_value(&options, &OptionValue::Int(2)), Some("rina"));
        assert_eq!(label_for_value(&options, &OptionValue::Int(99)), None);
        // Text "2" is not the integer 2
        assert_eq!(label_for_value(&options, &OptionValue::from("2")), None);
    }

    #[test]
    fn test_value_display() {
        assert_eq!(OptionValue::Int(7).to_string(), "7");
        assert_eq!(OptionValue::Float(2.5).to_string(), "2.5");
        assert_eq!(OptionValue::from("abc").to_string(), "abc");
    }

    #[test]
    fn test_float_values() {
        let options = vec![ComboOption::new(2.5, "two and a half"), ComboOption::new(3, "three")];

        assert_eq!(
            label_for_value(&options, &OptionValue::Float(2.5)),
            Some("two and a half")
        );
        // Integral floats match integer values
        assert_eq!(label_for_value(&options, &OptionValue::Float(3.0)), Some("three"));
        assert_eq!(label_for_value(&options, &OptionValue::Float(2.0)), None);
        assert_ne!(OptionValue::Float(2.5), OptionValue::from("2.5"));
    }
}
