//! Demo configuration file handling
//!
//! The demo reads `combo.toml`:
//! - `[widget]` - placeholder, label, size, disabled flag, controlled value
//! - `[data]` - the full option set and how many options each page reveals

use anyhow::{Context, Result};
use combo_core::{ComboOption, OptionValue, Placeholder, PlaceholderElement, SelectedValue};
use combo_shell::ComboboxSize;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default config file name
pub const CONFIG_FILE: &str = "combo.toml";

/// Demo configuration stored in combo.toml
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DemoConfig {
    #[serde(default)]
    pub widget: WidgetConfig,
    #[serde(default)]
    pub data: DataConfig,
}

/// Widget appearance and initial state
#[derive(Debug, Deserialize, Serialize)]
pub struct WidgetConfig {
    /// Label drawn above the field
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Plain text placeholder
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
    /// Rich placeholder; takes precedence over `placeholder`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rich_placeholder: Option<PlaceholderElement>,
    #[serde(default)]
    pub disabled: bool,
    /// Controlled initial value; omitted means uncontrolled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_value: Option<OptionValue>,
    #[serde(default)]
    pub size: ComboboxSize,
}

fn default_placeholder() -> String {
    "Type to search name...".to_string()
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            label: Some("Name".to_string()),
            placeholder: default_placeholder(),
            rich_placeholder: None,
            disabled: false,
            selected_value: None,
            size: ComboboxSize::default(),
        }
    }
}

impl WidgetConfig {
    pub fn placeholder(&self) -> Placeholder {
        match self.rich_placeholder {
            Some(ref element) => Placeholder::Rich(element.clone()),
            None => Placeholder::Text(self.placeholder.clone()),
        }
    }

    pub fn selected(&self) -> SelectedValue {
        match self.selected_value {
            Some(ref value) => SelectedValue::Value(value.clone()),
            None => SelectedValue::Uncontrolled,
        }
    }
}

/// Option data and paging
#[derive(Debug, Deserialize, Serialize)]
pub struct DataConfig {
    /// Options revealed per load-more
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default = "default_options")]
    pub options: Vec<ComboOption>,
}

fn default_page_size() -> usize {
    3
}

fn default_options() -> Vec<ComboOption> {
    ["mina", "rina", "tina", "nimra", "nusrat"]
        .iter()
        .enumerate()
        .map(|(i, label)| ComboOption::new(i as i64 + 1, *label))
        .collect()
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            options: default_options(),
        }
    }
}

impl DemoConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        Self::parse(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Load combo.toml from a directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(CONFIG_FILE);

        if !config_path.exists() {
            anyhow::bail!(
                "No {} found in {}. Run `combo init` to create one.",
                CONFIG_FILE,
                path.display()
            );
        }

        Self::load(&config_path)
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        let config: DemoConfig = toml::from_str(content)?;
        if config.data.page_size == 0 {
            anyhow::bail!("data.page_size must be at least 1");
        }
        Ok(config)
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize demo config")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config = DemoConfig::parse(
            r#"
            [widget]
            label = "Country"
            placeholder = "Search countries..."
            disabled = true
            selected_value = "de"
            size = "large"

            [data]
            page_size = 2

            [[data.options]]
            value = "us"
            label = "United States"

            [[data.options]]
            value = "de"
            label = "Germany"
            image = "flags/de.png"
            "#,
        )
        .unwrap();

        assert_eq!(config.widget.label.as_deref(), Some("Country"));
        assert!(config.widget.disabled);
        assert_eq!(config.widget.size, ComboboxSize::Large);
        assert_eq!(
            config.widget.selected(),
            SelectedValue::Value(OptionValue::from("de"))
        );
        assert_eq!(config.data.page_size, 2);
        assert_eq!(config.data.options.len(), 2);
        assert_eq!(config.data.options[1].image.as_deref(), Some("flags/de.png"));
    }

    #[test]
    fn test_defaults() {
        let config = DemoConfig::parse("").unwrap();
        assert_eq!(config.widget.placeholder, "Type to search name...");
        assert_eq!(config.widget.selected(), SelectedValue::Uncontrolled);
        assert_eq!(config.data.page_size, 3);
        assert_eq!(config.data.options.len(), 5);
        assert_eq!(config.data.options[1].label, "rina");
    }

    #[test]
    fn test_integer_selected_value() {
        let config = DemoConfig::parse("[widget]\nselected_value = 2\n").unwrap();
        assert_eq!(config.widget.selected(), SelectedValue::Value(OptionValue::Int(2)));
    }

    #[test]
    fn test_float_values() {
        let config = DemoConfig::parse(
            "[widget]\nselected_value = 2.5\n\n[[data.options]]\nvalue = 2.5\nlabel = \"half\"\n",
        )
        .unwrap();
        assert_eq!(
            config.widget.selected(),
            SelectedValue::Value(OptionValue::Float(2.5))
        );
        assert_eq!(config.data.options[0].value, Some(OptionValue::Float(2.5)));
    }

    #[test]
    fn test_rich_placeholder() {
        let config = DemoConfig::parse(
            "[widget]\nrich_placeholder = { text = \"Pick a user\", icon = \"user\" }\n",
        )
        .unwrap();
        assert_eq!(
            config.widget.placeholder(),
            Placeholder::Rich(PlaceholderElement::new("Pick a user").icon("user"))
        );
    }

    #[test]
    fn test_zero_page_size_rejected() {
        assert!(DemoConfig::parse("[data]\npage_size = 0\n").is_err());
    }

    #[test]
    fn test_roundtrip_default() {
        let text = DemoConfig::default().to_toml().unwrap();
        let config = DemoConfig::parse(&text).unwrap();
        assert_eq!(config.data.options, DataConfig::default().options);
        assert_eq!(config.widget.label.as_deref(), Some("Name"));
    }
}
