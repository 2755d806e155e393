// File: src/config.rs
// Purpose: Evaluator configuration parsing from field-rules.toml

use anyhow::{Context, Result};
use rusty_field_rules_core::DEFAULT_ALLOWED_EXTENSIONS;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Evaluator configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct EvaluatorConfig {
    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub files: FileConfig,

    #[serde(default)]
    pub select: SelectConfig,

    #[serde(default)]
    pub dates: DateConfig,

    #[serde(default)]
    pub messages: MessageConfig,
}

/// How failures are shown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Clear every displayed error before showing a new one (default: true)
    #[serde(default = "default_true")]
    pub clear_before_show: bool,
}

/// File upload rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileConfig {
    /// Allow-list used when a rule does not name its own (default: jpg, png, pdf)
    #[serde(default = "default_allowed_extensions")]
    pub allowed_extensions: Vec<String>,
}

/// Select list rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SelectConfig {
    /// Placeholder value that counts as "nothing selected" (default: "")
    #[serde(default)]
    pub default_value: String,
}

/// Date parsing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DateConfig {
    /// Extra chrono formats tried after the ISO ones (e.g. "%d-%b-%Y")
    #[serde(default)]
    pub formats: Vec<String>,
}

/// Failure messages, one per rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageConfig {
    pub required: String,
    pub email: String,
    pub numeric: String,
    pub decimal: String,
    pub special_characters: String,
    /// `{min}` and `{max}` are substituted
    pub length: String,
    pub fields_match: String,
    pub checkbox_checked: String,
    pub radio_selected: String,
    pub select_not_default: String,
    pub date_range: String,
    pub file_missing: String,
    pub file_name: String,
    pub file_type: String,
    pub password_strength: String,
    pub greater_than_zero: String,
    pub whitespace_edges: String,
    pub group_checked: String,
    pub rich_text: String,
}

fn default_true() -> bool {
    true
}

fn default_allowed_extensions() -> Vec<String> {
    DEFAULT_ALLOWED_EXTENSIONS
        .iter()
        .map(|ext| ext.to_string())
        .collect()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            clear_before_show: true,
        }
    }
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            allowed_extensions: default_allowed_extensions(),
        }
    }
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self {
            required: "This field is required.".to_string(),
            email: "Please enter a valid email address.".to_string(),
            numeric: "Only numeric values allowed.".to_string(),
            decimal: "Only decimal values up to 2 digits allowed.".to_string(),
            special_characters: "Special characters are not allowed.".to_string(),
            length: "Length must be between {min} and {max} characters.".to_string(),
            fields_match: "Fields do not match.".to_string(),
            checkbox_checked: "You must check this box.".to_string(),
            radio_selected: "Please select an option.".to_string(),
            select_not_default: "Please select a valid option.".to_string(),
            date_range: "End date must be after start date.".to_string(),
            file_missing: "Please upload a file.".to_string(),
            file_name: "Filename must be alphanumeric.".to_string(),
            file_type: "Invalid file type.".to_string(),
            password_strength:
                "Password must include upper, lower, number, special char, and be 8+ chars."
                    .to_string(),
            greater_than_zero: "Value must be greater than zero.".to_string(),
            whitespace_edges: "Leading or trailing spaces are not allowed.".to_string(),
            group_checked: "Please select at least one option.".to_string(),
            rich_text: "Content cannot be empty.".to_string(),
        }
    }
}

impl MessageConfig {
    /// Length message with the bounds filled in
    pub fn length_message(&self, min: usize, max: usize) -> String {
        self.length
            .replace("{min}", &min.to_string())
            .replace("{max}", &max.to_string())
    }
}

impl EvaluatorConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist or is empty, return default config
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    /// Load configuration from default path (./field-rules.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("field-rules.toml")
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config = toml::from_str(content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = EvaluatorConfig::default();
        assert!(config.display.clear_before_show);
        assert_eq!(config.files.allowed_extensions, vec!["jpg", "png", "pdf"]);
        assert_eq!(config.select.default_value, "");
        assert!(config.dates.formats.is_empty());
        assert_eq!(config.messages.required, "This field is required.");
    }

    #[test]
    fn test_empty_config() {
        let config = EvaluatorConfig::from_toml_str("   \n").unwrap();
        assert_eq!(config, EvaluatorConfig::default());
    }

    #[test]
    fn test_partial_overrides() {
        let toml = r#"
            [display]
            clear_before_show = false

            [files]
            allowed_extensions = ["csv", "xlsx"]

            [select]
            default_value = "-1"

            [dates]
            formats = ["%d-%b-%Y"]

            [messages]
            required = "Required."
        "#;
        let config = EvaluatorConfig::from_toml_str(toml).unwrap();
        assert!(!config.display.clear_before_show);
        assert_eq!(config.files.allowed_extensions, vec!["csv", "xlsx"]);
        assert_eq!(config.select.default_value, "-1");
        assert_eq!(config.dates.formats, vec!["%d-%b-%Y"]);
        assert_eq!(config.messages.required, "Required.");
        // untouched messages keep their defaults
        assert_eq!(config.messages.email, "Please enter a valid email address.");
    }

    #[test]
    fn test_length_message() {
        let messages = MessageConfig::default();
        assert_eq!(
            messages.length_message(3, 5),
            "Length must be between 3 and 5 characters."
        );
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let config = EvaluatorConfig::load("definitely/not/here/field-rules.toml").unwrap();
        assert_eq!(config, EvaluatorConfig::default());
    }

    #[test]
    fn test_load_reports_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("field-rules.toml");
        fs::write(&path, "[files]\nallowed_extensions = 42\n").unwrap();

        let err = EvaluatorConfig::load(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
