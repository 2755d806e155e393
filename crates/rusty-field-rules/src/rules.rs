// File: src/rules.rs
// Purpose: Declarative rule lists and their dispatch onto the evaluator

use crate::evaluator::{Evaluator, LengthBounds};
use crate::field::FieldRef;
use crate::host::{FieldAccessor, Notifier};
use crate::verdict::Verdict;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One rule bound to the field(s) it checks
///
/// Serialized with a `rule` tag, e.g. `{ rule = "length", field = "P1_CODE", min = 3, max = 5 }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum RuleSpec {
    Required {
        field: FieldRef,
    },
    Email {
        field: FieldRef,
    },
    Numeric {
        field: FieldRef,
    },
    Decimal {
        field: FieldRef,
    },
    NoSpecialCharacters {
        field: FieldRef,
    },
    Length {
        field: FieldRef,
        min: usize,
        max: usize,
        #[serde(default)]
        trim: bool,
    },
    FieldsMatch {
        field: FieldRef,
        confirm: FieldRef,
        #[serde(default)]
        message: Option<String>,
    },
    CheckboxChecked {
        field: FieldRef,
    },
    RadioSelected {
        field: FieldRef,
    },
    SelectNotDefault {
        field: FieldRef,
        /// Falls back to `select.default_value` from the config
        #[serde(default)]
        default: Option<String>,
    },
    DateRange {
        start: FieldRef,
        end: FieldRef,
    },
    FileNameAlphanumeric {
        field: FieldRef,
    },
    FileExtension {
        field: FieldRef,
        /// Falls back to `files.allowed_extensions` from the config
        #[serde(default)]
        allowed: Option<Vec<String>>,
    },
    PasswordStrength {
        field: FieldRef,
    },
    GreaterThanZero {
        field: FieldRef,
    },
    NoWhitespaceEdges {
        field: FieldRef,
    },
    GroupChecked {
        group: String,
    },
    RichTextNotEmpty {
        field: FieldRef,
        #[serde(default)]
        message: Option<String>,
    },
}

impl RuleSpec {
    /// Rule name as it appears in the `rule` tag
    pub fn name(&self) -> &'static str {
        match self {
            RuleSpec::Required { .. } => "required",
            RuleSpec::Email { .. } => "email",
            RuleSpec::Numeric { .. } => "numeric",
            RuleSpec::Decimal { .. } => "decimal",
            RuleSpec::NoSpecialCharacters { .. } => "no_special_characters",
            RuleSpec::Length { .. } => "length",
            RuleSpec::FieldsMatch { .. } => "fields_match",
            RuleSpec::CheckboxChecked { .. } => "checkbox_checked",
            RuleSpec::RadioSelected { .. } => "radio_selected",
            RuleSpec::SelectNotDefault { .. } => "select_not_default",
            RuleSpec::DateRange { .. } => "date_range",
            RuleSpec::FileNameAlphanumeric { .. } => "file_name_alphanumeric",
            RuleSpec::FileExtension { .. } => "file_extension",
            RuleSpec::PasswordStrength { .. } => "password_strength",
            RuleSpec::GreaterThanZero { .. } => "greater_than_zero",
            RuleSpec::NoWhitespaceEdges { .. } => "no_whitespace_edges",
            RuleSpec::GroupChecked { .. } => "group_checked",
            RuleSpec::RichTextNotEmpty { .. } => "rich_text_not_empty",
        }
    }
}

impl<A: FieldAccessor, N: Notifier> Evaluator<A, N> {
    /// Run a single declarative rule
    pub fn evaluate(&self, spec: &RuleSpec) -> Verdict {
        match spec {
            RuleSpec::Required { field } => self.required(field),
            RuleSpec::Email { field } => self.email(field),
            RuleSpec::Numeric { field } => self.numeric(field),
            RuleSpec::Decimal { field } => self.decimal(field),
            RuleSpec::NoSpecialCharacters { field } => self.no_special_characters(field),
            RuleSpec::Length {
                field,
                min,
                max,
                trim,
            } => {
                let bounds = LengthBounds {
                    min: *min,
                    max: *max,
                    trim: *trim,
                };
                self.length(field, bounds)
            }
            RuleSpec::FieldsMatch {
                field,
                confirm,
                message,
            } => self.fields_match(field, confirm, message.as_deref()),
            RuleSpec::CheckboxChecked { field } => self.checkbox_checked(field),
            RuleSpec::RadioSelected { field } => self.radio_selected(field),
            RuleSpec::SelectNotDefault { field, default } => {
                let default = default
                    .as_deref()
                    .unwrap_or(&self.config().select.default_value);
                self.select_not_default(field, default)
            }
            RuleSpec::DateRange { start, end } => self.date_range(start, end),
            RuleSpec::FileNameAlphanumeric { field } => self.file_name_alphanumeric(field),
            RuleSpec::FileExtension { field, allowed } => match allowed {
                Some(allowed) => self.file_extension(field, allowed.as_slice()),
                None => self.file_extension_default(field),
            },
            RuleSpec::PasswordStrength { field } => self.password_strength(field),
            RuleSpec::GreaterThanZero { field } => self.greater_than_zero(field),
            RuleSpec::NoWhitespaceEdges { field } => self.no_whitespace_edges(field),
            RuleSpec::GroupChecked { group } => self.group_checked(group),
            RuleSpec::RichTextNotEmpty { field, message } => {
                self.rich_text_not_empty(field, message.as_deref())
            }
        }
    }

    /// Run every rule in order, without stopping at the first failure
    pub fn evaluate_all(&self, specs: &[RuleSpec]) -> Vec<Verdict> {
        specs.iter().map(|spec| self.evaluate(spec)).collect()
    }
}

/// An ordered list of rules, typically one per page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct RuleSet {
    #[serde(default)]
    pub rules: Vec<RuleSpec>,
}

impl RuleSet {
    /// Load a rule set from a `.toml` or `.json` file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read rule file: {:?}", path))?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let parsed = if is_json {
            Self::from_json_str(&content)
        } else {
            Self::from_toml_str(&content)
        };
        parsed.with_context(|| format!("Failed to parse rule file: {:?}", path))
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Evaluate the whole set; `true` only when every rule passed
    pub fn passes<A: FieldAccessor, N: Notifier>(&self, evaluator: &Evaluator<A, N>) -> bool {
        evaluator
            .evaluate_all(&self.rules)
            .iter()
            .all(Verdict::is_pass)
    }
}
