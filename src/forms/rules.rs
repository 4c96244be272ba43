//! Declarative field validation rules
//!
//! Validation runs in full on every submit attempt and produces a map of
//! field name to error message; submission proceeds iff the map is empty.
//! Validation itself never fails: rule problems surface as field errors.

use std::collections::{BTreeMap, HashMap};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Email shape accepted throughout the platform
pub const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

/// URL shape accepted for website fields
pub const URL_PATTERN: &str = r"^https?://.+\..+";

/// Whether the form is creating a new record or editing an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormMode {
    Create,
    Edit,
}

/// A single validation rule applied to one field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldRule {
    /// Value must be present and non-blank
    Required,
    /// Value must be present and non-blank unless the form is in the
    /// given mode (write-only passwords are optional on edit)
    RequiredUnless(FormMode),
    /// Value must match the platform email shape
    Email,
    /// Value must parse as a number. The empty string is deliberately
    /// accepted, matching the behavior every existing page relies on;
    /// pages that need a value also attach `Required`.
    Numeric,
    /// Value must match the http(s) URL shape
    Url,
    /// Value must match a custom pattern
    Pattern { regex: String, message: String },
    MinLen(usize),
    MaxLen(usize),
}

/// Rules for one named field
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldRules {
    pub field: String,
    pub rules: Vec<FieldRule>,
}

impl FieldRules {
    pub fn new(field: impl Into<String>, rules: Vec<FieldRule>) -> Self {
        Self {
            field: field.into(),
            rules,
        }
    }
}

/// Submitted field values keyed by field name. Absent and empty are
/// treated identically, as the source forms do.
pub type FormData = HashMap<String, String>;

/// Result of a validation pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    errors: BTreeMap<String, String>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn errors(&self) -> &BTreeMap<String, String> {
        &self.errors
    }

    fn record(&mut self, field: &str, message: String) {
        // First failing rule wins per field
        self.errors.entry(field.to_string()).or_insert(message);
    }
}

/// Declarative rule set for one entity's form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleSet {
    pub name: String,
    pub fields: Vec<FieldRules>,
}

impl RuleSet {
    pub fn new(name: impl Into<String>, fields: Vec<FieldRules>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }

    /// Rules declared for a field, if any
    pub fn field_rules(&self, field: &str) -> Option<&FieldRules> {
        self.fields.iter().find(|f| f.field == field)
    }

    /// Run the full rule set against submitted data
    pub fn validate(&self, data: &FormData, mode: FormMode) -> ValidationReport {
        let mut report = ValidationReport::default();

        for field_rules in &self.fields {
            let value = data
                .get(&field_rules.field)
                .map(String::as_str)
                .unwrap_or("");

            for rule in &field_rules.rules {
                if let Some(message) = check_rule(rule, value, mode) {
                    report.record(&field_rules.field, message);
                }
            }
        }

        report
    }
}

fn check_rule(rule: &FieldRule, value: &str, mode: FormMode) -> Option<String> {
    match rule {
        FieldRule::Required => {
            if value.trim().is_empty() {
                return Some("This field is required".to_string());
            }
        }
        FieldRule::RequiredUnless(exempt_mode) => {
            if mode != *exempt_mode && value.trim().is_empty() {
                return Some("This field is required".to_string());
            }
        }
        FieldRule::Email => {
            if !value.is_empty() && !matches_pattern(EMAIL_PATTERN, value) {
                return Some("Invalid email address".to_string());
            }
        }
        FieldRule::Numeric => {
            // Empty string passes, mirroring the numeric coercion the
            // existing pages depend on
            if !value.is_empty() && value.parse::<f64>().is_err() {
                return Some("Must be a number".to_string());
            }
        }
        FieldRule::Url => {
            if !value.is_empty() && !matches_pattern(URL_PATTERN, value) {
                return Some("Invalid URL".to_string());
            }
        }
        FieldRule::Pattern { regex, message } => match Regex::new(regex) {
            Ok(re) => {
                if !value.is_empty() && !re.is_match(value) {
                    return Some(message.clone());
                }
            }
            Err(_) => return Some("Invalid validation pattern".to_string()),
        },
        FieldRule::MinLen(min) => {
            if !value.is_empty() && value.chars().count() < *min {
                return Some(format!("Must be at least {} characters", min));
            }
        }
        FieldRule::MaxLen(max) => {
            if value.chars().count() > *max {
                return Some(format!("Must be at most {} characters", max));
            }
        }
    }
    None
}

fn matches_pattern(pattern: &str, value: &str) -> bool {
    Regex::new(pattern).map(|re| re.is_match(value)).unwrap_or(false)
}
