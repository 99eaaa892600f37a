//! Form field value objects

use super::rules::ValidationRule;

/// Input kind of a field, mirrors the input types the contact form uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldKind {
    #[default]
    Text,
    Email,
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone)]
pub struct Field {
    pub name: String,
    pub label: String,
    pub value: String,
    pub required: bool,
    pub kind: FieldKind,
    /// Field-specific rules, evaluated in order after the required and email checks
    pub rules: Vec<ValidationRule>,
    pub is_multiline: bool,
}

impl Field {
    /// Create a new single-line text field
    pub fn text(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: String::new(),
            required: false,
            kind: FieldKind::Text,
            rules: Vec::new(),
            is_multiline: false,
        }
    }

    /// Create a new email field
    pub fn email(name: &str, label: &str) -> Self {
        Self {
            kind: FieldKind::Email,
            ..Self::text(name, label)
        }
    }

    /// Create a new multiline text field
    pub fn multiline(name: &str, label: &str) -> Self {
        Self {
            is_multiline: true,
            ..Self::text(name, label)
        }
    }

    /// Mark the field as required
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Append a validation rule
    pub fn with_rule(mut self, rule: ValidationRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Value with surrounding whitespace removed, which is what gets validated and sent
    pub fn trimmed(&self) -> &str {
        self.value.trim()
    }

    /// Set the text value
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    /// Insert a line break (multiline fields only)
    pub fn push_newline(&mut self) {
        if self.is_multiline {
            self.value.push('\n');
        }
    }

    /// Clear the field value
    pub fn clear(&mut self) {
        self.value.clear();
    }

    /// Label shown above the input, required fields carry a marker
    pub fn display_label(&self) -> String {
        if self.required {
            format!("{} *", self.label)
        } else {
            self.label.clone()
        }
    }
}
