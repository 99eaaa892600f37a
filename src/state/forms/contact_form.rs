//! The contact form and its focus handling

use super::field::Field;
use super::rules::{name_regex, ValidationRule};
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Rows the message input occupies when rendered
pub const MESSAGE_INPUT_ROWS: usize = 4;

/// Trait for common form operations
pub trait Form {
    /// Number of focus stops, including the submit button
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// Payload handed to the submitter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Row positions of one field inside the rendered form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRows {
    pub label: usize,
    pub input: Range<usize>,
    pub error: usize,
}

/// Contact form: name, email, subject, message and a submit button
#[derive(Debug, Clone)]
pub struct ContactForm {
    pub fields: Vec<Field>,
    pub active_field_index: usize,
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            fields: vec![
                Field::text("name", "Full Name")
                    .required()
                    .with_rule(ValidationRule::min_length(
                        2,
                        "Name must be at least 2 characters long.",
                    ))
                    .with_rule(ValidationRule::pattern(
                        name_regex(),
                        "Name can only contain letters and spaces.",
                    )),
                Field::email("email", "Email Address").required(),
                Field::text("subject", "Subject")
                    .required()
                    .with_rule(ValidationRule::min_length(
                        5,
                        "Subject must be at least 5 characters long.",
                    )),
                Field::multiline("message", "Message")
                    .required()
                    .with_rule(ValidationRule::min_length(
                        10,
                        "Message must be at least 10 characters long.",
                    )),
            ],
            active_field_index: 0,
        }
    }

    /// Index of the submit button in the focus order
    pub fn submit_index(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the submit button has focus
    pub fn is_submit_active(&self) -> bool {
        self.active_field_index == self.submit_index()
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn field_mut(&mut self, name: &str) -> Option<&mut Field> {
        self.fields.iter_mut().find(|f| f.name == name)
    }

    pub fn get_field(&self, index: usize) -> Option<&Field> {
        self.fields.get(index)
    }

    /// The focused field, `None` when the submit button has focus
    pub fn active(&self) -> Option<&Field> {
        self.fields.get(self.active_field_index)
    }

    pub fn active_mut(&mut self) -> Option<&mut Field> {
        self.fields.get_mut(self.active_field_index)
    }

    pub fn required_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|f| f.required)
    }

    /// Move focus forward, returning the field that lost focus (if any)
    pub fn focus_next(&mut self) -> Option<usize> {
        let left = self.active_index_if_field();
        self.next_field();
        left
    }

    /// Move focus backward, returning the field that lost focus (if any)
    pub fn focus_prev(&mut self) -> Option<usize> {
        let left = self.active_index_if_field();
        self.prev_field();
        left
    }

    /// Focus a specific stop, returning the field that lost focus (if it changed)
    pub fn focus(&mut self, index: usize) -> Option<usize> {
        if index == self.active_field_index {
            return None;
        }
        let left = self.active_index_if_field();
        self.set_active_field(index);
        left
    }

    fn active_index_if_field(&self) -> Option<usize> {
        (self.active_field_index < self.fields.len()).then_some(self.active_field_index)
    }

    /// Reset all values and focus the first field
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.clear();
        }
        self.active_field_index = 0;
    }

    /// Build the outgoing payload from trimmed values
    pub fn to_message(&self) -> ContactMessage {
        let value = |name: &str| {
            self.field(name)
                .map(|f| f.trimmed().to_string())
                .unwrap_or_default()
        };
        ContactMessage {
            name: value("name"),
            email: value("email"),
            subject: value("subject"),
            message: value("message"),
        }
    }

    /// Row positions for every field.
    ///
    /// Row 0 holds the banner, row 1 is blank, then each field takes a label
    /// row, its input rows and an error row.
    pub fn row_layout(&self) -> Vec<FieldRows> {
        let mut row = 2;
        self.fields
            .iter()
            .map(|field| {
                let input_rows = if field.is_multiline {
                    MESSAGE_INPUT_ROWS
                } else {
                    1
                };
                let rows = FieldRows {
                    label: row,
                    input: row + 1..row + 1 + input_rows,
                    error: row + 1 + input_rows,
                };
                row = rows.error + 1;
                rows
            })
            .collect()
    }

    /// Row of the submit button
    pub fn submit_row(&self) -> usize {
        self.row_layout().last().map(|r| r.error + 2).unwrap_or(2)
    }

    /// Total rendered height
    pub fn height(&self) -> usize {
        self.submit_row() + 1
    }

    /// Map a row inside the rendered form to a focus stop
    pub fn focus_stop_at_row(&self, row: usize) -> Option<usize> {
        if row == self.submit_row() {
            return Some(self.submit_index());
        }
        self.row_layout()
            .iter()
            .position(|r| row >= r.label && row <= r.error)
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for ContactForm {
    fn field_count(&self) -> usize {
        self.fields.len() + 1 // fields + submit button
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.fields.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::new();
        form.field_mut("name").unwrap().set_value(" Ada Lovelace ");
        form.field_mut("email").unwrap().set_value("ada@example.com");
        form.field_mut("subject").unwrap().set_value("Analytical engine");
        form.field_mut("message").unwrap().set_value("Let us talk about notes.");
        form
    }

    mod focus {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_new_focuses_first_field() {
            let form = ContactForm::new();
            assert_eq!(form.active_field_index, 0);
            assert_eq!(form.active().unwrap().name, "name");
        }

        #[test]
        fn test_field_count_includes_submit() {
            let form = ContactForm::new();
            assert_eq!(form.field_count(), 5);
            assert_eq!(form.submit_index(), 4);
        }

        #[test]
        fn test_next_wraps_from_submit_to_first() {
            let mut form = ContactForm::new();
            form.set_active_field(4);
            assert!(form.is_submit_active());
            assert_eq!(form.focus_next(), None);
            assert_eq!(form.active_field_index, 0);
        }

        #[test]
        fn test_prev_wraps_from_first_to_submit() {
            let mut form = ContactForm::new();
            assert_eq!(form.focus_prev(), Some(0));
            assert!(form.is_submit_active());
            assert!(form.active().is_none());
        }

        #[test]
        fn test_focus_next_reports_left_field() {
            let mut form = ContactForm::new();
            form.set_active_field(2);
            assert_eq!(form.focus_next(), Some(2));
            assert_eq!(form.active_field_index, 3);
        }

        #[test]
        fn test_focus_same_index_reports_nothing() {
            let mut form = ContactForm::new();
            assert_eq!(form.focus(0), None);
            assert_eq!(form.focus(3), Some(0));
        }

        #[test]
        fn test_set_active_field_clamps() {
            let mut form = ContactForm::new();
            form.set_active_field(100);
            assert_eq!(form.active_field_index, 4);
        }
    }

    mod values {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_all_fields_required() {
            let form = ContactForm::new();
            assert_eq!(form.required_fields().count(), 4);
        }

        #[test]
        fn test_only_message_is_multiline() {
            let form = ContactForm::new();
            let multiline: Vec<_> = form
                .fields
                .iter()
                .filter(|f| f.is_multiline)
                .map(|f| f.name.as_str())
                .collect();
            assert_eq!(multiline, vec!["message"]);
        }

        #[test]
        fn test_to_message_trims_values() {
            let form = filled_form();
            assert_eq!(
                form.to_message(),
                ContactMessage {
                    name: "Ada Lovelace".to_string(),
                    email: "ada@example.com".to_string(),
                    subject: "Analytical engine".to_string(),
                    message: "Let us talk about notes.".to_string(),
                }
            );
        }

        #[test]
        fn test_reset_clears_values_and_focus() {
            let mut form = filled_form();
            form.set_active_field(3);
            form.reset();
            assert!(form.fields.iter().all(|f| f.value.is_empty()));
            assert_eq!(form.active_field_index, 0);
        }
    }

    mod layout {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_row_layout() {
            let form = ContactForm::new();
            let rows = form.row_layout();
            assert_eq!(
                rows[0],
                FieldRows {
                    label: 2,
                    input: 3..4,
                    error: 4
                }
            );
            assert_eq!(rows[1].label, 5);
            assert_eq!(rows[2].label, 8);
            assert_eq!(
                rows[3],
                FieldRows {
                    label: 11,
                    input: 12..16,
                    error: 16
                }
            );
            assert_eq!(form.submit_row(), 18);
            assert_eq!(form.height(), 19);
        }

        #[test]
        fn test_focus_stop_at_row() {
            let form = ContactForm::new();
            assert_eq!(form.focus_stop_at_row(0), None);
            assert_eq!(form.focus_stop_at_row(3), Some(0));
            assert_eq!(form.focus_stop_at_row(7), Some(1));
            assert_eq!(form.focus_stop_at_row(14), Some(3));
            assert_eq!(form.focus_stop_at_row(17), None);
            assert_eq!(form.focus_stop_at_row(18), Some(4));
        }
    }
}
