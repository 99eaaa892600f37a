//! Validation rules and the pure field check

use super::field::{Field, FieldKind};
use regex::Regex;
use std::sync::OnceLock;

pub const REQUIRED_MESSAGE: &str = "This field is required.";
pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address.";

static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
static NAME_REGEX: OnceLock<Regex> = OnceLock::new();

/// Compiled email pattern
pub fn email_regex() -> &'static Regex {
    EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid email regex")
    })
}

/// Compiled name pattern: Latin letters, whitespace and the Arabic block
pub fn name_regex() -> &'static Regex {
    NAME_REGEX.get_or_init(|| {
        Regex::new(r"^[a-zA-Z\s\x{0600}-\x{06FF}]+$").expect("Invalid name regex")
    })
}

/// A single predicate over a field's trimmed value
#[derive(Debug, Clone)]
pub enum ValidationRule {
    /// Value must be at least `min` characters long
    MinLength { min: usize, message: String },
    /// Value must match `regex`
    Pattern { regex: Regex, message: String },
    /// Value must look like an email address
    Email,
}

impl ValidationRule {
    pub fn min_length(min: usize, message: &str) -> Self {
        Self::MinLength {
            min,
            message: message.to_string(),
        }
    }

    pub fn pattern(regex: &Regex, message: &str) -> Self {
        Self::Pattern {
            regex: regex.clone(),
            message: message.to_string(),
        }
    }

    /// Evaluate the rule, returning the failure message if it does not hold
    pub fn check(&self, value: &str) -> Option<&str> {
        match self {
            Self::MinLength { min, message } => {
                (value.chars().count() < *min).then_some(message.as_str())
            }
            Self::Pattern { regex, message } => {
                (!regex.is_match(value)).then_some(message.as_str())
            }
            Self::Email => (!email_regex().is_match(value)).then_some(INVALID_EMAIL_MESSAGE),
        }
    }
}

/// Outcome of validating one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub valid: bool,
    pub message: Option<String>,
}

impl ValidationResult {
    pub fn valid() -> Self {
        Self {
            valid: true,
            message: None,
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: Some(message.into()),
        }
    }
}

/// Check a field without touching any error display.
///
/// Evaluation order, first failure wins:
/// 1. required and empty
/// 2. email kind with a malformed address
/// 3. the field's own rules, in declaration order
///
/// Empty optional fields are always valid.
pub fn check_field(field: &Field) -> ValidationResult {
    let value = field.trimmed();

    if value.is_empty() {
        return if field.required {
            ValidationResult::invalid(REQUIRED_MESSAGE)
        } else {
            ValidationResult::valid()
        };
    }

    if field.kind == FieldKind::Email && !email_regex().is_match(value) {
        return ValidationResult::invalid(INVALID_EMAIL_MESSAGE);
    }

    field
        .rules
        .iter()
        .find_map(|rule| rule.check(value))
        .map(ValidationResult::invalid)
        .unwrap_or_else(ValidationResult::valid)
}

#[cfg(test)]
mod tests {
    use super::*;

    mod email_pattern {
        use super::*;

        #[test]
        fn test_accepts_plain_address() {
            assert!(email_regex().is_match("ada@example.com"));
        }

        #[test]
        fn test_rejects_missing_at() {
            assert!(!email_regex().is_match("not-an-email"));
        }

        #[test]
        fn test_rejects_missing_dot_in_domain() {
            assert!(!email_regex().is_match("ada@example"));
        }

        #[test]
        fn test_rejects_whitespace() {
            assert!(!email_regex().is_match("ada lovelace@example.com"));
        }
    }

    mod name_pattern {
        use super::*;

        #[test]
        fn test_accepts_latin_with_spaces() {
            assert!(name_regex().is_match("Ada Lovelace"));
        }

        #[test]
        fn test_accepts_arabic() {
            assert!(name_regex().is_match("أحمد"));
        }

        #[test]
        fn test_rejects_digits_and_punctuation() {
            assert!(!name_regex().is_match("Ada2"));
            assert!(!name_regex().is_match("O'Neil"));
        }
    }

    mod rules {
        use super::*;

        #[test]
        fn test_min_length_counts_characters() {
            let rule = ValidationRule::min_length(2, "too short");
            assert_eq!(rule.check("أ"), Some("too short"));
            assert_eq!(rule.check("أح"), None);
        }

        #[test]
        fn test_pattern_rule() {
            let rule = ValidationRule::pattern(name_regex(), "letters only");
            assert_eq!(rule.check("R2D2"), Some("letters only"));
            assert_eq!(rule.check("Artoo"), None);
        }

        #[test]
        fn test_email_rule() {
            assert_eq!(
                ValidationRule::Email.check("nope"),
                Some(INVALID_EMAIL_MESSAGE)
            );
            assert_eq!(ValidationRule::Email.check("a@b.co"), None);
        }
    }

    mod check_field {
        use super::*;

        #[test]
        fn test_required_empty_fails() {
            let field = Field::text("name", "Name").required();
            assert_eq!(check_field(&field), ValidationResult::invalid(REQUIRED_MESSAGE));
        }

        #[test]
        fn test_required_whitespace_only_fails() {
            let mut field = Field::text("name", "Name").required();
            field.set_value("   ");
            assert!(!check_field(&field).valid);
        }

        #[test]
        fn test_optional_empty_is_valid_even_with_rules() {
            let field = Field::text("subject", "Subject")
                .with_rule(ValidationRule::min_length(5, "short"));
            assert_eq!(check_field(&field), ValidationResult::valid());
        }

        #[test]
        fn test_email_checked_before_rules() {
            let mut field = Field::email("email", "Email")
                .required()
                .with_rule(ValidationRule::min_length(100, "never reached"));
            field.set_value("not-an-email");
            assert_eq!(
                check_field(&field),
                ValidationResult::invalid(INVALID_EMAIL_MESSAGE)
            );
        }

        #[test]
        fn test_first_failing_rule_wins() {
            let mut field = Field::text("name", "Name")
                .with_rule(ValidationRule::min_length(2, "length"))
                .with_rule(ValidationRule::pattern(name_regex(), "charset"));
            field.set_value("1");
            assert_eq!(check_field(&field), ValidationResult::invalid("length"));
            field.set_value("12");
            assert_eq!(check_field(&field), ValidationResult::invalid("charset"));
            field.set_value("Al");
            assert_eq!(check_field(&field), ValidationResult::valid());
        }
    }
}
