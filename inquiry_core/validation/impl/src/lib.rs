use std::sync::LazyLock;

use inquiry_core_validation_contracts::ValidationService;
use inquiry_models::form::{ErrorState, FieldId, FormValues};
use regex::Regex;

pub const NAME_REQUIRED: &str = "Name is required!";
pub const EMAIL_REQUIRED: &str = "Email is required!";
pub const EMAIL_INVALID: &str = "Needs to be an email!";
pub const MESSAGE_REQUIRED: &str = "Message is required!";

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").unwrap());

/// A predicate over the current text of a field and the message shown when it
/// does not hold.
#[derive(Debug, Clone, Copy)]
pub struct ValidationRule {
    pub is_valid: fn(&str) -> bool,
    pub message: &'static str,
}

/// Fields that are missing from this table (the subject) are never validated.
pub static RULES: &[(FieldId, &[ValidationRule])] = &[
    (
        FieldId::Name,
        &[ValidationRule {
            is_valid: is_present,
            message: NAME_REQUIRED,
        }],
    ),
    (
        FieldId::Email,
        &[
            ValidationRule {
                is_valid: is_present,
                message: EMAIL_REQUIRED,
            },
            ValidationRule {
                is_valid: looks_like_email,
                message: EMAIL_INVALID,
            },
        ],
    ),
    (
        FieldId::Message,
        &[ValidationRule {
            is_valid: is_present,
            message: MESSAGE_REQUIRED,
        }],
    ),
];

fn is_present(value: &str) -> bool {
    !value.is_empty()
}

fn looks_like_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ValidationServiceImpl;

impl ValidationService for ValidationServiceImpl {
    fn validate(&self, values: &FormValues) -> ErrorState {
        RULES
            .iter()
            .map(|&(field, rules)| {
                let value = values.get(field);
                let errors = rules
                    .iter()
                    .filter(|rule| !(rule.is_valid)(value))
                    .map(|rule| rule.message)
                    .collect::<Vec<_>>();
                (field, errors)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn valid_values() -> FormValues {
        FormValues {
            name: "Max Mustermann".into(),
            email: "max.mustermann@example.de".into(),
            subject: String::new(),
            message: "Hello World!".into(),
        }
    }

    #[test]
    fn valid() {
        // Arrange
        let sut = ValidationServiceImpl;

        // Act
        let result = sut.validate(&valid_values());

        // Assert
        assert!(!result.has_errors());
        for field in FieldId::ALL {
            assert!(result.errors(field).is_empty());
        }
    }

    #[test]
    fn empty_form() {
        // Arrange
        let sut = ValidationServiceImpl;

        // Act
        let result = sut.validate(&FormValues::default());

        // Assert
        assert_eq!(result.errors(FieldId::Name), [NAME_REQUIRED]);
        assert_eq!(result.errors(FieldId::Email), [EMAIL_REQUIRED, EMAIL_INVALID]);
        assert_eq!(result.errors(FieldId::Message), [MESSAGE_REQUIRED]);
        assert!(result.errors(FieldId::Subject).is_empty());
        assert_eq!(result.first_error(FieldId::Email), Some(EMAIL_REQUIRED));
    }

    #[test]
    fn each_required_field() {
        let sut = ValidationServiceImpl;

        for (field, message) in [
            (FieldId::Name, NAME_REQUIRED),
            (FieldId::Email, EMAIL_REQUIRED),
            (FieldId::Message, MESSAGE_REQUIRED),
        ] {
            let mut values = valid_values();
            values.set(field, String::new());

            let result = sut.validate(&values);

            assert!(result.errors(field).contains(&message));
            for other in FieldId::ALL.into_iter().filter(|&f| f != field) {
                assert!(result.errors(other).is_empty());
            }
        }
    }

    #[test]
    fn email_shape() {
        let sut = ValidationServiceImpl;

        for (email, valid) in [
            ("user@host.tld", true),
            ("a@b.c", true),
            ("first.last@sub.example.org", true),
            ("user@host", false),
            ("user.host.tld", false),
            ("@host.tld", false),
            ("user@.tld", false),
            ("user @host.tld", false),
            ("   ", false),
        ] {
            let values = FormValues {
                email: email.into(),
                ..valid_values()
            };

            let result = sut.validate(&values);

            let expected: &[&str] = if valid { &[] } else { &[EMAIL_INVALID] };
            assert_eq!(result.errors(FieldId::Email), expected, "{email:?}");
        }
    }

    #[test]
    fn subject_is_never_validated() {
        let sut = ValidationServiceImpl;

        for subject in ["", " ", "anything at all"] {
            let values = FormValues {
                subject: subject.into(),
                ..valid_values()
            };
            assert!(sut.validate(&values).errors(FieldId::Subject).is_empty());
        }
    }

    #[test]
    fn whitespace_counts_as_present() {
        let sut = ValidationServiceImpl;

        let values = FormValues {
            name: " ".into(),
            message: "\n".into(),
            ..valid_values()
        };

        assert!(!sut.validate(&values).has_errors());
    }
}
