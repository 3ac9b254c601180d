use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};
use thiserror::Error;

use super::{ContactMessage, Field, FormState};

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    RegexBuilder::new(r"^[a-z0-9_'+\-.]*[a-z0-9_+\-]@(?:[a-z0-9][a-z0-9\-]*\.)+[a-z]{2,}$")
        .case_insensitive(true)
        .unicode(false)
        .build()
        .expect("email pattern should compile")
});

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    #[error("{0} is required")]
    Required(&'static str),
    #[error("Invalid email address")]
    InvalidEmail,
    #[error("{label} must be less than {max} characters")]
    TooLong { label: &'static str, max: usize },
}

/// Errors from the most recent submit attempt, keyed by field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<Field, FieldError>);

impl ValidationErrors {
    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.0.get(&field)
    }

    pub fn message(&self, field: Field) -> Option<String> {
        self.get(field).map(ToString::to_string)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    /// Returns true if an error was present.
    pub fn clear(&mut self, field: Field) -> bool {
        self.0.remove(&field).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &FieldError)> {
        self.0.iter().map(|(f, e)| (*f, e))
    }
}

// regex has no lookaround, so the leading-dot and `..` rules live outside the pattern
pub fn is_valid_email(s: &str) -> bool {
    !s.starts_with('.') && !s.contains("..") && EMAIL_RE.is_match(s)
}

/// Checks a single field, returning the trimmed value.
///
/// Rules are checked in order and the first failure wins: emptiness, then
/// length, then format (email only). Length is measured in UTF-16 code units,
/// matching what the browser reports for the input.
pub fn validate_field(field: Field, raw: &str) -> Result<&str, FieldError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(FieldError::Required(field.label()));
    }
    let max = field.max_len();
    if value.encode_utf16().count() > max {
        return Err(FieldError::TooLong {
            label: field.label(),
            max,
        });
    }
    if field == Field::Email && !is_valid_email(value) {
        return Err(FieldError::InvalidEmail);
    }
    Ok(value)
}

/// Validates every field of the form, reporting all failures together.
pub fn validate(form: &FormState) -> Result<ContactMessage, ValidationErrors> {
    let mut errors = ValidationErrors::default();
    let mut check = |field: Field| match validate_field(field, form.get(field)) {
        Ok(v) => v.to_string(),
        Err(e) => {
            errors.0.insert(field, e);
            String::new()
        }
    };
    let message = ContactMessage {
        name: check(Field::Name),
        email: check(Field::Email),
        subject: check(Field::Subject),
        message: check(Field::Message),
    };
    if errors.is_empty() {
        Ok(message)
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn filled() -> FormState {
        FormState {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            subject: "Project Inquiry".to_string(),
            message: "Hello there".to_string(),
        }
    }

    #[test]
    fn test_email_grammar() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("first.last+tag@sub.example.co"));
        assert!(is_valid_email("O'Brien@Example.ORG"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a@b.c"));
        assert!(!is_valid_email(".a@b.com"));
        assert!(!is_valid_email("a..b@b.com"));
        assert!(!is_valid_email("a.@b.com"));
        assert!(!is_valid_email("a@-b.com"));
        assert!(!is_valid_email("a b@b.com"));
        assert!(!is_valid_email("@b.com"));
        // case folding stays ASCII: KELVIN SIGN and LONG S are not letters here
        assert!(!is_valid_email("a@b.\u{212A}\u{212A}"));
        assert!(!is_valid_email("\u{17F}@b.com"));
    }

    #[test]
    fn test_required_fields() {
        for field in Field::ALL {
            let mut form = filled();
            *form.get_mut(field) = "   \t\n".to_string();
            let errors = validate(&form).expect_err("blank field should fail");
            assert_eq!(errors.len(), 1);
            assert_eq!(errors.get(field), Some(&FieldError::Required(field.label())));
        }
    }

    #[test]
    fn test_empty_email_is_required_not_invalid() {
        assert_eq!(
            validate_field(Field::Email, "  "),
            Err(FieldError::Required("Email"))
        );
    }

    #[test]
    fn test_name_length_boundary() {
        let ok = "a".repeat(100);
        assert_eq!(validate_field(Field::Name, &format!("  {ok}  ")), Ok(ok.as_str()));

        let long = "a".repeat(101);
        assert_eq!(
            validate_field(Field::Name, &long),
            Err(FieldError::TooLong {
                label: "Name",
                max: 100
            })
        );
    }

    #[test]
    fn test_length_counts_utf16_units() {
        // one code unit each
        assert!(validate_field(Field::Subject, &"é".repeat(200)).is_ok());
        assert!(validate_field(Field::Message, &"ü".repeat(1001)).is_err());

        // astral characters are two code units each
        assert!(validate_field(Field::Subject, &"😀".repeat(100)).is_ok());
        assert_eq!(
            validate_field(Field::Subject, &"😀".repeat(101)),
            Err(FieldError::TooLong {
                label: "Subject",
                max: 200
            })
        );
        assert!(validate_field(Field::Subject, &"😀".repeat(150)).is_err());
    }

    #[test]
    fn test_email_length_checked_before_format() {
        let long_valid = format!("{}@b.com", "a".repeat(250));
        assert_eq!(
            validate_field(Field::Email, &long_valid),
            Err(FieldError::TooLong {
                label: "Email",
                max: 255
            })
        );
        let long_invalid = "a".repeat(300);
        assert_eq!(
            validate_field(Field::Email, &long_invalid),
            Err(FieldError::TooLong {
                label: "Email",
                max: 255
            })
        );
        assert_eq!(
            validate_field(Field::Email, &"a".repeat(255)),
            Err(FieldError::InvalidEmail)
        );
    }

    #[test]
    fn test_all_failures_reported() {
        let form = FormState {
            name: String::new(),
            email: "nope".to_string(),
            subject: "s".repeat(201),
            message: String::new(),
        };
        let errors = validate(&form).unwrap_err();
        let messages = errors
            .iter()
            .map(|(f, e)| (f.as_str(), e.to_string()))
            .collect::<Vec<_>>();
        assert_eq!(
            messages,
            vec![
                ("name", "Name is required".to_string()),
                ("email", "Invalid email address".to_string()),
                ("subject", "Subject must be less than 200 characters".to_string()),
                ("message", "Message is required".to_string()),
            ]
        );
    }

    #[test]
    fn test_validate_is_idempotent() {
        let form = FormState {
            email: "not-an-email".to_string(),
            ..filled()
        };
        assert_eq!(validate(&form), validate(&form));
    }

    #[test]
    fn test_valid_form_is_trimmed() {
        let form = FormState {
            name: "  Jane Doe ".to_string(),
            ..filled()
        };
        let msg = validate(&form).expect("form should be valid");
        assert_eq!(msg.name, "Jane Doe");
        assert_eq!(msg.email, "jane@example.com");
    }
}
