use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use super::contact::{ContactDraft, ContactField};

/// Minimum number of characters in a first name.
pub const FIRST_NAME_MIN_LEN: usize = 5;

/// Validation errors for contact form fields.
///
/// The display text is the message shown next to the form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is a required field")]
    Required(&'static str),
    #[error("{field} must have at least {min} characters")]
    TooShort { field: &'static str, min: usize },
    #[error("email must be a valid email address")]
    InvalidEmail,
}

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@.]+(\.[^\s@.]+)+$").expect("valid hardcoded regex")
});

/// Validates a first name: at least [`FIRST_NAME_MIN_LEN`] characters.
///
/// An empty name fails the same length rule.
pub fn validate_first_name(name: &str) -> Result<(), ValidationError> {
    if name.chars().count() < FIRST_NAME_MIN_LEN {
        Err(ValidationError::TooShort {
            field: ContactField::FirstName.name(),
            min: FIRST_NAME_MIN_LEN,
        })
    } else {
        Ok(())
    }
}

/// Validates a last name: must be non-empty.
pub fn validate_last_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        Err(ValidationError::Required(ContactField::LastName.name()))
    } else {
        Ok(())
    }
}

/// Validates an email address shaped like `local@domain.tld`. Empty is invalid.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if EMAIL_RE.is_match(email) {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail)
    }
}

/// Runs the rule for `field` against `value`. The message field has no rule.
pub fn validate_field(field: ContactField, value: &str) -> Result<(), ValidationError> {
    match field {
        ContactField::FirstName => validate_first_name(value),
        ContactField::LastName => validate_last_name(value),
        ContactField::Email => validate_email(value),
        ContactField::Message => Ok(()),
    }
}

/// Current validation failures, at most one per field.
///
/// A field is absent when it is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<ContactField, ValidationError>,
}

impl ValidationErrors {
    /// Validates every required field of `draft` from scratch.
    pub fn for_draft(draft: &ContactDraft) -> Self {
        let mut errors = Self::default();
        for field in ContactField::REQUIRED {
            errors.revalidate(field, draft.value(field));
        }
        errors
    }

    /// Re-runs the rule for one field, replacing or removing its entry.
    pub fn revalidate(&mut self, field: ContactField, value: &str) {
        match validate_field(field, value) {
            Ok(()) => {
                self.errors.remove(&field);
            }
            Err(e) => {
                self.errors.insert(field, e);
            }
        }
    }

    pub fn get(&self, field: ContactField) -> Option<&ValidationError> {
        self.errors.get(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }

    /// Iterates over failing fields in form order.
    pub fn iter(&self) -> impl Iterator<Item = (ContactField, &ValidationError)> {
        self.errors.iter().map(|(field, e)| (*field, e))
    }
}

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;

    use super::*;

    // --- validate_first_name ---

    #[test]
    fn first_name_valid() {
        assert_eq!(validate_first_name("Firstname"), Ok(()));
    }

    #[test]
    fn first_name_exactly_min_len() {
        assert_eq!(validate_first_name("Alice"), Ok(()));
    }

    #[test]
    fn first_name_empty_reports_length() {
        let err = validate_first_name("").unwrap_err();
        assert_eq!(err.to_string(), "firstName must have at least 5 characters");
    }

    #[test]
    fn first_name_single_char_too_short() {
        let err = validate_first_name("Q").unwrap_err();
        assert_eq!(
            err,
            ValidationError::TooShort {
                field: "firstName",
                min: 5
            }
        );
        assert_eq!(err.to_string(), "firstName must have at least 5 characters");
    }

    #[test]
    fn first_name_counts_chars_not_bytes() {
        assert!(validate_first_name("Zoë").is_err());
        assert_eq!(validate_first_name("Zoëla"), Ok(()));
    }

    #[quickcheck]
    fn first_name_long_enough_is_valid(s: String) -> bool {
        if s.chars().count() < FIRST_NAME_MIN_LEN {
            return true; // skip short inputs
        }
        validate_first_name(&s).is_ok()
    }

    #[quickcheck]
    fn first_name_short_is_invalid(s: String) -> bool {
        let short: String = s.chars().take(FIRST_NAME_MIN_LEN - 1).collect();
        validate_first_name(&short).is_err()
    }

    // --- validate_last_name ---

    #[test]
    fn last_name_valid() {
        assert_eq!(validate_last_name("Lastname"), Ok(()));
    }

    #[test]
    fn last_name_single_char_is_valid() {
        assert_eq!(validate_last_name("L"), Ok(()));
    }

    #[test]
    fn last_name_empty_message() {
        let err = validate_last_name("").unwrap_err();
        assert_eq!(err.to_string(), "lastName is a required field");
    }

    // --- validate_email ---

    #[test]
    fn email_valid() {
        assert_eq!(validate_email("firstname@gmail.com"), Ok(()));
    }

    #[test]
    fn email_with_subdomain_and_plus() {
        assert_eq!(validate_email("first.name+tag@mail.example.co.uk"), Ok(()));
    }

    #[test]
    fn email_empty_reports_invalid_address() {
        let err = validate_email("").unwrap_err();
        assert_eq!(err, ValidationError::InvalidEmail);
        assert_eq!(err.to_string(), "email must be a valid email address");
    }

    #[test]
    fn email_missing_domain() {
        let err = validate_email("firstname@").unwrap_err();
        assert_eq!(err.to_string(), "email must be a valid email address");
    }

    #[test]
    fn email_rejects_malformed_shapes() {
        for bad in [
            "firstname",
            "@gmail.com",
            "firstname@gmail",
            "first name@gmail.com",
            "a@@gmail.com",
            "a@gmail..com",
            "a@gmail.com.",
        ] {
            assert_eq!(
                validate_email(bad),
                Err(ValidationError::InvalidEmail),
                "{bad:?} should be rejected"
            );
        }
    }

    #[quickcheck]
    fn email_alnum_parts_always_accepted(local: String, domain: String, tld: String) -> bool {
        fn keep(s: &str) -> String {
            s.chars().filter(char::is_ascii_alphanumeric).collect()
        }
        let (local, domain, tld) = (keep(&local), keep(&domain), keep(&tld));
        if local.is_empty() || domain.is_empty() || tld.is_empty() {
            return true; // skip empty parts
        }
        validate_email(&format!("{local}@{domain}.{tld}")).is_ok()
    }

    // --- validate_field ---

    #[test]
    fn message_has_no_rule() {
        assert_eq!(validate_field(ContactField::Message, ""), Ok(()));
    }

    // --- ValidationErrors ---

    #[test]
    fn empty_draft_has_three_errors() {
        let errors = ValidationErrors::for_draft(&ContactDraft::default());
        assert_eq!(errors.len(), 3);
        let fields: Vec<ContactField> = errors.iter().map(|(f, _)| f).collect();
        assert_eq!(fields, ContactField::REQUIRED.to_vec());
    }

    #[test]
    fn valid_draft_has_no_errors() {
        let draft = ContactDraft {
            first_name: "Firstname".into(),
            last_name: "Lastname".into(),
            email: "firstname@gmail.com".into(),
            message: String::new(),
        };
        assert!(ValidationErrors::for_draft(&draft).is_empty());
    }

    #[test]
    fn empty_draft_messages() {
        let messages: Vec<String> = ValidationErrors::for_draft(&ContactDraft::default())
            .iter()
            .map(|(_, e)| e.to_string())
            .collect();
        assert_eq!(
            messages,
            vec![
                "firstName must have at least 5 characters",
                "lastName is a required field",
                "email must be a valid email address",
            ]
        );
    }

    #[test]
    fn revalidate_replaces_and_removes() {
        let mut errors = ValidationErrors::default();
        errors.revalidate(ContactField::LastName, "");
        assert_eq!(
            errors.get(ContactField::LastName),
            Some(&ValidationError::Required("lastName"))
        );
        errors.revalidate(ContactField::Email, "");
        assert_eq!(
            errors.get(ContactField::Email),
            Some(&ValidationError::InvalidEmail)
        );
        errors.revalidate(ContactField::Email, "bad@");
        assert_eq!(
            errors.get(ContactField::Email),
            Some(&ValidationError::InvalidEmail)
        );
        assert_eq!(errors.len(), 2);
        errors.revalidate(ContactField::Email, "good@example.com");
        errors.revalidate(ContactField::LastName, "Lastname");
        assert!(errors.is_empty());
    }

    #[test]
    fn clear_removes_everything() {
        let mut errors = ValidationErrors::for_draft(&ContactDraft::default());
        errors.clear();
        assert!(errors.is_empty());
    }
}
