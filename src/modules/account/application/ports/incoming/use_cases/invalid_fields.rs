use email_address::EmailAddress;

use crate::account::application::domain::entities::EMAIL_MAX_LENGTH;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("This field is required.")]
    Required,

    #[error("Enter a valid email address.")]
    InvalidEmail,

    #[error("Ensure this field has no more than {0} characters.")]
    TooLong(usize),

    #[error("Must be a valid UUID.")]
    InvalidUuid,

    #[error("No account exists with this id.")]
    UnknownAccount,

    #[error("Cannot send a friend request to yourself.")]
    SameAsSender,
}

/// Every field that failed validation, in declaration order
#[derive(Debug, Clone, Default, PartialEq, Eq, thiserror::Error)]
#[error("Invalid input")]
pub struct InvalidFields {
    pub fields: Vec<(&'static str, FieldError)>,
}

impl InvalidFields {
    pub fn push(&mut self, field: &'static str, error: FieldError) {
        self.fields.push((field, error));
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<FieldError> {
        self.fields
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, err)| *err)
    }
}

/// Trims and checks a required text field against a character limit.
pub(crate) fn required_text(
    errors: &mut InvalidFields,
    field: &'static str,
    value: Option<String>,
    max_chars: usize,
) -> String {
    let value = value.map(|v| v.trim().to_string()).unwrap_or_default();

    if value.is_empty() {
        errors.push(field, FieldError::Required);
    } else if value.chars().count() > max_chars {
        errors.push(field, FieldError::TooLong(max_chars));
    }

    value
}

pub(crate) fn required_email(
    errors: &mut InvalidFields,
    field: &'static str,
    value: Option<String>,
) -> String {
    let value = required_text(errors, field, value, EMAIL_MAX_LENGTH);

    if errors.get(field).is_none() && !EmailAddress::is_valid(&value) {
        errors.push(field, FieldError::InvalidEmail);
    }

    value
}
