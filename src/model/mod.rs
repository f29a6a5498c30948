mod contact;
mod validation;

pub use contact::{ContactDraft, ContactField, DisplayRegion, SubmittedRecord};
pub use validation::{
    FIRST_NAME_MIN_LEN, ValidationError, ValidationErrors, validate_email, validate_field,
    validate_first_name, validate_last_name,
};
