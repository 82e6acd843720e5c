//! Customer form validation.

use synergy_forms::{parse, FieldErrors, FormFields};

const NAME_REQUIRED: &str = "Please enter a valid customer name.";
const EMAIL_REQUIRED: &str = "Please select a valid email address.";

/// A validated customer submission, ready to persist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerDraft {
    pub name: String,
    pub email: String,
}

/// Validation rules for the customer form.
///
/// Both fields are plain required text. The name field reports failures
/// under `customer_name`, not `name`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CustomerSchema;

impl CustomerSchema {
    pub fn validate(&self, fields: &FormFields) -> Result<CustomerDraft, FieldErrors> {
        let mut errors = FieldErrors::new();

        let name = parse::required_text(fields, "name", "customer_name", NAME_REQUIRED, &mut errors);
        let email = parse::required_text(fields, "email", "email", EMAIL_REQUIRED, &mut errors);

        match (name, email) {
            (Some(name), Some(email)) if errors.is_empty() => Ok(CustomerDraft { name, email }),
            _ => Err(errors),
        }
    }
}
