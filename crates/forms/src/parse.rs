//! Field parsing helpers used by the mutation schemas.
//!
//! Every helper records its failure into the caller's [`FieldErrors`] and
//! returns `None` instead of short-circuiting, so one validation pass reports
//! every broken field at once.

use chrono::NaiveDate;

use crate::errors::FieldErrors;
use crate::fields::FormFields;
use crate::presence::FieldPresence;

/// A field that must be present and non-blank after trimming.
///
/// The error key can differ from the field name: the invoice form submits
/// `project` but reports failures under `project_name`.
pub fn required_text(
    fields: &FormFields,
    name: &str,
    error_key: &str,
    message: &str,
    errors: &mut FieldErrors,
) -> Option<String> {
    match fields.get(name).map(str::trim) {
        Some(value) if !value.is_empty() => Some(value.to_string()),
        _ => {
            errors.push(error_key, message);
            None
        }
    }
}

/// A decimal number field. Failures are keyed under the field name.
///
/// An absent optional field is simply `None`; an absent required field and an
/// unparseable value both record `message`.
pub fn decimal(
    fields: &FormFields,
    name: &str,
    presence: FieldPresence,
    message: &str,
    errors: &mut FieldErrors,
) -> Option<f64> {
    let raw = match fields.get(name) {
        Some(raw) => raw,
        None if presence.is_required() => {
            errors.push(name, message);
            return None;
        }
        None => return None,
    };
    match raw.trim().parse::<f64>() {
        Ok(value) => Some(value),
        Err(_) => {
            errors.push(name, message);
            None
        }
    }
}

/// A `YYYY-MM-DD` date field. Failures are keyed under the field name.
pub fn date(
    fields: &FormFields,
    name: &str,
    presence: FieldPresence,
    message: &str,
    errors: &mut FieldErrors,
) -> Option<NaiveDate> {
    let raw = match fields.get(name) {
        Some(raw) => raw,
        None if presence.is_required() => {
            errors.push(name, message);
            return None;
        }
        None => return None,
    };
    match NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d") {
        Ok(value) => Some(value),
        Err(_) => {
            errors.push(name, message);
            None
        }
    }
}
