//! Invoice form validation.
//!
//! One pass over the submitted fields, collecting every failure before
//! deciding. A field map with any shape (missing keys, garbage values) must
//! come out the other end as either a draft or a set of messages, never a
//! panic.

use synergy_core::CustomerId;
use synergy_forms::{parse, AmountFloor, FieldErrors, FieldPresence, FormFields};

use crate::invoice::{InvoiceDraft, InvoiceStatus};

const CUSTOMER_REQUIRED: &str = "Please select a customer.";
const PROJECT_REQUIRED: &str = "Please enter a project name or description.";
const AMOUNT_RANGE: &str = "Please enter an amount greater than $0.";
const AMOUNT_TOO_LARGE: &str = "Please enter an amount below $100,000,000.";
const REMAINING_RANGE: &str = "Please enter an amount greater or equal than $0.";
const PROGRESS_LOW: &str = "Please enter a correct percentage (%) value";
const PROGRESS_HIGH: &str = "Please enter a percentage less or equal to 100%";
const STATUS_REQUIRED: &str = "Please select an invoice status.";
const DATE_INVALID: &str = "Please enter a valid date.";

/// Largest dollar amount the form accepts. Anything above this (or any
/// non-finite parse like `inf`) is rejected before it can reach the cents
/// conversion, whose i64 arithmetic it would not survive.
const AMOUNT_CEILING: f64 = 100_000_000.0;

fn bounded(amount: f64) -> bool {
    amount.is_finite() && amount <= AMOUNT_CEILING
}

/// Validation rules for the invoice form.
///
/// The knobs cover the places deployments differ: whether a zero amount is
/// acceptable, and which of the secondary fields must be submitted. The
/// defaults match the dashboard form: amount admits zero, remaining and
/// progress are optional, the date is required.
///
/// Two field names diverge from their error keys: the form submits `project`
/// but failures are reported under `project_name`, and `customerId` keeps its
/// camel-cased key throughout.
#[derive(Debug, Clone, Copy)]
pub struct InvoiceSchema {
    pub amount_floor: AmountFloor,
    pub remaining: FieldPresence,
    pub progress: FieldPresence,
    pub date: FieldPresence,
}

impl Default for InvoiceSchema {
    fn default() -> Self {
        Self {
            amount_floor: AmountFloor::ZeroAllowed,
            remaining: FieldPresence::Optional,
            progress: FieldPresence::Optional,
            date: FieldPresence::Required,
        }
    }
}

impl InvoiceSchema {
    pub fn validate(&self, fields: &FormFields) -> Result<InvoiceDraft, FieldErrors> {
        let mut errors = FieldErrors::new();

        // The customer id is an opaque label. Anything non-blank passes;
        // whether it names a real customer is the store's concern.
        let customer_id =
            parse::required_text(fields, "customerId", "customerId", CUSTOMER_REQUIRED, &mut errors);
        let project_name =
            parse::required_text(fields, "project", "project_name", PROJECT_REQUIRED, &mut errors);

        let amount = match parse::decimal(
            fields,
            "amount",
            FieldPresence::Required,
            AMOUNT_RANGE,
            &mut errors,
        ) {
            Some(amount) if !bounded(amount) => {
                errors.push("amount", AMOUNT_TOO_LARGE);
                None
            }
            Some(amount) if self.amount_floor.admits(amount) => Some(amount),
            Some(_) => {
                errors.push("amount", AMOUNT_RANGE);
                None
            }
            None => None,
        };

        let remaining = match parse::decimal(
            fields,
            "remaining",
            self.remaining,
            REMAINING_RANGE,
            &mut errors,
        ) {
            Some(remaining) if !bounded(remaining) => {
                errors.push("remaining", AMOUNT_TOO_LARGE);
                None
            }
            Some(remaining) if remaining >= 0.0 => Some(remaining),
            Some(_) => {
                errors.push("remaining", REMAINING_RANGE);
                None
            }
            None => None,
        };

        let progress =
            match parse::decimal(fields, "progress", self.progress, PROGRESS_LOW, &mut errors) {
                Some(progress) => {
                    if progress < 0.0 {
                        errors.push("progress", PROGRESS_LOW);
                    }
                    if progress > 100.0 {
                        errors.push("progress", PROGRESS_HIGH);
                    }
                    Some(progress)
                }
                None => None,
            };

        let status = match fields.get("status").and_then(|raw| InvoiceStatus::parse(raw.trim())) {
            Some(status) => Some(status),
            None => {
                errors.push("status", STATUS_REQUIRED);
                None
            }
        };

        let date = parse::date(fields, "date", self.date, DATE_INVALID, &mut errors);

        match (customer_id, project_name, amount, status) {
            (Some(customer_id), Some(project_name), Some(amount), Some(status))
                if errors.is_empty() =>
            {
                Ok(InvoiceDraft {
                    customer_id: CustomerId::from(customer_id),
                    project_name,
                    amount,
                    remaining,
                    progress,
                    status,
                    date,
                })
            }
            _ => Err(errors),
        }
    }
}
