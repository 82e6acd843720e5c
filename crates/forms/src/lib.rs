//! `synergy-forms` — form submission plumbing shared by every mutation.
//!
//! A submission is a flat map of string fields ([`FormFields`]). Validation
//! walks every field, accumulating messages into [`FieldErrors`] rather than
//! stopping at the first failure, and the outcome handed back to the caller
//! is a [`FormState`]: per-field errors plus an optional top-level message.

pub mod errors;
pub mod fields;
pub mod parse;
pub mod presence;

pub use errors::{FieldErrors, FormState};
pub use fields::FormFields;
pub use presence::{AmountFloor, FieldPresence};
