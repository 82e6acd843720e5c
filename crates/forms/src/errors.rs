//! Validation outcomes returned to form callers.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Per-field validation messages, keyed by error key.
///
/// A field can carry more than one message (a percentage can be both
/// unparseable and out of range on successive submissions); the order
/// messages were pushed in is preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors {
    by_field: BTreeMap<String, Vec<String>>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message under an error key.
    pub fn push(&mut self, key: impl Into<String>, message: impl Into<String>) {
        self.by_field
            .entry(key.into())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.by_field.is_empty()
    }

    /// Messages recorded under a key, if any.
    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.by_field.get(key).map(Vec::as_slice)
    }
}

/// The result shape every form mutation reports back.
///
/// Both members are optional so a successful pass serializes to `{}` and the
/// two failure modes stay distinguishable: validation failures carry `errors`
/// plus a summary `message`, store failures carry only `message`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormState {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldErrors>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl FormState {
    /// The state a fresh form starts from.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Validation failed: field errors plus a top-level summary.
    pub fn invalid(errors: FieldErrors, message: impl Into<String>) -> Self {
        Self {
            errors: Some(errors),
            message: Some(message.into()),
        }
    }

    /// The store rejected the mutation: message only, no field errors.
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            errors: None,
            message: Some(message.into()),
        }
    }
}
