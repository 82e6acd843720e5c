//! Raw form submissions.

use std::collections::HashMap;

/// A flat bag of submitted form fields.
///
/// Every value is a string exactly as it arrived; parsing and trimming happen
/// in the validation layer. Absent and present-but-blank fields are distinct
/// states and validators treat them differently where the rules call for it.
#[derive(Debug, Clone, Default)]
pub struct FormFields {
    values: HashMap<String, String>,
}

impl FormFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field, replacing any previous value under the same name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    /// Raw value of a field, if it was submitted at all.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }
}

impl From<HashMap<String, String>> for FormFields {
    fn from(values: HashMap<String, String>) -> Self {
        Self { values }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormFields {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
