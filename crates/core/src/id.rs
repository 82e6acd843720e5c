//! Strongly-typed identifiers used across the domain.
//!
//! Identifiers are opaque text: the store treats them as stable labels and the
//! validation layer never inspects their shape (an invoice may reference a
//! customer id the system did not generate). Generated values are UUIDv7 text.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of a customer record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(String);

/// Identifier of an invoice record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InvoiceId(String);

macro_rules! impl_id_newtype {
    ($t:ty) => {
        impl $t {
            /// Generate a fresh identifier.
            ///
            /// Uses UUIDv7 (time-ordered). Prefer passing IDs explicitly in tests
            /// for determinism.
            pub fn generate() -> Self {
                Self(Uuid::now_v7().to_string())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<String> for $t {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $t {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<$t> for String {
            fn from(value: $t) -> Self {
                value.0
            }
        }
    };
}

impl_id_newtype!(CustomerId);
impl_id_newtype!(InvoiceId);
