//! The customer record.

use serde::{Deserialize, Serialize};
use synergy_core::CustomerId;

use crate::schema::CustomerDraft;

/// Avatar assigned to every customer created through the form; the form
/// collects no image.
pub const DEFAULT_IMAGE_URL: &str = "/customers/user.png";

/// A customer row as stored and listed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub email: String,
    pub image_url: String,
}

impl Customer {
    /// Materialize a validated draft under a fresh id.
    pub fn from_draft(id: CustomerId, draft: &CustomerDraft) -> Self {
        Self {
            id,
            name: draft.name.clone(),
            email: draft.email.clone(),
            image_url: DEFAULT_IMAGE_URL.to_string(),
        }
    }
}
