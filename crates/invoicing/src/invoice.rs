use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use synergy_core::{to_cents, CustomerId, InvoiceId};

/// Invoice settlement status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Pending,
    Paid,
}

impl InvoiceStatus {
    /// Parse the wire form (`"pending"` / `"paid"`).
    pub fn parse(raw: &str) -> Option<InvoiceStatus> {
        match raw {
            "pending" => Some(InvoiceStatus::Pending),
            "paid" => Some(InvoiceStatus::Paid),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Pending => "pending",
            InvoiceStatus::Paid => "paid",
        }
    }

    /// Only paid invoices move the revenue ledger.
    pub fn is_paid(&self) -> bool {
        matches!(self, InvoiceStatus::Paid)
    }
}

/// A validated invoice submission, amounts still in decimal dollars.
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceDraft {
    pub customer_id: CustomerId,
    pub project_name: String,
    pub amount: f64,
    pub remaining: Option<f64>,
    pub progress: Option<f64>,
    pub status: InvoiceStatus,
    pub date: Option<NaiveDate>,
}

/// An invoice row as stored and listed. Monetary fields are integer cents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: InvoiceId,
    pub customer_id: CustomerId,
    pub project_name: String,
    pub amount_cents: i64,
    pub remaining_cents: Option<i64>,
    pub progress: Option<f64>,
    pub status: InvoiceStatus,
    pub date: Option<NaiveDate>,
}

impl Invoice {
    /// Materialize a validated draft under the given id, converting dollar
    /// amounts to cents.
    pub fn from_draft(id: InvoiceId, draft: &InvoiceDraft) -> Self {
        Self {
            id,
            customer_id: draft.customer_id.clone(),
            project_name: draft.project_name.clone(),
            amount_cents: to_cents(draft.amount),
            remaining_cents: draft.remaining.map(to_cents),
            progress: draft.progress,
            status: draft.status,
            date: draft.date,
        }
    }
}
