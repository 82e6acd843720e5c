//! Invoice mutations.

use std::sync::Arc;

use synergy_core::{InvoiceId, Month};
use synergy_forms::{FormFields, FormState};
use synergy_invoicing::{attribution, Invoice, InvoiceDraft, InvoiceSchema};
use synergy_ledger::plan_mutation;

use crate::store::{InvoiceStore, RevenueStore, StoreError};
use crate::views::{ViewCache, ViewPath};

const CREATE_MISSING_FIELDS: &str = "Missing Fields. Failed to Create Invoice.";
const UPDATE_MISSING_FIELDS: &str = "Missing Fields. Failed to Update Invoice.";
const UPDATE_STORE_FAILED: &str = "Database Error: Failed to Update Invoice.";

/// How an invoice creation came out.
#[derive(Debug, Clone, PartialEq)]
pub enum CreateInvoiceOutcome {
    /// Validation failed; the form re-renders with the state inside.
    Invalid(FormState),
    /// The caller navigates to the listing. A store failure after
    /// validation still lands here.
    Redirect(ViewPath),
}

/// How an invoice update came out.
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateInvoiceOutcome {
    /// Validation failed; the form re-renders with the state inside.
    Invalid(FormState),
    /// The store rejected the mutation. The form shows the message and
    /// nothing navigates or invalidates.
    Failed(FormState),
    Redirect(ViewPath),
}

/// The invoice mutation service.
///
/// Owns the statement choreography every mutation follows: validate, read
/// the ledger bucket, write the invoice row, conditionally write the bucket
/// back, invalidate the listing.
#[derive(Clone)]
pub struct InvoiceActions {
    invoices: Arc<dyn InvoiceStore>,
    revenue: Arc<dyn RevenueStore>,
    views: Arc<dyn ViewCache>,
    schema: InvoiceSchema,
}

impl InvoiceActions {
    pub fn new(
        invoices: Arc<dyn InvoiceStore>,
        revenue: Arc<dyn RevenueStore>,
        views: Arc<dyn ViewCache>,
    ) -> Self {
        Self::with_schema(invoices, revenue, views, InvoiceSchema::default())
    }

    pub fn with_schema(
        invoices: Arc<dyn InvoiceStore>,
        revenue: Arc<dyn RevenueStore>,
        views: Arc<dyn ViewCache>,
        schema: InvoiceSchema,
    ) -> Self {
        Self {
            invoices,
            revenue,
            views,
            schema,
        }
    }

    /// Validate and create an invoice, then send the caller to the listing.
    ///
    /// Only validation stops the flow. A store failure after validation is
    /// logged and swallowed: the caller still navigates, and the listing
    /// shows whatever state the rows actually reached.
    pub async fn create_invoice(
        &self,
        _prev: &FormState,
        fields: &FormFields,
    ) -> CreateInvoiceOutcome {
        let draft = match self.schema.validate(fields) {
            Ok(draft) => draft,
            Err(errors) => {
                return CreateInvoiceOutcome::Invalid(FormState::invalid(
                    errors,
                    CREATE_MISSING_FIELDS,
                ));
            }
        };

        let month = attribution::create_month(draft.date);
        match self.apply_create(&draft, month).await {
            Ok(()) => tracing::debug!(month = %month, "invoice created"),
            Err(err) => tracing::error!(error = %err, "failed to create invoice"),
        }

        self.views.invalidate(ViewPath::InvoiceListing);
        CreateInvoiceOutcome::Redirect(ViewPath::InvoiceListing)
    }

    /// Validate and overwrite an invoice.
    ///
    /// Unlike creation, a store failure here is reported to the caller:
    /// the form re-renders with a message and no navigation happens.
    pub async fn update_invoice(
        &self,
        id: &InvoiceId,
        _prev: &FormState,
        fields: &FormFields,
    ) -> UpdateInvoiceOutcome {
        let draft = match self.schema.validate(fields) {
            Ok(draft) => draft,
            Err(errors) => {
                return UpdateInvoiceOutcome::Invalid(FormState::invalid(
                    errors,
                    UPDATE_MISSING_FIELDS,
                ));
            }
        };

        // Updates are attributed to the wall-clock month, not the month of
        // the submitted invoice date.
        let month = attribution::update_month();
        if let Err(err) = self.apply_update(id, &draft, month).await {
            tracing::error!(error = %err, invoice_id = %id, "failed to update invoice");
            return UpdateInvoiceOutcome::Failed(FormState::failed(UPDATE_STORE_FAILED));
        }
        tracing::debug!(invoice_id = %id, month = %month, "invoice updated");

        self.views.invalidate(ViewPath::InvoiceListing);
        UpdateInvoiceOutcome::Redirect(ViewPath::InvoiceListing)
    }

    /// Delete an invoice. Failures are logged, the listing is invalidated
    /// either way, and the caller gets nothing back.
    pub async fn delete_invoice(&self, id: &InvoiceId) {
        if let Err(err) = self.invoices.delete(id).await {
            tracing::error!(error = %err, invoice_id = %id, "failed to delete invoice");
        }
        self.views.invalidate(ViewPath::InvoiceListing);
    }

    /// Statement order: bucket read, invoice insert, conditional bucket
    /// write. The read and the write are separate statements with no
    /// transaction around them; two mutations hitting the same bucket
    /// concurrently can both plan from the same starting total.
    async fn apply_create(&self, draft: &InvoiceDraft, month: Month) -> Result<(), StoreError> {
        let current = self.revenue.read_bucket(month).await?;
        let invoice = Invoice::from_draft(InvoiceId::generate(), draft);
        let plan = plan_mutation(month, current, invoice.amount_cents, invoice.status.is_paid());

        self.invoices.insert(&invoice).await?;
        if plan.write_back {
            self.revenue.write_bucket(plan.month, plan.new_total_cents).await?;
        }
        Ok(())
    }

    /// Same choreography as creation, against the existing row. The bucket
    /// gains the update's full amount; nothing subtracts what the invoice
    /// contributed before.
    async fn apply_update(
        &self,
        id: &InvoiceId,
        draft: &InvoiceDraft,
        month: Month,
    ) -> Result<(), StoreError> {
        let current = self.revenue.read_bucket(month).await?;
        let invoice = Invoice::from_draft(id.clone(), draft);
        let plan = plan_mutation(month, current, invoice.amount_cents, invoice.status.is_paid());

        self.invoices.update(&invoice).await?;
        if plan.write_back {
            self.revenue.write_bucket(plan.month, plan.new_total_cents).await?;
        }
        Ok(())
    }
}
