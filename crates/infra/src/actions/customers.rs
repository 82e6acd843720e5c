//! Customer mutations.

use std::sync::Arc;

use synergy_core::CustomerId;
use synergy_customers::{Customer, CustomerSchema};
use synergy_forms::{FormFields, FormState};

use crate::store::CustomerStore;
use crate::views::{ViewCache, ViewPath};

const CREATE_MISSING_FIELDS: &str = "Missing Fields. Failed to Create Customer.";
const UPDATE_MISSING_FIELDS: &str = "Missing Fields. Failed to Update Customer.";
const CREATE_STORE_FAILED: &str = "Database Error: Failed to Create Customer.";
const UPDATE_STORE_FAILED: &str = "Database Error: Failed to Update Customer.";

/// How a customer creation came out.
#[derive(Debug, Clone, PartialEq)]
pub enum CreateCustomerOutcome {
    Invalid(FormState),
    /// The insert failed; the form shows the message, nothing navigates.
    Failed(FormState),
    Redirect(ViewPath),
}

/// How a customer update came out.
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateCustomerOutcome {
    Invalid(FormState),
    Failed(FormState),
    Redirect(ViewPath),
}

/// The customer mutation service.
#[derive(Clone)]
pub struct CustomerActions {
    customers: Arc<dyn CustomerStore>,
    views: Arc<dyn ViewCache>,
    schema: CustomerSchema,
}

impl CustomerActions {
    pub fn new(customers: Arc<dyn CustomerStore>, views: Arc<dyn ViewCache>) -> Self {
        Self {
            customers,
            views,
            schema: CustomerSchema,
        }
    }

    /// Validate and create a customer, then send the caller to the customer
    /// listing. Store failures stop the flow here, unlike invoice creation.
    pub async fn create_customer(
        &self,
        _prev: &FormState,
        fields: &FormFields,
    ) -> CreateCustomerOutcome {
        let draft = match self.schema.validate(fields) {
            Ok(draft) => draft,
            Err(errors) => {
                return CreateCustomerOutcome::Invalid(FormState::invalid(
                    errors,
                    CREATE_MISSING_FIELDS,
                ));
            }
        };

        let customer = Customer::from_draft(CustomerId::generate(), &draft);
        if let Err(err) = self.customers.insert(&customer).await {
            tracing::error!(error = %err, "failed to create customer");
            return CreateCustomerOutcome::Failed(FormState::failed(CREATE_STORE_FAILED));
        }
        tracing::debug!(customer_id = %customer.id, "customer created");

        self.views.invalidate(ViewPath::CustomerListing);
        CreateCustomerOutcome::Redirect(ViewPath::CustomerListing)
    }

    /// Validate and overwrite a customer's name and email.
    pub async fn update_customer(
        &self,
        id: &CustomerId,
        _prev: &FormState,
        fields: &FormFields,
    ) -> UpdateCustomerOutcome {
        let draft = match self.schema.validate(fields) {
            Ok(draft) => draft,
            Err(errors) => {
                return UpdateCustomerOutcome::Invalid(FormState::invalid(
                    errors,
                    UPDATE_MISSING_FIELDS,
                ));
            }
        };

        if self.customers.update(id, &draft).await.is_err() {
            return UpdateCustomerOutcome::Failed(FormState::failed(UPDATE_STORE_FAILED));
        }
        tracing::debug!(customer_id = %id, "customer updated");

        self.views.invalidate(ViewPath::CustomerListing);
        UpdateCustomerOutcome::Redirect(ViewPath::CustomerListing)
    }

    /// Delete a customer. Failures are logged and the caller gets nothing
    /// back.
    ///
    /// Deleting a customer refreshes the *invoice* listing: rows naming the
    /// deleted customer render differently once it is gone, while the
    /// customer listing is left to expire on its own.
    pub async fn delete_customer(&self, id: &CustomerId) {
        if let Err(err) = self.customers.delete(id).await {
            tracing::error!(error = %err, customer_id = %id, "failed to delete customer");
        }
        self.views.invalidate(ViewPath::InvoiceListing);
    }
}
