use serde::Deserialize;

use synergy_forms::FormFields;

// -------------------------
// Request DTOs
// -------------------------

/// An invoice form submission, exactly as posted.
///
/// Every member is optional and stringly typed: deciding what a missing or
/// malformed value means is validation's job, not deserialization's. Note
/// the form posts `project`, not `project_name`.
#[derive(Debug, Deserialize)]
pub struct InvoiceForm {
    #[serde(rename = "customerId")]
    pub customer_id: Option<String>,
    pub project: Option<String>,
    pub amount: Option<String>,
    pub remaining: Option<String>,
    pub progress: Option<String>,
    pub date: Option<String>,
    pub status: Option<String>,
}

impl InvoiceForm {
    /// Keep only the fields that were actually submitted.
    pub fn into_fields(self) -> FormFields {
        let mut fields = FormFields::new();
        if let Some(value) = self.customer_id {
            fields.insert("customerId", value);
        }
        if let Some(value) = self.project {
            fields.insert("project", value);
        }
        if let Some(value) = self.amount {
            fields.insert("amount", value);
        }
        if let Some(value) = self.remaining {
            fields.insert("remaining", value);
        }
        if let Some(value) = self.progress {
            fields.insert("progress", value);
        }
        if let Some(value) = self.date {
            fields.insert("date", value);
        }
        if let Some(value) = self.status {
            fields.insert("status", value);
        }
        fields
    }
}

/// A customer form submission.
#[derive(Debug, Deserialize)]
pub struct CustomerForm {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl CustomerForm {
    pub fn into_fields(self) -> FormFields {
        let mut fields = FormFields::new();
        if let Some(value) = self.name {
            fields.insert("name", value);
        }
        if let Some(value) = self.email {
            fields.insert("email", value);
        }
        fields
    }
}

/// A sign-in form submission.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl LoginForm {
    pub fn into_fields(self) -> FormFields {
        let mut fields = FormFields::new();
        if let Some(value) = self.email {
            fields.insert("email", value);
        }
        if let Some(value) = self.password {
            fields.insert("password", value);
        }
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn omitted_members_stay_out_of_the_field_map() {
        let form: InvoiceForm =
            serde_json::from_value(serde_json::json!({ "customerId": "c1", "amount": "50.00" }))
                .unwrap();
        let fields = form.into_fields();
        assert_eq!(fields.get("customerId"), Some("c1"));
        assert_eq!(fields.get("amount"), Some("50.00"));
        assert_eq!(fields.get("project"), None);
        assert_eq!(fields.get("status"), None);
    }

    #[test]
    fn camel_cased_customer_id_is_accepted() {
        let form: InvoiceForm =
            serde_json::from_value(serde_json::json!({ "customerId": "c1" })).unwrap();
        assert_eq!(form.customer_id.as_deref(), Some("c1"));
    }
}
