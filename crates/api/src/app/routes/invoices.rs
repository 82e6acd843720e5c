use std::sync::Arc;

use axum::extract::{Extension, Path};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};

use synergy_core::InvoiceId;
use synergy_forms::FormState;
use synergy_infra::{CreateInvoiceOutcome, UpdateInvoiceOutcome, ViewPath};

use crate::app::dto;
use crate::app::errors::{json_error, see_other};
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_invoice).get(list_invoices))
        .route("/:id", post(update_invoice))
        .route("/:id/delete", post(delete_invoice))
}

pub async fn create_invoice(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::InvoiceForm>,
) -> axum::response::Response {
    let fields = body.into_fields();
    match services
        .invoice_actions
        .create_invoice(&FormState::empty(), &fields)
        .await
    {
        CreateInvoiceOutcome::Invalid(state) => {
            (StatusCode::BAD_REQUEST, Json(state)).into_response()
        }
        CreateInvoiceOutcome::Redirect(view) => see_other(view),
    }
}

pub async fn update_invoice(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(body): Json<dto::InvoiceForm>,
) -> axum::response::Response {
    let fields = body.into_fields();
    match services
        .invoice_actions
        .update_invoice(&InvoiceId::from(id), &FormState::empty(), &fields)
        .await
    {
        UpdateInvoiceOutcome::Invalid(state) => {
            (StatusCode::BAD_REQUEST, Json(state)).into_response()
        }
        UpdateInvoiceOutcome::Failed(state) => {
            (StatusCode::INTERNAL_SERVER_ERROR, Json(state)).into_response()
        }
        UpdateInvoiceOutcome::Redirect(view) => see_other(view),
    }
}

pub async fn delete_invoice(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> StatusCode {
    services
        .invoice_actions
        .delete_invoice(&InvoiceId::from(id))
        .await;
    StatusCode::NO_CONTENT
}

/// The invoice listing, served from the render cache when a mutation has not
/// invalidated it since the last read.
pub async fn list_invoices(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    if let Some(cached) = services.listings.get(ViewPath::InvoiceListing) {
        return (StatusCode::OK, Json(cached)).into_response();
    }

    match services.invoices.list().await {
        Ok(rows) => {
            let body = serde_json::json!({ "items": rows });
            services.listings.put(ViewPath::InvoiceListing, body.clone());
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(err) => json_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "store_error",
            err.to_string(),
        ),
    }
}
