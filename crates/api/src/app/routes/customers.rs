use std::sync::Arc;

use axum::extract::{Extension, Path};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};

use synergy_core::CustomerId;
use synergy_forms::FormState;
use synergy_infra::{CreateCustomerOutcome, UpdateCustomerOutcome, ViewPath};

use crate::app::dto;
use crate::app::errors::{json_error, see_other};
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_customer).get(list_customers))
        .route("/:id", post(update_customer))
        .route("/:id/delete", post(delete_customer))
}

pub async fn create_customer(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::CustomerForm>,
) -> axum::response::Response {
    let fields = body.into_fields();
    match services
        .customer_actions
        .create_customer(&FormState::empty(), &fields)
        .await
    {
        CreateCustomerOutcome::Invalid(state) => {
            (StatusCode::BAD_REQUEST, Json(state)).into_response()
        }
        CreateCustomerOutcome::Failed(state) => {
            (StatusCode::INTERNAL_SERVER_ERROR, Json(state)).into_response()
        }
        CreateCustomerOutcome::Redirect(view) => see_other(view),
    }
}

pub async fn update_customer(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(body): Json<dto::CustomerForm>,
) -> axum::response::Response {
    let fields = body.into_fields();
    match services
        .customer_actions
        .update_customer(&CustomerId::from(id), &FormState::empty(), &fields)
        .await
    {
        UpdateCustomerOutcome::Invalid(state) => {
            (StatusCode::BAD_REQUEST, Json(state)).into_response()
        }
        UpdateCustomerOutcome::Failed(state) => {
            (StatusCode::INTERNAL_SERVER_ERROR, Json(state)).into_response()
        }
        UpdateCustomerOutcome::Redirect(view) => see_other(view),
    }
}

pub async fn delete_customer(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> StatusCode {
    services
        .customer_actions
        .delete_customer(&CustomerId::from(id))
        .await;
    StatusCode::NO_CONTENT
}

pub async fn list_customers(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    if let Some(cached) = services.listings.get(ViewPath::CustomerListing) {
        return (StatusCode::OK, Json(cached)).into_response();
    }

    match services.customers.list().await {
        Ok(rows) => {
            let body = serde_json::json!({ "items": rows });
            services.listings.put(ViewPath::CustomerListing, body.clone());
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(err) => json_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "store_error",
            err.to_string(),
        ),
    }
}
