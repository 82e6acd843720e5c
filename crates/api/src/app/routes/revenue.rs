use std::sync::Arc;

use axum::extract::Extension;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::app::errors::json_error;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new().route("/", get(list_revenue))
}

/// Twelve buckets in calendar order, read straight from the store.
pub async fn list_revenue(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.revenue.list_buckets().await {
        Ok(buckets) => {
            let body = serde_json::json!({ "items": buckets });
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(err) => json_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "store_error",
            err.to_string(),
        ),
    }
}
