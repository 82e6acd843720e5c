use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use serde_json::json;

use synergy_infra::ViewPath;

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

/// The navigation a successful mutation answers with.
pub fn see_other(view: ViewPath) -> axum::response::Response {
    (StatusCode::SEE_OTHER, [(header::LOCATION, view.as_str())]).into_response()
}
