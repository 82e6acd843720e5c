use std::sync::Arc;

use axum::extract::Extension;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;

use synergy_auth::GateOutcome;

use crate::app::dto::LoginForm;
use crate::app::errors::json_error;
use crate::app::services::AppServices;

/// Exchanges operator credentials for a session cookie.
pub async fn login(
    Extension(services): Extension<Arc<AppServices>>,
    Json(form): Json<LoginForm>,
) -> axum::response::Response {
    let fields = form.into_fields();
    match services.gate.authenticate(None, &fields).await {
        Ok(GateOutcome::SignedIn) => {
            let token = services.sessions.issue();
            (
                StatusCode::SEE_OTHER,
                [
                    (header::LOCATION, "/dashboard".to_string()),
                    (
                        header::SET_COOKIE,
                        format!("session={token}; Path=/; HttpOnly"),
                    ),
                ],
            )
                .into_response()
        }
        Ok(GateOutcome::Denied(denied)) => {
            json_error(StatusCode::UNAUTHORIZED, "sign_in_denied", denied.to_string())
        }
        Err(err) => {
            tracing::error!(error = %err, "sign-in failed");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "sign_in_error", "sign-in failed")
        }
    }
}
