use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::Response,
};

use crate::session::SessionRegistry;

#[derive(Clone)]
pub struct SessionState {
    pub sessions: Arc<SessionRegistry>,
}

/// Reject requests that carry no live session.
///
/// The token is accepted from an `Authorization: Bearer` header or from
/// the `session` cookie the login handler sets.
pub async fn session_middleware(
    State(state): State<SessionState>,
    req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Result<Response, StatusCode> {
    let token = extract_token(req.headers())?;

    if !state.sessions.is_valid(token) {
        return Err(StatusCode::UNAUTHORIZED);
    }

    Ok(next.run(req).await)
}

fn extract_token(headers: &HeaderMap) -> Result<&str, StatusCode> {
    if let Some(header) = headers.get(axum::http::header::AUTHORIZATION) {
        let header = header.to_str().map_err(|_| StatusCode::UNAUTHORIZED)?;

        let token = header
            .strip_prefix("Bearer ")
            .ok_or(StatusCode::UNAUTHORIZED)?
            .trim();
        if token.is_empty() {
            return Err(StatusCode::UNAUTHORIZED);
        }

        return Ok(token);
    }

    session_cookie(headers).ok_or(StatusCode::UNAUTHORIZED)
}

fn session_cookie(headers: &HeaderMap) -> Option<&str> {
    let cookies = headers.get(axum::http::header::COOKIE)?.to_str().ok()?;
    cookies
        .split(';')
        .find_map(|pair| pair.trim().strip_prefix("session="))
        .filter(|token| !token.is_empty())
}
