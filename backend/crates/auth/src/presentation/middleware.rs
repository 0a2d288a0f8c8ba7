//! Authorization Gate Middleware
//!
//! Runs before every handler body. Allow-listed paths pass untouched;
//! everything else must carry a valid bearer token. The gate owns the
//! unauthorized outcome and performs no business-logic side effects.

use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token::TokenService;

/// Gate middleware state
#[derive(Clone)]
pub struct AuthGateState {
    pub config: Arc<AuthConfig>,
    pub tokens: Arc<TokenService>,
}

/// Validated subject, stored in request extensions for downstream handlers
#[derive(Debug, Clone)]
pub struct AuthSubject(pub String);

/// Middleware that requires a valid bearer token outside the allow-list
///
/// Rejections are a bare 401 with an empty body: the cause (missing
/// header, bad signature, expiry) is deliberately not disclosed.
pub async fn require_auth(
    State(state): State<AuthGateState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response> {
    let path = req.uri().path();

    if state.config.allow_list.iter().any(|allowed| allowed == path) {
        return Ok(next.run(req).await);
    }

    let Some(token) = platform::bearer::extract_bearer(req.headers()) else {
        tracing::debug!(path = %path, "Rejected request without bearer token");
        return Err(StatusCode::UNAUTHORIZED.into_response());
    };

    match state.tokens.validate(&token) {
        Ok(claims) => {
            req.extensions_mut().insert(AuthSubject(claims.subject));
            Ok(next.run(req).await)
        }
        Err(e) => {
            tracing::debug!(path = %path, error = %e, "Rejected request with invalid token");
            Err(StatusCode::UNAUTHORIZED.into_response())
        }
    }
}
