//! Admin session middleware.
//!
//! Guards every mutating route: the session is validated before the request
//! reaches the handler, so a rejected caller never triggers a side effect.

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::api::AppState;
use crate::domain::Role;
use crate::errors::AppError;
use crate::services::AuthResult;

/// Authenticated administrator extracted from the session token
#[derive(Clone, Debug)]
pub struct CurrentAdmin {
    pub subject: String,
    pub role: Role,
}

/// Session middleware for mutating routes.
///
/// Runs the authorization check fresh for every request and injects the
/// [`CurrentAdmin`] into the request extensions on success. Missing,
/// forged and expired credentials all produce the same `401`.
pub async fn admin_session_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let authorization = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    match state.auth_service.authorize(authorization) {
        AuthResult::Authorized(claims) => {
            request.extensions_mut().insert(CurrentAdmin {
                subject: claims.sub,
                role: claims.role,
            });
            Ok(next.run(request).await)
        }
        AuthResult::Rejected(reason) => {
            tracing::debug!(
                reason = ?reason,
                method = %request.method(),
                path = %request.uri().path(),
                "Rejected unauthenticated mutation"
            );
            Err(AppError::Unauthorized)
        }
    }
}
