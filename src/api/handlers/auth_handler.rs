//! Admin authentication handlers.

use axum::{
    extract::State,
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::Role;
use crate::errors::AppResult;
use crate::services::{AuthResult, Claims};

/// Admin login request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    /// The shared admin password
    #[schema(example = "admin123")]
    pub password: Option<String>,
}

/// Identity attached to a successful login
#[derive(Debug, Serialize, ToSchema)]
pub struct SessionUser {
    #[schema(example = "admin")]
    pub id: String,
    pub role: Role,
}

/// Successful login response
#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub success: bool,
    /// Session token for the `Authorization: Bearer` header
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub token: String,
    pub message: String,
    pub user: SessionUser,
}

/// Session validation response
#[derive(Debug, Serialize, ToSchema)]
pub struct ValidateResponse {
    pub authenticated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<Claims>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Create admin authentication routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/validate", get(validate))
}

/// Exchange the admin password for a session token
#[utoipa::path(
    post,
    path = "/api/admin/login",
    tag = "Admin",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 400, description = "Password missing"),
        (status = 401, description = "Incorrect password")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let password = payload.password.unwrap_or_default();
    let session = state.auth_service.login(&password)?;

    Ok(Json(LoginResponse {
        success: true,
        token: session.token,
        message: "Login successful".to_string(),
        user: SessionUser {
            id: session.claims.sub,
            role: session.claims.role,
        },
    }))
}

/// Check whether the presented session token is still valid
#[utoipa::path(
    get,
    path = "/api/admin/validate",
    tag = "Admin",
    responses(
        (status = 200, description = "Session is valid", body = ValidateResponse),
        (status = 401, description = "Session missing, invalid or expired", body = ValidateResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn validate(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let authorization = headers.get(AUTHORIZATION).and_then(|h| h.to_str().ok());

    match state.auth_service.authorize(authorization) {
        AuthResult::Authorized(claims) => Json(ValidateResponse {
            authenticated: true,
            user: Some(claims),
            error: None,
        })
        .into_response(),
        AuthResult::Rejected(reason) => (
            StatusCode::UNAUTHORIZED,
            Json(ValidateResponse {
                authenticated: false,
                user: None,
                error: Some(reason.message().to_string()),
            }),
        )
            .into_response(),
    }
}
