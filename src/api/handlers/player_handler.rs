//! Player leaderboard handlers.
//!
//! Listing is public. Creation and deletion are mounted behind the admin
//! session middleware by [`player_routes`].

use axum::{
    extract::{Path, Query, State},
    middleware,
    response::Json,
    routing::{delete, get},
    Extension, Router,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::{admin_session_middleware, CurrentAdmin};
use crate::api::AppState;
use crate::config::{MAX_GAME_NAME_LENGTH, MAX_TAG_LINE_LENGTH};
use crate::domain::Player;
use crate::errors::{AppError, AppResult};

/// Player registration request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlayerRequest {
    /// Riot game name
    #[validate(length(min = 1, max = 64, message = "gameName is required"))]
    #[schema(example = "Rei da Baixada")]
    pub game_name: String,
    /// Riot tag line, with or without the leading `#`
    #[validate(length(min = 1, max = 16, message = "tagLine is required"))]
    #[schema(example = "#MEC")]
    pub tag_line: String,
}

/// Query form of the delete request (`?id=`)
#[derive(Debug, Deserialize, IntoParams)]
pub struct DeletePlayerQuery {
    /// Player identifier
    pub id: Option<String>,
}

/// Public ranking response
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlayerListResponse {
    pub players: Vec<Player>,
    pub mock_mode: bool,
}

/// Player registration response
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlayerCreatedResponse {
    pub success: bool,
    pub player_id: i32,
    pub message: String,
    pub mock_mode: bool,
}

/// Player removal response
#[derive(Debug, Serialize, ToSchema)]
pub struct PlayerDeletedResponse {
    pub success: bool,
    pub message: String,
}

/// Create player routes: public reads, guarded writes
pub fn player_routes(state: AppState) -> Router<AppState> {
    let guarded = Router::new()
        .route("/", delete(delete_player_by_query).post(create_player))
        .route("/:id", delete(delete_player))
        .route_layer(middleware::from_fn_with_state(
            state,
            admin_session_middleware,
        ));

    Router::new().route("/", get(list_players)).merge(guarded)
}

/// Public ranking, highest league points first
#[utoipa::path(
    get,
    path = "/api/players",
    tag = "Players",
    responses(
        (status = 200, description = "Ranked players", body = PlayerListResponse)
    )
)]
pub async fn list_players(State(state): State<AppState>) -> AppResult<Json<PlayerListResponse>> {
    let players = state.player_service.list_players().await?;

    Ok(Json(PlayerListResponse {
        players,
        mock_mode: state.player_service.mock_mode(),
    }))
}

/// Register a player (admin only)
#[utoipa::path(
    post,
    path = "/api/players",
    tag = "Players",
    request_body = CreatePlayerRequest,
    responses(
        (status = 200, description = "Player added", body = PlayerCreatedResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Not authenticated"),
        (status = 409, description = "Player already registered")
    ),
    security(("bearer_auth" = []))
)]
pub async fn create_player(
    State(state): State<AppState>,
    Extension(admin): Extension<CurrentAdmin>,
    ValidatedJson(payload): ValidatedJson<CreatePlayerRequest>,
) -> AppResult<Json<PlayerCreatedResponse>> {
    let player = state
        .player_service
        .add_player(payload.game_name, payload.tag_line)
        .await?;

    tracing::info!(
        admin = %admin.subject,
        player_id = player.id,
        game_name = %player.game_name,
        tag_line = %player.tag_line,
        "Player added"
    );

    Ok(Json(PlayerCreatedResponse {
        success: true,
        player_id: player.id,
        message: "Player added".to_string(),
        mock_mode: state.player_service.mock_mode(),
    }))
}

/// Remove a player by `?id=` (admin only)
#[utoipa::path(
    delete,
    path = "/api/players",
    tag = "Players",
    params(DeletePlayerQuery),
    responses(
        (status = 200, description = "Player removed", body = PlayerDeletedResponse),
        (status = 400, description = "Missing or malformed id"),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Player not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn delete_player_by_query(
    State(state): State<AppState>,
    Extension(admin): Extension<CurrentAdmin>,
    Query(query): Query<DeletePlayerQuery>,
) -> AppResult<Json<PlayerDeletedResponse>> {
    let raw = query
        .id
        .filter(|id| !id.is_empty())
        .ok_or_else(|| AppError::bad_request("id is required"))?;

    remove_player(&state, &admin, parse_player_id(&raw)?).await
}

/// Remove a player by path id (admin only)
#[utoipa::path(
    delete,
    path = "/api/players/{id}",
    tag = "Players",
    params(("id" = String, Path, description = "Player identifier")),
    responses(
        (status = 200, description = "Player removed", body = PlayerDeletedResponse),
        (status = 400, description = "Malformed id"),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Player not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn delete_player(
    State(state): State<AppState>,
    Extension(admin): Extension<CurrentAdmin>,
    Path(raw): Path<String>,
) -> AppResult<Json<PlayerDeletedResponse>> {
    remove_player(&state, &admin, parse_player_id(&raw)?).await
}

async fn remove_player(
    state: &AppState,
    admin: &CurrentAdmin,
    id: i32,
) -> AppResult<Json<PlayerDeletedResponse>> {
    state.player_service.delete_player(id).await?;
    tracing::info!(admin = %admin.subject, player_id = id, "Player removed");

    Ok(Json(PlayerDeletedResponse {
        success: true,
        message: "Player removed".to_string(),
    }))
}

fn parse_player_id(raw: &str) -> AppResult<i32> {
    raw.parse()
        .map_err(|_| AppError::bad_request(format!("invalid player id: {}", raw)))
}
