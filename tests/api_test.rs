//! Integration tests for API endpoints.
//!
//! The router is driven in-process with `tower::ServiceExt::oneshot`. Auth
//! runs for real; players live in an in-memory fake so every test can see
//! exactly which side effects a request produced.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use chrono::{Duration, Utc};
use serde_json::{json, Value};
use tower::ServiceExt;

use cosmos_ranking::api::{create_router, AppState};
use cosmos_ranking::config::{Config, ADMIN_SUBJECT, DEFAULT_JWT_SECRET};
use cosmos_ranking::domain::{NewPlayer, Player, Role};
use cosmos_ranking::errors::{AppError, AppResult};
use cosmos_ranking::infra::{CannedGameData, Database, PlayerRepository};
use cosmos_ranking::services::{AdminAuthenticator, PlayerManager, TokenCodec};

const ADMIN_PASSWORD: &str = "admin123";

// =============================================================================
// In-memory player store
// =============================================================================

#[derive(Default)]
struct InMemoryPlayers {
    rows: Mutex<Vec<Player>>,
}

impl InMemoryPlayers {
    fn count(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

#[async_trait]
impl PlayerRepository for InMemoryPlayers {
    async fn list_ranked(&self) -> AppResult<Vec<Player>> {
        let mut rows = self.rows.lock().unwrap().clone();
        rows.sort_by(|a, b| b.league_points.cmp(&a.league_points).then(a.id.cmp(&b.id)));
        Ok(rows)
    }

    async fn find_by_name_tag(&self, game_name: &str, tag_line: &str) -> AppResult<Option<Player>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.game_name == game_name && p.tag_line == tag_line)
            .cloned())
    }

    async fn create(&self, player: NewPlayer) -> AppResult<Player> {
        let mut rows = self.rows.lock().unwrap();
        let now = Utc::now();
        let created = Player {
            id: rows.iter().map(|p| p.id).max().unwrap_or(0) + 1,
            game_name: player.game_name,
            tag_line: player.tag_line,
            puuid: player.puuid,
            tier: player.tier,
            rank: player.rank,
            league_points: player.league_points,
            wins: player.wins,
            losses: player.losses,
            created_at: now,
            updated_at: now,
        };
        rows.push(created.clone());
        Ok(created)
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|p| p.id != id);
        if rows.len() == before {
            return Err(AppError::NotFound);
        }
        Ok(())
    }

    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }
}

// =============================================================================
// Test Helpers
// =============================================================================

fn test_config() -> Config {
    Config::with_secrets(ADMIN_PASSWORD, DEFAULT_JWT_SECRET)
}

fn test_app() -> (Router, Arc<InMemoryPlayers>) {
    let players = Arc::new(InMemoryPlayers::default());
    let state = AppState::new(
        Arc::new(AdminAuthenticator::new(&test_config())),
        Arc::new(PlayerManager::new(players.clone(), Arc::new(CannedGameData))),
    );
    (create_router(state), players)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn json_request(method: Method, uri: &str, auth: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(value) = auth {
        builder = builder.header(header::AUTHORIZATION, value);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

fn bare_request(method: Method, uri: &str, auth: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(value) = auth {
        builder = builder.header(header::AUTHORIZATION, value);
    }
    builder.body(Body::empty()).unwrap()
}

async fn login(app: &Router) -> String {
    let (status, body) = send(
        app,
        json_request(
            Method::POST,
            "/api/admin/login",
            None,
            json!({ "password": ADMIN_PASSWORD }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body["token"].as_str().unwrap().to_string()
}

fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

fn new_player_body() -> Value {
    json!({ "gameName": "Rei da Baixada", "tagLine": "#MEC" })
}

// =============================================================================
// Login Tests
// =============================================================================

#[tokio::test]
async fn test_login_with_correct_password() {
    let (app, _) = test_app();
    let (status, body) = send(
        &app,
        json_request(
            Method::POST,
            "/api/admin/login",
            None,
            json!({ "password": ADMIN_PASSWORD }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["user"]["id"], ADMIN_SUBJECT);
    assert_eq!(body["user"]["role"], "admin");
    assert_eq!(body["token"].as_str().unwrap().split('.').count(), 3);
}

#[tokio::test]
async fn test_login_without_password() {
    let (app, _) = test_app();

    for payload in [json!({}), json!({ "password": "" })] {
        let (status, body) = send(
            &app,
            json_request(Method::POST, "/api/admin/login", None, payload),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "MISSING_PASSWORD");
    }
}

#[tokio::test]
async fn test_login_with_wrong_password() {
    let (app, _) = test_app();
    let (status, body) = send(
        &app,
        json_request(
            Method::POST,
            "/api/admin/login",
            None,
            json!({ "password": "admin1234" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Incorrect password");
    assert!(body.get("token").is_none());
}

#[tokio::test]
async fn test_login_with_malformed_body() {
    let (app, _) = test_app();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/admin/login")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{password"))
        .unwrap();

    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
}

// =============================================================================
// Session Validation Tests
// =============================================================================

#[tokio::test]
async fn test_validate_fresh_session() {
    let (app, _) = test_app();
    let token = login(&app).await;

    let (status, body) = send(
        &app,
        bare_request(Method::GET, "/api/admin/validate", Some(&bearer(&token))),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["authenticated"], true);
    assert_eq!(body["user"]["sub"], ADMIN_SUBJECT);
    assert_eq!(body["user"]["role"], "admin");
}

#[tokio::test]
async fn test_validate_reports_missing_and_invalid() {
    let (app, _) = test_app();

    let (status, body) = send(&app, bare_request(Method::GET, "/api/admin/validate", None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["authenticated"], false);
    assert_eq!(body["error"], "Token not provided");

    let (status, body) = send(
        &app,
        bare_request(Method::GET, "/api/admin/validate", Some("Bearer not.a.token")),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Invalid or expired token");
}

#[tokio::test]
async fn test_validate_rejects_wrong_scheme() {
    let (app, _) = test_app();
    let token = login(&app).await;

    for header_value in [
        format!("Basic {}", token),
        format!("bearer {}", token),
        format!("Bearer  {}", token),
        token.clone(),
    ] {
        let (status, _) = send(
            &app,
            bare_request(Method::GET, "/api/admin/validate", Some(&header_value)),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "accepted {:?}", header_value);
    }
}

// =============================================================================
// Public Read Tests
// =============================================================================

#[tokio::test]
async fn test_list_players_is_public() {
    let (app, _) = test_app();
    let (status, body) = send(&app, bare_request(Method::GET, "/api/players", None)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["players"], json!([]));
    assert_eq!(body["mockMode"], true);
}

#[tokio::test]
async fn test_list_players_ignores_bad_credentials() {
    let (app, _) = test_app();
    let (status, _) = send(
        &app,
        bare_request(Method::GET, "/api/players", Some("Bearer garbage")),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

// =============================================================================
// Guarded Mutation Tests
// =============================================================================

#[tokio::test]
async fn test_create_player_without_credentials() {
    let (app, players) = test_app();
    let (status, body) = send(
        &app,
        json_request(Method::POST, "/api/players", None, new_player_body()),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "UNAUTHORIZED");
    assert_eq!(players.count(), 0);
}

#[tokio::test]
async fn test_create_player_with_forged_token() {
    let (app, players) = test_app();
    let forged = TokenCodec::new(b"another-signing-key-that-is-32-bytes!!")
        .issue(ADMIN_SUBJECT, Role::Admin)
        .unwrap();

    let (status, _) = send(
        &app,
        json_request(
            Method::POST,
            "/api/players",
            Some(&bearer(&forged.token)),
            new_player_body(),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(players.count(), 0);
}

#[tokio::test]
async fn test_create_player_with_expired_token() {
    let (app, players) = test_app();
    let expired = TokenCodec::from_config(&test_config())
        .issue_at(ADMIN_SUBJECT, Role::Admin, Utc::now() - Duration::days(8))
        .unwrap();

    let (status, _) = send(
        &app,
        json_request(
            Method::POST,
            "/api/players",
            Some(&bearer(&expired.token)),
            new_player_body(),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(players.count(), 0);
}

#[tokio::test]
async fn test_gate_runs_before_body_validation() {
    let (app, _) = test_app();
    let (status, _) = send(
        &app,
        json_request(Method::POST, "/api/players", None, json!({ "gameName": "" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_create_player_with_session() {
    let (app, players) = test_app();
    let auth = bearer(&login(&app).await);

    let (status, body) = send(
        &app,
        json_request(Method::POST, "/api/players", Some(&auth), new_player_body()),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["playerId"], 1);
    assert_eq!(body["mockMode"], true);

    let (_, listed) = send(&app, bare_request(Method::GET, "/api/players", None)).await;
    assert_eq!(listed["players"][0]["gameName"], "Rei da Baixada");
    assert_eq!(listed["players"][0]["tagLine"], "MEC");
    assert_eq!(listed["players"][0]["tier"], "UNRANKED");
    assert_eq!(players.count(), 1);
}

#[tokio::test]
async fn test_create_duplicate_player_conflicts() {
    let (app, players) = test_app();
    let auth = bearer(&login(&app).await);

    let first = json_request(Method::POST, "/api/players", Some(&auth), new_player_body());
    assert_eq!(send(&app, first).await.0, StatusCode::OK);

    let duplicate = json_request(
        Method::POST,
        "/api/players",
        Some(&auth),
        json!({ "gameName": "Rei da Baixada", "tagLine": "MEC" }),
    );
    let (status, body) = send(&app, duplicate).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "CONFLICT");
    assert_eq!(players.count(), 1);
}

#[tokio::test]
async fn test_create_player_requires_fields() {
    let (app, players) = test_app();
    let auth = bearer(&login(&app).await);

    let (status, body) = send(
        &app,
        json_request(
            Method::POST,
            "/api/players",
            Some(&auth),
            json!({ "gameName": "", "tagLine": "MEC" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert_eq!(players.count(), 0);
}

#[tokio::test]
async fn test_delete_player_lifecycle() {
    let (app, players) = test_app();
    let auth = bearer(&login(&app).await);
    send(
        &app,
        json_request(Method::POST, "/api/players", Some(&auth), new_player_body()),
    )
    .await;

    let (status, _) = send(&app, bare_request(Method::DELETE, "/api/players?id=1", None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(players.count(), 1);

    let (status, body) = send(
        &app,
        bare_request(Method::DELETE, "/api/players?id=1", Some(&auth)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(players.count(), 0);

    let (status, _) = send(
        &app,
        bare_request(Method::DELETE, "/api/players/1", Some(&auth)),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_player_bad_id() {
    let (app, _) = test_app();
    let auth = bearer(&login(&app).await);

    for uri in ["/api/players", "/api/players?id=", "/api/players?id=abc", "/api/players/abc"] {
        let (status, _) = send(&app, bare_request(Method::DELETE, uri, Some(&auth))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
    }
}

#[tokio::test]
async fn test_delete_without_session_reveals_nothing() {
    let (app, _) = test_app();

    // Unknown and malformed ids answer 401 alike when the caller is not an admin
    for uri in ["/api/players?id=999", "/api/players?id=abc", "/api/players/999"] {
        let (status, body) = send(&app, bare_request(Method::DELETE, uri, None)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{}", uri);
        assert_eq!(body["code"], "UNAUTHORIZED");
    }
}

#[tokio::test]
async fn test_known_weak_password_scenario() {
    let (app, players) = test_app();
    let auth = bearer(&login(&app).await);
    send(
        &app,
        json_request(Method::POST, "/api/players", Some(&auth), new_player_body()),
    )
    .await;

    let (status, _) = send(
        &app,
        bare_request(Method::DELETE, "/api/players?id=1", Some("Bearer wrong")),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (_, listed) = send(&app, bare_request(Method::GET, "/api/players", None)).await;
    assert_eq!(listed["players"].as_array().unwrap().len(), 1);
    assert_eq!(players.count(), 1);
}

// =============================================================================
// Health & Database-backed Tests
// =============================================================================

#[tokio::test]
async fn test_health_endpoint() {
    let (app, _) = test_app();
    let (status, body) = send(&app, bare_request(Method::GET, "/health", None)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["services"]["database"]["status"], "healthy");
}

#[tokio::test]
async fn test_full_stack_against_sqlite() {
    let config = test_config().with_database_url("sqlite::memory:");
    let database = Database::connect(&config).await.unwrap();
    let app = create_router(AppState::from_config(&database, &config));
    let auth = bearer(&login(&app).await);

    let (status, created) = send(
        &app,
        json_request(Method::POST, "/api/players", Some(&auth), new_player_body()),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(
        &app,
        json_request(Method::POST, "/api/players", Some(&auth), new_player_body()),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let id = created["playerId"].as_i64().unwrap();
    let (status, _) = send(
        &app,
        bare_request(Method::DELETE, &format!("/api/players/{}", id), Some(&auth)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, listed) = send(&app, bare_request(Method::GET, "/api/players", None)).await;
    assert_eq!(listed["players"], json!([]));
}
