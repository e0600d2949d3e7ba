//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::handlers::{auth_handler, player_handler};
use crate::domain::{Player, Role};
use crate::services::Claims;

/// OpenAPI documentation for the Cosmos Ranking API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Cosmos Ranking API",
        version = "0.1.0",
        description = "Community leaderboard with a password-gated admin session",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        // Admin session endpoints
        auth_handler::login,
        auth_handler::validate,
        // Player endpoints
        player_handler::list_players,
        player_handler::create_player,
        player_handler::delete_player_by_query,
        player_handler::delete_player,
    ),
    components(
        schemas(
            // Domain types
            Player,
            Role,
            Claims,
            // Admin types
            auth_handler::LoginRequest,
            auth_handler::LoginResponse,
            auth_handler::SessionUser,
            auth_handler::ValidateResponse,
            // Player handler types
            player_handler::CreatePlayerRequest,
            player_handler::PlayerListResponse,
            player_handler::PlayerCreatedResponse,
            player_handler::PlayerDeletedResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Admin", description = "Admin login and session validation"),
        (name = "Players", description = "Leaderboard players")
    )
)]
pub struct ApiDoc;

/// Security scheme modifier for the admin session token
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Session token obtained from /api/admin/login"))
                        .build(),
                ),
            );
        }
    }
}
