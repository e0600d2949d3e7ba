//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Authentication & Security
// =============================================================================

/// Session token lifetime in seconds (7 days)
pub const SESSION_TTL_SECONDS: i64 = 604_800;

/// Minimum JWT signing key length in bytes
pub const MIN_JWT_SECRET_LENGTH: usize = 32;

/// Authorization scheme word expected before the session token
pub const BEARER_SCHEME: &str = "Bearer";

/// Insecure development admin password, must be overridden in deployments
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

/// Insecure development signing key, must be overridden in deployments
pub const DEFAULT_JWT_SECRET: &str = "insecure-dev-signing-key-change-me-in-production";

// =============================================================================
// Roles
// =============================================================================

/// The single administrative identity
pub const ADMIN_SUBJECT: &str = "admin";

/// Administrator role carried in session claims
pub const ROLE_ADMIN: &str = "admin";

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 3000;

// =============================================================================
// Database
// =============================================================================

/// Default database connection URL (local SQLite file)
pub const DEFAULT_DATABASE_URL: &str = "sqlite://ranking.db?mode=rwc";

// =============================================================================
// Players
// =============================================================================

/// Tier assigned to newly registered players
pub const DEFAULT_TIER: &str = "UNRANKED";

/// Maximum accepted length of a Riot game name
pub const MAX_GAME_NAME_LENGTH: u64 = 64;

/// Maximum accepted length of a Riot tag line (including an optional `#`)
pub const MAX_TAG_LINE_LENGTH: u64 = 16;
