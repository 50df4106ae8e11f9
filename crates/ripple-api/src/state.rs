//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::PgPool;

use ripple_auth::{AccessGate, PasswordHasher, SessionRefresher, TokenIssuer, TokenKeys, TokenVerifier};
use ripple_core::config::AppConfig;
use ripple_core::traits::{Clock, IdentityStore};
use ripple_database::repositories::{
    ExperienceRepository, FollowRepository, UserRepository, VideoRepository,
};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// PostgreSQL connection pool
    pub db_pool: PgPool,

    // ── Auth ─────────────────────────────────────────────────
    /// Mints token pairs on signup and login
    pub token_issuer: Arc<TokenIssuer>,
    /// Bearer-token check for protected routes
    pub access_gate: Arc<AccessGate>,
    /// Refresh-token exchange
    pub session_refresher: Arc<SessionRefresher>,
    /// Password hasher (Argon2)
    pub password_hasher: Arc<PasswordHasher>,

    // ── Repositories ─────────────────────────────────────────
    /// User repository
    pub user_repo: Arc<UserRepository>,
    /// Experience repository
    pub experience_repo: Arc<ExperienceRepository>,
    /// Video repository
    pub video_repo: Arc<VideoRepository>,
    /// Follow repository
    pub follow_repo: Arc<FollowRepository>,
}

impl AppState {
    /// Wires repositories and the auth components over `db_pool`.
    pub fn new(config: AppConfig, db_pool: PgPool, clock: Arc<dyn Clock>) -> Self {
        let user_repo = Arc::new(UserRepository::new(db_pool.clone()));
        let experience_repo = Arc::new(ExperienceRepository::new(db_pool.clone()));
        let video_repo = Arc::new(VideoRepository::new(db_pool.clone()));
        let follow_repo = Arc::new(FollowRepository::new(db_pool.clone()));

        let keys = Arc::new(TokenKeys::from_config(&config.auth));
        let token_issuer = Arc::new(TokenIssuer::new(&config.auth, Arc::clone(&keys), Arc::clone(&clock)));
        let verifier = Arc::new(TokenVerifier::new(keys, clock));
        let access_gate = Arc::new(AccessGate::new(Arc::clone(&verifier)));
        let session_refresher = Arc::new(SessionRefresher::new(
            verifier,
            Arc::clone(&token_issuer),
            Arc::clone(&user_repo) as Arc<dyn IdentityStore>,
        ));

        Self {
            config: Arc::new(config),
            db_pool,
            token_issuer,
            access_gate,
            session_refresher,
            password_hasher: Arc::new(PasswordHasher::new()),
            user_repo,
            experience_repo,
            video_repo,
            follow_repo,
        }
    }
}
