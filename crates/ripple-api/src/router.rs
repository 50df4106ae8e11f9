//! Route definitions for the Ripple HTTP API.
//!
//! Public routes are grouped by domain. Protected routes share one router
//! that carries the access gate as a `route_layer`, so the gate runs only
//! for routes that matched and unmatched paths still reach the 404
//! handler. Parameters sharing a position must share a name.
//!
//! The gate also wraps the method-not-allowed fallback of a protected path,
//! so an unsupported method without a token answers 401 before 405.

use std::sync::Arc;

use axum::{
    Router, middleware as axum_middleware,
    routing::{delete, get, patch, post},
};

use ripple_auth::AccessGate;

use crate::handlers;
use crate::middleware::auth::require_auth;
use crate::state::AppState;

/// Build the API router with all routes.
pub fn build_router(state: AppState) -> Router {
    let gate = Arc::clone(&state.access_gate);

    let api_routes = Router::new()
        .merge(user_routes())
        .merge(experience_routes())
        .merge(video_routes())
        .merge(follow_routes())
        .merge(protected_routes(gate));

    Router::new()
        .nest("/api", api_routes)
        .route("/health", get(handlers::health::health))
        .fallback(handlers::health::not_found)
        .with_state(state)
}

/// Everything that requires a valid access token.
fn protected_routes(gate: Arc<AccessGate>) -> Router<AppState> {
    Router::new()
        .route(
            "/users/me",
            get(handlers::users::me).patch(handlers::users::update_me),
        )
        .route("/experiences", post(handlers::experiences::create_experience))
        .route(
            "/experiences/{id}",
            patch(handlers::experiences::update_experience)
                .delete(handlers::experiences::delete_experience),
        )
        .route("/videos", post(handlers::videos::create_video))
        .route(
            "/videos/{id}",
            patch(handlers::videos::update_video).delete(handlers::videos::delete_video),
        )
        .route("/follows", post(handlers::follows::follow_user))
        .route(
            "/follows/{user_id}/{following_id}",
            delete(handlers::follows::unfollow_user),
        )
        .route_layer(axum_middleware::from_fn_with_state(gate, require_auth))
}

/// Public account endpoints
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/signup", post(handlers::users::signup))
        .route("/users/login", post(handlers::users::login))
        .route("/users/refresh", post(handlers::users::refresh))
        .route("/users/logout", post(handlers::users::logout))
        .route("/users/{id_or_handle}", get(handlers::users::get_user))
}

/// Public experience reads
fn experience_routes() -> Router<AppState> {
    Router::new()
        .route("/experiences", get(handlers::experiences::list_experiences))
        .route("/experiences/{id}", get(handlers::experiences::get_experience))
        .route(
            "/experiences/creator/{creator_id}",
            get(handlers::experiences::list_by_creator),
        )
}

/// Public video reads and the view counter
fn video_routes() -> Router<AppState> {
    Router::new()
        .route("/videos/{id}", get(handlers::videos::get_video))
        .route("/videos/{id}/views", patch(handlers::videos::increment_views))
        .route(
            "/videos/creator/{creator_id}",
            get(handlers::videos::list_by_creator),
        )
}

/// Public follow-graph reads
fn follow_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/follows/{user_id}/is-following/{following_id}",
            get(handlers::follows::is_following),
        )
        .route(
            "/follows/{user_id}/followers",
            get(handlers::follows::list_followers),
        )
        .route(
            "/follows/{user_id}/following",
            get(handlers::follows::list_following),
        )
}
