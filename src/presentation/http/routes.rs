//! Route Configuration
//!
//! Configures all HTTP routes for the API: the versioned REST surface,
//! the GraphQL endpoint, health checks, metrics, Swagger UI, and the
//! static front-end with its redirect fallback.

use axum::{
    extract::State,
    handler::HandlerWithoutStateExt,
    middleware,
    response::{IntoResponse, Redirect},
    routing::{delete, get, patch, post},
    Extension, Router,
};
use tower_http::services::ServeDir;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers;
use crate::infrastructure::metrics;
use crate::presentation::graphql;
use crate::presentation::middleware::{auth_middleware, track_metrics};
use crate::presentation::openapi::ApiDoc;
use crate::startup::AppState;

/// Create the main API router
pub fn create_router(state: AppState) -> Router {
    let schema = graphql::create_schema(state.db.clone());

    Router::new()
        .nest("/api/v1", api_routes(state.clone()))
        // GraphQL endpoint with GraphiQL IDE on GET
        .route(
            "/graphql",
            get(graphql::graphiql).post(graphql::graphql_handler),
        )
        .route("/graphiql", get(graphql::graphiql))
        // Health check endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/health/live", get(handlers::health::liveness))
        .route("/health/ready", get(handlers::health::readiness))
        // Prometheus metrics endpoint
        .route("/metrics", get(metrics_handler))
        // Swagger UI mounted at /api, document at /api-docs/openapi.json
        .merge(SwaggerUi::new("/api").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Bundled front-end; unmatched routes redirect to the app root
        .fallback_service(
            ServeDir::new(&state.settings.server.static_dir)
                .not_found_service(redirect_to_root.into_service()),
        )
        .layer(Extension(schema))
        .layer(middleware::from_fn(track_metrics))
        .with_state(state)
}

/// Route-not-found handler: send browsers back to the app root
/// instead of returning a 404 body.
async fn redirect_to_root() -> Redirect {
    Redirect::to("/")
}

/// Prometheus metrics endpoint handler
async fn metrics_handler(State(state): State<AppState>) -> impl IntoResponse {
    let size = state.db.size();
    let idle = state.db.num_idle() as u32;
    metrics::update_db_pool_stats(idle, size.saturating_sub(idle), state.settings.database.max_connections);

    let metrics = metrics::gather_metrics();
    (
        [(
            axum::http::header::CONTENT_TYPE,
            "text/plain; version=0.0.4; charset=utf-8",
        )],
        metrics,
    )
}

/// API v1 routes
fn api_routes(state: AppState) -> Router<AppState> {
    Router::new()
        // Public routes
        .nest("/auth", auth_routes())
        // Protected routes (require authentication)
        .nest("/users", user_routes(state.clone()))
        .nest("/characters", character_routes(state.clone()))
        .nest("/ability-scores", ability_score_routes(state.clone()))
        .nest("/spells", spell_routes(state))
}

/// Authentication routes (public)
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(handlers::auth::register))
        .route("/login", post(handlers::auth::login))
        .route("/refresh", post(handlers::auth::refresh_token))
        .route("/logout", post(handlers::auth::logout))
}

/// User routes (protected)
fn user_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/@me", get(handlers::user::get_current_user))
        .route("/@me", patch(handlers::user::update_current_user))
        .route("/@me", delete(handlers::user::delete_current_user))
        .route("/{user_id}", get(handlers::user::get_user))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}

/// Character routes (protected)
fn character_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::character::get_my_characters))
        .route("/", post(handlers::character::create_character))
        .route("/{character_id}", get(handlers::character::get_character))
        .route(
            "/{character_id}",
            patch(handlers::character::update_character),
        )
        .route(
            "/{character_id}",
            delete(handlers::character::delete_character),
        )
        .route(
            "/{character_id}/ability-scores",
            get(handlers::ability_score::get_character_ability_scores),
        )
        .route(
            "/{character_id}/ability-scores",
            post(handlers::ability_score::create_ability_score),
        )
        .route(
            "/{character_id}/spells",
            get(handlers::spell::get_character_spells),
        )
        .route(
            "/{character_id}/spells",
            post(handlers::spell::create_spell),
        )
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}

/// Ability score routes (protected)
fn ability_score_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/{score_id}", get(handlers::ability_score::get_ability_score))
        .route(
            "/{score_id}",
            patch(handlers::ability_score::update_ability_score),
        )
        .route(
            "/{score_id}",
            delete(handlers::ability_score::delete_ability_score),
        )
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}

/// Spell routes (protected)
fn spell_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/{spell_id}", get(handlers::spell::get_spell))
        .route("/{spell_id}", patch(handlers::spell::update_spell))
        .route("/{spell_id}", delete(handlers::spell::delete_spell))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}
