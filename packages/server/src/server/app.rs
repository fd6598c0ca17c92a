//! Application setup and server configuration.

use axum::{
    extract::Extension,
    http::{
        header::{HeaderValue, CONTENT_TYPE},
        Method,
    },
    routing::{delete, get, post, put},
    Router,
};
use sqlx::PgPool;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::server::routes::{event_types, events, health, members};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
}

/// Build the Axum application router.
///
/// `allowed_origins` restricts CORS when non-empty; an empty list allows any
/// origin, matching the development setup where the browser front-end is
/// served from a different port.
pub fn build_app(pool: PgPool, allowed_origins: &[String]) -> Router {
    let app_state = AppState { db_pool: pool };

    let cors = if allowed_origins.is_empty() {
        CorsLayer::new()
            .allow_origin(tower_http::cors::Any)
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
            .allow_headers([CONTENT_TYPE])
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
            .allow_headers([CONTENT_TYPE])
    };

    Router::new()
        .route("/health", get(health::health_handler))
        // Event types
        .route("/eventtypes", get(event_types::list_event_types))
        .route("/eventtypes", post(event_types::create_event_type))
        .route("/eventtypes/:id", get(event_types::get_event_type))
        .route("/eventtypes/:id", put(event_types::update_event_type))
        .route("/eventtypes/:id", delete(event_types::delete_event_type))
        // Events
        .route("/events", get(events::list_events))
        .route("/events", post(events::create_event))
        .route("/events/:id", get(events::get_event))
        .route("/events/:id", put(events::update_event))
        .route("/events/:id", delete(events::delete_event))
        // Members and their event registrations
        .route("/members", get(members::list_members))
        .route("/members", post(members::create_member))
        .route("/members/:id", get(members::get_member))
        .route("/members/:id", put(members::update_member))
        .route("/members/:id", delete(members::delete_member))
        .route("/members/:id/events", post(members::register_member))
        .route(
            "/members/:id/events/:event_id",
            delete(members::unregister_member),
        )
        .layer(Extension(app_state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
