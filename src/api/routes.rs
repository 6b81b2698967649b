//! API Routes
//!
//! Configures the Axum router with all user endpoints.

use axum::{
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    create_user, delete_user, get_user, health_handler, list_users, update_user, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /user/` - List all users
/// - `POST /user/` - Create a user, replies with the minted id
/// - `GET /user/:id` - Retrieve one user
/// - `PUT /user/:id` - Fully replace one user
/// - `DELETE /user/:id` - Delete one user
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router with all endpoints
    Router::new()
        .route("/user/", get(list_users).post(create_user))
        .route(
            "/user/:id",
            get(get_user).put(update_user).delete(delete_user),
        )
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
