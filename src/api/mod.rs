//! API Module
//!
//! HTTP handlers and routing for the user REST API.
//!
//! # Endpoints
//! - `GET /user/` - List all users
//! - `POST /user/` - Create a user
//! - `GET /user/:id` - Retrieve one user
//! - `PUT /user/:id` - Fully replace one user
//! - `DELETE /user/:id` - Delete one user
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
