//! Service Layer
//!
//! Bridges transport-facing request shapes and the entity model, and owns
//! identity minting.

mod users;

pub use users::UserService;
