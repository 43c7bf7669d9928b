pub mod groups;
pub mod health;
mod router;
pub mod types;

pub use groups::{RouteGroup, RouteGroups};
pub use router::{create_router, not_found, BODY_LIMIT_BYTES};

// Re-export AppState for convenience
pub use crate::state::AppState;
