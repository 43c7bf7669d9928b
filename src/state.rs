use crate::config::CorsConfig;

/// Application state shared across all HTTP middleware and handlers.
///
/// Wrapped in `Arc` and handed to the CORS gate once at router construction.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Immutable CORS configuration snapshot taken at startup
    pub cors: CorsConfig,
}

impl AppState {
    pub fn new(cors: CorsConfig) -> Self {
        Self { cors }
    }
}
