use serde::Deserialize;

/// Deployment mode, selected by `NODE_ENV`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    /// Only the exact value `production` selects production mode.
    pub fn from_node_env(value: Option<&str>) -> Self {
        match value {
            Some("production") => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

/// CORS configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CorsConfig {
    /// Deployment mode the allow-list is computed for
    pub environment: Environment,

    /// Raw comma-separated `FRONTEND_ORIGIN` value
    pub frontend_origin: Option<String>,
}

impl CorsConfig {
    pub fn new(environment: Environment, frontend_origin: Option<&str>) -> Self {
        Self {
            environment,
            frontend_origin: frontend_origin.map(str::to_string),
        }
    }

    /// Trusted origins in configured order, trimmed, with empty entries dropped.
    pub fn trusted_origins(&self) -> impl Iterator<Item = &str> {
        self.frontend_origin
            .as_deref()
            .into_iter()
            .flat_map(|value| value.split(','))
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
    }

    /// A value made only of commas and whitespace counts as unset.
    pub fn has_trusted_origins(&self) -> bool {
        self.trusted_origins().next().is_some()
    }
}
