//! Origin admission for cross-origin browser requests.
//!
//! The allow-list is recomputed from the configuration snapshot on every call,
//! and [`admit`] returns a [`Decision`] that the HTTP layer turns into headers
//! or a denial response.

use crate::config::CorsConfig;
use std::fmt;
use tracing::warn;

/// Local frontend dev server, also the fallback when nothing else is configured.
pub const DEV_ORIGIN: &str = "http://localhost:5173";

/// Methods advertised to admitted origins.
pub const ALLOWED_METHODS: &str = "GET, POST, PUT, DELETE, OPTIONS";

/// Request headers advertised to admitted origins.
pub const ALLOWED_HEADERS: &str = "Content-Type, Authorization";

/// Deployment platform domains admitted in production when no trusted origins
/// are configured.
pub const PLATFORM_DOMAINS: [&str; 2] = [".vercel.app", ".vercel.sh"];

/// Why a request was let through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdmitReason {
    /// No `Origin` header, i.e. a same-origin or non-browser client
    NoOrigin,
    /// Exact match against the allow-list
    AllowListed,
    /// Substring match against a deployment platform domain
    PlatformFallback,
}

/// Why a request was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenyReason {
    pub origin: String,
}

impl fmt::Display for DenyReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "origin {} is not allowed by CORS", self.origin)
    }
}

/// Outcome of the admission check for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Admit(AdmitReason),
    Deny(DenyReason),
}

impl Decision {
    pub fn is_admitted(&self) -> bool {
        matches!(self, Decision::Admit(_))
    }
}

/// Compute the current allow-list.
///
/// Never empty. Duplicates between the dev origin and the trusted origins are
/// kept in insertion order.
pub fn resolve_allowed_origins(config: &CorsConfig) -> Vec<String> {
    let mut origins = Vec::new();

    if !config.environment.is_production() {
        origins.push(DEV_ORIGIN.to_string());
    }

    origins.extend(config.trusted_origins().map(str::to_string));

    if config.environment.is_production() && !config.has_trusted_origins() {
        warn!(
            "FRONTEND_ORIGIN is not set in production, cross-origin requests may fail. \
             Set it to the frontend URL (e.g. https://your-app.vercel.app)"
        );
    }

    if origins.is_empty() {
        return vec![DEV_ORIGIN.to_string()];
    }

    origins
}

/// Whether `origin` mentions a deployment platform domain anywhere in it.
pub fn is_platform_origin(origin: &str) -> bool {
    PLATFORM_DOMAINS.iter().any(|domain| origin.contains(domain))
}

/// Decide whether a request carrying `origin` may proceed to dispatch.
///
/// First match wins: no origin, exact allow-list match, then the platform
/// fallback which only applies in production while no trusted origins are
/// configured.
pub fn admit(origin: Option<&str>, config: &CorsConfig) -> Decision {
    let Some(origin) = origin else {
        return Decision::Admit(AdmitReason::NoOrigin);
    };

    if resolve_allowed_origins(config)
        .iter()
        .any(|allowed| allowed == origin)
    {
        return Decision::Admit(AdmitReason::AllowListed);
    }

    if config.environment.is_production()
        && !config.has_trusted_origins()
        && is_platform_origin(origin)
    {
        warn!(
            origin = %origin,
            "Allowing deployment platform origin by domain match, set FRONTEND_ORIGIN for a strict allow-list"
        );
        return Decision::Admit(AdmitReason::PlatformFallback);
    }

    Decision::Deny(DenyReason {
        origin: origin.to_string(),
    })
}
