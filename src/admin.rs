//! CORS inspection commands.
//!
//! Lets operators see the allow-list the running configuration produces and
//! how a given origin would be treated, without starting the server.

use crate::config::Config;
use crate::cors::{self, Decision};
use crate::error::AppResult;
use clap::Subcommand;

/// CORS commands available via CLI.
#[derive(Subcommand, Debug)]
pub enum CorsCommands {
    /// Print the resolved origin allow-list
    List,

    /// Show the admission decision for an origin (omit for a non-browser client)
    Check {
        /// Value of the Origin header to evaluate
        origin: Option<String>,
    },
}

/// Run a CORS command with the given configuration.
pub fn run(config: Config, cors_command: CorsCommands) -> AppResult<()> {
    match cors_command {
        CorsCommands::List => {
            list(&config);
            Ok(())
        }
        CorsCommands::Check { origin } => {
            check(&config, origin.as_deref());
            Ok(())
        }
    }
}

fn list(config: &Config) {
    println!("{}", format_allow_list(config));
}

fn check(config: &Config, origin: Option<&str>) {
    println!("{}", format_decision(origin, &cors::admit(origin, &config.cors)));
}

/// Allow-list report, one origin per line.
fn format_allow_list(config: &Config) -> String {
    let mut out = format!("Allowed origins ({:?}):", config.cors.environment);
    for origin in cors::resolve_allowed_origins(&config.cors) {
        out.push_str("\n  ");
        out.push_str(&origin);
    }
    out
}

fn format_decision(origin: Option<&str>, decision: &Decision) -> String {
    let origin = origin.unwrap_or("<none>");
    match decision {
        Decision::Admit(reason) => format!("Admitted {} ({:?})", origin, reason),
        Decision::Deny(reason) => format!("Denied: {}", reason),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CorsConfig, Environment, ServerConfig};
    use crate::cors::AdmitReason;

    fn config(environment: Environment, frontend_origin: Option<&str>) -> Config {
        Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 4000,
            },
            cors: CorsConfig::new(environment, frontend_origin),
        }
    }

    #[test]
    fn test_format_allow_list() {
        let report = format_allow_list(&config(Environment::Development, Some("https://a.com")));
        assert_eq!(
            report,
            "Allowed origins (Development):\n  http://localhost:5173\n  https://a.com"
        );
    }

    #[test]
    fn test_format_decision() {
        assert_eq!(
            format_decision(None, &Decision::Admit(AdmitReason::NoOrigin)),
            "Admitted <none> (NoOrigin)"
        );

        let config = config(Environment::Production, Some("https://a.com"));
        let decision = cors::admit(Some("https://evil.com"), &config.cors);
        assert_eq!(
            format_decision(Some("https://evil.com"), &decision),
            "Denied: origin https://evil.com is not allowed by CORS"
        );
    }
}
