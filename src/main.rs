use clap::{Parser, Subcommand};
use rideshare_gateway::admin::{self, CorsCommands};
use rideshare_gateway::config::Config;
use rideshare_gateway::error::AppResult;
use rideshare_gateway::routes::RouteGroups;
use rideshare_gateway::server;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Rideshare API gateway
#[derive(Parser, Debug)]
#[command(name = "rideshare-gateway")]
#[command(version)]
#[command(about = "HTTP gateway for the ride-share API", long_about = None)]
struct Cli {
    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the web server
    Server {
        /// Host to bind to (overrides HOST env var)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to (overrides PORT env var)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Inspect CORS admission
    Cors {
        #[command(subcommand)]
        cors_command: CorsCommands,
    },
}

#[tokio::main]
async fn main() -> AppResult<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(Level::INFO.to_string()));
    if cli.json_logs {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    // Load configuration
    let mut config = Config::from_env()?;

    match cli.command {
        Commands::Server { host, port } => {
            // Override config with CLI args if provided
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            config.validate()?;

            let addr = config.server.addr();
            server::run_server(config, RouteGroups::new(), addr).await
        }
        Commands::Cors { cors_command } => admin::run(config, cors_command),
    }
}
