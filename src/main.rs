//! Users/posts HTTP service entry point.

use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use basic_routes::api::ROUTES;
use basic_routes::config::{Config, LogFormat};
use basic_routes::resources::IdPolicy;
use basic_routes::server;

/// Minimal users/posts HTTP service.
#[derive(Parser, Debug)]
#[command(name = "basic-routes")]
#[command(about = "Stateless users/posts CRUD service with health and admin stats endpoints")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,

    /// HTTP server port (overrides PORT).
    #[arg(short, long)]
    port: Option<u16>,

    /// Non-numeric path id handling: coerce or reject (overrides ID_POLICY).
    #[arg(long)]
    id_policy: Option<IdPolicy>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP server (default).
    Run {
        /// HTTP server port (overrides PORT).
        #[arg(short, long)]
        port: Option<u16>,

        /// Non-numeric path id handling: coerce or reject (overrides ID_POLICY).
        #[arg(long)]
        id_policy: Option<IdPolicy>,
    },

    /// Check configuration validity.
    CheckConfig,

    /// Print the route table.
    Routes,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Configuration is loaded before logging so LOG_FORMAT applies.
    let config = Config::load();
    let verbose = args.verbose || config.as_ref().is_ok_and(|c| c.verbose);
    let (format, level) = match &config {
        Ok(c) => (c.log_format, c.rust_log.as_str()),
        Err(_) => (LogFormat::default(), "info"),
    };
    init_logging(verbose, format, level);

    match args.command {
        Some(Command::CheckConfig) => cmd_check_config(config),
        Some(Command::Routes) => {
            cmd_routes();
            Ok(())
        }
        Some(Command::Run { .. }) | None => {
            let (port, id_policy) = args.run_overrides();
            cmd_run(config, port, id_policy).await
        }
    }
}

impl Args {
    /// Port and id policy overrides for `run`; subcommand flags win over top-level ones.
    fn run_overrides(&self) -> (Option<u16>, Option<IdPolicy>) {
        match &self.command {
            Some(Command::Run { port, id_policy }) => {
                (port.or(self.port), id_policy.or(self.id_policy))
            }
            _ => (self.port, self.id_policy),
        }
    }
}

fn init_logging(verbose: bool, format: LogFormat, level: &str) {
    let filter = if verbose {
        EnvFilter::new("basic_routes=debug,tower_http=debug,info")
    } else {
        EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"))
    };

    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Pretty => registry.with(fmt::layer()).init(),
        LogFormat::Json => registry.with(fmt::layer().json()).init(),
    }
}

/// Check configuration validity.
fn cmd_check_config(config: Result<Config, envy::Error>) -> anyhow::Result<()> {
    println!("======================================================================");
    println!("BASIC ROUTES - CONFIGURATION CHECK");
    println!("======================================================================");

    print!("Loading configuration... ");
    let config = match config {
        Ok(c) => {
            println!("OK");
            c
        }
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration load failed"));
        }
    };

    print!("Validating configuration... ");
    match config.validate() {
        Ok(()) => println!("OK"),
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration validation failed"));
        }
    }

    println!("----------------------------------------------------------------------");
    println!("Configuration Summary:");
    println!("  Listen: {}:{}", config.host, config.port);
    println!("  Service Name: {}", config.service_name);
    println!("  Id Policy: {}", config.id_policy);
    match config.metrics_port {
        Some(port) => println!("  Metrics Exporter: port {}", port),
        None => println!("  Metrics Exporter: Disabled"),
    }
    println!("  Log Format: {}", config.log_format);
    println!("======================================================================");
    println!("CONFIGURATION CHECK PASSED");
    println!("======================================================================");

    Ok(())
}

/// Print the route table.
fn cmd_routes() {
    for route in ROUTES {
        println!("{:<7} {:<16} {}", route.method, route.path, route.handler);
    }
}

/// Run the HTTP server until a shutdown signal arrives.
async fn cmd_run(
    config: Result<Config, envy::Error>,
    port_override: Option<u16>,
    id_policy_override: Option<IdPolicy>,
) -> anyhow::Result<()> {
    info!("Loading configuration...");
    let mut config = config.map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;

    // Override with CLI args if provided
    if let Some(port) = port_override {
        config.port = port;
    }
    if let Some(policy) = id_policy_override {
        config.id_policy = policy;
    }

    info!("Service: {}", config.service_name);
    info!("Id policy: {}", config.id_policy);

    server::run(&config).await.map_err(|e| {
        error!("Server failed: {}", e);
        e
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_level_flags_reach_run_subcommand() {
        let args =
            Args::try_parse_from(["basic-routes", "--port", "9000", "--id-policy", "reject", "run"])
                .unwrap();

        assert_eq!(args.run_overrides(), (Some(9000), Some(IdPolicy::Reject)));
    }

    #[test]
    fn subcommand_flags_win() {
        let args =
            Args::try_parse_from(["basic-routes", "--port", "9000", "run", "--port", "9001"])
                .unwrap();

        assert_eq!(args.run_overrides(), (Some(9001), None));
    }

    #[test]
    fn no_subcommand_uses_top_level_flags() {
        let args = Args::try_parse_from(["basic-routes", "-p", "7000"]).unwrap();

        assert_eq!(args.run_overrides(), (Some(7000), None));
    }
}
