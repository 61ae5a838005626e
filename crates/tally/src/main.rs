//! # Tally CLI
//!
//! The main command-line interface for the Tally calculator service.

use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "tally")]
#[command(author = "Tally Engineering")]
#[command(version)]
#[command(about = "Arithmetic over HTTP", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info", global = true)]
    log_level: String,

    /// Enable JSON logging
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the calculator HTTP server
    Serve {
        /// Host to bind to
        #[arg(short = 'H', long)]
        host: Option<String>,

        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Evaluate a single operation in the terminal
    Compute {
        /// Operation name (addition, subtraction, multiplication, division)
        operation: String,

        /// Left operand
        left: i64,

        /// Right operand
        right: i64,
    },

    /// Display version and build info
    Version,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current configuration
    Show,

    /// Set default server host
    SetHost {
        /// Host to bind the server to by default
        host: String,
    },

    /// Set default server port
    SetPort {
        /// Port to listen on by default
        port: u16,
    },

    /// Show config file path
    Path,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    // Initialize logging and metrics
    let telemetry_config =
        tally_telemetry::TelemetryConfig::new("tally").with_log_level(&cli.log_level);

    let telemetry_config = if cli.json_logs {
        telemetry_config.with_json_logs()
    } else {
        telemetry_config
    };

    tally_telemetry::init_logging(&telemetry_config);
    tally_telemetry::Telemetry::init();

    // Load configuration for default values
    let cfg = config::Config::load();

    match cli.command {
        Commands::Serve { host, port } => {
            // Use config defaults when not specified on the command line
            let host = host.unwrap_or_else(|| cfg.server_host.clone());
            let port = port.unwrap_or(cfg.server_port);
            commands::serve(host, port).await?;
        }

        Commands::Compute {
            operation,
            left,
            right,
        } => {
            commands::compute(&operation, left, right)?;
        }

        Commands::Version => {
            commands::version();
        }

        Commands::Config { action } => match action {
            ConfigAction::Show => {
                config::show_config();
            }
            ConfigAction::SetHost { host } => {
                let mut cfg = config::Config::load();
                match cfg.set_server_host(&host) {
                    Ok(()) => {
                        println!("Default server host set to: {}", host);
                        println!(
                            "Config saved to: {}",
                            config::Config::config_path().display()
                        );
                    }
                    Err(e) => {
                        eprintln!("Failed to save config: {}", e);
                    }
                }
            }
            ConfigAction::SetPort { port } => {
                let mut cfg = config::Config::load();
                match cfg.set_server_port(port) {
                    Ok(()) => {
                        println!("Default server port set to: {}", port);
                        println!(
                            "Config saved to: {}",
                            config::Config::config_path().display()
                        );
                    }
                    Err(e) => {
                        eprintln!("Failed to save config: {}", e);
                    }
                }
            }
            ConfigAction::Path => {
                println!("{}", config::Config::config_path().display());
            }
        },
    }

    Ok(())
}
