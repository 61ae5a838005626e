//! Configuration management for the Tally CLI.
//!
//! Configuration is loaded from (in order of precedence):
//! 1. Command-line arguments
//! 2. Environment variables (TALLY_*)
//! 3. Config file (~/.config/tally/config.toml)
//! 4. Default values

use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

/// CLI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server host.
    #[serde(default = "default_host")]
    pub server_host: String,

    /// Server port.
    #[serde(default = "default_port")]
    pub server_port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_host: default_host(),
            server_port: default_port(),
        }
    }
}

impl Config {
    /// Loads configuration from all sources.
    ///
    /// Reports warnings for configuration errors but falls back to defaults.
    pub fn load() -> Self {
        let config_path = Self::config_path();

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_path))
            .merge(Env::prefixed("TALLY_"));

        match figment.extract::<Config>() {
            Ok(config) => config,
            Err(e) => {
                // Report the error clearly to the user
                eprintln!("\x1b[33mWarning:\x1b[0m Configuration error, using defaults");
                eprintln!("  Config file: {}", config_path.display());
                eprintln!("  Error: {}", e);
                eprintln!();
                eprintln!("  To fix, edit or delete the config file:");
                eprintln!("    rm {}", config_path.display());
                eprintln!();
                Config::default()
            }
        }
    }

    /// Returns the path to the config file.
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("tally")
            .join("config.toml")
    }

    /// Returns the path to the config directory.
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("tally")
    }

    /// Saves the current configuration to the config file.
    pub fn save(&self) -> Result<(), std::io::Error> {
        let config_dir = Self::config_dir();
        std::fs::create_dir_all(&config_dir)?;

        let config_path = Self::config_path();
        let toml_str = toml::to_string_pretty(self).map_err(std::io::Error::other)?;

        std::fs::write(&config_path, toml_str)?;
        Ok(())
    }

    /// Sets the default server host and saves.
    pub fn set_server_host(&mut self, host: &str) -> Result<(), std::io::Error> {
        self.server_host = host.to_string();
        self.save()
    }

    /// Sets the default server port and saves.
    pub fn set_server_port(&mut self, port: u16) -> Result<(), std::io::Error> {
        self.server_port = port;
        self.save()
    }
}

/// Prints the current configuration and its sources.
pub fn show_config() {
    let config = Config::load();
    let config_path = Config::config_path();

    println!("Tally Configuration");
    println!("===================\n");

    println!("Config file: {}", config_path.display());
    if config_path.exists() {
        println!("Status: Found\n");
    } else {
        println!("Status: Not found (using defaults)\n");
    }

    println!("Current settings:");
    println!("  server_host: {}", config.server_host);
    println!("  server_port: {}", config.server_port);

    println!("\nEnvironment variables:");
    println!("  TALLY_SERVER_HOST");
    println!("  TALLY_SERVER_PORT");
}
