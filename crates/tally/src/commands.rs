//! CLI command implementations.

use color_eyre::eyre::{eyre, Result};

use tally_core::{Operands, OperatorRegistry};

/// Start the calculator HTTP server.
pub async fn serve(host: String, port: u16) -> Result<()> {
    use tally_server::{Server, ServerConfig};

    tracing::info!("Starting Tally server...");

    let addr = format!("{}:{}", host, port).parse()?;
    let config = ServerConfig::builder().addr(addr).cors(true).build();

    let server = Server::new(config);
    server.run().await?;

    Ok(())
}

/// Evaluate a single operation and print the expression.
pub fn compute(operation: &str, left: i64, right: i64) -> Result<()> {
    let registry = OperatorRegistry::default();
    let operator = registry.get(operation).map_err(|e| {
        eyre!(
            "{}. Available operations: {}",
            e,
            registry.names().collect::<Vec<_>>().join(", ")
        )
    })?;

    let result = operator.run(Operands::new(left, right))?;
    println!("{}", result.expression);

    Ok(())
}

/// Display version information.
pub fn version() {
    println!("Tally {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Components:");
    println!("  tally-core       - Operators and domain model");
    println!("  tally-server     - HTTP API");
    println!("  tally-telemetry  - Logging and metrics");
}
