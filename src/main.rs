//! Arithmetic Gateway
//!
//! ```text
//! ┌──────────┐    ┌──────────┐    ┌──────────┐
//! │  Config  │───▶│  Router  │───▶│ Handlers │
//! │  (YAML)  │    │  (axum)  │    │ int|float│
//! └──────────┘    └──────────┘    └──────────┘
//! ```

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use arith_gateway::arith::Variant;
use arith_gateway::config::AppConfig;
use arith_gateway::gateway;
use arith_gateway::logging::init_logging;

#[derive(Parser, Debug)]
#[command(name = "arith_gateway", version, about)]
struct Cli {
    /// Environment name; loads config/{env}.yaml
    #[arg(short, long, default_value = "dev")]
    env: String,

    /// Explicit config file (overrides --env)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Listen port override
    #[arg(long)]
    port: Option<u16>,

    /// Numeric variant override
    #[arg(long, value_enum)]
    variant: Option<Variant>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut app_config = match &cli.config {
        Some(path) => AppConfig::from_file(path)?,
        None => AppConfig::load(&cli.env)?,
    };
    if let Some(variant) = cli.variant {
        app_config.gateway.variant = variant;
    }
    if let Some(port) = cli.port {
        app_config.gateway.port = Some(port);
    }

    let _log_guard = init_logging(&app_config);

    tracing::info!(
        "Starting arith_gateway {} ({}) in {} mode",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        cli.env
    );

    let rt = tokio::runtime::Runtime::new().context("failed to create tokio runtime")?;
    rt.block_on(gateway::run_server(&app_config.gateway))
        .context("gateway server failed")?;

    Ok(())
}
