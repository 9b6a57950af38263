use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};
use usercreate::{config::ENDPOINT_ENV, create_users, Config};

/// Create every valid user listed in a CSV file (`name,email,role`).
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// CSV file to import
    path: PathBuf,
}

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_target(false)
        .init();

    let args = Args::parse();

    // ─── 2) configure endpoint ───────────────────────────────────────
    let config = Config::from_env().with_context(|| format!("reading {}", ENDPOINT_ENV))?;
    info!(path = %args.path.display(), endpoint = %config.endpoint, "startup");

    // ─── 3) import; file-level failures are logged, not returned ─────
    create_users(&args.path, &config);

    Ok(())
}
