//! Recover CLI binary
//!
//! Run with:
//! ```bash
//! cargo run --bin recover -- shares.json --rounding half-even
//! ```

use std::path::PathBuf;

use clap::Parser;
use secret_recovery::{RecoveryConfig, RoundingMode, ShareSet};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "recover")]
#[command(about = "Recover a threshold secret from base-encoded shares")]
struct Args {
    /// Share document (JSON)
    #[arg(env = "SECRET_RECOVERY_INPUT", default_value = "input.json")]
    input: PathBuf,

    /// Configuration file (JSON)
    #[arg(long, env = "SECRET_RECOVERY_CONFIG")]
    config: Option<PathBuf>,

    /// Override the threshold k from the document
    #[arg(long)]
    threshold: Option<usize>,

    /// Tie-breaking rule: half-away-from-zero or half-even
    #[arg(long)]
    rounding: Option<RoundingMode>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive("secret_recovery=info".parse()?))
        .init();

    let args = Args::parse();

    let config = RecoveryConfig::resolve(args.config.as_deref(), args.rounding, args.threshold)?;
    let shares = config.apply(ShareSet::from_json_file(&args.input)?)?;

    tracing::info!(input = %args.input.display(), shares = shares.len(), "loaded share document");

    let recovery = shares.recover(config.rounding)?;
    print!("{}", recovery.render(shares.threshold(), config.rounding));

    Ok(())
}
