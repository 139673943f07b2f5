//! Shared components for CLI commands

use crate::cli::args::Args;
use crate::config::LasConfig;
use crate::constants::DEPTH_MNEMONICS;
use crate::models::ParseResult;
use crate::parser::ParseStats;
use crate::processor::parse_file;
use anyhow::Context;
use std::path::Path;
use tracing::{debug, info};

/// Set up structured logging on stderr
///
/// `RUST_LOG` takes precedence over the verbosity flags.
pub fn setup_logging(args: &Args) -> anyhow::Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("las_processor={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_timer(fmt::time::uptime())
                .with_writer(std::io::stderr),
        )
        .try_init()
        .context("Failed to initialize logging")?;

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Read and parse a single file with the default upload checks
pub async fn load_las_file(path: &Path) -> anyhow::Result<(ParseResult, ParseStats)> {
    let (result, stats) = parse_file(path, &LasConfig::default())
        .await
        .with_context(|| format!("Failed to load {}", path.display()))?;

    info!(
        "Loaded {}: {} curves, {} rows",
        path.display(),
        result.curves.len(),
        result.data.len()
    );
    Ok((result, stats))
}

/// Every curve except the depth index
pub fn measurement_curves(result: &ParseResult) -> Vec<String> {
    result
        .curves
        .iter()
        .map(|curve| curve.mnemonic.clone())
        .filter(|mnemonic| !DEPTH_MNEMONICS.contains(&mnemonic.as_str()))
        .collect()
}

/// Render a possibly unknown number
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        "unknown".to_string()
    } else {
        format!("{}", value)
    }
}
