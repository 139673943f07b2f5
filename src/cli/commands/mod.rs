//! Command implementations for the LAS processor CLI
//!
//! Each subcommand lives in its own module; this module sets up logging and
//! dispatches.

pub mod inspect;
pub mod process;
pub mod query;
pub mod shared;
pub mod stats;

use crate::cli::args::{Args, Commands};
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Main command runner
///
/// Dispatches to the subcommand handler. The cancellation token is tripped
/// on Ctrl+C and is honoured by long-running commands.
pub async fn run(args: Args, cancellation_token: CancellationToken) -> anyhow::Result<()> {
    shared::setup_logging(&args)?;
    debug!("Command line arguments: {:?}", args);

    let show_progress = args.show_progress();
    match &args.command {
        Commands::Inspect(inspect_args) => inspect::run_inspect(inspect_args).await,
        Commands::Process(process_args) => {
            process::run_process(process_args, show_progress, cancellation_token).await
        }
        Commands::Stats(stats_args) => stats::run_stats(stats_args).await,
        Commands::Query(query_args) => query::run_query(query_args).await,
    }
}
