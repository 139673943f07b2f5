//! Process command: bulk ingest of a file or directory

use crate::cli::args::{OutputFormat, ProcessArgs};
use crate::cli::commands::shared::format_number;
use crate::processor::{LasProcessor, LoggingSink, ProcessingStats};
use colored::*;
use indicatif::HumanDuration;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Run the process command
pub async fn run_process(
    args: &ProcessArgs,
    show_progress: bool,
    cancellation_token: CancellationToken,
) -> anyhow::Result<()> {
    let config = args.to_config()?;
    info!("Starting LAS processing of {}", args.path.display());

    let processor = LasProcessor::new(args.path.clone())?
        .with_config(config)
        .with_progress(show_progress && args.format == OutputFormat::Human)
        .with_cancellation(cancellation_token);

    let stats = processor.process(Arc::new(LoggingSink)).await?;

    match args.format {
        OutputFormat::Human => print_human(&stats),
        OutputFormat::Json => print_json(&stats)?,
    }

    if stats.files_processed == 0 && stats.files_failed > 0 {
        anyhow::bail!("None of the {} files could be ingested", stats.files_failed);
    }
    Ok(())
}

fn print_human(stats: &ProcessingStats) {
    println!("\n{}", "Processing Summary".bright_green().bold());
    println!(
        "  Files ingested: {}",
        stats.files_processed.to_string().bright_white().bold()
    );
    if stats.files_failed > 0 {
        println!(
            "  Files rejected: {}",
            stats.files_failed.to_string().bright_red().bold()
        );
    }
    println!(
        "  Data rows:      {}",
        stats.total_rows.to_string().bright_white().bold()
    );
    println!("  Curves:         {}", stats.total_curves);
    println!("  Success rate:   {:.1}%", stats.success_rate());
    println!("  Time:           {}", HumanDuration(stats.processing_time));

    if !stats.summaries.is_empty() {
        println!("\n{}", "Wells".bright_cyan().bold());
        for summary in &stats.summaries {
            println!(
                "  {:<20} {} to {}  {} curves, {} rows",
                summary.well_name,
                format_number(summary.start_depth),
                format_number(summary.stop_depth),
                summary.curve_count,
                summary.data_point_count
            );
        }
    }

    if !stats.failures.is_empty() {
        println!("\n{}", "Failures".bright_red().bold());
        for (path, reason) in &stats.failures {
            println!("  {}: {}", path.display(), reason);
        }
    }
    println!();
}

fn print_json(stats: &ProcessingStats) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(&json_report(stats))?);
    Ok(())
}

/// Run summary as JSON, with the same camelCase keys as the other reports
fn json_report(stats: &ProcessingStats) -> serde_json::Value {
    serde_json::json!({
        "filesProcessed": stats.files_processed,
        "filesFailed": stats.files_failed,
        "totalRows": stats.total_rows,
        "totalCurves": stats.total_curves,
        "processingTimeSeconds": stats.processing_time.as_secs_f64(),
        "wells": stats.summaries,
        "failures": stats.failures.iter().map(|(path, reason)| {
            serde_json::json!({
                "path": path.display().to_string(),
                "reason": reason,
            })
        }).collect::<Vec<_>>(),
    })
}
