//! Inspect command: metadata and curve catalog of a single file

use crate::cli::args::{InspectArgs, OutputFormat};
use crate::cli::commands::shared::{format_number, load_las_file};
use crate::metadata::WellMetadata;
use crate::models::ParseResult;
use crate::parser::ParseStats;
use crate::records::WellSummary;
use colored::*;

/// Run the inspect command
pub async fn run_inspect(args: &InspectArgs) -> anyhow::Result<()> {
    let (result, stats) = load_las_file(&args.file).await?;
    let metadata = result.well_metadata();

    match args.format {
        OutputFormat::Human => print_human(&result, &metadata, &stats),
        OutputFormat::Json => print_json(&result, &metadata, &stats)?,
    }
    Ok(())
}

fn print_human(result: &ParseResult, metadata: &WellMetadata, stats: &ParseStats) {
    println!("\n{}", metadata.well_name.bright_green().bold());
    println!(
        "  Version:      {}",
        result.version.as_deref().unwrap_or("unknown")
    );

    let optional = [
        ("Company", &metadata.company),
        ("Field", &metadata.field),
        ("Location", &metadata.location),
        ("Country", &metadata.country),
        ("State", &metadata.state),
        ("UWI", &metadata.uwi),
        ("API", &metadata.api),
        ("Date", &metadata.date_analyzed),
    ];
    for (label, value) in optional {
        if let Some(value) = value {
            println!("  {:<13} {}", format!("{}:", label), value);
        }
    }

    println!(
        "  Depth range:  {} to {} (step {})",
        format_number(metadata.start_depth),
        format_number(metadata.stop_depth),
        format_number(metadata.step)
    );
    println!("  Null value:   {}", format_number(metadata.null_value));

    println!(
        "\n{} ({})",
        "Curves".bright_cyan().bold(),
        result.curves.len().to_string().bright_white().bold()
    );
    for curve in &result.curves {
        println!(
            "  {:<10} {:<10} {}",
            curve.mnemonic.bold(),
            curve.unit,
            curve.description
        );
    }

    println!(
        "\n{} {}",
        "Data rows:".bright_cyan().bold(),
        result.data.len().to_string().bright_white().bold()
    );

    if stats.short_rows > 0 {
        println!(
            "  {} rows are missing trailing curves ({:.1}% complete)",
            stats.short_rows.to_string().yellow(),
            stats.complete_row_rate()
        );
    }
    if stats.lines_skipped > 0 {
        println!(
            "  {} header lines were skipped",
            stats.lines_skipped.to_string().yellow()
        );
    }
    if !stats.saw_data_section() {
        println!("  {}", "No data section found".bright_red());
    }
    println!();
}

fn print_json(
    result: &ParseResult,
    metadata: &WellMetadata,
    stats: &ParseStats,
) -> anyhow::Result<()> {
    let report = serde_json::json!({
        "summary": WellSummary::new(result, metadata),
        "metadata": metadata,
        "curves": result.curves,
        "parseStats": stats,
    });

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
