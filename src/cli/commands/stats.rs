//! Stats command: per-curve summary statistics

use crate::cli::args::{OutputFormat, StatsArgs};
use crate::cli::commands::shared::{load_las_file, measurement_curves};
use crate::models::DataRow;
use crate::query::{CurveStatistics, DepthQuery, statistics_by_curve};
use colored::*;
use std::collections::BTreeMap;

/// Run the stats command
pub async fn run_stats(args: &StatsArgs) -> anyhow::Result<()> {
    args.validate()?;

    let (result, _) = load_las_file(&args.file).await?;
    let metadata = result.well_metadata();

    let curves = match &args.curves {
        Some(list) => list.curves.clone(),
        None => measurement_curves(&result),
    };

    let rows = rows_in_range(&result.data, args.start, args.end);
    let statistics = statistics_by_curve(&rows, &curves, metadata.null_value);

    match args.format {
        OutputFormat::Human => print_human(&metadata.well_name, rows.len(), &statistics),
        OutputFormat::Json => {
            let report = serde_json::json!({
                "well": metadata.well_name,
                "rows": rows.len(),
                "statistics": statistics,
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }
    Ok(())
}

/// Rows whose depth lies in the optional range; all rows when unbounded
fn rows_in_range(rows: &[DataRow], start: Option<f64>, end: Option<f64>) -> Vec<DataRow> {
    if start.is_none() && end.is_none() {
        return rows.to_vec();
    }

    let mut query = DepthQuery::new().with_limit(usize::MAX);
    query.start = start;
    query.end = end;
    query.run(rows).into_iter().map(|point| point.values).collect()
}

fn print_human(
    well_name: &str,
    row_count: usize,
    statistics: &BTreeMap<String, Option<CurveStatistics>>,
) {
    println!(
        "\n{} ({} rows)",
        well_name.bright_green().bold(),
        row_count.to_string().bright_white().bold()
    );
    println!(
        "  {:<10} {:>8} {:>12} {:>12} {:>12} {:>12} {:>12}",
        "Curve", "Count", "Min", "Max", "Mean", "Median", "Std dev"
    );

    for (curve, stats) in statistics {
        match stats {
            Some(s) => println!(
                "  {:<10} {:>8} {:>12.4} {:>12.4} {:>12.4} {:>12.4} {:>12.4}",
                curve, s.count, s.min, s.max, s.mean, s.median, s.std_dev
            ),
            None => println!("  {:<10} {}", curve, "no values".yellow()),
        }
    }
    println!();
}
