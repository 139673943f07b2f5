//! Query command: rows within a depth range as JSON

use crate::cli::args::QueryArgs;
use crate::cli::commands::shared::load_las_file;
use crate::query::DepthQuery;
use tracing::info;

/// Run the query command
pub async fn run_query(args: &QueryArgs) -> anyhow::Result<()> {
    args.validate()?;

    let (result, _) = load_las_file(&args.file).await?;
    let metadata = result.well_metadata();

    let mut query = DepthQuery::new().with_limit(args.limit);
    query.start = args.start;
    query.end = args.end;
    if let Some(list) = &args.curves {
        query = query.with_curves(list.curves.iter().cloned());
    }

    let points = query.run(&result.data);
    info!("Query matched {} rows", points.len());

    let report = serde_json::json!({
        "well": metadata.well_name,
        "query": query,
        "count": points.len(),
        "data": points,
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
