//! Batch ingest engine for LAS files.
//!
//! Orchestrates the complete ingest workflow: file discovery, upload checks
//! (extension and size), parsing off the async runtime, acceptance
//! validation and batching of depth records for the persistence layer.

use crate::config::LasConfig;
use crate::error::{LasError, Result};
use crate::metadata::WellMetadata;
use crate::models::{CurveDefinition, ParseResult};
use crate::parser::{ParseStats, parse_las_with_stats};
use crate::records::{DepthRecord, WellSummary, record_batches};
use crate::validation::validate_for_ingest;

use futures::stream::{self, StreamExt};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use tokio::task;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// A parsed, validated file ready for persistence
#[derive(Debug, Clone)]
pub struct IngestedWell {
    pub path: PathBuf,
    pub summary: WellSummary,
    pub metadata: WellMetadata,
    pub curves: Vec<CurveDefinition>,
    pub batches: Vec<Vec<DepthRecord>>,
    pub parse_stats: ParseStats,
}

impl IngestedWell {
    /// Number of depth records across all batches
    pub fn record_count(&self) -> usize {
        self.batches.iter().map(Vec::len).sum()
    }
}

/// Receiver of ingested wells, standing in for the persistence layer
pub trait IngestSink: Send + Sync {
    fn ingest(&self, well: &IngestedWell) -> Result<()>;
}

/// Sink that only logs what it receives
#[derive(Debug, Default)]
pub struct LoggingSink;

impl IngestSink for LoggingSink {
    fn ingest(&self, well: &IngestedWell) -> Result<()> {
        info!(
            "Ingested well '{}' from {}: {} curves, {} records in {} batches",
            well.summary.well_name,
            well.path.display(),
            well.summary.curve_count,
            well.record_count(),
            well.batches.len()
        );
        Ok(())
    }
}

/// Sink that keeps every ingested well in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    wells: Mutex<Vec<IngestedWell>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the wells collected so far
    pub fn take(&self) -> Vec<IngestedWell> {
        match self.wells.lock() {
            Ok(mut wells) => std::mem::take(&mut *wells),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }
}

impl IngestSink for MemorySink {
    fn ingest(&self, well: &IngestedWell) -> Result<()> {
        match self.wells.lock() {
            Ok(mut wells) => wells.push(well.clone()),
            Err(poisoned) => poisoned.into_inner().push(well.clone()),
        }
        Ok(())
    }
}

/// Processing statistics for one run
#[derive(Debug, Default)]
pub struct ProcessingStats {
    pub files_processed: usize,
    pub files_failed: usize,
    pub total_rows: usize,
    pub total_curves: usize,
    pub failures: Vec<(PathBuf, String)>,
    pub summaries: Vec<WellSummary>,
    pub processing_time: Duration,
}

impl ProcessingStats {
    /// Share of files ingested successfully, as a percentage
    pub fn success_rate(&self) -> f64 {
        let total = self.files_processed + self.files_failed;
        if total == 0 {
            0.0
        } else {
            (self.files_processed as f64 / total as f64) * 100.0
        }
    }
}

/// Read a LAS file, enforcing the configured upload checks
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected.
pub async fn read_las_file(path: &Path, config: &LasConfig) -> Result<String> {
    if !config.accepts_extension(path) {
        return Err(LasError::unsupported_file(
            path,
            format!("only {} files are allowed", config.extensions.join(", ")),
        ));
    }

    let metadata = tokio::fs::metadata(path).await.map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => LasError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => LasError::Io(e),
    })?;

    if metadata.len() > config.max_file_size_bytes {
        return Err(LasError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            limit: config.max_file_size_bytes,
        });
    }

    let bytes = tokio::fs::read(path).await?;
    match String::from_utf8(bytes) {
        Ok(content) => Ok(content),
        Err(e) => {
            warn!("{} is not valid UTF-8, replacing invalid bytes", path.display());
            Ok(String::from_utf8_lossy(e.as_bytes()).into_owned())
        }
    }
}

/// Parse a file's text on the blocking pool
pub async fn parse_file(path: &Path, config: &LasConfig) -> Result<(ParseResult, ParseStats)> {
    let content = read_las_file(path, config).await?;
    let outcome = task::spawn_blocking(move || parse_las_with_stats(&content))
        .await
        .map_err(|e| LasError::processing_interrupted(format!("parser task failed: {}", e)))?;
    Ok((outcome.result, outcome.stats))
}

/// Read, parse, validate and batch a single file
pub async fn ingest_file(path: &Path, config: &LasConfig) -> Result<IngestedWell> {
    let (result, parse_stats) = parse_file(path, config).await?;
    let metadata = result.well_metadata();

    validate_for_ingest(&result, &metadata, config.strict_validation)?;

    let summary = WellSummary::new(&result, &metadata);
    let batches = record_batches(&result, config.batch_size);

    debug!(
        "{}: {} rows in {} batches, {} lines skipped",
        path.display(),
        result.data.len(),
        batches.len(),
        parse_stats.lines_skipped
    );

    Ok(IngestedWell {
        path: path.to_path_buf(),
        summary,
        metadata,
        curves: result.curves,
        batches,
        parse_stats,
    })
}

/// Main processor for LAS ingest
pub struct LasProcessor {
    input_path: PathBuf,
    config: LasConfig,
    show_progress: bool,
    cancellation_token: CancellationToken,
}

impl LasProcessor {
    /// Create a new processor for a file or directory
    pub fn new(input_path: PathBuf) -> Result<Self> {
        if !input_path.exists() {
            return Err(LasError::FileNotFound { path: input_path });
        }

        Ok(Self {
            input_path,
            config: LasConfig::default(),
            show_progress: false,
            cancellation_token: CancellationToken::new(),
        })
    }

    /// Configure the processor
    pub fn with_config(mut self, config: LasConfig) -> Self {
        self.config = config;
        self
    }

    /// Show a progress bar while processing
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Stop picking up new files once the token is cancelled
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation_token = token;
        self
    }

    pub fn config(&self) -> &LasConfig {
        &self.config
    }

    /// Find the LAS files to process, sorted by path
    ///
    /// A single file input is returned as-is so that the extension check
    /// reports it as unsupported instead of silently skipping it.
    pub fn discover_files(&self) -> Result<Vec<PathBuf>> {
        if self.input_path.is_file() {
            return Ok(vec![self.input_path.clone()]);
        }

        let walker = if self.config.recursive {
            WalkDir::new(&self.input_path)
        } else {
            WalkDir::new(&self.input_path).max_depth(1)
        };

        let mut files = Vec::new();
        for entry in walker {
            let entry = entry.map_err(|e| {
                LasError::Io(std::io::Error::other(format!(
                    "Directory traversal failed: {}",
                    e
                )))
            })?;
            if entry.file_type().is_file() && self.config.accepts_extension(entry.path()) {
                files.push(entry.into_path());
            }
        }

        files.sort();
        debug!(
            "Discovered {} LAS files under {}",
            files.len(),
            self.input_path.display()
        );
        Ok(files)
    }

    /// Process every discovered file, handing accepted wells to the sink
    ///
    /// A failing file is recorded in the statistics and does not stop the run.
    /// Cancellation does: files already in flight finish, the rest are never
    /// read, and the run ends with [`LasError::ProcessingInterrupted`]. A
    /// cancellation arriving after every file was handled still returns the
    /// statistics.
    pub async fn process(&self, sink: Arc<dyn IngestSink>) -> Result<ProcessingStats> {
        let start_time = Instant::now();
        self.config.validate()?;

        let files = self.discover_files()?;
        info!(
            "Processing {} LAS files from {}",
            files.len(),
            self.input_path.display()
        );

        let file_count = files.len();
        let progress = self.progress_bar(file_count as u64);
        let config = &self.config;
        let token = &self.cancellation_token;

        let outcomes: Vec<(PathBuf, Result<WellSummary>)> = stream::iter(files)
            .take_while(|_| futures::future::ready(!token.is_cancelled()))
            .map(|path| {
                let sink = Arc::clone(&sink);
                async move {
                    let outcome = match ingest_file(&path, config).await {
                        Ok(well) => sink.ingest(&well).map(|_| well.summary),
                        Err(e) => Err(e),
                    };
                    (path, outcome)
                }
            })
            .buffer_unordered(self.config.workers)
            .inspect(|_| progress.inc(1))
            .collect()
            .await;

        progress.finish_and_clear();

        if outcomes.len() < file_count {
            return Err(LasError::processing_interrupted(format!(
                "cancelled after {} of {} files",
                outcomes.len(),
                file_count
            )));
        }

        let mut stats = ProcessingStats::default();
        for (path, outcome) in outcomes {
            match outcome {
                Ok(summary) => {
                    stats.files_processed += 1;
                    stats.total_rows += summary.data_point_count;
                    stats.total_curves += summary.curve_count;
                    stats.summaries.push(summary);
                }
                Err(e) => {
                    warn!("Failed to ingest {}: {}", path.display(), e);
                    stats.files_failed += 1;
                    stats.failures.push((path, e.to_string()));
                }
            }
        }

        stats
            .summaries
            .sort_by(|a, b| a.well_name.cmp(&b.well_name));
        stats.failures.sort_by(|a, b| a.0.cmp(&b.0));
        stats.processing_time = start_time.elapsed();

        info!(
            "Processed {} files ({} failed), {} rows in {:?}",
            stats.files_processed, stats.files_failed, stats.total_rows, stats.processing_time
        );

        Ok(stats)
    }

    fn progress_bar(&self, len: u64) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }

        let bar = ProgressBar::new(len);
        bar.set_style(
            ProgressStyle::with_template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files",
            )
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
        );
        bar
    }
}

#[cfg(test)]
mod tests;
