use crate::compressor::FileTask;
use crate::error::{CompressionError, Result};
use crate::params::CompressionRequest;
use crate::utils::{compression_ratio, format_file_size};
use crate::{error, info, verbose, warn};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use walkdir::WalkDir;

/// Outcome of a fully successful directory walk.
#[derive(Debug)]
pub struct BatchSummary {
    pub files_processed: usize,
    pub total_size_before: u64,
    pub total_size_after: u64,
    pub elapsed: Duration,
}

/// Recursively collects files under `input_dir` whose name ends with the
/// literal `suffix` (".jpg" matches "photo.jpg", not "photo.jpg.bak").
/// Not a glob and not case-folded. Entries are sorted by file name so runs
/// and reports are deterministic.
pub fn collect_matching_files(input_dir: &Path, suffix: &str) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(input_dir).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        if entry.file_name().to_string_lossy().ends_with(suffix) {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

/// Compresses every matching file under `input_dir`, one at a time.
///
/// Fail-fast: the first error aborts the walk and is returned. Outputs
/// already written stay on disk; files not yet visited are never touched.
pub fn process_directory(
    suffix: &str,
    input_dir: &Path,
    request: &CompressionRequest,
) -> Result<BatchSummary> {
    info!("🚀 Starting batch compression...");
    info!("📁 Input: {:?}", input_dir);
    info!("📁 Output: {:?}", request.output_dir);

    let start_time = Instant::now();

    let files = collect_matching_files(input_dir, suffix)?;
    if files.is_empty() {
        warn!("No files matching {:?} found in {:?}", suffix, input_dir);
        return Ok(BatchSummary {
            files_processed: 0,
            total_size_before: 0,
            total_size_after: 0,
            elapsed: start_time.elapsed(),
        });
    }

    info!("📊 Found {} files to process", files.len());

    fs::create_dir_all(&request.output_dir)
        .map_err(|_| CompressionError::DirectoryCreationFailed(request.output_dir.clone()))?;

    let progress = ProgressBar::new(files.len() as u64);
    progress.set_style(ProgressStyle::default_bar());

    let mut files_processed = 0;
    let mut total_size_before = 0u64;
    let mut total_size_after = 0u64;

    for path in &files {
        verbose!("Processing {:?}", path);
        let task = FileTask::new(path.clone(), request);
        match task.run() {
            Ok((before, after)) => {
                total_size_before += before;
                total_size_after += after;
                files_processed += 1;
                progress.inc(1);
            }
            Err(e) => {
                progress.abandon();
                error!("Failed to process {:?}", path);
                return Err(e);
            }
        }
    }

    progress.finish_with_message("✅ Batch compression complete");

    let summary = BatchSummary {
        files_processed,
        total_size_before,
        total_size_after,
        elapsed: start_time.elapsed(),
    };
    print_summary(&summary);
    Ok(summary)
}

fn print_summary(summary: &BatchSummary) {
    info!("\n📊 Batch Compression Summary:");
    info!("  📁 Files processed: {}", summary.files_processed);
    info!(
        "  📊 Total original size: {}",
        format_file_size(summary.total_size_before)
    );
    info!(
        "  📈 Total compressed size: {}",
        format_file_size(summary.total_size_after)
    );
    info!(
        "  🎯 Overall compression ratio: {:.1}%",
        compression_ratio(summary.total_size_before, summary.total_size_after)
    );
    info!("  ⏱️  Total time: {:?}", summary.elapsed);
}
