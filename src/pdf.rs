//! PDF compression via Ghostscript's `pdfwrite` device: raster content is
//! downsampled to 150 DPI and re-encoded, fonts are compressed, subset and
//! embedded, and duplicate images are detected, all inside the external
//! process. This module owns locating the binary, the temp-file write
//! discipline, and the before/after statistics.

use crate::error::{CompressionError, Result};
use crate::utils::{compression_ratio, validate_file_exists};
use crate::{info, verbose};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

/// Candidate binary names, probed in order ("gswin64c" is the Windows
/// console build).
const GHOSTSCRIPT_CANDIDATES: &[&str] = &["gs", "gswin64c"];

/// Fixed optimization flags passed to every invocation.
const GHOSTSCRIPT_ARGS: &[&str] = &[
    "-sDEVICE=pdfwrite",
    "-dCompatibilityLevel=1.4",
    "-dPDFSETTINGS=/default",
    "-dQUIET",
    "-dDetectDuplicateImages",
    "-dCompressFonts=true",
    "-dSubsetFonts=true",
    "-dCompressPages=true",
    "-dEmbedAllFonts=true",
    "-dMaxInlineImageSize=4000",
    "-dDownsampleColorImages=true",
    "-dColorImageResolution=150",
    "-dDownsampleGrayImages=true",
    "-dGrayImageResolution=150",
    "-dDownsampleMonoImages=true",
    "-dMonoImageResolution=150",
];

/// Narrow boundary around the external optimizer so the subprocess is
/// swappable and mockable; batch policy never spawns processes itself.
pub trait PdfOptimizer {
    fn optimize(&self, input: &Path, output: &Path) -> Result<()>;
}

pub struct Ghostscript {
    program: &'static str,
}

impl Ghostscript {
    /// Probes the candidate binary names and returns the first that runs.
    pub fn locate() -> Result<Self> {
        for candidate in GHOSTSCRIPT_CANDIDATES {
            let probe = Command::new(candidate)
                .arg("--version")
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .status();
            if matches!(probe, Ok(status) if status.success()) {
                return Ok(Self { program: candidate });
            }
        }
        Err(CompressionError::ToolNotFound("ghostscript"))
    }

    pub fn program(&self) -> &str {
        self.program
    }
}

impl PdfOptimizer for Ghostscript {
    fn optimize(&self, input: &Path, output: &Path) -> Result<()> {
        verbose!("Running {} on {:?}", self.program, input);

        let result = Command::new(self.program)
            .args(GHOSTSCRIPT_ARGS)
            .arg("-o")
            .arg(output)
            .arg(input)
            .output()?;

        if !result.status.success() {
            let mut combined = String::from_utf8_lossy(&result.stdout).into_owned();
            combined.push_str(&String::from_utf8_lossy(&result.stderr));
            return Err(CompressionError::ToolExecution(
                combined.trim().to_string(),
            ));
        }

        Ok(())
    }
}

/// Statistics for one completed PDF compression run.
#[derive(Debug)]
pub struct PdfJob {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub original_size: u64,
    pub compressed_size: u64,
    pub elapsed: Duration,
}

impl PdfJob {
    /// Size reduction percentage; negative when the optimized file grew
    /// (e.g. an already-optimized input), reported unclamped.
    pub fn ratio(&self) -> f64 {
        compression_ratio(self.original_size, self.compressed_size)
    }
}

/// Compresses one PDF. The optimizer writes to a `.tmp` sibling which is
/// renamed onto the final path only on success, so the final path is never
/// left partially written; on failure only the `.tmp` file may remain.
pub fn compress_pdf(
    optimizer: &dyn PdfOptimizer,
    input: &Path,
    output: &Path,
) -> Result<PdfJob> {
    validate_file_exists(input)?;
    if let Some(parent) = output.parent() {
        fs::create_dir_all(parent)
            .map_err(|_| CompressionError::DirectoryCreationFailed(parent.to_path_buf()))?;
    }

    let start = Instant::now();
    let original_size = fs::metadata(input)?.len();

    let temp_path = temp_sibling(output);
    optimizer.optimize(input, &temp_path)?;
    fs::rename(&temp_path, output)?;

    let compressed_size = fs::metadata(output)?.len();

    Ok(PdfJob {
        input_path: input.to_path_buf(),
        output_path: output.to_path_buf(),
        original_size,
        compressed_size,
        elapsed: start.elapsed(),
    })
}

pub fn print_job_report(job: &PdfJob) {
    info!("📄 Original file: {:?}", job.input_path);
    info!("📊 Original size: {} bytes", job.original_size);
    info!("📄 Optimized file: {:?}", job.output_path);
    info!("📈 Optimized size: {} bytes", job.compressed_size);
    info!("🎯 Compression ratio: {:.2}%", job.ratio());
    info!("⏱️  Processing time: {:.2} ms", job.elapsed.as_secs_f64() * 1000.0);
}

fn temp_sibling(output: &Path) -> PathBuf {
    let mut tmp = output.as_os_str().to_os_string();
    tmp.push(".tmp");
    PathBuf::from(tmp)
}
