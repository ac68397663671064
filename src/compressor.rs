use crate::codec;
use crate::error::{CompressionError, Result};
use crate::naming::derive_output_path;
use crate::params::{CompressionRequest, TargetFormat};
use crate::utils::{create_progress_spinner, print_compression_result, validate_file_exists};
use crate::{info, verbose};
use std::fs;
use std::path::{Path, PathBuf};

/// One resolved unit of work: a source file, its derived output path, and
/// the shared request parameters. Created by the directory walker (one per
/// matching file) or directly for single-file mode, and consumed once.
#[derive(Debug)]
pub struct FileTask<'a> {
    pub source: PathBuf,
    pub output: PathBuf,
    pub request: &'a CompressionRequest,
}

impl<'a> FileTask<'a> {
    pub fn new(source: PathBuf, request: &'a CompressionRequest) -> Self {
        let output = derive_output_path(&source, &request.output_dir, request.format);
        Self {
            source,
            output,
            request,
        }
    }

    /// Reads the source fully into memory, re-encodes it, and writes the
    /// output file. Returns (original, compressed) sizes in bytes.
    pub fn run(&self) -> Result<(u64, u64)> {
        let buffer = fs::read(&self.source)?;
        let encoded = encode_buffer(&buffer, self.request)?;
        fs::write(&self.output, &encoded)
            .map_err(|e| CompressionError::Write(self.output.clone(), e))?;
        Ok((buffer.len() as u64, encoded.len() as u64))
    }
}

/// Recompresses raw image bytes per the request. The result is fully
/// buffered; nothing is written until the encode has succeeded, so a
/// failed encode never leaves a partial output file behind.
pub fn encode_buffer(buffer: &[u8], request: &CompressionRequest) -> Result<Vec<u8>> {
    let img = codec::decode_auto_oriented(buffer)?;
    match request.format {
        TargetFormat::Jpeg => codec::encode_jpeg(&img, request.quality),
        TargetFormat::Webp => codec::encode_webp(&img, request.quality, request.lossless),
    }
}

/// Single-file entry point: validates the input, ensures the output
/// directory exists, compresses, and reports sizes.
pub fn compress_file(input: &Path, request: &CompressionRequest) -> Result<PathBuf> {
    validate_file_exists(input)?;
    fs::create_dir_all(&request.output_dir)
        .map_err(|_| CompressionError::DirectoryCreationFailed(request.output_dir.clone()))?;

    info!("🗜️  Compressing image: {:?}", input);
    verbose!(
        "Target: {} (quality {}, lossless: {})",
        request.format,
        request.quality,
        request.lossless
    );

    let pb = create_progress_spinner("Compressing...");
    let task = FileTask::new(input.to_path_buf(), request);
    let (original_size, compressed_size) = task.run()?;
    pb.finish_with_message("✅ Compression complete");

    print_compression_result(original_size, compressed_size);
    Ok(task.output)
}
