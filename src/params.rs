use crate::constants::{LOSSLESS_PLACEHOLDER_QUALITY, MAX_QUALITY};
use crate::error::{CompressionError, Result};
use clap::ValueEnum;
use std::fmt;
use std::path::PathBuf;

/// Output formats the compressor can re-encode to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TargetFormat {
    /// Lossy JPEG with the fixed high-density encoder preset
    Jpeg,
    /// WebP, lossy or near-lossless
    Webp,
}

impl TargetFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            TargetFormat::Jpeg => "jpg",
            TargetFormat::Webp => "webp",
        }
    }
}

impl fmt::Display for TargetFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TargetFormat::Jpeg => "JPEG",
            TargetFormat::Webp => "WebP",
        };
        write!(f, "{}", name)
    }
}

/// Parses a user-supplied quality level. Accepts integers in [0, 100];
/// anything else fails with the raw input preserved for display.
pub fn parse_quality(input: &str) -> Result<u8> {
    match input.trim().parse::<i64>() {
        Ok(quality) if (0..=i64::from(MAX_QUALITY)).contains(&quality) => Ok(quality as u8),
        _ => Err(CompressionError::InvalidQuality(input.to_string())),
    }
}

/// Strips surrounding whitespace and shell quoting from a pasted path.
/// Windows file managers copy paths wrapped in double quotes, some Linux
/// terminals in single quotes. No existence check happens here; a bad
/// path fails later when the file is opened.
pub fn clean_path_input(input: &str) -> &str {
    input.trim().trim_matches('"').trim_matches('\'')
}

/// Validated compression parameters, shared by every file in a run.
#[derive(Debug, Clone)]
pub struct CompressionRequest {
    pub format: TargetFormat,
    pub quality: u8,
    pub lossless: bool,
    pub output_dir: PathBuf,
}

impl CompressionRequest {
    /// Standard lossy request at the given quality.
    pub fn lossy(format: TargetFormat, quality: u8, output_dir: PathBuf) -> Result<Self> {
        if quality > MAX_QUALITY {
            return Err(CompressionError::InvalidQuality(quality.to_string()));
        }
        Ok(Self {
            format,
            quality,
            lossless: false,
            output_dir,
        })
    }

    /// WebP near-lossless request. The recorded quality is a placeholder;
    /// the encoder ignores it in this mode.
    pub fn near_lossless(output_dir: PathBuf) -> Self {
        Self {
            format: TargetFormat::Webp,
            quality: LOSSLESS_PLACEHOLDER_QUALITY,
            lossless: true,
            output_dir,
        }
    }

    /// Builds a request from CLI arguments, enforcing that lossless mode
    /// is WebP-only and that lossy mode carries a quality level.
    pub fn from_cli(
        format: TargetFormat,
        quality: Option<u8>,
        lossless: bool,
        output_dir: PathBuf,
    ) -> Result<Self> {
        if lossless {
            if format == TargetFormat::Jpeg {
                return Err(CompressionError::LosslessUnsupported);
            }
            return Ok(Self::near_lossless(output_dir));
        }
        let quality =
            quality.ok_or_else(|| CompressionError::InvalidQuality(String::from("(none)")))?;
        Self::lossy(format, quality, output_dir)
    }
}
