/// Default output directory for compressed files. Threaded explicitly
/// through every entry point; overridable with `--output-dir`.
pub const DEFAULT_OUTPUT_DIR: &str = "./compressed";

pub const MAX_QUALITY: u8 = 100;

/// Placeholder quality recorded on near-lossless requests. The encoder
/// ignores it; it only exists so a request always carries a value.
pub const LOSSLESS_PLACEHOLDER_QUALITY: u8 = 50;

/// Preprocessing level for WebP near-lossless mode (0 = max preprocessing,
/// 100 = fully lossless). 60 keeps the output visually indistinguishable
/// while still shaving bytes.
pub const NEAR_LOSSLESS_LEVEL: i32 = 60;

/// Prefix for compressed PDF output names; the original extension is kept.
pub const PDF_OUTPUT_PREFIX: &str = "compressed_";

pub const PROGRESS_SPINNER_TEMPLATE: &str = "{spinner:.green} {msg}";
