pub mod batch;
pub mod cli;
pub mod codec;
pub mod compressor;
pub mod constants;
pub mod error;
pub mod logger;
pub mod naming;
pub mod params;
pub mod pdf;
pub mod utils;

pub use batch::{collect_matching_files, process_directory, BatchSummary};
pub use compressor::{compress_file, encode_buffer, FileTask};
pub use error::{CompressionError, Result};
pub use naming::{derive_output_path, pdf_output_path};
pub use params::{clean_path_input, parse_quality, CompressionRequest, TargetFormat};
pub use pdf::{compress_pdf, Ghostscript, PdfJob, PdfOptimizer};
