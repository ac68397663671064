use crate::constants::DEFAULT_OUTPUT_DIR;
use crate::params::{parse_quality, TargetFormat};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "shrinkit",
    about = "A batch image and PDF recompression tool",
    long_about = "shrinkit re-encodes images to JPEG or WebP at a chosen quality level \
                  (or near-losslessly for WebP) and shrinks PDFs by recompressing their \
                  embedded raster content and subsetting fonts via Ghostscript. \
                  Files are processed one at a time; the first failure aborts a batch.",
    version,
    after_help = "EXAMPLES:\n  \
    shrinkit compress photo.png -q 85 -o ./compressed\n  \
    shrinkit compress photo.png -f webp --lossless\n  \
    shrinkit batch ./photos -t .png -f webp -q 80\n  \
    shrinkit pdf report.pdf -o ./compressed"
)]
pub struct Args {
    #[arg(long, global = true, help = "Suppress informational output")]
    pub quiet: bool,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(
        about = "Recompress a single image file",
        long_about = "Re-encode one image to the target format. JPEG output uses a fixed \
                      high-density encoder preset; WebP supports lossy and near-lossless modes."
    )]
    Compress {
        #[arg(help = "Input image file path")]
        input: String,

        #[arg(
            short,
            long,
            value_enum,
            default_value_t = TargetFormat::Jpeg,
            help = "Output format"
        )]
        format: TargetFormat,

        #[arg(
            short,
            long,
            value_parser = parse_quality,
            required_unless_present = "lossless",
            help = "Compression quality (0-100)"
        )]
        quality: Option<u8>,

        #[arg(
            short,
            long,
            help = "WebP near-lossless mode (quality is ignored)",
            long_help = "Encode WebP in near-lossless mode: perceptually lossless output \
                         that is still smaller than true lossless. WebP only."
        )]
        lossless: bool,

        #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR, help = "Output directory")]
        output_dir: PathBuf,
    },

    #[command(
        about = "Recompress every matching file under a directory",
        long_about = "Recursively walk a directory and recompress every file whose name ends \
                      with the given suffix, sequentially. The first failure aborts the batch; \
                      outputs already written stay on disk."
    )]
    Batch {
        #[arg(help = "Input directory path")]
        input: String,

        #[arg(
            short = 't',
            long,
            help = "File name suffix to match (e.g. .jpg, .png)",
            long_help = "Literal suffix match against file names, not a glob: \
                         '.jpg' matches 'photo.jpg' but not 'photo.jpg.bak'."
        )]
        file_type: String,

        #[arg(
            short,
            long,
            value_enum,
            default_value_t = TargetFormat::Jpeg,
            help = "Output format"
        )]
        format: TargetFormat,

        #[arg(
            short,
            long,
            value_parser = parse_quality,
            required_unless_present = "lossless",
            help = "Compression quality (0-100)"
        )]
        quality: Option<u8>,

        #[arg(short, long, help = "WebP near-lossless mode (quality is ignored)")]
        lossless: bool,

        #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR, help = "Output directory")]
        output_dir: PathBuf,
    },

    #[command(
        about = "Compress a PDF file with Ghostscript",
        long_about = "Rewrite a PDF with embedded images downsampled to 150 DPI, fonts \
                      compressed/subset, and duplicate images detected. Requires a \
                      Ghostscript installation (gs or gswin64c on PATH). The output is \
                      written as compressed_<name>.pdf in the output directory."
    )]
    Pdf {
        #[arg(help = "Input PDF file path")]
        input: String,

        #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR, help = "Output directory")]
        output_dir: PathBuf,
    },
}
