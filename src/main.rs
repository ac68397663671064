use clap::Parser;
use shrinkit::cli::{Args, Commands};
use shrinkit::params::{clean_path_input, CompressionRequest};
use shrinkit::{batch, compressor, info, logger, naming, pdf};
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logger::init(args.quiet, args.verbose);

    match args.command {
        Commands::Compress {
            input,
            format,
            quality,
            lossless,
            output_dir,
        } => {
            let request = CompressionRequest::from_cli(format, quality, lossless, output_dir)?;
            let input = PathBuf::from(clean_path_input(&input));
            let output = compressor::compress_file(&input, &request)?;
            info!("✅ Compressed image saved as: {:?}", output);
        }
        Commands::Batch {
            input,
            file_type,
            format,
            quality,
            lossless,
            output_dir,
        } => {
            let request = CompressionRequest::from_cli(format, quality, lossless, output_dir)?;
            let input = PathBuf::from(clean_path_input(&input));
            batch::process_directory(&file_type, &input, &request)?;
        }
        Commands::Pdf { input, output_dir } => {
            let input = PathBuf::from(clean_path_input(&input));
            let output = naming::pdf_output_path(&input, &output_dir);
            let ghostscript = pdf::Ghostscript::locate()?;
            let job = pdf::compress_pdf(&ghostscript, &input, &output)?;
            pdf::print_job_report(&job);
        }
    }

    Ok(())
}
