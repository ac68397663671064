use crate::constants::PDF_OUTPUT_PREFIX;
use crate::params::TargetFormat;
use std::path::{Path, PathBuf};

/// Derives the output path for a re-encoded image: the source base name
/// with its extension (whatever case it was) replaced by the target
/// format's, joined onto the output directory.
///
/// No collision handling: the output directory is flat, so two sources
/// sharing a stem end up at the same output path and the later one wins.
pub fn derive_output_path(source: &Path, output_dir: &Path, format: TargetFormat) -> PathBuf {
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    output_dir.join(format!("{}.{}", stem, format.extension()))
}

/// Output path for a compressed PDF: `compressed_` prefixed to the full
/// original file name, extension kept.
pub fn pdf_output_path(source: &Path, output_dir: &Path) -> PathBuf {
    let base = source
        .file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    output_dir.join(format!("{}{}", PDF_OUTPUT_PREFIX, base))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_output_path_replaces_extension() {
        let result = derive_output_path(
            Path::new("a/b/photo.PNG"),
            Path::new("out"),
            TargetFormat::Jpeg,
        );
        assert_eq!(result, PathBuf::from("out/photo.jpg"));
    }

    #[test]
    fn test_derive_output_path_webp() {
        let result = derive_output_path(
            Path::new("shots/screenshot.jpeg"),
            Path::new("./compressed"),
            TargetFormat::Webp,
        );
        assert_eq!(result, PathBuf::from("./compressed/screenshot.webp"));
    }

    #[test]
    fn test_derive_output_path_no_extension() {
        let result = derive_output_path(Path::new("dir/photo"), Path::new("out"), TargetFormat::Jpeg);
        assert_eq!(result, PathBuf::from("out/photo.jpg"));
    }

    #[test]
    fn test_derive_output_path_collision() {
        let a = derive_output_path(Path::new("a/x.png"), Path::new("out"), TargetFormat::Jpeg);
        let b = derive_output_path(Path::new("b/x.png"), Path::new("out"), TargetFormat::Jpeg);
        assert_eq!(a, b);
    }

    #[test]
    fn test_pdf_output_path_keeps_extension() {
        let result = pdf_output_path(Path::new("docs/report.pdf"), Path::new("out"));
        assert_eq!(result, PathBuf::from("out/compressed_report.pdf"));
    }
}
