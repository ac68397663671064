use std::fs;
use std::io::Cursor;
use std::path::Path;
use tempfile::TempDir;

/// Writes a small real PNG (decodable by the image crate) at `path`.
pub fn write_test_png(path: &Path, width: u32, height: u32) {
    let img = image::DynamicImage::ImageRgb8(image::RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x * 7 % 256) as u8, (y * 11 % 256) as u8, ((x + y) % 256) as u8])
    }));
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
        .unwrap();
    fs::write(path, bytes).unwrap();
}

pub fn create_temp_directory() -> TempDir {
    TempDir::new().unwrap()
}
