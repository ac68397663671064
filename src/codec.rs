//! Image codec boundary: decode, orientation correction, and the JPEG and
//! WebP encoders. Everything here produces fully buffered byte vectors;
//! nothing touches the filesystem, so callers can write atomically (or not
//! at all on failure).

use crate::constants::NEAR_LOSSLESS_LEVEL;
use crate::error::{CompressionError, Result};
use image::metadata::Orientation;
use image::{DynamicImage, ImageDecoder, ImageReader};
use std::io::Cursor;
use std::panic::{catch_unwind, AssertUnwindSafe};

/// Decodes an in-memory image and applies any EXIF orientation so the
/// pixels are upright before re-encoding. Orientation handling is
/// best-effort: files without the metadata pass through untouched.
pub fn decode_auto_oriented(buffer: &[u8]) -> Result<DynamicImage> {
    let reader = ImageReader::new(Cursor::new(buffer)).with_guessed_format()?;
    let mut decoder = reader.into_decoder()?;
    let orientation = decoder
        .orientation()
        .unwrap_or(Orientation::NoTransforms);
    let mut img = DynamicImage::from_decoder(decoder)?;
    img.apply_orientation(orientation);
    Ok(img)
}

/// Encodes to JPEG with the fixed "maximum density at acceptable visual
/// cost" preset: 4:2:0 chroma subsampling, trellis quantization and
/// overshoot deringing (mozjpeg defaults), the ImageMagick quantization
/// table, and optimized progressive scans. Only the quality level varies.
pub fn encode_jpeg(img: &DynamicImage, quality: u8) -> Result<Vec<u8>> {
    let rgb = img.to_rgb8();
    let (width, height) = rgb.dimensions();

    // mozjpeg reports internal errors by unwinding, so the whole encode
    // runs under catch_unwind per the crate's documentation.
    let encoded = catch_unwind(AssertUnwindSafe(|| -> std::io::Result<Vec<u8>> {
        let mut comp = mozjpeg::Compress::new(mozjpeg::ColorSpace::JCS_RGB);
        comp.set_size(width as usize, height as usize);
        comp.set_quality(f32::from(quality));
        comp.set_progressive_mode();
        comp.set_optimize_scans(true);
        comp.set_luma_qtable(&mozjpeg::qtable::ImageMagick);
        comp.set_chroma_qtable(&mozjpeg::qtable::ImageMagick);

        let mut started = comp.start_compress(Vec::new())?;
        started.write_scanlines(rgb.as_raw())?;
        started.finish()
    }));

    match encoded {
        Ok(Ok(bytes)) => Ok(bytes),
        Ok(Err(e)) => Err(CompressionError::Encode(e.to_string())),
        Err(_) => Err(CompressionError::Encode(String::from(
            "JPEG encoder aborted",
        ))),
    }
}

/// Encodes to WebP. With `lossless` set, uses libwebp's near-lossless
/// mode (perceptually lossless, still smaller than true lossless) and
/// ignores the numeric quality; otherwise standard lossy encoding.
pub fn encode_webp(img: &DynamicImage, quality: u8, lossless: bool) -> Result<Vec<u8>> {
    // The WebP encoder only accepts 8-bit RGB/RGBA buffers.
    let converted;
    let source = match img {
        DynamicImage::ImageRgb8(_) | DynamicImage::ImageRgba8(_) => img,
        _ => {
            converted = DynamicImage::ImageRgba8(img.to_rgba8());
            &converted
        }
    };

    let encoder = webp::Encoder::from_image(source)
        .map_err(|e| CompressionError::Encode(e.to_string()))?;

    let memory = if lossless {
        let mut config = webp::WebPConfig::new()
            .map_err(|_| CompressionError::Encode(String::from("WebP config init failed")))?;
        config.lossless = 1;
        config.near_lossless = NEAR_LOSSLESS_LEVEL;
        config.quality = 100.0;
        encoder
            .encode_advanced(&config)
            .map_err(|e| CompressionError::Encode(format!("{:?}", e)))?
    } else {
        encoder.encode(f32::from(quality))
    };

    Ok(memory.to_vec())
}
