//! JPEG encoding for `view` screenshots
//!
//! Screen grabs are sent to the caller as reduced-quality JPEG so a full
//! desktop raster stays small enough for a tool result.
//!
//! # Examples
//!
//! ```
//! use illustrator_mcp::{automation::ScreenRaster, util::encode::encode_jpeg};
//!
//! let raster = ScreenRaster::from_test_pattern(640, 360);
//! let jpeg = encode_jpeg(&raster, 50).unwrap();
//! assert_eq!(&jpeg[..2], &[0xFF, 0xD8]);
//! ```

use std::io::Cursor;

use image::{ImageEncoder, codecs::jpeg::JpegEncoder};

use crate::{
    automation::ScreenRaster,
    error::{AutomationError, AutomationResult},
};

/// MIME type of encoded screenshots
pub const JPEG_MIME_TYPE: &str = "image/jpeg";

/// Encodes a raster as JPEG with the given quality
///
/// Quality is clamped to 1-100. JPEG has no alpha channel, so the raster is
/// converted to RGB first.
pub fn encode_jpeg(raster: &ScreenRaster, quality: u8) -> AutomationResult<Vec<u8>> {
    let quality = quality.clamp(1, 100);

    if raster.is_empty() {
        return Err(AutomationError::EncodingFailed {
            format: "jpeg".to_string(),
            reason: "raster has zero width or height".to_string(),
        });
    }

    let rgb = raster.to_rgb8();
    let (width, height) = rgb.dimensions();

    let mut output = Vec::new();
    JpegEncoder::new_with_quality(Cursor::new(&mut output), quality)
        .write_image(rgb.as_raw(), width, height, image::ExtendedColorType::Rgb8)
        .map_err(|e| AutomationError::EncodingFailed {
            format: "jpeg".to_string(),
            reason: e.to_string(),
        })?;

    tracing::debug!(
        "Encoded {}x{} raster as JPEG (quality {}): {} bytes",
        width,
        height,
        quality,
        output.len()
    );

    Ok(output)
}
