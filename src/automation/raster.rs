//! Screen raster wrapper
//!
//! [`ScreenRaster`] wraps an `image::DynamicImage` holding one full-screen
//! grab. It is allocated per `view` call and dropped once the JPEG bytes have
//! been produced.

use image::{DynamicImage, GenericImageView, RgbImage, RgbaImage};

/// Full-screen pixel grab returned by an automation channel
#[derive(Clone, Debug)]
pub struct ScreenRaster {
    inner: DynamicImage,
}

impl ScreenRaster {
    /// Wraps an already decoded image
    pub fn new(image: DynamicImage) -> Self {
        Self { inner: image }
    }

    /// Wraps an RGBA buffer, as produced by screen capture libraries
    pub fn from_rgba(image: RgbaImage) -> Self {
        Self::new(DynamicImage::ImageRgba8(image))
    }

    /// Generates a synthetic screen: an orange-to-white horizontal gradient
    /// with a dark "artboard" rectangle in the middle
    ///
    /// # Examples
    ///
    /// ```
    /// use illustrator_mcp::automation::ScreenRaster;
    ///
    /// let raster = ScreenRaster::from_test_pattern(320, 200);
    /// assert_eq!(raster.dimensions(), (320, 200));
    /// ```
    pub fn from_test_pattern(width: u32, height: u32) -> Self {
        let board = (width / 4, height / 4, width * 3 / 4, height * 3 / 4);

        let img = RgbaImage::from_fn(width, height, |x, y| {
            if x >= board.0 && x < board.2 && y >= board.1 && y < board.3 {
                return image::Rgba([40, 40, 40, 255]);
            }
            let ratio = x as f32 / width.max(1) as f32;
            image::Rgba([
                255,
                (154.0 + 101.0 * ratio) as u8,
                (101.0 * ratio * 2.5).min(255.0) as u8,
                255,
            ])
        });

        Self::from_rgba(img)
    }

    /// Returns `(width, height)` in pixels
    pub fn dimensions(&self) -> (u32, u32) {
        self.inner.dimensions()
    }

    /// Whether the raster has no pixels
    pub fn is_empty(&self) -> bool {
        let (width, height) = self.dimensions();
        width == 0 || height == 0
    }

    /// Converts to 8-bit RGB, dropping any alpha channel
    pub fn to_rgb8(&self) -> RgbImage {
        self.inner.to_rgb8()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_test_pattern_dimensions() {
        let raster = ScreenRaster::from_test_pattern(1920, 1080);
        assert_eq!(raster.dimensions(), (1920, 1080));
        assert!(!raster.is_empty());
    }

    #[test]
    fn test_test_pattern_has_artboard() {
        let raster = ScreenRaster::from_test_pattern(100, 100);
        let rgb = raster.to_rgb8();
        assert_eq!(rgb.get_pixel(50, 50).0, [40, 40, 40]);
        assert_eq!(rgb.get_pixel(0, 0).0[0], 255);
    }

    #[test]
    fn test_empty_raster() {
        let raster = ScreenRaster::new(DynamicImage::new_rgb8(0, 0));
        assert!(raster.is_empty());
    }

    #[test]
    fn test_to_rgb8_drops_alpha() {
        let raster = ScreenRaster::from_test_pattern(10, 10);
        let rgb = raster.to_rgb8();
        assert_eq!(rgb.as_raw().len(), 10 * 10 * 3);
    }
}
