//! Image sampling for glyph weights
//!
//! The backing image is stretched over the whole page at a fixed pixel
//! density, so pixel `(x, y)` covers millimetre `(x, y) / pixels_per_mm`.

use anyhow::{Context, Result};
use image::imageops::FilterType;
use image::{DynamicImage, GrayImage, RgbImage};
use std::path::Path;
use tracing::{debug, info};

/// Read access to page pixels
pub trait PageSampler {
    /// Page size in pixels
    fn dimensions(&self) -> (u32, u32);

    /// Gray value at a pixel, 0 is black
    fn brightness(&self, x: u32, y: u32) -> u8;

    fn color(&self, x: u32, y: u32) -> [u8; 3];
}

/// Pixel grid sized to the page, built from any image
pub struct ImageSampler {
    gray: GrayImage,
    rgb: RgbImage,
}

impl ImageSampler {
    /// Load, enhance and resize an image file
    pub fn open(path: impl AsRef<Path>, width: u32, height: u32, contrast: f32) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading image from: {:?}", path);
        let img = image::open(path)
            .with_context(|| format!("Failed to load image {}", path.display()))?;
        info!(
            "Loaded image {}x{} from {:?}, sampling at {}x{}",
            img.width(),
            img.height(),
            path,
            width,
            height
        );
        Ok(Self::from_image(&img, width, height, contrast))
    }

    /// Enhance contrast by `contrast` (1.0 keeps the image unchanged) and resize to the page grid
    pub fn from_image(img: &DynamicImage, width: u32, height: u32, contrast: f32) -> Self {
        let enhanced = if (contrast - 1.0).abs() > f32::EPSILON {
            img.adjust_contrast(contrast_percent(contrast))
        } else {
            img.clone()
        };
        let resized = enhanced.resize_exact(width.max(1), height.max(1), FilterType::Triangle);
        Self {
            gray: resized.to_luma8(),
            rgb: resized.to_rgb8(),
        }
    }
}

/// `image` scales contrast by `((100 + c) / 100)^2`; solve for a plain factor
fn contrast_percent(factor: f32) -> f32 {
    (factor.max(0.0).sqrt() - 1.0) * 100.0
}

impl PageSampler for ImageSampler {
    fn dimensions(&self) -> (u32, u32) {
        self.gray.dimensions()
    }

    fn brightness(&self, x: u32, y: u32) -> u8 {
        self.gray.get_pixel(x, y).0[0]
    }

    fn color(&self, x: u32, y: u32) -> [u8; 3] {
        self.rgb.get_pixel(x, y).0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn test_resizes_to_page_grid() {
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(40, 20, Rgb([10, 20, 30])));
        let sampler = ImageSampler::from_image(&img, 210, 297, 1.0);
        assert_eq!(sampler.dimensions(), (210, 297));
        assert_eq!(sampler.color(209, 296), [10, 20, 30]);
    }

    #[test]
    fn test_black_and_white_survive_contrast() {
        let mut img = RgbImage::from_pixel(2, 1, Rgb([0, 0, 0]));
        img.put_pixel(1, 0, Rgb([255, 255, 255]));
        let sampler = ImageSampler::from_image(&DynamicImage::ImageRgb8(img), 2, 1, 1.5);
        assert_eq!(sampler.brightness(0, 0), 0);
        assert_eq!(sampler.brightness(1, 0), 255);
    }

    #[test]
    fn test_contrast_factor_conversion() {
        assert!(contrast_percent(1.0).abs() < 1e-6);
        assert!((contrast_percent(4.0) - 100.0).abs() < 1e-4);
    }

    #[test]
    fn test_open_reports_missing_file() {
        let err = ImageSampler::open("/nonexistent/picture.png", 10, 10, 1.5)
            .err()
            .expect("missing file must fail");
        assert!(err.to_string().contains("Failed to load image"));
    }
}
