//! Near-white background removal.
//!
//! Imagery tiles arrive with a white paper-like background around the
//! rendered scene. Stacking two such layers washes the map out, so
//! background pixels get their alpha cleared before compositing.

use image::RgbaImage;

/// Luminosity above which a pixel can count as background.
pub const DEFAULT_LUMA_MIN: f32 = 220.0;

/// Channel spread below which a pixel counts as unsaturated.
pub const DEFAULT_SPREAD_MAX: u8 = 30;

/// Per-pixel rule that clears the alpha of near-white, low-saturation
/// pixels.
///
/// The defaults match the tuning the imagery was produced for; both
/// thresholds are plain fields for callers that need to retune.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Whiteout {
    /// Pixels at or below this luminosity are kept.
    pub luma_min: f32,

    /// Pixels with a channel spread at or above this are kept, no
    /// matter how bright.
    pub spread_max: u8,
}

impl Default for Whiteout {
    fn default() -> Self {
        Self {
            luma_min: DEFAULT_LUMA_MIN,
            spread_max: DEFAULT_SPREAD_MAX,
        }
    }
}

impl Whiteout {
    /// Returns whether a pixel reads as white background.
    ///
    /// Bright but saturated pixels (snow shadows, smoke plumes, burn
    /// scars on light soil) have a wide channel spread and are kept.
    pub fn is_background(&self, [r, g, b]: [u8; 3]) -> bool {
        let spread = r.max(g).max(b) - r.min(g).min(b);
        luma(r, g, b) > self.luma_min && spread < self.spread_max
    }

    /// Clears the alpha of background pixels in place.
    ///
    /// Color channels and dimensions are untouched; non-background
    /// pixels keep whatever alpha they had. Each tile is independent,
    /// so this can run once per loaded tile in any order.
    pub fn apply(&self, image: &mut RgbaImage) {
        for pixel in image.pixels_mut() {
            let [r, g, b, _] = pixel.0;
            if self.is_background([r, g, b]) {
                pixel.0[3] = 0;
            }
        }
    }
}

/// Rec. 601 luminosity.
fn luma(r: u8, g: u8, b: u8) -> f32 {
    0.299 * f32::from(r) + 0.587 * f32::from(g) + 0.114 * f32::from(b)
}

#[cfg(test)]
mod tests {
    use super::Whiteout;
    use image::{Rgba, RgbaImage};

    #[test]
    fn test_white_goes_transparent() {
        let mut image = RgbaImage::from_pixel(2, 2, Rgba([255, 255, 255, 255]));
        Whiteout::default().apply(&mut image);
        for pixel in image.pixels() {
            assert_eq!(pixel.0, [255, 255, 255, 0]);
        }
    }

    #[test]
    fn test_saturated_pixels_keep_their_alpha() {
        let mut image = RgbaImage::from_pixel(1, 1, Rgba([0, 255, 0, 255]));
        Whiteout::default().apply(&mut image);
        assert_eq!(image.get_pixel(0, 0).0, [0, 255, 0, 255]);
    }

    #[test]
    fn test_spread_threshold_is_exclusive() {
        let whiteout = Whiteout::default();
        // Spread of exactly 30 stays, 29 goes.
        assert!(!whiteout.is_background([255, 255, 225]));
        assert!(whiteout.is_background([255, 255, 226]));
    }

    #[test]
    fn test_luma_threshold_is_exclusive() {
        let whiteout = Whiteout::default();
        assert!(whiteout.is_background([221, 221, 221]));
        assert!(!whiteout.is_background([219, 219, 219]));
    }

    #[test]
    fn test_partial_alpha_is_preserved_on_kept_pixels() {
        let mut image = RgbaImage::from_pixel(1, 1, Rgba([0, 255, 0, 128]));
        Whiteout::default().apply(&mut image);
        assert_eq!(image.get_pixel(0, 0).0[3], 128);
    }

    #[test]
    fn test_only_alpha_ever_changes() {
        let mut image = RgbaImage::new(4, 4);
        for (x, y, pixel) in image.enumerate_pixels_mut() {
            *pixel = Rgba([
                (x * 60) as u8,
                (y * 60) as u8,
                ((x + y) * 30) as u8,
                200,
            ]);
        }
        let before = image.clone();
        Whiteout::default().apply(&mut image);
        assert_eq!(image.dimensions(), before.dimensions());
        for (after, original) in image.pixels().zip(before.pixels()) {
            assert_eq!(after.0[..3], original.0[..3]);
        }
    }
}
