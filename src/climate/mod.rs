//! Climate colormap lookup.
//!
//! When a vanilla biome does not declare an explicit grass or foliage color,
//! the game derives one from a small climate texture indexed by temperature
//! and downfall. This module mirrors that lookup over the two reference
//! textures shipped with the pack.

use image::RgbImage;
use std::path::Path;

use crate::color;
use crate::core::error::Result;

/// Returned when the climate coordinates fall outside the colormap.
///
/// This is `0xFFFF00FF` as a signed 32-bit value - the magenta the game
/// engine historically writes for "no color data". It is kept bit-exact so
/// generated biomes round-trip against engine output.
pub const MISSING_COLOR: i32 = -65281;

/// A climate colormap: a small RGB texture indexed by derived climate
/// coordinates.
pub struct ColorTable {
    pixels: RgbImage,
}

impl ColorTable {
    /// Load a colormap texture. A missing or unreadable file is fatal.
    pub fn load(path: &Path) -> Result<Self> {
        let pixels = image::open(path)?.to_rgb8();
        Ok(Self { pixels })
    }

    /// Wrap an already-decoded image (used by tests).
    pub fn from_image(pixels: RgbImage) -> Self {
        Self { pixels }
    }

    /// Look up the default color for a climate.
    ///
    /// Colder biomes sit further right in the texture, drier biomes further
    /// down; indices truncate toward zero. Any index outside the texture
    /// (negative ones included, which happen for temperatures above 1.0)
    /// yields [`MISSING_COLOR`] instead of an out-of-bounds access.
    pub fn color_at(&self, downfall: f64, temperature: f64) -> i32 {
        let x = ((1.0 - temperature) * 255.0) as i64;
        let y = ((1.0 - downfall * temperature) * 255.0) as i64;

        if x < 0 || y < 0 || x >= self.pixels.width() as i64 || y >= self.pixels.height() as i64 {
            return MISSING_COLOR;
        }

        let pixel = self.pixels.get_pixel(x as u32, y as u32);
        color::pack(pixel[0], pixel[1], pixel[2])
    }
}

/// The two colormaps a run needs, loaded together.
pub struct ClimateTables {
    pub grass: ColorTable,
    pub foliage: ColorTable,
}

impl ClimateTables {
    pub fn load(grass: &Path, foliage: &Path) -> Result<Self> {
        Ok(Self {
            grass: ColorTable::load(grass)?,
            foliage: ColorTable::load(foliage)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn test_looks_up_expected_cell() {
        // 256x256 gradient where every pixel encodes its own coordinates.
        let img = RgbImage::from_fn(256, 256, |x, y| Rgb([x as u8, y as u8, 0]));
        let table = ColorTable::from_image(img);

        // Hot and wet lands in the top-left corner.
        assert_eq!(table.color_at(1.0, 1.0), color::pack(0, 0, 0));
        // Freezing and dry lands in the bottom-right corner.
        assert_eq!(table.color_at(0.0, 0.0), color::pack(255, 255, 0));
        // Midpoints truncate toward zero.
        assert_eq!(table.color_at(1.0, 0.5), color::pack(127, 127, 0));
    }

    #[test]
    fn test_out_of_range_returns_sentinel() {
        let table = ColorTable::from_image(RgbImage::from_pixel(16, 16, Rgb([1, 2, 3])));

        // Beyond the right edge of a small table.
        assert_eq!(table.color_at(1.0, 0.0), MISSING_COLOR);
        // Negative column, which hot biomes (temperature > 1.0) produce.
        assert_eq!(table.color_at(0.0, 2.0), MISSING_COLOR);
        // Still in range near the origin.
        assert_eq!(table.color_at(1.0, 1.0), color::pack(1, 2, 3));
    }

    #[test]
    fn test_sentinel_is_engine_magenta() {
        assert_eq!(MISSING_COLOR, -65281);
        assert_eq!(color::unpack(MISSING_COLOR), (0xff, 0x00, 0xff));
    }
}
