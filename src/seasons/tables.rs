//! Fixed recoloring and temperature tables for the seasonal derivation.
//!
//! Tint deltas are additive HSV shifts: hue in degrees, saturation and value
//! as fractions.

use super::{BiomeKind, Season};
use crate::color::HsvDelta;

// Fixed replacement colors.
pub const SNOWY_GROUND: &str = "F4FEFF";
pub const SNOWY_LEAVES: &str = "FFFFFF";
pub const WINTER_BRANCHES: &str = "7C6952";
pub const FLOWERING_LEAVES: &str = "FF8CAF";

// Grass tints per season.
pub const FALL_GRASS: HsvDelta = HsvDelta::new(-35.0, -0.25, -0.05);
pub const WINTER_GRASS: HsvDelta = HsvDelta::new(-38.0, -0.55, -0.05);
pub const SPRING_GRASS: HsvDelta = HsvDelta::new(1.0, -0.10, 0.0);

// Foliage tints.
pub const EARLY_FALL_LEAVES: HsvDelta = HsvDelta::new(-59.0, -0.10, 0.32);
pub const LATE_FALL_LEAVES: HsvDelta = HsvDelta::new(-97.0, 0.11, -0.16);
pub const SPRING_LEAVES: HsvDelta = HsvDelta::new(0.0, 0.05, 0.32);

// Temperature shifts relative to the summer baseline.
pub const FALL_TEMPERATURE: f64 = -0.4;
pub const WINTER_TEMPERATURE: f64 = -0.8;
pub const SPRING_TEMPERATURE: f64 = -0.3;

/// Temperature shift that normalizes a non-summer template toward its
/// summer-equivalent baseline, used when a mapping has no summer template.
pub fn to_summer_temperature(kind: BiomeKind, season: Season) -> f64 {
    match kind {
        BiomeKind::Default => match season {
            Season::Summer => 0.0,
            Season::Fall => -FALL_TEMPERATURE,
            Season::Winter => -WINTER_TEMPERATURE,
            Season::Spring => -SPRING_TEMPERATURE,
        },
        // Summer-rains biomes keep their template temperature until the
        // seasonal behavior for them lands.
        BiomeKind::SummerRains => 0.0,
    }
}
