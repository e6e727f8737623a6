//! Packed-integer color math.
//!
//! Biome colors travel through the pack as 24-bit packed integers
//! (`0xRRGGBB`) stored in signed 32-bit fields. Seasonal recoloring is
//! expressed as additive shifts in HSV space.

use palette::{FromColor, Hsv, Srgb};

use crate::core::error::{Result, SeasonError};

/// Pack three 8-bit channels into `0xRRGGBB`.
pub fn pack(r: u8, g: u8, b: u8) -> i32 {
    ((r as i32) << 16) | ((g as i32) << 8) | (b as i32)
}

/// Split a packed color back into channels.
///
/// Only the low 24 bits are read, so values with sign bits set (the climate
/// lookup sentinel among them) unpack without complaint.
pub fn unpack(color: i32) -> (u8, u8, u8) {
    (
        ((color >> 16) & 0xff) as u8,
        ((color >> 8) & 0xff) as u8,
        (color & 0xff) as u8,
    )
}

/// Parse a six-digit `RRGGBB` hex string.
pub fn from_hex(s: &str) -> Result<i32> {
    if s.len() != 6 || !s.is_ascii() {
        return Err(SeasonError::InvalidHexColor(s.to_string()));
    }
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&s[range], 16).map_err(|_| SeasonError::InvalidHexColor(s.to_string()))
    };
    Ok(pack(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// Additive shift in HSV space.
///
/// Hue is in degrees and wraps; saturation and value are fractions and are
/// clamped to [0, 1] after the shift.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HsvDelta {
    pub hue: f32,
    pub saturation: f32,
    pub value: f32,
}

impl HsvDelta {
    pub const fn new(hue: f32, saturation: f32, value: f32) -> Self {
        Self {
            hue,
            saturation,
            value,
        }
    }

    pub const ZERO: HsvDelta = HsvDelta::new(0.0, 0.0, 0.0);
}

/// Shift a packed color by `delta` in HSV space and repack it.
pub fn tint(color: i32, delta: HsvDelta) -> i32 {
    let (r, g, b) = unpack(color);
    let rgb = Srgb::new(r, g, b).into_format::<f32>();

    let mut hsv = Hsv::from_color(rgb);
    hsv.hue = hsv.hue + delta.hue;
    hsv.saturation = (hsv.saturation + delta.saturation).clamp(0.0, 1.0);
    hsv.value = (hsv.value + delta.value).clamp(0.0, 1.0);

    let out = Srgb::from_color(hsv).into_format::<u8>();
    pack(out.red, out.green, out.blue)
}
