//! Vanilla biome records and the mutations seasonal derivation applies.
//!
//! A biome definition is treated as a bag of fields: the generator interprets
//! temperature, downfall, precipitation, and the two tintable colors, and
//! carries everything else through untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::PathBuf;

use crate::climate::ClimateTables;
use crate::color::{self, HsvDelta};
use crate::core::error::{Result, SeasonError};

/// A field-level override block from a season mapping record.
pub type FieldOverrides = Map<String, Value>;

/// Temperature below which a precipitating biome snows instead of rains.
pub const SNOW_TEMPERATURE: f64 = 0.15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Precipitation {
    None,
    Rain,
    Snow,
}

/// One vanilla biome definition.
///
/// Unknown fields survive a load/store round trip via the flattened residual
/// maps; the generator never enumerates the full vanilla schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BiomeRecord {
    pub temperature: f64,
    pub downfall: f64,
    pub precipitation: Precipitation,
    pub effects: BiomeEffects,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BiomeEffects {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grass_color: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foliage_color: Option<i32>,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

impl BiomeRecord {
    /// Back-fill grass and foliage colors from the climate tables.
    ///
    /// Colors already present are left alone, so calling this twice is safe.
    pub fn fill_default_colors(&mut self, climate: &ClimateTables) {
        if self.effects.grass_color.is_none() {
            self.effects.grass_color = Some(climate.grass.color_at(self.downfall, self.temperature));
        }
        if self.effects.foliage_color.is_none() {
            self.effects.foliage_color =
                Some(climate.foliage.color_at(self.downfall, self.temperature));
        }
    }

    /// Recompute precipitation from temperature.
    ///
    /// `none` is a deliberate setting and survives every mutation; anything
    /// else follows the temperature.
    pub fn update_precipitation(&mut self) {
        if self.precipitation == Precipitation::None {
            return;
        }
        self.precipitation = if self.temperature < SNOW_TEMPERATURE {
            Precipitation::Snow
        } else {
            Precipitation::Rain
        };
    }

    /// Overwrite fields from a mapping override block.
    ///
    /// Fields the generator understands are parsed into their typed slots;
    /// anything else lands in the residual map as-is.
    pub fn apply_overrides(&mut self, overrides: &FieldOverrides) -> Result<()> {
        for (field, value) in overrides {
            match field.as_str() {
                "temperature" => self.temperature = as_f64(field, value)?,
                "downfall" => self.downfall = as_f64(field, value)?,
                "precipitation" => {
                    self.precipitation = serde_json::from_value(value.clone())
                        .map_err(|_| invalid(field, value))?
                }
                "effects" => {
                    self.effects =
                        serde_json::from_value(value.clone()).map_err(|_| invalid(field, value))?
                }
                _ => {
                    self.rest.insert(field.clone(), value.clone());
                }
            }
        }
        Ok(())
    }

    pub fn tint_grass(&mut self, delta: HsvDelta) {
        if let Some(c) = self.effects.grass_color {
            self.effects.grass_color = Some(color::tint(c, delta));
        }
    }

    pub fn tint_foliage(&mut self, delta: HsvDelta) {
        if let Some(c) = self.effects.foliage_color {
            self.effects.foliage_color = Some(color::tint(c, delta));
        }
    }

    pub fn set_grass_hex(&mut self, hex: &str) -> Result<()> {
        self.effects.grass_color = Some(color::from_hex(hex)?);
        Ok(())
    }

    pub fn set_foliage_hex(&mut self, hex: &str) -> Result<()> {
        self.effects.foliage_color = Some(color::from_hex(hex)?);
        Ok(())
    }
}

fn as_f64(field: &str, value: &Value) -> Result<f64> {
    value.as_f64().ok_or_else(|| invalid(field, value))
}

fn invalid(field: &str, value: &Value) -> SeasonError {
    SeasonError::InvalidOverride {
        field: field.to_string(),
        value: value.clone(),
    }
}

/// Source of vanilla biome definitions, keyed by bare id.
///
/// Implementations return records whose grass and foliage colors are already
/// filled in, so callers can tint without checking.
pub trait BiomeSource {
    fn load(&self, id: &str) -> Result<BiomeRecord>;
}

/// Reads `<dir>/<id>.json` and back-fills missing colors from the climate
/// tables. A missing or malformed file is fatal and names the biome.
pub struct DirBiomeSource<'a> {
    dir: PathBuf,
    climate: &'a ClimateTables,
}

impl<'a> DirBiomeSource<'a> {
    pub fn new(dir: impl Into<PathBuf>, climate: &'a ClimateTables) -> Self {
        Self {
            dir: dir.into(),
            climate,
        }
    }
}

impl BiomeSource for DirBiomeSource<'_> {
    fn load(&self, id: &str) -> Result<BiomeRecord> {
        let path = self.dir.join(format!("{id}.json"));
        let contents = std::fs::read_to_string(&path).map_err(|source| SeasonError::BiomeRead {
            id: id.to_string(),
            path: path.clone(),
            source,
        })?;
        let mut biome: BiomeRecord =
            serde_json::from_str(&contents).map_err(|source| SeasonError::BiomeParse {
                id: id.to_string(),
                source,
            })?;
        biome.fill_default_colors(self.climate);
        Ok(biome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::climate::ColorTable;
    use image::{Rgb, RgbImage};

    const PLAINS_JSON: &str = r#"{
        "temperature": 0.8,
        "downfall": 0.4,
        "precipitation": "rain",
        "has_precipitation": true,
        "effects": {
            "sky_color": 7907327,
            "water_color": 4159204
        }
    }"#;

    fn test_climate() -> ClimateTables {
        ClimateTables {
            grass: ColorTable::from_image(RgbImage::from_pixel(256, 256, Rgb([0x50, 0xC8, 0x1E]))),
            foliage: ColorTable::from_image(RgbImage::from_pixel(
                256,
                256,
                Rgb([0x1A, 0x8C, 0x19]),
            )),
        }
    }

    #[test]
    fn test_unknown_fields_survive_round_trip() {
        let biome: BiomeRecord = serde_json::from_str(PLAINS_JSON).unwrap();
        assert_eq!(biome.rest.get("has_precipitation"), Some(&Value::Bool(true)));
        assert_eq!(
            biome.effects.rest.get("sky_color"),
            Some(&Value::from(7907327))
        );

        let round_tripped: BiomeRecord =
            serde_json::from_str(&serde_json::to_string(&biome).unwrap()).unwrap();
        assert_eq!(round_tripped, biome);
    }

    #[test]
    fn test_fill_default_colors_only_when_absent() {
        let climate = test_climate();
        let mut biome: BiomeRecord = serde_json::from_str(PLAINS_JSON).unwrap();
        assert_eq!(biome.effects.grass_color, None);

        biome.fill_default_colors(&climate);
        assert_eq!(biome.effects.grass_color, Some(0x50C81E));
        assert_eq!(biome.effects.foliage_color, Some(0x1A8C19));

        // An explicit color is never overwritten.
        biome.effects.grass_color = Some(0x123456);
        biome.fill_default_colors(&climate);
        assert_eq!(biome.effects.grass_color, Some(0x123456));
    }

    #[test]
    fn test_precipitation_follows_temperature() {
        let mut biome: BiomeRecord = serde_json::from_str(PLAINS_JSON).unwrap();

        biome.update_precipitation();
        assert_eq!(biome.precipitation, Precipitation::Rain);

        biome.temperature = 0.1;
        biome.update_precipitation();
        assert_eq!(biome.precipitation, Precipitation::Snow);

        biome.temperature = SNOW_TEMPERATURE;
        biome.update_precipitation();
        assert_eq!(biome.precipitation, Precipitation::Rain);
    }

    #[test]
    fn test_none_precipitation_is_pinned() {
        let mut biome: BiomeRecord = serde_json::from_str(PLAINS_JSON).unwrap();
        biome.precipitation = Precipitation::None;

        biome.temperature = -1.0;
        biome.update_precipitation();
        assert_eq!(biome.precipitation, Precipitation::None);
    }

    #[test]
    fn test_overrides() {
        let mut biome: BiomeRecord = serde_json::from_str(PLAINS_JSON).unwrap();

        let overrides: FieldOverrides = serde_json::from_str(
            r#"{ "temperature": -0.3, "creature_spawn_probability": 0.07 }"#,
        )
        .unwrap();
        biome.apply_overrides(&overrides).unwrap();

        assert_eq!(biome.temperature, -0.3);
        assert_eq!(
            biome.rest.get("creature_spawn_probability"),
            Some(&Value::from(0.07))
        );

        let bad: FieldOverrides =
            serde_json::from_str(r#"{ "temperature": "chilly" }"#).unwrap();
        assert!(matches!(
            biome.apply_overrides(&bad),
            Err(SeasonError::InvalidOverride { .. })
        ));
    }

    #[test]
    fn test_color_helpers() {
        let mut biome: BiomeRecord = serde_json::from_str(PLAINS_JSON).unwrap();
        biome.fill_default_colors(&test_climate());

        biome.set_foliage_hex("FFFFFF").unwrap();
        assert_eq!(biome.effects.foliage_color, Some(0xFFFFFF));

        let before = biome.effects.grass_color.unwrap();
        biome.tint_grass(HsvDelta::new(0.0, 0.0, -2.0));
        assert_ne!(biome.effects.grass_color.unwrap(), before);
        assert_eq!(biome.effects.grass_color, Some(0));
    }

    #[test]
    fn test_dir_source_missing_file_is_fatal() {
        let climate = test_climate();
        let source = DirBiomeSource::new("/nonexistent/biome/dir", &climate);
        match source.load("plains") {
            Err(SeasonError::BiomeRead { id, .. }) => assert_eq!(id, "plains"),
            other => panic!("expected BiomeRead error, got {other:?}"),
        }
    }
}
