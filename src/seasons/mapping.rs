//! Per-biome season mapping records and the built-in catalog.

use serde::Deserialize;
use std::collections::BTreeMap;

use super::{Season, VANILLA_NAMESPACE};
use crate::biome::FieldOverrides;
use crate::core::error::{Result, SeasonError};

/// Which conversion tables apply to a biome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BiomeKind {
    /// Shifting leaf colors, snowy winters, a melting spring.
    #[default]
    Default,
    /// A rain period in summer, dry the rest of the year. Recognized but its
    /// seasonal behavior is not implemented yet; the conversion tables hold
    /// zeros for it.
    SummerRains,
}

/// Reference to one or more vanilla biomes.
///
/// The first id seeds the seasonal derivation; the full sequence counts for
/// tag membership.
#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "OneOrMany")]
pub struct TemplateRef {
    ids: Vec<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl TryFrom<OneOrMany> for TemplateRef {
    type Error = String;

    fn try_from(raw: OneOrMany) -> std::result::Result<Self, String> {
        let ids = match raw {
            OneOrMany::One(id) => vec![id],
            OneOrMany::Many(ids) => ids,
        };
        if ids.is_empty() {
            return Err("template reference list is empty".into());
        }
        Ok(Self { ids })
    }
}

impl TemplateRef {
    pub fn one(id: impl Into<String>) -> Self {
        Self {
            ids: vec![id.into()],
        }
    }

    /// Panics when `ids` is empty; a reference must name at least one biome.
    pub fn many<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let ids: Vec<String> = ids.into_iter().map(Into::into).collect();
        assert!(!ids.is_empty(), "template reference needs at least one id");
        Self { ids }
    }

    /// The id used as the derivation seed.
    pub fn primary(&self) -> &str {
        &self.ids[0]
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }
}

/// How one logical biome maps onto vanilla templates, season by season.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeasonMapping {
    #[serde(rename = "type", default)]
    pub kind: BiomeKind,

    #[serde(default)]
    pub v_summer: Option<TemplateRef>,
    #[serde(default)]
    pub v_fall: Option<TemplateRef>,
    #[serde(default)]
    pub v_winter: Option<TemplateRef>,
    #[serde(default)]
    pub v_spring: Option<TemplateRef>,

    /// Overrides applied to the seed before any season splits off.
    #[serde(default, rename = "default")]
    pub base_overrides: Option<FieldOverrides>,
    #[serde(default, rename = "fall")]
    pub fall_overrides: Option<FieldOverrides>,
    #[serde(default, rename = "winter")]
    pub winter_overrides: Option<FieldOverrides>,
    #[serde(default, rename = "spring")]
    pub spring_overrides: Option<FieldOverrides>,
}

impl SeasonMapping {
    pub fn template(&self, season: Season) -> Option<&TemplateRef> {
        match season {
            Season::Summer => self.v_summer.as_ref(),
            Season::Fall => self.v_fall.as_ref(),
            Season::Winter => self.v_winter.as_ref(),
            Season::Spring => self.v_spring.as_ref(),
        }
    }

    /// The override block for a derived season. Summer has none; the seed
    /// overrides (`default`) cover it.
    pub fn season_overrides(&self, season: Season) -> Option<&FieldOverrides> {
        match season {
            Season::Summer => None,
            Season::Fall => self.fall_overrides.as_ref(),
            Season::Winter => self.winter_overrides.as_ref(),
            Season::Spring => self.spring_overrides.as_ref(),
        }
    }

    /// Explicit spring temperature, which outranks the seed-derived melting
    /// temperature.
    pub fn spring_temperature(&self) -> Option<f64> {
        self.spring_overrides.as_ref()?.get("temperature")?.as_f64()
    }

    /// Every vanilla biome this mapping references, fully qualified, in
    /// season order.
    pub fn vanilla_ids(&self) -> Vec<String> {
        let mut ids = Vec::new();
        for &season in &Season::ALL {
            if let Some(template) = self.template(season) {
                ids.extend(
                    template
                        .ids()
                        .iter()
                        .map(|id| format!("{VANILLA_NAMESPACE}:{id}")),
                );
            }
        }
        ids
    }
}

/// Parse a mapping catalog. Unknown `type` values and empty template lists
/// are configuration errors.
pub fn parse_catalog(json: &str) -> Result<BTreeMap<String, SeasonMapping>> {
    serde_json::from_str(json).map_err(|e| SeasonError::Catalog(e.to_string()))
}

/// The season mappings for the shipped pack, compiled in so a run needs no
/// configuration input beyond the vanilla data.
pub fn builtin_catalog() -> Result<BTreeMap<String, SeasonMapping>> {
    parse_catalog(include_str!("season_biomes.json"))
}
