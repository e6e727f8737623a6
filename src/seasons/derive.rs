//! The season derivation engine.
//!
//! Given one mapping record, produces the eight seasonal biome variants in
//! emit order. Every variant is an independent deep copy: the later winter
//! and spring variants copy an already-derived variant, never the seed.

use tracing::warn;

use super::mapping::{BiomeKind, SeasonMapping};
use super::tables;
use super::{Season, SeasonArtifact};
use crate::biome::{BiomeRecord, BiomeSource, Precipitation};
use crate::climate::ClimateTables;
use crate::core::error::{Result, SeasonError};

/// Derive all season artifacts for one biome.
///
/// The seed is the summer template when one exists; otherwise the first
/// season with a template, shifted back toward a summer-equivalent
/// temperature. The `default` override block applies to the seed and thus to
/// every variant derived from it.
pub fn derive_biomes(
    id: &str,
    mapping: &SeasonMapping,
    source: &dyn BiomeSource,
    climate: &ClimateTables,
) -> Result<Vec<(SeasonArtifact, BiomeRecord)>> {
    let mut seed = match mapping.template(Season::Summer) {
        Some(template) => source.load(template.primary())?,
        None => {
            let (season, template) = Season::ALL
                .iter()
                .find_map(|&s| mapping.template(s).map(|t| (s, t)))
                .ok_or_else(|| SeasonError::NoTemplates(id.to_string()))?;
            let mut biome = source.load(template.primary())?;
            biome.temperature += tables::to_summer_temperature(mapping.kind, season);
            biome.fill_default_colors(climate);
            biome
        }
    };
    if let Some(overrides) = &mapping.base_overrides {
        seed.apply_overrides(overrides)?;
    }

    match mapping.kind {
        BiomeKind::Default => {}
        // Recognized but inert until the dry-season cycle is implemented.
        BiomeKind::SummerRains => return Ok(Vec::new()),
    }

    let mut artifacts = Vec::with_capacity(SeasonArtifact::ALL.len());

    let mut summer = seed.clone();
    summer.update_precipitation();
    artifacts.push((SeasonArtifact::Summer, summer));

    let fall_template = match mapping.template(Season::Fall) {
        Some(template) => Some(source.load(template.primary())?),
        None => None,
    };
    for (artifact, leaves) in [
        (SeasonArtifact::FallEarly, tables::EARLY_FALL_LEAVES),
        (SeasonArtifact::FallLate, tables::LATE_FALL_LEAVES),
    ] {
        let mut fall = match &fall_template {
            Some(template) => template.clone(),
            None => {
                let mut biome = seed.clone();
                biome.temperature += tables::FALL_TEMPERATURE;
                biome.tint_grass(tables::FALL_GRASS);
                biome
            }
        };
        // Vanilla has no fall foliage colors, so shift the foliage as if the
        // template were summer-colored even when an explicit template exists.
        fall.tint_foliage(leaves);
        if let Some(overrides) = mapping.season_overrides(Season::Fall) {
            fall.apply_overrides(overrides)?;
        }
        fall.update_precipitation();
        artifacts.push((artifact, fall));
    }

    let mut winter_bare = match mapping.template(Season::Winter) {
        Some(template) => source.load(template.primary())?,
        None => {
            let mut biome = seed.clone();
            biome.temperature += tables::WINTER_TEMPERATURE;
            biome.tint_grass(tables::WINTER_GRASS);
            biome
        }
    };
    winter_bare.set_foliage_hex(tables::WINTER_BRANCHES)?;
    if let Some(overrides) = mapping.season_overrides(Season::Winter) {
        winter_bare.apply_overrides(overrides)?;
    }
    winter_bare.update_precipitation();
    if winter_bare.precipitation != Precipitation::Snow {
        warn!(biome = id, "winter biome does not snow");
    }

    let mut winter_snowy = winter_bare.clone();
    winter_snowy.set_grass_hex(tables::SNOWY_GROUND)?;
    winter_snowy.set_foliage_hex(tables::SNOWY_LEAVES)?;

    let mut winter_melting = winter_snowy.clone();
    winter_melting.temperature = mapping
        .spring_temperature()
        .unwrap_or(seed.temperature + tables::SPRING_TEMPERATURE);
    winter_melting.update_precipitation();
    if winter_melting.precipitation != Precipitation::Rain {
        warn!(biome = id, "melting winter biome still snows");
    }

    artifacts.push((SeasonArtifact::WinterBare, winter_bare));
    artifacts.push((SeasonArtifact::WinterSnowy, winter_snowy));
    artifacts.push((SeasonArtifact::WinterMelting, winter_melting));

    let mut spring_default = match mapping.template(Season::Spring) {
        Some(template) => source.load(template.primary())?,
        None => {
            let mut biome = seed.clone();
            biome.temperature += tables::SPRING_TEMPERATURE;
            biome
        }
    };
    spring_default.tint_grass(tables::SPRING_GRASS);
    spring_default.tint_foliage(tables::SPRING_LEAVES);
    if let Some(overrides) = mapping.season_overrides(Season::Spring) {
        spring_default.apply_overrides(overrides)?;
    }
    spring_default.update_precipitation();

    let mut spring_flowering = spring_default.clone();
    spring_flowering.set_foliage_hex(tables::FLOWERING_LEAVES)?;

    artifacts.push((SeasonArtifact::SpringDefault, spring_default));
    artifacts.push((SeasonArtifact::SpringFlowering, spring_flowering));

    Ok(artifacts)
}
