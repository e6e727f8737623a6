//! Whole-run driver.
//!
//! One synchronous pass: plant templates, climate tables, then per-biome
//! tags and season artifacts, the two global winter tags, and finally the
//! biome templates. A fatal error aborts the run; files already written stay
//! in place (a rerun regenerates everything).

use serde::Deserialize;
use std::fs;
use tracing::info;

use crate::biome::{BiomeRecord, DirBiomeSource};
use crate::climate::ClimateTables;
use crate::core::config::GeneratorConfig;
use crate::core::error::Result;
use crate::seasons::{self, derive_biomes, SeasonArtifact};
use crate::tags::{self, TagFile, WinterAccumulator};
use crate::template;

/// Shape of the snowable-plants tag file; only `values` matters here.
#[derive(Deserialize)]
struct PlantTags {
    values: Vec<String>,
}

pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn run(&self) -> Result<()> {
        let cfg = &self.config;
        fs::create_dir_all(&cfg.function_output_dir)?;
        fs::create_dir_all(&cfg.biome_tag_dir)?;

        let plants: PlantTags = serde_json::from_str(&fs::read_to_string(&cfg.plant_tag_file)?)?;
        template::instantiate_category(
            &cfg.template_dir,
            &cfg.function_output_dir,
            "plant",
            &plants.values,
        )?;

        let climate = ClimateTables::load(&cfg.grass_texture, &cfg.foliage_texture)?;
        let source = DirBiomeSource::new(&cfg.vanilla_biome_dir, &climate);
        let catalog = seasons::builtin_catalog()?;

        let mut acc = WinterAccumulator::default();
        let mut written = 0usize;
        for (id, mapping) in &catalog {
            for (name, tag) in tags::exclusion_tags(id, mapping, &mut acc) {
                tags::write_tag(&cfg.biome_tag_dir, &name, &tag)?;
            }
            for (artifact, biome) in derive_biomes(id, mapping, &source, &climate)? {
                self.write_biome(artifact, id, &biome)?;
                written += 1;
            }
        }
        tags::write_tag(&cfg.biome_tag_dir, "winter", &TagFile::new(acc.winter))?;
        tags::write_tag(&cfg.biome_tag_dir, "bare_winter", &TagFile::new(acc.bare_winter))?;

        let biome_ids: Vec<String> = catalog.keys().cloned().collect();
        template::instantiate_category(
            &cfg.template_dir,
            &cfg.function_output_dir,
            "biome",
            &biome_ids,
        )?;

        info!(
            biomes = catalog.len(),
            artifacts = written,
            "season pack generated"
        );
        Ok(())
    }

    /// Biome artifacts keep the vanilla 2-space indentation.
    fn write_biome(&self, artifact: SeasonArtifact, id: &str, biome: &BiomeRecord) -> Result<()> {
        let dir = self.config.biome_output_dir.join(artifact.dir_name());
        fs::create_dir_all(&dir)?;
        fs::write(
            dir.join(format!("{id}.json")),
            serde_json::to_string_pretty(biome)?,
        )?;
        Ok(())
    }
}
