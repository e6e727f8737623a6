//! Pack layout configuration
//!
//! All input and output locations for one generator run are collected here,
//! so the rest of the crate never hardcodes a path.

use std::path::{Path, PathBuf};

/// File locations for one generator run.
///
/// `Default` is the canonical in-repo layout, with the generator invoked
/// from the pack root. `rooted` relocates the same layout under another
/// directory, which is how the integration tests run against a scratch tree.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Directory holding one subdirectory of text templates per category.
    pub template_dir: PathBuf,

    /// Where expanded template files are written.
    pub function_output_dir: PathBuf,

    /// Vanilla biome definitions, one `<id>.json` per biome.
    pub vanilla_biome_dir: PathBuf,

    /// Vanilla grass climate colormap.
    pub grass_texture: PathBuf,

    /// Vanilla foliage climate colormap.
    pub foliage_texture: PathBuf,

    /// Tag file listing the plant blocks that can carry snow.
    pub plant_tag_file: PathBuf,

    /// Output directory for biome grouping tags.
    pub biome_tag_dir: PathBuf,

    /// Output directory for generated biome definitions, one subdirectory
    /// per season artifact.
    pub biome_output_dir: PathBuf,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::rooted(Path::new("."))
    }
}

impl GeneratorConfig {
    /// The canonical pack layout relative to `root`.
    pub fn rooted(root: &Path) -> Self {
        Self {
            template_dir: root.join("templates"),
            function_output_dir: root.join("data/seasons/functions/generated"),
            vanilla_biome_dir: root.join("vanilla/biome"),
            grass_texture: root.join("vanilla/grass.png"),
            foliage_texture: root.join("vanilla/foliage.png"),
            plant_tag_file: root.join("data/seasons/tags/blocks/snowable_plants.json"),
            biome_tag_dir: root.join("data/seasons/tags/worldgen/biome"),
            biome_output_dir: root.join("data/seasons/worldgen/biome"),
        }
    }
}
