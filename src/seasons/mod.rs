//! Season mapping records, conversion tables, and the derivation engine.

pub mod derive;
pub mod mapping;
pub mod tables;

pub use derive::derive_biomes;
pub use mapping::{builtin_catalog, BiomeKind, SeasonMapping, TemplateRef};

/// Namespace the generated artifacts are published under.
pub const NAMESPACE: &str = "seasons";

/// Namespace the vanilla template biomes live in.
pub const VANILLA_NAMESPACE: &str = "minecraft";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Season {
    Summer,
    Fall,
    Winter,
    Spring,
}

impl Season {
    /// Fixed season order; also the scan order when picking a fallback seed.
    pub const ALL: [Season; 4] = [Season::Summer, Season::Fall, Season::Winter, Season::Spring];

    pub fn name(self) -> &'static str {
        match self {
            Season::Summer => "summer",
            Season::Fall => "fall",
            Season::Winter => "winter",
            Season::Spring => "spring",
        }
    }
}

/// One generated biome variant. Every mapped biome of the `default` kind
/// fans out into all eight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeasonArtifact {
    Summer,
    FallEarly,
    FallLate,
    WinterBare,
    WinterSnowy,
    WinterMelting,
    SpringDefault,
    SpringFlowering,
}

impl SeasonArtifact {
    pub const ALL: [SeasonArtifact; 8] = [
        SeasonArtifact::Summer,
        SeasonArtifact::FallEarly,
        SeasonArtifact::FallLate,
        SeasonArtifact::WinterBare,
        SeasonArtifact::WinterSnowy,
        SeasonArtifact::WinterMelting,
        SeasonArtifact::SpringDefault,
        SeasonArtifact::SpringFlowering,
    ];

    /// Directory name under the biome output tree.
    pub fn dir_name(self) -> &'static str {
        match self {
            SeasonArtifact::Summer => "summer",
            SeasonArtifact::FallEarly => "fall_early",
            SeasonArtifact::FallLate => "fall_late",
            SeasonArtifact::WinterBare => "winter_bare",
            SeasonArtifact::WinterSnowy => "winter_snowy",
            SeasonArtifact::WinterMelting => "winter_melting",
            SeasonArtifact::SpringDefault => "spring_default",
            SeasonArtifact::SpringFlowering => "spring_flowering",
        }
    }

    /// Fully qualified artifact id, e.g. `seasons:winter_bare/taiga`.
    pub fn qualified(self, biome_id: &str) -> String {
        format!("{NAMESPACE}:{}/{biome_id}", self.dir_name())
    }
}
