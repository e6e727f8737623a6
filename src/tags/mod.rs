//! Biome grouping tags consumed by the pack's season checks.
//!
//! Per biome, four exclusion lists ("everything except season X"); across
//! the whole run, two global winter lists collected by an explicit
//! accumulator instead of ambient state.

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::path::Path;

use crate::core::error::Result;
use crate::seasons::{Season, SeasonArtifact, SeasonMapping};

/// The on-disk tag record: `{"replace": false, "values": [...]}`.
#[derive(Debug, Clone, Serialize)]
pub struct TagFile {
    pub replace: bool,
    pub values: Vec<String>,
}

impl TagFile {
    pub fn new(values: Vec<String>) -> Self {
        Self {
            replace: false,
            values,
        }
    }
}

/// Winter artifact ids collected across every biome; written once at the end
/// of the run as the global `winter` and `bare_winter` tags.
#[derive(Debug, Default)]
pub struct WinterAccumulator {
    pub winter: Vec<String>,
    pub bare_winter: Vec<String>,
}

/// Which generated artifacts count as belonging to a season.
///
/// Melting winter belongs to spring: it is the state the world wakes up in.
fn artifacts_for(season: Season) -> &'static [SeasonArtifact] {
    match season {
        Season::Summer => &[SeasonArtifact::Summer],
        Season::Fall => &[SeasonArtifact::FallEarly, SeasonArtifact::FallLate],
        Season::Winter => &[SeasonArtifact::WinterBare, SeasonArtifact::WinterSnowy],
        Season::Spring => &[
            SeasonArtifact::WinterMelting,
            SeasonArtifact::SpringDefault,
            SeasonArtifact::SpringFlowering,
        ],
    }
}

/// Build the four per-biome exclusion tags and record the biome's winter
/// artifacts in the accumulator.
///
/// Each list is the union of every vanilla biome the mapping references and
/// the generated artifacts of the three seasons other than the excluded one.
/// Returned names are relative to the biome tag directory
/// (`non_summer/<id>` and so on).
pub fn exclusion_tags(
    id: &str,
    mapping: &SeasonMapping,
    acc: &mut WinterAccumulator,
) -> Vec<(String, TagFile)> {
    acc.winter.extend(
        artifacts_for(Season::Winter)
            .iter()
            .map(|a| a.qualified(id)),
    );
    acc.bare_winter.push(SeasonArtifact::WinterBare.qualified(id));

    let vanilla = mapping.vanilla_ids();
    Season::ALL
        .iter()
        .map(|&excluded| {
            let mut values = vanilla.clone();
            for &season in &Season::ALL {
                if season == excluded {
                    continue;
                }
                values.extend(artifacts_for(season).iter().map(|a| a.qualified(id)));
            }
            (format!("non_{}/{id}", excluded.name()), TagFile::new(values))
        })
        .collect()
}

/// Write one tag file, creating intermediate directories for the nested
/// per-biome names. Tags keep the pack's 4-space indentation.
pub fn write_tag(dir: &Path, name: &str, tag: &TagFile) -> Result<()> {
    let path = dir.join(format!("{name}.json"));
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut buf = Vec::new();
    let mut ser =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    tag.serialize(&mut ser)?;
    std::fs::write(path, buf)?;
    Ok(())
}
