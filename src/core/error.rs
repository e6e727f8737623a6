use serde_json::Value;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SeasonError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Failed to read vanilla biome '{id}' from {path:?}: {source}")]
    BiomeRead {
        id: String,
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Vanilla biome '{id}' is not a valid biome definition: {source}")]
    BiomeParse {
        id: String,
        source: serde_json::Error,
    },

    #[error("Season mapping for '{0}' references no vanilla biomes")]
    NoTemplates(String),

    #[error("Invalid season mapping catalog: {0}")]
    Catalog(String),

    #[error("Invalid hex color '{0}'")]
    InvalidHexColor(String),

    #[error("Override '{field}' has invalid value {value}")]
    InvalidOverride { field: String, value: Value },
}

pub type Result<T> = std::result::Result<T, SeasonError>;
