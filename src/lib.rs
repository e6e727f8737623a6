//! Seasonpack - build-time generator for a seasonal-variation content pack.
//!
//! One run reads the vanilla biome definitions, the two climate colormaps,
//! the snowable-plant tag file, and the text templates, then regenerates the
//! full output tree: per-season biome variants, grouping tags, and expanded
//! template assets.

pub mod biome;
pub mod climate;
pub mod color;
pub mod core;
pub mod pipeline;
pub mod seasons;
pub mod tags;
pub mod template;
