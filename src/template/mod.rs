//! Text-template expansion for generated function files.
//!
//! A template category is a directory of plain text files carrying a
//! `$<category>` placeholder; each file expands into one output file with
//! the template repeated once per value.

use std::path::Path;

use crate::core::error::Result;

/// Expand one template: the full text is emitted once per value, with every
/// occurrence of `token` replaced.
pub fn expand(template: &str, token: &str, values: &[String]) -> String {
    let mut out = String::with_capacity(template.len() * values.len());
    for value in values {
        out.push_str(&template.replace(token, value));
    }
    out
}

/// Expand every template file in `<template_root>/<category>` into
/// `out_dir`, keeping file names. Non-file directory entries are skipped.
pub fn instantiate_category(
    template_root: &Path,
    out_dir: &Path,
    category: &str,
    values: &[String],
) -> Result<()> {
    let token = format!("${category}");
    let dir = template_root.join(category);

    for entry in std::fs::read_dir(&dir)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let template = std::fs::read_to_string(&path)?;
        std::fs::write(
            out_dir.join(entry.file_name()),
            expand(&template, &token, values),
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_expand_substitutes_once_per_value() {
        let values = vec!["minecraft:grass".to_string(), "minecraft:fern".to_string()];
        assert_eq!(
            expand("snow $plant\n", "$plant", &values),
            "snow minecraft:grass\nsnow minecraft:fern\n"
        );
    }

    #[test]
    fn test_expand_replaces_every_occurrence() {
        let values = vec!["beach".to_string()];
        assert_eq!(
            expand("load $biome\ncheck $biome\n", "$biome", &values),
            "load beach\ncheck beach\n"
        );
    }

    #[test]
    fn test_expand_without_token_repeats_template() {
        let values = vec!["a".to_string(), "b".to_string()];
        assert_eq!(expand("static\n", "$plant", &values), "static\nstatic\n");
    }

    #[test]
    fn test_instantiate_category_skips_directories() {
        let root = std::env::temp_dir().join(format!("seasonpack_tmpl_{}", std::process::id()));
        let _ = fs::remove_dir_all(&root);
        let templates = root.join("templates/plant");
        let out = root.join("out");
        fs::create_dir_all(&templates).unwrap();
        fs::create_dir_all(templates.join("nested")).unwrap();
        fs::create_dir_all(&out).unwrap();

        fs::write(templates.join("melt.mcfunction"), "melt $plant\n").unwrap();
        fs::write(templates.join("freeze.mcfunction"), "freeze $plant\n").unwrap();

        let values = vec!["minecraft:grass".to_string()];
        instantiate_category(&root.join("templates"), &out, "plant", &values).unwrap();

        assert_eq!(
            fs::read_to_string(out.join("melt.mcfunction")).unwrap(),
            "melt minecraft:grass\n"
        );
        assert_eq!(
            fs::read_to_string(out.join("freeze.mcfunction")).unwrap(),
            "freeze minecraft:grass\n"
        );
        assert!(!out.join("nested").exists());

        fs::remove_dir_all(&root).unwrap();
    }
}
