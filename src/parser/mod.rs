use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde_json::Value;
use tracing::{debug, info};

use crate::model::Level;

const BUILTIN_LEVELS: &str = include_str!("../levels.json");

/// The five levels shipped with the game.
pub fn builtin_levels() -> Result<Vec<Level>> {
    load_levels(BUILTIN_LEVELS).context("Parsing built-in level catalog")
}

/// Built-in catalog, or the one in `path` when given.
pub fn load_levels_from(path: Option<&Path>) -> Result<Vec<Level>> {
    match path {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Reading {}", path.display()))?;
            load_levels(&json).with_context(|| format!("Parsing {}", path.display()))
        }
        None => builtin_levels(),
    }
}

/// Parse a catalog file.
///
/// The file is expected to contain a top-level `levels` array. Every
/// entry must carry a unique `id`.
pub fn load_levels(json: &str) -> Result<Vec<Level>> {
    let root: Value = serde_json::from_str(json)?;

    let entries = root
        .get("levels")
        .and_then(|v| v.as_array())
        .ok_or_else(|| anyhow!("file has no `levels` array"))?;

    let mut seen = HashSet::new();
    let mut levels = Vec::<Level>::with_capacity(entries.len());

    for (i, entry) in entries.iter().enumerate() {
        let level: Level = serde_json::from_value(entry.clone())
            .with_context(|| format!("level entry {i} is malformed"))?;
        if !seen.insert(level.id) {
            return Err(anyhow!("duplicate level id {}", level.id));
        }
        debug!(id = level.id, title = %level.title, "level parsed");
        levels.push(level);
    }

    info!(count = levels.len(), "level catalog loaded");
    Ok(levels)
}

pub fn find_level(levels: &[Level], id: u32) -> Result<&Level> {
    levels
        .iter()
        .find(|l| l.id == id)
        .ok_or_else(|| anyhow!("no level with id {id}"))
}
