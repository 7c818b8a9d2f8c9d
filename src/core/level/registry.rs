use bevy::prelude::*;
use serde::Deserialize;
use std::{fs, path::Path};

#[derive(Debug, Deserialize, Clone)]
pub struct LevelEntry {
    pub id: String,
    pub file: String,
}

/// Ordered level catalog loaded from `assets/levels/levels.ron`.
///
/// `wrap_to` is the configured index the sequence jumps back to after the
/// last level; it is data, not arithmetic, so a campaign can wrap anywhere.
#[derive(Debug, Deserialize, Resource, Clone)]
pub struct LevelCatalog {
    pub version: u32,
    pub wrap_to: usize,
    pub levels: Vec<LevelEntry>,
}

impl LevelCatalog {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let txt = fs::read_to_string(&path)
            .map_err(|e| format!("read level catalog {:?}: {e}", path.as_ref()))?;
        let catalog: LevelCatalog =
            ron::from_str(&txt).map_err(|e| format!("parse level catalog {:?}: {e}", path.as_ref()))?;
        if catalog.version != 1 {
            return Err(format!(
                "level catalog version {} unsupported (expected 1)",
                catalog.version
            ));
        }
        if catalog.levels.is_empty() {
            return Err("level catalog list empty".into());
        }
        if catalog.wrap_to >= catalog.levels.len() {
            return Err(format!(
                "level catalog wrap_to {} out of range (have {} levels)",
                catalog.wrap_to,
                catalog.levels.len()
            ));
        }
        Ok(catalog)
    }

    /// Index after `index` in the fixed sequence; the last level hands the
    /// configured `wrap_to` back instead of running off the end.
    pub fn next_index(&self, index: usize) -> usize {
        if index + 1 >= self.levels.len() {
            self.wrap_to
        } else {
            index + 1
        }
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.levels.iter().position(|e| e.id == id)
    }
}
