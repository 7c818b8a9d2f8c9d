use bevy::prelude::*;
use serde::Deserialize;
use std::{fs, path::Path};

use crate::core::components::Surface;

#[derive(Debug, Deserialize, Clone, Copy, Default)]
pub struct PointDef {
    pub x: f32,
    pub y: f32,
}

impl From<PointDef> for Vec2 {
    fn from(p: PointDef) -> Self {
        Vec2::new(p.x, p.y)
    }
}

/// One axis-aligned slab of level geometry: pads and terrain alike.
/// `kind` defaults to `Hostile`, so plain terrain never needs to spell it out.
#[derive(Debug, Deserialize, Clone, Copy)]
pub struct BlockDef {
    pub center: PointDef,
    pub half: PointDef,
    #[serde(default = "default_kind")]
    pub kind: Surface,
}

fn default_kind() -> Surface {
    Surface::Hostile
}

#[derive(Debug, Deserialize, Clone)]
pub struct LevelFile {
    pub version: u32,
    pub spawn: PointDef,
    pub blocks: Vec<BlockDef>,
}

impl LevelFile {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let txt = fs::read_to_string(&path)
            .map_err(|e| format!("read level {:?}: {e}", path.as_ref()))?;
        let level: LevelFile =
            ron::from_str(&txt).map_err(|e| format!("parse level {:?}: {e}", path.as_ref()))?;
        if level.version != 1 {
            return Err(format!(
                "level version {} unsupported (expected 1)",
                level.version
            ));
        }
        Ok(level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_blocks_with_default_kind() {
        let level: LevelFile = ron::from_str(
            r#"(
                version: 1,
                spawn: (x: -10.0, y: 5.0),
                blocks: [
                    (center: (x: 0.0, y: -20.0), half: (x: 50.0, y: 4.0)),
                    (center: (x: 30.0, y: -16.0), half: (x: 8.0, y: 2.0), kind: Finish),
                ],
            )"#,
        )
        .unwrap();
        assert_eq!(level.blocks.len(), 2);
        assert_eq!(level.blocks[0].kind, Surface::Hostile);
        assert_eq!(level.blocks[1].kind, Surface::Finish);
        assert_eq!(Vec2::from(level.spawn), Vec2::new(-10.0, 5.0));
    }
}
