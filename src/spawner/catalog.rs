// src/spawner/catalog.rs
//! Data-driven gem catalog + loader.

use bevy::asset::{io::Reader, AssetLoader, LoadContext};
use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::core::{IntervalRange, SpawnRegion};

// ---------- Template definition (data form) ----------

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GemDef {
    /// Unique human-readable name (used for lookup).
    pub name: String,

    /// Sprite asset path.
    pub sprite: String,

    /// Uniform scale applied at instantiation.
    #[serde(default = "default_scale")]
    pub scale: f32,
}

fn default_scale() -> f32 {
    1.0
}

// ---------- Catalog asset ----------

/// Everything the spawner is configured with: an ordered list of templates,
/// the band they may appear in, and the wait bounds between spawns.
#[derive(Asset, TypePath, Clone, Debug, Serialize, Deserialize)]
pub struct GemCatalog {
    pub gems: Vec<GemDef>,
    pub region: SpawnRegion,
    pub interval: IntervalRange,
}

impl GemCatalog {
    pub fn from_ron_bytes(bytes: &[u8]) -> Result<Self, GemCatalogError> {
        let catalog: GemCatalog =
            ron::de::from_bytes(bytes).map_err(|e| GemCatalogError::Ron(e.to_string()))?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Fail-fast configuration check. Runs at load time and again at spawner
    /// activation; a catalog that fails here never reaches a random draw.
    pub fn validate(&self) -> Result<(), GemCatalogError> {
        if self.gems.is_empty() {
            return Err(GemCatalogError::EmptyCatalog);
        }
        let mut seen = HashMap::with_capacity(self.gems.len());
        for (i, gem) in self.gems.iter().enumerate() {
            if let Some(prev) = seen.insert(gem.name.clone(), i) {
                return Err(GemCatalogError::DuplicateName {
                    name: gem.name.clone(),
                    first: prev,
                    second: i,
                });
            }
        }
        for (axis, range) in [('x', self.region.x), ('y', self.region.y)] {
            if range.min > range.max {
                return Err(GemCatalogError::DegenerateRegion {
                    axis,
                    min: range.min,
                    max: range.max,
                });
            }
        }
        if self.interval.min <= 0.0 || self.interval.min > self.interval.max {
            return Err(GemCatalogError::InvalidInterval {
                min: self.interval.min,
                max: self.interval.max,
            });
        }
        Ok(())
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.gems.iter().position(|g| g.name == name)
    }
}

// ---------- Loader errors ----------

#[derive(thiserror::Error, Debug)]
pub enum GemCatalogError {
    #[error("I/O while reading catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON parse error: {0}")]
    Ron(String),
    #[error("catalog has no gem templates")]
    EmptyCatalog,
    #[error("duplicate gem name '{name}' (first idx {first}, second idx {second})")]
    DuplicateName { name: String, first: usize, second: usize },
    #[error("spawn region has min > max on the {axis} axis ({min} > {max})")]
    DegenerateRegion { axis: char, min: f32, max: f32 },
    #[error("spawn interval [{min}, {max}) is not a positive range")]
    InvalidInterval { min: f32, max: f32 },
}

// ---------- Asset loader for `.gems.ron` ----------

pub struct GemCatalogAssetPlugin;

impl Plugin for GemCatalogAssetPlugin {
    fn build(&self, app: &mut App) {
        app.init_asset::<GemCatalog>()
            .register_asset_loader(GemCatalogLoader);
    }
}

#[derive(Default)]
pub struct GemCatalogLoader;

impl AssetLoader for GemCatalogLoader {
    type Asset = GemCatalog;
    type Settings = ();
    type Error = GemCatalogError;

    fn extensions(&self) -> &[&str] {
        &["gems.ron"]
    }

    async fn load(
        &self,
        reader: &mut dyn Reader,
        _settings: &Self::Settings,
        _load_context: &mut LoadContext<'_>,
    ) -> Result<Self::Asset, Self::Error> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes).await?;
        GemCatalog::from_ron_bytes(&bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spawner::core::AxisRange;

    const SAMPLE: &str = r#"(
        gems: [
            (name: "gem_blue", sprite: "sprites/gem_blue.png"),
            (name: "gem_red", sprite: "sprites/gem_red.png", scale: 1.25),
        ],
        region: (
            x: (min: 26.0, max: 26.0),
            y: (min: -10.0, max: 10.0),
            depth: 10.0,
        ),
        interval: (min: 15.0, max: 30.0),
    )"#;

    fn valid_catalog() -> GemCatalog {
        GemCatalog::from_ron_bytes(SAMPLE.as_bytes()).unwrap()
    }

    #[test]
    fn sample_manifest_parses() {
        let catalog = valid_catalog();
        assert_eq!(catalog.gems.len(), 2);
        assert_eq!(catalog.gems[0].scale, 1.0);
        assert_eq!(catalog.gems[1].scale, 1.25);
        assert_eq!(catalog.region.x, AxisRange::fixed(26.0));
        assert_eq!(catalog.index_of("gem_red"), Some(1));
        assert_eq!(catalog.index_of("gem_green"), None);
    }

    #[test]
    fn empty_catalog_is_rejected() {
        let mut catalog = valid_catalog();
        catalog.gems.clear();
        assert!(matches!(catalog.validate(), Err(GemCatalogError::EmptyCatalog)));
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let mut catalog = valid_catalog();
        catalog.gems[1].name = "gem_blue".to_string();
        assert!(matches!(
            catalog.validate(),
            Err(GemCatalogError::DuplicateName { .. })
        ));
    }

    #[test]
    fn reversed_region_is_rejected() {
        let mut catalog = valid_catalog();
        catalog.region.y = AxisRange { min: 10.0, max: -10.0 };
        assert!(matches!(
            catalog.validate(),
            Err(GemCatalogError::DegenerateRegion { axis: 'y', .. })
        ));
    }

    #[test]
    fn non_positive_interval_is_rejected() {
        let mut catalog = valid_catalog();
        catalog.interval = IntervalRange { min: 0.0, max: 30.0 };
        assert!(matches!(
            catalog.validate(),
            Err(GemCatalogError::InvalidInterval { .. })
        ));
    }

    #[test]
    fn reversed_interval_is_rejected() {
        let mut catalog = valid_catalog();
        catalog.interval = IntervalRange { min: 30.0, max: 15.0 };
        assert!(matches!(
            catalog.validate(),
            Err(GemCatalogError::InvalidInterval { .. })
        ));
    }

    #[test]
    fn fixed_lane_region_is_accepted() {
        // min == max on a free axis is a lane, not a fault.
        assert!(valid_catalog().validate().is_ok());
    }
}
