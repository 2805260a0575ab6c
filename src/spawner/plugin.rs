//! Spawner plugin wiring (glue).
//! - Catalog asset/loader
//! - Settings + seeded RNG
//! - Activation + tick systems

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::catalog::{GemCatalog, GemCatalogAssetPlugin};
use super::systems::{activate_spawner, tick_spawner, SpawnRng};
use crate::state::GameState;

/// Configure where the catalog manifest lives and the spawn seed.
#[derive(Resource, Clone)]
pub struct SpawnerSettings {
    pub catalog_path: String,
    pub spawn_seed: u64,
}

impl Default for SpawnerSettings {
    fn default() -> Self {
        Self {
            catalog_path: "gems/catalog.gems.ron".to_string(),
            spawn_seed: 1337,
        }
    }
}

/// Handle to the loaded GemCatalog asset.
#[derive(Resource, Default)]
pub struct GemCatalogHandle(pub Handle<GemCatalog>);

pub struct SpawnerPlugin;

impl Plugin for SpawnerPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(GemCatalogAssetPlugin)
            .init_resource::<SpawnerSettings>()
            .init_resource::<GemCatalogHandle>()
            .add_systems(Startup, (init_spawn_rng_from_settings, load_catalog))
            .add_systems(
                Update,
                (
                    monitor_catalog_ready,
                    activate_spawner.run_if(in_state(GameState::Playing)),
                    tick_spawner
                        .after(activate_spawner)
                        .run_if(in_state(GameState::Playing)),
                ),
            );
    }
}

/// Startup: seed the spawn RNG from settings.
fn init_spawn_rng_from_settings(mut commands: Commands, settings: Res<SpawnerSettings>) {
    commands.insert_resource(SpawnRng(ChaCha8Rng::seed_from_u64(settings.spawn_seed)));
}

/// Startup: request loading the catalog manifest, store handle.
fn load_catalog(
    mut handle_res: ResMut<GemCatalogHandle>,
    settings: Res<SpawnerSettings>,
    assets: Res<AssetServer>,
) {
    if handle_res.0.is_strong() { return; }
    let h: Handle<GemCatalog> = assets.load(settings.catalog_path.as_str());
    handle_res.0 = h;
    info!(
        "Spawner: loading catalog from '{}', spawn_seed={}",
        settings.catalog_path, settings.spawn_seed
    );
}

/// Update: log once when the catalog becomes available.
fn monitor_catalog_ready(
    handle_res: Res<GemCatalogHandle>,
    catalogs: Res<Assets<GemCatalog>>,
    mut logged: Local<bool>,
) {
    if *logged { return; }
    if catalogs.get(&handle_res.0).is_some() {
        *logged = true;
        info!("Spawner: catalog loaded and ready");
    }
}
