use bevy::prelude::*;
use rand_chacha::ChaCha8Rng;

use crate::pickup::{Gem, GEM_RADIUS};
use crate::playfield::PlayfieldEntity;
use crate::spawner::catalog::GemCatalog;
use crate::spawner::core::plan_spawn;
use crate::spawner::plugin::GemCatalogHandle;

/// World-units across for a spawned gem sprite (before per-template scale).
pub const GEM_SIZE: f32 = 1.2;

/// Marker for a playfield's spawner entity. Idle until a clock is attached.
#[derive(Component)]
pub struct GemSpawner;

/// Re-armed one-shot wait; present only while the spawner is running.
/// Despawning the owning entity drops the pending wait with it.
#[derive(Component)]
pub struct SpawnClock {
    pub timer: Timer,
}

/// Single RNG stream for the spawner; seeded from settings so a fixed seed
/// reproduces the whole spawn sequence.
#[derive(Resource)]
pub struct SpawnRng(pub ChaCha8Rng);

/// Arms each idle spawner once its catalog is available. A catalog that
/// fails validation halts the spawner instead of reaching a random draw.
pub fn activate_spawner(
    mut commands: Commands,
    catalogs: Res<Assets<GemCatalog>>,
    handle: Res<GemCatalogHandle>,
    mut rng: ResMut<SpawnRng>,
    idle: Query<Entity, (With<GemSpawner>, Without<SpawnClock>)>,
) {
    let Some(catalog) = catalogs.get(&handle.0) else { return };

    for entity in &idle {
        match catalog.validate() {
            Ok(()) => {
                let wait = catalog.interval.sample(&mut rng.0);
                commands.entity(entity).insert(SpawnClock {
                    timer: Timer::from_seconds(wait, TimerMode::Once),
                });
                info!("Spawner: armed, first gem in {:.1}s", wait);
            }
            Err(e) => {
                error!("Spawner: bad catalog, halting: {e}");
                commands.entity(entity).despawn();
            }
        }
    }
}

/// The spawn loop: when a clock runs out, plan one spawn, instantiate it,
/// and re-arm the clock with a fresh wait.
pub fn tick_spawner(
    mut commands: Commands,
    time: Res<Time>,
    catalogs: Res<Assets<GemCatalog>>,
    handle: Res<GemCatalogHandle>,
    assets: Res<AssetServer>,
    mut rng: ResMut<SpawnRng>,
    mut running: Query<&mut SpawnClock, With<GemSpawner>>,
) {
    let Some(catalog) = catalogs.get(&handle.0) else { return };

    for mut clock in &mut running {
        if !clock.timer.tick(time.delta()).just_finished() {
            continue;
        }

        let event = plan_spawn(catalog.gems.len(), &catalog.region, &mut rng.0);
        let def = &catalog.gems[event.template];
        commands.spawn((
            Sprite {
                image: assets.load(def.sprite.as_str()),
                custom_size: Some(Vec2::splat(GEM_SIZE)),
                ..default()
            },
            // Identity rotation; the region fixes the depth axis.
            Transform::from_translation(event.position).with_scale(Vec3::splat(def.scale)),
            Gem { radius: GEM_RADIUS },
            PlayfieldEntity,
        ));
        debug!("Spawner: gem '{}' at {}", def.name, event.position);

        let wait = catalog.interval.sample(&mut rng.0);
        clock.timer = Timer::from_seconds(wait, TimerMode::Once);
    }
}
