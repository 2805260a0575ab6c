// src/pickup.rs
//! Gem behavior after spawn: drift toward the craft, collection on overlap,
//! cull once a gem has passed behind the player.

use bevy::prelude::*;

use crate::player::Player;
use crate::state::GameState;

/// Combined collection radius for craft-vs-gem overlap (no physics engine;
/// plain distance check).
pub const GEM_RADIUS: f32 = 1.4;

/// Units/sec gems drift toward the craft.
pub const GEM_DRIFT_SPEED: f32 = 4.0;

/// Gems past this x have left the playfield for good.
pub const GEM_CULL_X: f32 = -14.0;

#[derive(Component)]
pub struct Gem {
    pub radius: f32,
}

/// Fired when the craft touches a gem; the gem is already despawned by the
/// time handlers read this.
#[derive(Event)]
pub struct PickupCollected {
    pub gem: Entity,
}

pub struct PickupPlugin;

impl Plugin for PickupPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<PickupCollected>().add_systems(
            Update,
            (
                drift_gems,
                collect_gems.after(drift_gems),
                cull_passed_gems.after(collect_gems),
            )
                .run_if(in_state(GameState::Playing)),
        );
    }
}

/// Planar overlap test; the depth axis is a draw layer, not a gameplay axis.
#[inline]
pub fn overlaps(a: Vec3, b: Vec3, radius: f32) -> bool {
    a.truncate().distance_squared(b.truncate()) <= radius * radius
}

pub fn drift_gems(time: Res<Time>, mut gems: Query<&mut Transform, With<Gem>>) {
    let dt = time.delta_secs();
    for mut tf in &mut gems {
        tf.translation.x -= GEM_DRIFT_SPEED * dt;
    }
}

pub fn collect_gems(
    mut commands: Commands,
    mut collected: EventWriter<PickupCollected>,
    player: Query<&Transform, With<Player>>,
    gems: Query<(Entity, &Transform, &Gem), Without<Player>>,
) {
    let Ok(player_tf) = player.single() else { return };

    for (entity, tf, gem) in &gems {
        if overlaps(player_tf.translation, tf.translation, gem.radius) {
            info!("Picked up gem {entity}");
            collected.write(PickupCollected { gem: entity });
            commands.entity(entity).despawn();
        }
    }
}

pub fn cull_passed_gems(
    mut commands: Commands,
    gems: Query<(Entity, &Transform), With<Gem>>,
) {
    for (entity, tf) in &gems {
        if tf.translation.x < GEM_CULL_X {
            debug!("Gem {entity} drifted out, culling");
            commands.entity(entity).despawn();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlap_is_planar() {
        let a = Vec3::new(0.0, 0.0, 10.0);
        // Same x/y, wildly different z: still an overlap.
        let b = Vec3::new(0.5, 0.5, -40.0);
        assert!(overlaps(a, b, 1.4));
    }

    #[test]
    fn distant_gems_do_not_overlap() {
        let a = Vec3::new(-8.0, 0.0, 10.0);
        let b = Vec3::new(4.0, 0.0, 10.0);
        assert!(!overlaps(a, b, 1.4));
    }

    #[test]
    fn overlap_boundary_is_inclusive() {
        let a = Vec3::ZERO;
        let b = Vec3::new(1.4, 0.0, 0.0);
        assert!(overlaps(a, b, 1.4));
        assert!(!overlaps(a, b.with_x(1.401), 1.4));
    }
}
