// src/player/systems.rs

use bevy::prelude::*;

use super::components::{Fallen, Player, Velocity};
use super::plugin::PlayerFell;
use crate::actions::{ActionState, PlayerAction};
use crate::playfield::PlayfieldEntity;

pub const GRAVITY: f32 = 16.0;
pub const CLIMB_THRUST: f32 = 34.0;
pub const DIVE_THRUST: f32 = 22.0;
pub const MAX_RISE_SPEED: f32 = 10.0;
pub const MAX_SINK_SPEED: f32 = 14.0;

/// Craft start, on the gem depth plane so the overlap test is planar.
pub const START_POS: Vec3 = Vec3::new(-8.0, 0.0, 10.0);

/// Below this the craft has left the map; sits just under the spawn band.
pub const MAP_FLOOR_Y: f32 = -12.0;

const CRAFT_SIZE: Vec2 = Vec2::new(2.4, 1.2);

/// Spawns the craft at the start of a playfield.
pub fn spawn_craft(commands: &mut Commands, assets: &AssetServer) {
    commands.spawn((
        Sprite {
            image: assets.load("sprites/craft.png"),
            custom_size: Some(CRAFT_SIZE),
            ..default()
        },
        Transform::from_translation(START_POS),
        Player,
        Velocity(0.0),
        PlayfieldEntity,
    ));
}

/// One integration step of the craft's vertical motion.
fn vertical_step(velocity: f32, climbing: bool, diving: bool, dt: f32) -> f32 {
    let mut accel = -GRAVITY;
    if climbing {
        accel += CLIMB_THRUST;
    }
    if diving {
        accel -= DIVE_THRUST;
    }
    (velocity + accel * dt).clamp(-MAX_SINK_SPEED, MAX_RISE_SPEED)
}

/// Gravity pulls the craft down; Climb thrusts against it, Dive with it.
pub fn climb_and_fall(
    time: Res<Time>,
    action_state: Res<ActionState>,
    mut query: Query<(&mut Transform, &mut Velocity), With<Player>>,
) {
    let dt = time.delta_secs();
    let climbing = action_state.pressed(PlayerAction::Climb);
    let diving = action_state.pressed(PlayerAction::Dive);

    for (mut tf, mut vel) in &mut query {
        vel.0 = vertical_step(vel.0, climbing, diving, dt);
        tf.translation.y += vel.0 * dt;
    }
}

/// Emits `PlayerFell` the first frame the craft is below the map floor.
pub fn detect_fall(
    mut commands: Commands,
    mut fell: EventWriter<PlayerFell>,
    query: Query<(Entity, &Transform), (With<Player>, Without<Fallen>)>,
) {
    for (entity, tf) in &query {
        if tf.translation.y < MAP_FLOOR_Y {
            info!("Player fell below the map at y={:.1}", tf.translation.y);
            fell.write(PlayerFell);
            commands.entity(entity).insert(Fallen);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gravity_sinks_an_idle_craft() {
        let v = vertical_step(0.0, false, false, 0.5);
        assert!(v < 0.0);
    }

    #[test]
    fn climbing_beats_gravity() {
        let v = vertical_step(0.0, true, false, 0.5);
        assert!(v > 0.0);
    }

    #[test]
    fn rise_speed_is_clamped() {
        let mut v = 0.0;
        for _ in 0..100 {
            v = vertical_step(v, true, false, 0.1);
        }
        assert_eq!(v, MAX_RISE_SPEED);
    }

    #[test]
    fn sink_speed_is_clamped() {
        let mut v = 0.0;
        for _ in 0..100 {
            v = vertical_step(v, false, true, 0.1);
        }
        assert_eq!(v, -MAX_SINK_SPEED);
    }
}
