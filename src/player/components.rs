use bevy::prelude::*;

#[derive(Component)]
pub struct Player;

/// Vertical velocity in units/sec. Horizontal scroll is carried by the gems,
/// not the craft.
#[derive(Component, Deref, DerefMut)]
pub struct Velocity(pub f32);

/// Set once the craft crosses the map floor; stops repeat fall events while
/// the game-over transition is in flight.
#[derive(Component)]
pub struct Fallen;
