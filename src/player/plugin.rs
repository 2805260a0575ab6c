use bevy::prelude::*;

use super::systems::{climb_and_fall, detect_fall};
use crate::state::GameState;

/// Fired once per run when the craft drops below the map floor.
#[derive(Event)]
pub struct PlayerFell;

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<PlayerFell>().add_systems(
            Update,
            (climb_and_fall, detect_fall.after(climb_and_fall))
                .run_if(in_state(GameState::Playing)),
        );
    }
}
