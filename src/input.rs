use bevy::input::{keyboard::KeyCode, ButtonInput};
use bevy::prelude::*;

use crate::actions::{ActionState, PlayerAction};
use crate::state::GameState;

pub fn input_mapping_system(
    keys: Res<ButtonInput<KeyCode>>,
    mut action_state: ResMut<ActionState>,
) {
    action_state.set(
        PlayerAction::Climb,
        keys.pressed(KeyCode::Space) || keys.pressed(KeyCode::KeyW),
    );
    action_state.set(PlayerAction::Dive, keys.pressed(KeyCode::KeyS));
}

pub fn restart_system(
    keys: Res<ButtonInput<KeyCode>>,
    current_state: Res<State<GameState>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if keys.just_pressed(KeyCode::KeyR) && current_state.get() == &GameState::GameOver {
        next_state.set(GameState::Playing);
        info!("Restarting run");
    }
}
