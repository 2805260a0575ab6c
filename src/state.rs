use bevy::prelude::*;

/// Top-level run state. `Playing` is a live run; `GameOver` waits for a
/// restart.
#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameState {
    #[default]
    Playing,
    GameOver,
}
