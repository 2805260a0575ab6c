use bevy::prelude::*;

mod actions;
mod audio;
mod input;
mod pickup;
mod player;
mod playfield;
mod setup;
mod spawner;
mod state;
mod ui;

// re-export the bits we actually need in main
use actions::ActionState;
use audio::GameAudioPlugin;
use input::{input_mapping_system, restart_system};
use pickup::PickupPlugin;
use player::PlayerPlugin;
use playfield::PlayfieldPlugin;
use spawner::SpawnerPlugin;
use state::GameState;
use ui::{despawn_game_over_overlay, spawn_game_over_overlay};

fn main() {
    App::new()
        // core engine plugins
        .add_plugins(DefaultPlugins)
        // domain plugins
        .add_plugins(GameAudioPlugin) // ambience loop + pickup sfx
        .add_plugins(SpawnerPlugin) // catalog + periodic gem spawning
        .add_plugins(PlayerPlugin) // craft movement + fall detection
        .add_plugins(PickupPlugin) // gem drift + collection
        .add_plugins(PlayfieldPlugin) // run lifecycle + level counter
        // init resources & game-state
        .init_resource::<ActionState>()
        .init_state::<GameState>()
        // camera + HUD
        .add_systems(Startup, (setup::setup, ui::spawn_hud))
        // game-over overlay
        .add_systems(OnEnter(GameState::GameOver), spawn_game_over_overlay)
        .add_systems(OnExit(GameState::GameOver), despawn_game_over_overlay)
        // input mapping + restart + HUD refresh each frame
        .add_systems(Update, (input_mapping_system, restart_system, ui::update_level_text))
        .run();
}
