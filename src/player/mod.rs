// src/player/mod.rs

// these sub-modules stay private
mod components;
mod plugin;
mod systems;

// re-export what the rest of the crate actually needs:
pub use components::Player;
pub use plugin::{PlayerFell, PlayerPlugin};
pub use systems::spawn_craft;
