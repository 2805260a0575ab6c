pub mod catalog;
pub mod core;
pub mod plugin;
pub mod systems;

pub use plugin::SpawnerPlugin;
