use bevy::prelude::*;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerAction {
    Climb,
    Dive,
}

/// Per-frame snapshot of which actions are held. Gameplay systems read
/// actions, never raw keys.
#[derive(Default, Resource)]
pub struct ActionState {
    held: HashMap<PlayerAction, bool>,
}

impl ActionState {
    pub fn set(&mut self, action: PlayerAction, is_held: bool) {
        self.held.insert(action, is_held);
    }

    pub fn pressed(&self, action: PlayerAction) -> bool {
        *self.held.get(&action).unwrap_or(&false)
    }
}
