// src/playfield.rs
//! Run lifecycle: build/teardown of the playfield, level bookkeeping, and
//! the pickup/fall transitions between runs.

use bevy::prelude::*;

use crate::pickup::PickupCollected;
use crate::player::{spawn_craft, PlayerFell};
use crate::spawner::systems::GemSpawner;
use crate::state::GameState;

/// Current level, injected as a resource rather than read from a global.
/// +1 per pickup, back to 0 when the craft falls off the map.
#[derive(Resource, Default, Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayerLevel(pub u32);

/// Everything that lives and dies with one playfield.
#[derive(Component)]
pub struct PlayfieldEntity;

/// Tear the current playfield down and build a fresh one, without leaving
/// `Playing`. The pickup path uses this as its "next floor" transition.
#[derive(Event)]
pub struct ReloadPlayfield;

pub struct PlayfieldPlugin;

impl Plugin for PlayfieldPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PlayerLevel>()
            .add_event::<ReloadPlayfield>()
            .add_systems(OnEnter(GameState::Playing), enter_playfield)
            .add_systems(OnExit(GameState::Playing), teardown_playfield)
            .add_systems(
                Update,
                (handle_pickup, handle_fall, reload_playfield.after(handle_pickup))
                    .run_if(in_state(GameState::Playing)),
            );
    }
}

/// Spawn one playfield: the craft plus an idle spawner entity. The spawner
/// arms itself once the catalog is ready.
pub fn build_playfield(commands: &mut Commands, assets: &AssetServer) {
    spawn_craft(commands, assets);
    commands.spawn((GemSpawner, PlayfieldEntity));
    info!("Playfield: built");
}

fn enter_playfield(mut commands: Commands, assets: Res<AssetServer>) {
    build_playfield(&mut commands, &assets);
}

fn teardown_playfield(mut commands: Commands, entities: Query<Entity, With<PlayfieldEntity>>) {
    for entity in &entities {
        commands.entity(entity).despawn();
    }
    info!("Playfield: torn down");
}

/// Pickup: bump the level and rebuild the playfield for the next floor.
fn handle_pickup(
    mut collected: EventReader<PickupCollected>,
    mut level: ResMut<PlayerLevel>,
    mut reload: EventWriter<ReloadPlayfield>,
) {
    for _ in collected.read() {
        level.0 += 1;
        info!("Level up -> {}", level.0);
        reload.write(ReloadPlayfield);
    }
}

fn reload_playfield(
    mut requests: EventReader<ReloadPlayfield>,
    mut commands: Commands,
    assets: Res<AssetServer>,
    entities: Query<Entity, With<PlayfieldEntity>>,
) {
    if requests.is_empty() {
        return;
    }
    requests.clear();

    for entity in &entities {
        commands.entity(entity).despawn();
    }
    build_playfield(&mut commands, &assets);
}

/// Fall: the run is over. Reset the level and move to the game-over screen;
/// leaving `Playing` tears the playfield down and stops the ambience.
fn handle_fall(
    mut fell: EventReader<PlayerFell>,
    mut level: ResMut<PlayerLevel>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if fell.is_empty() {
        return;
    }
    fell.clear();

    level.0 = 0;
    next_state.set(GameState::GameOver);
    info!("Run over, level reset");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pickup_advances_level_and_requests_reload() {
        let mut app = App::new();
        app.init_resource::<PlayerLevel>()
            .add_event::<PickupCollected>()
            .add_event::<ReloadPlayfield>()
            .add_systems(Update, handle_pickup);

        app.world_mut().send_event(PickupCollected {
            gem: Entity::PLACEHOLDER,
        });
        app.update();

        assert_eq!(app.world().resource::<PlayerLevel>().0, 1);
        assert!(!app.world().resource::<Events<ReloadPlayfield>>().is_empty());
    }

    #[test]
    fn two_pickups_advance_two_levels() {
        let mut app = App::new();
        app.init_resource::<PlayerLevel>()
            .add_event::<PickupCollected>()
            .add_event::<ReloadPlayfield>()
            .add_systems(Update, handle_pickup);

        app.world_mut().send_event(PickupCollected {
            gem: Entity::PLACEHOLDER,
        });
        app.world_mut().send_event(PickupCollected {
            gem: Entity::PLACEHOLDER,
        });
        app.update();

        assert_eq!(app.world().resource::<PlayerLevel>().0, 2);
    }

    #[test]
    fn fall_resets_level_and_ends_the_run() {
        let mut app = App::new();
        app.add_plugins(bevy::state::app::StatesPlugin);
        app.init_state::<GameState>()
            .insert_resource(PlayerLevel(5))
            .add_event::<PlayerFell>()
            .add_systems(Update, handle_fall);

        app.world_mut().send_event(PlayerFell);
        app.update();
        // Transition applies at the next StateTransition run.
        app.update();

        assert_eq!(app.world().resource::<PlayerLevel>().0, 0);
        assert_eq!(
            app.world().resource::<State<GameState>>().get(),
            &GameState::GameOver
        );
    }
}
