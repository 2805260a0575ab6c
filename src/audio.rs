//! Ambience loop + pickup sound, on top of bevy_kira_audio.
//!
//! The looping ambience is tracked by instance handle so it can be stopped
//! deterministically whenever the playfield goes away, instead of trailing
//! into the next run.

use bevy::prelude::*;
use bevy_kira_audio::prelude::*;
use bevy_kira_audio::AudioSource;

use crate::pickup::PickupCollected;
use crate::playfield::ReloadPlayfield;
use crate::state::GameState;

#[derive(Resource)]
pub struct AudioHandles {
    pub pickup: Handle<AudioSource>,
    pub ambience: Handle<AudioSource>,
}

/// Instance handle of the currently-looping ambience, if any.
#[derive(Resource, Default)]
pub struct AmbienceInstance(pub Option<Handle<AudioInstance>>);

pub struct GameAudioPlugin;

impl Plugin for GameAudioPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(AudioPlugin)
            .init_resource::<AmbienceInstance>()
            .add_systems(Startup, load_audio)
            .add_systems(OnEnter(GameState::Playing), start_ambience)
            .add_systems(OnExit(GameState::Playing), stop_ambience)
            .add_systems(
                Update,
                (pickup_sfx, cycle_ambience_on_reload).run_if(in_state(GameState::Playing)),
            );
    }
}

fn load_audio(mut commands: Commands, assets: Res<AssetServer>) {
    commands.insert_resource(AudioHandles {
        pickup: assets.load("audio/pickup.ogg"),
        ambience: assets.load("audio/whisper.ogg"),
    });
}

fn stop_instance(slot: &mut AmbienceInstance, instances: &mut Assets<AudioInstance>) {
    if let Some(handle) = slot.0.take() {
        if let Some(instance) = instances.get_mut(&handle) {
            instance.stop(AudioTween::default());
        }
    }
}

fn start_ambience(
    audio: Res<Audio>,
    handles: Res<AudioHandles>,
    mut slot: ResMut<AmbienceInstance>,
    mut instances: ResMut<Assets<AudioInstance>>,
) {
    stop_instance(&mut slot, &mut instances);
    slot.0 = Some(audio.play(handles.ambience.clone()).looped().handle());
    debug!("Audio: ambience started");
}

fn stop_ambience(mut slot: ResMut<AmbienceInstance>, mut instances: ResMut<Assets<AudioInstance>>) {
    stop_instance(&mut slot, &mut instances);
    debug!("Audio: ambience stopped");
}

/// Each playfield gets its own ambience loop, matching the rebuild.
fn cycle_ambience_on_reload(
    mut requests: EventReader<ReloadPlayfield>,
    audio: Res<Audio>,
    handles: Res<AudioHandles>,
    mut slot: ResMut<AmbienceInstance>,
    mut instances: ResMut<Assets<AudioInstance>>,
) {
    if requests.is_empty() {
        return;
    }
    requests.clear();

    stop_instance(&mut slot, &mut instances);
    slot.0 = Some(audio.play(handles.ambience.clone()).looped().handle());
}

fn pickup_sfx(
    mut collected: EventReader<PickupCollected>,
    audio: Res<Audio>,
    handles: Res<AudioHandles>,
) {
    for _ in collected.read() {
        audio.play(handles.pickup.clone());
    }
}
