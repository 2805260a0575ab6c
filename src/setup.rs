use bevy::prelude::*;
use bevy::render::camera::ScalingMode;

/// Vertical world-units visible on screen; tall enough to frame the whole
/// spawn band with some margin.
pub const VIEW_HEIGHT: f32 = 28.0;

#[derive(Component)]
pub struct MainCamera;

pub fn setup(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        Projection::Orthographic(OrthographicProjection {
            scaling_mode: ScalingMode::FixedVertical {
                viewport_height: VIEW_HEIGHT,
            },
            ..OrthographicProjection::default_2d()
        }),
        MainCamera,
    ));
}
