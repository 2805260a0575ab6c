use bevy::prelude::*;
use bevy::ui::BackgroundColor;

use crate::playfield::PlayerLevel;

#[derive(Component)]
pub struct LevelText;

#[derive(Component)]
pub struct GameOverOverlay;

pub fn spawn_hud(mut commands: Commands, asset_server: Res<AssetServer>) {
    commands.spawn((
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(12.0),
            left: Val::Px(12.0),
            ..default()
        },
        Text::new("Level: 0"),
        TextFont {
            font: asset_server.load("fonts/FiraSans-Bold.ttf"),
            font_size: 28.0,
            ..default()
        },
        TextColor(Color::WHITE),
        LevelText,
    ));
}

pub fn update_level_text(
    level: Res<PlayerLevel>,
    mut query: Query<&mut Text, With<LevelText>>,
) {
    if !level.is_changed() {
        return;
    }
    for mut text in &mut query {
        text.0 = format!("Level: {}", level.0);
    }
}

pub fn spawn_game_over_overlay(mut commands: Commands, asset_server: Res<AssetServer>) {
    commands.spawn((
        // Fullscreen tinted overlay node
        Node {
            position_type: PositionType::Absolute,
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            flex_direction: FlexDirection::Column,
            ..default()
        },
        BackgroundColor(Color::linear_rgba(0.25, 0.0, 0.0, 0.7)),
        GameOverOverlay,
    ))
    .with_children(|parent| {
        parent.spawn((
            Text::new("GAME OVER"),
            TextFont {
                font: asset_server.load("fonts/FiraSans-Bold.ttf"),
                font_size: 64.0,
                ..default()
            },
            TextLayout::new_with_justify(JustifyText::Center),
            TextColor(Color::WHITE),
        ));
        parent.spawn((
            Text::new("Press R to restart"),
            TextFont {
                font: asset_server.load("fonts/FiraSans-Bold.ttf"),
                font_size: 28.0,
                ..default()
            },
            TextLayout::new_with_justify(JustifyText::Center),
            TextColor(Color::WHITE),
        ));
    });
}

pub fn despawn_game_over_overlay(
    mut commands: Commands,
    query: Query<Entity, With<GameOverOverlay>>,
) {
    for entity in &query {
        commands.entity(entity).despawn();
    }
}
