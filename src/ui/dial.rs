use bevy::prelude::*;

use crate::input::{DIAL_ORIGIN, DIAL_SIZE, dial_ring_percent};
use crate::placement::PlacementState;

/// Marker for the sunrise needle inside the dial.
#[derive(Component)]
pub struct DialNeedle;

/// Label ring radius, in percent of the dial size.
const LABEL_RADIUS_PERCENT: f32 = 42.0;
/// Needle ring radius, in percent of the dial size.
const NEEDLE_RADIUS_PERCENT: f32 = 40.0;
const NEEDLE_SIZE: f32 = 12.0;
const LABEL_BOX: f32 = 16.0;

fn ring_node(azimuth_degrees: f32, radius_percent: f32, size: f32) -> Node {
    let position = dial_ring_percent(azimuth_degrees, radius_percent);
    Node {
        position_type: PositionType::Absolute,
        left: Val::Percent(position.x),
        top: Val::Percent(position.y),
        width: Val::Px(size),
        height: Val::Px(size),
        margin: UiRect {
            left: Val::Px(-size * 0.5),
            top: Val::Px(-size * 0.5),
            ..default()
        },
        justify_content: JustifyContent::Center,
        align_items: AlignItems::Center,
        ..default()
    }
}

pub fn setup_dial(mut commands: Commands, state: Res<PlacementState>) {
    let sunrise = state.sunrise_azimuth_degrees();
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(DIAL_ORIGIN.x),
                top: Val::Px(DIAL_ORIGIN.y),
                width: Val::Px(DIAL_SIZE),
                height: Val::Px(DIAL_SIZE),
                ..default()
            },
            BackgroundColor(Color::srgba(0.05, 0.05, 0.1, 0.7)),
        ))
        .with_children(|dial| {
            for (label, bearing) in [("N", 0.0), ("E", 90.0), ("S", 180.0), ("W", 270.0)] {
                dial.spawn(ring_node(bearing, LABEL_RADIUS_PERCENT, LABEL_BOX))
                    .with_children(|cell| {
                        cell.spawn((
                            Text::new(label),
                            TextFont {
                                font_size: 13.0,
                                ..default()
                            },
                            TextColor(Color::WHITE),
                        ));
                    });
            }
            dial.spawn((
                ring_node(sunrise, NEEDLE_RADIUS_PERCENT, NEEDLE_SIZE),
                BackgroundColor(Color::srgb_u8(0xff, 0xb3, 0x47)),
                DialNeedle,
            ));
        });
}

/// Move the needle to the current sunrise bearing.
pub fn update_dial_system(state: Res<PlacementState>, mut needle_query: Query<&mut Node, With<DialNeedle>>) {
    if !state.is_changed() {
        return;
    }
    let position = dial_ring_percent(state.sunrise_azimuth_degrees(), NEEDLE_RADIUS_PERCENT);
    for mut node in &mut needle_query {
        node.left = Val::Percent(position.x);
        node.top = Val::Percent(position.y);
    }
}
