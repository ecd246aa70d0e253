use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::input::{DragMode, PointerDrag};
use crate::placement::PlacementState;
use crate::solar::normalize_azimuth;

/// Top-left corner of the sunrise dial in logical window pixels.
pub const DIAL_ORIGIN: Vec2 = Vec2::new(16.0, 16.0);
/// Edge length of the square dial widget.
pub const DIAL_SIZE: f32 = 128.0;

fn dial_center() -> Vec2 {
    DIAL_ORIGIN + Vec2::splat(DIAL_SIZE * 0.5)
}

fn dial_contains(cursor: Vec2) -> bool {
    cursor.distance(dial_center()) <= DIAL_SIZE * 0.5
}

/// Bearing for a pointer offset from the dial centre, screen y pointing down.
///
/// Up reads as North and right as East. The centre itself has no bearing.
pub fn dial_azimuth(offset: Vec2) -> Option<f32> {
    if offset == Vec2::ZERO || !offset.is_finite() {
        return None;
    }
    let degrees = offset.y.atan2(offset.x).to_degrees() + 90.0;
    Some(normalize_azimuth(degrees.round()))
}

/// Position on a dial ring for a bearing, as `(left%, top%)` of the dial box.
///
/// Inverse of [`dial_azimuth`]: bearing 0 sits at the top and bearings grow clockwise.
pub fn dial_ring_percent(azimuth_degrees: f32, radius_percent: f32) -> Vec2 {
    let radians = (azimuth_degrees - 90.0).to_radians();
    Vec2::new(
        50.0 + radius_percent * radians.cos(),
        50.0 + radius_percent * radians.sin(),
    )
}

/// Press-and-drag on the dial sets the sunrise azimuth.
pub fn dial_input_system(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut drag: ResMut<PointerDrag>,
    mut state: ResMut<PlacementState>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };
    if buttons.just_pressed(MouseButton::Left) && dial_contains(cursor) {
        drag.mode = DragMode::Dial;
    }
    if drag.mode != DragMode::Dial || !buttons.pressed(MouseButton::Left) {
        return;
    }
    let Some(azimuth) = dial_azimuth(cursor - dial_center()) else {
        return;
    };
    if azimuth != state.sunrise_azimuth_degrees() {
        state.set_sunrise_azimuth(azimuth);
    }
}
