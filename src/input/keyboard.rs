use bevy::prelude::*;

use crate::placement::PlacementState;
use crate::solar::{CompassPoint, Season};

/// Fine clock scrub per key press, in hours.
const HOUR_STEP_FINE: f32 = 0.1;
/// Coarse clock scrub with Shift held, in hours.
const HOUR_STEP_COARSE: f32 = 1.0;
/// Sunrise azimuth change per key press, in degrees.
const AZIMUTH_STEP: f32 = 5.0;

/// Season keys, in `Season::ALL` order.
const SEASON_KEYS: [KeyCode; 4] = [KeyCode::Digit1, KeyCode::Digit2, KeyCode::Digit3, KeyCode::Digit4];

const NUDGE_KEYS: [(KeyCode, CompassPoint); 4] = [
    (KeyCode::KeyW, CompassPoint::North),
    (KeyCode::KeyA, CompassPoint::West),
    (KeyCode::KeyS, CompassPoint::South),
    (KeyCode::KeyD, CompassPoint::East),
];

/// One control-panel action.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PanelCommand {
    ToggleAnimation,
    /// Move the time slider by a signed number of hours.
    ScrubHours(f32),
    SelectSeason(Season),
    /// Rotate the sunrise bearing by signed degrees.
    RotateSunrise(f32),
    CycleSelection,
    /// Move the selected building one step.
    Nudge(CompassPoint),
    ResetLayout,
}

impl PanelCommand {
    /// Commands for keys pressed this frame, in a fixed order.
    pub fn from_keys(keys: &ButtonInput<KeyCode>) -> Vec<Self> {
        let mut commands = Vec::new();
        if keys.just_pressed(KeyCode::Space) {
            commands.push(Self::ToggleAnimation);
        }
        let step = if keys.any_pressed([KeyCode::ShiftLeft, KeyCode::ShiftRight]) {
            HOUR_STEP_COARSE
        } else {
            HOUR_STEP_FINE
        };
        if keys.just_pressed(KeyCode::ArrowLeft) {
            commands.push(Self::ScrubHours(-step));
        }
        if keys.just_pressed(KeyCode::ArrowRight) {
            commands.push(Self::ScrubHours(step));
        }
        for (key, season) in SEASON_KEYS.into_iter().zip(Season::ALL) {
            if keys.just_pressed(key) {
                commands.push(Self::SelectSeason(season));
            }
        }
        if keys.just_pressed(KeyCode::KeyQ) {
            commands.push(Self::RotateSunrise(-AZIMUTH_STEP));
        }
        if keys.just_pressed(KeyCode::KeyE) {
            commands.push(Self::RotateSunrise(AZIMUTH_STEP));
        }
        if keys.just_pressed(KeyCode::Tab) {
            commands.push(Self::CycleSelection);
        }
        for (key, direction) in NUDGE_KEYS {
            if keys.just_pressed(key) {
                commands.push(Self::Nudge(direction));
            }
        }
        if keys.just_pressed(KeyCode::KeyR) {
            commands.push(Self::ResetLayout);
        }
        commands
    }

    pub fn apply(self, state: &mut PlacementState) {
        match self {
            Self::ToggleAnimation => state.toggle_animation(),
            Self::ScrubHours(delta) => {
                let hour = state.hour() + delta;
                state.set_hour(hour);
            }
            Self::SelectSeason(season) => state.set_season(season),
            Self::RotateSunrise(delta) => {
                let degrees = state.sunrise_azimuth_degrees() + delta;
                state.set_sunrise_azimuth(degrees);
            }
            Self::CycleSelection => state.cycle_selection(),
            Self::Nudge(direction) => {
                if let Some(id) = state.selected_building_id() {
                    state.nudge(id, direction);
                }
            }
            Self::ResetLayout => state.reset(),
        }
    }
}

/// Translate key presses into placement-state commands.
pub fn keyboard_panel_system(keys: Res<ButtonInput<KeyCode>>, mut state: ResMut<PlacementState>) {
    for command in PanelCommand::from_keys(&keys) {
        debug!("panel command {command:?}");
        command.apply(&mut state);
    }
}
