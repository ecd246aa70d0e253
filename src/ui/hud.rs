use bevy::prelude::*;

use crate::placement::{PlacementState, format_clock};
use crate::solar::{CompassPoint, displayed_altitude};

/// Marker for the status text panel.
#[derive(Component)]
pub struct HudText;

const CONTROLS_HINT: &str = "Space play/pause | Left/Right time (Shift: 1h) | 1-4 season\n\
Q/E sunrise | Tab select | WASD nudge | R reset | drag buildings or ground";

/// Status panel contents for the current state.
pub fn hud_text(state: &PlacementState) -> String {
    let clock = state.clock();
    let profile = state.season().profile();
    let sunrise = state.sunrise_azimuth_degrees();

    let playback = if state.is_animating() { "playing" } else { "paused" };
    let altitude = match displayed_altitude(clock.hour(), profile.sun_elevation_degrees) {
        Some(altitude) => format!("Sun altitude {altitude}°"),
        None => "Sun below horizon".to_owned(),
    };
    let mut lines = vec![
        format!("{} {} ({playback})", format_clock(clock.hour()), clock.day_period()),
        format!("{} - {}", profile.name, profile.reference_date),
        format!(
            "Sunrise {sunrise:.0}° {} / sunset {}",
            CompassPoint::from_azimuth(sunrise),
            CompassPoint::from_azimuth(sunrise + 180.0),
        ),
        altitude,
        String::new(),
    ];
    lines.extend(state.buildings().iter().map(|building| {
        let marker = if state.selected_building_id() == Some(building.id()) { '>' } else { ' ' };
        format!("{marker} {} ({:.0}, {:.0})", building.name(), building.x(), building.z())
    }));
    lines.push(String::new());
    lines.push(CONTROLS_HINT.to_owned());
    lines.join("\n")
}

pub fn setup_hud(mut commands: Commands) {
    commands.spawn((
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(16.0),
            right: Val::Px(16.0),
            padding: UiRect::all(Val::Px(10.0)),
            ..default()
        },
        BackgroundColor(Color::srgba(0.05, 0.05, 0.1, 0.7)),
        Text::new(String::new()),
        TextFont {
            font_size: 15.0,
            ..default()
        },
        TextColor(Color::WHITE),
        HudText,
    ));
}

/// Refresh the panel text whenever the state changes.
pub fn update_hud_system(state: Res<PlacementState>, mut text_query: Query<&mut Text, With<HudText>>) {
    if !state.is_changed() {
        return;
    }
    let contents = hud_text(&state);
    for mut text in &mut text_query {
        text.0.clone_from(&contents);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimulationConfig;
    use crate::placement::BuildingId;

    #[test]
    fn noon_panel_lists_sun_and_buildings() {
        let mut state = SimulationConfig::default().placement_state();
        state.select_building(Some(BuildingId(2)));
        let text = hud_text(&state);
        assert!(text.starts_with("12:00 Afternoon (paused)"));
        assert!(text.contains("Spring - Vernal equinox (Mar 21)"));
        assert!(text.contains("Sunrise 90° East / sunset West"));
        assert!(text.contains("Sun altitude 50°"));
        assert!(text.contains("> Building 102 (25, -20)"));
        assert!(text.contains("  Building 101 (-25, -20)"));
    }

    #[test]
    fn panel_sections_are_separated_by_blank_lines() {
        let text = hud_text(&SimulationConfig::default().placement_state());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[3], "Sun altitude 50°");
        assert_eq!(lines[4], "");
        assert_eq!(lines[5], "  Building 101 (-25, -20)");
        assert_eq!(lines[8], "");
        assert!(text.ends_with(CONTROLS_HINT));
        assert!(!text.contains("\n\n\n"));
    }

    #[test]
    fn night_panel_reports_sun_below_horizon() {
        let mut state = SimulationConfig::default().placement_state();
        state.set_hour(22.5);
        state.set_sunrise_azimuth(45.0);
        let text = hud_text(&state);
        assert!(text.starts_with("22:30 Night"));
        assert!(text.contains("Sun below horizon"));
        assert!(text.contains("North-East / sunset South-West"));
    }
}
