use bevy::prelude::*;

mod animation;
mod camera;
mod config;
mod input;
mod placement;
mod scene;
mod solar;
mod ui;

use animation::{AnimationSettings, AnimationTicker, animation_lifecycle_system, animation_tick_system};
use camera::orbit_camera_system;
use config::{ConfigReport, SimulationConfig, log_config_report};
use input::{PointerDrag, dial_input_system, keyboard_panel_system, pointer_input_system};
use scene::{apply_sun_system, setup_scene, sync_building_visuals_system};
use ui::{setup_dial, setup_hud, update_dial_system, update_hud_system};

/// Half the side length of the square site; building centres stay within it.
pub(crate) const SITE_HALF_EXTENT: f32 = 100.0;
/// Directional shadow map resolution.
const SHADOW_MAP_SIZE: usize = 4096;
const WINDOW_TITLE: &str = "Sunlight & Shadow Site Plan";

// App entry point and system registration.
fn main() -> AppExit {
    let (config, source) = match SimulationConfig::from_env() {
        Ok(loaded) => loaded,
        Err(err) => {
            // The log plugin is not running yet.
            eprintln!("failed to load configuration: {err}");
            return AppExit::error();
        }
    };
    let report = ConfigReport::new(&config, source);

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: WINDOW_TITLE.into(),
                ..default()
            }),
            ..default()
        }))
        .insert_resource(config.placement_state())
        .insert_resource(AnimationSettings::from(config.animation))
        .insert_resource(report)
        .init_resource::<PointerDrag>()
        .add_systems(Startup, (setup_scene, setup_hud, setup_dial, log_config_report))
        .add_systems(
            Update,
            (
                (
                    keyboard_panel_system,
                    dial_input_system,
                    pointer_input_system,
                    orbit_camera_system,
                )
                    .chain(),
                (
                    animation_lifecycle_system,
                    animation_tick_system.run_if(resource_exists::<AnimationTicker>),
                )
                    .chain(),
                (sync_building_visuals_system, apply_sun_system),
                (update_hud_system, update_dial_system),
            )
                .chain(),
        )
        .run()
}
