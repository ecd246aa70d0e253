//! Simulation configuration loaded once at startup.
//!
//! Defaults reproduce the built-in site plan. A TOML file named by the
//! `SUNLIGHT_CONFIG` environment variable can override any subset of fields;
//! the layout it describes becomes the fixed layout that reset returns to.

mod error;

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use bevy::prelude::*;
use serde::Deserialize;

use crate::placement::{Building, BuildingId, Footprint, PlacementState, SimulationClock, default_layout};
use crate::solar::Season;

pub use error::ConfigError;

/// Environment variable holding the path of an optional config file.
pub const CONFIG_ENV_VAR: &str = "SUNLIGHT_CONFIG";

/// Full simulation configuration.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Hour shown at startup (0-24).
    pub start_hour: f32,
    /// Season shown at startup.
    pub season: Season,
    /// Sunrise bearing in degrees, 0 = North, 90 = East.
    pub sunrise_azimuth_degrees: f32,
    /// Automatic time-lapse cadence.
    pub animation: AnimationConfig,
    /// Initial building layout.
    pub buildings: Vec<BuildingConfig>,
}

/// Time-lapse cadence: `step_hours` added every `tick_interval_ms`.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub step_hours: f32,
    pub tick_interval_ms: u64,
    /// Start the time-lapse immediately.
    pub autostart: bool,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            step_hours: 0.1,
            tick_interval_ms: 50,
            autostart: false,
        }
    }
}

/// One building entry of the initial layout.
#[derive(Clone, Debug, Deserialize)]
pub struct BuildingConfig {
    pub id: u32,
    pub name: String,
    pub x: f32,
    pub z: f32,
    pub height: f32,
    pub width: f32,
    pub depth: f32,
}

impl From<&Building> for BuildingConfig {
    fn from(building: &Building) -> Self {
        let footprint = building.footprint();
        Self {
            id: building.id().0,
            name: building.name().to_owned(),
            x: building.x(),
            z: building.z(),
            height: footprint.height(),
            width: footprint.width(),
            depth: footprint.depth(),
        }
    }
}

impl BuildingConfig {
    fn to_building(&self) -> Building {
        Building::new(
            BuildingId(self.id),
            self.name.clone(),
            self.x,
            self.z,
            Footprint::new(self.height, self.width, self.depth),
        )
    }

    fn is_out_of_bounds(&self) -> bool {
        let in_site = |value: f32| value.abs() <= crate::SITE_HALF_EXTENT;
        !(in_site(self.x) && in_site(self.z))
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            start_hour: 12.0,
            season: Season::Spring,
            sunrise_azimuth_degrees: 90.0,
            animation: AnimationConfig::default(),
            buildings: default_layout().iter().map(BuildingConfig::from).collect(),
        }
    }
}

impl SimulationConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse, and validate a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }

    /// Load from `SUNLIGHT_CONFIG` when set, otherwise use defaults.
    pub fn from_env() -> Result<(Self, ConfigSource), ConfigError> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => {
                let path = PathBuf::from(path);
                let config = Self::load(&path)?;
                Ok((config, ConfigSource::File(path)))
            }
            None => Ok((Self::default(), ConfigSource::Defaults)),
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !self.start_hour.is_finite() || !self.sunrise_azimuth_degrees.is_finite() {
            return Err(ConfigError::InvalidClock);
        }
        if !(self.animation.step_hours > 0.0 && self.animation.step_hours.is_finite())
            || self.animation.tick_interval_ms == 0
        {
            return Err(ConfigError::InvalidAnimation);
        }
        if self.buildings.is_empty() {
            return Err(ConfigError::EmptyLayout);
        }
        let mut seen = HashSet::new();
        for building in &self.buildings {
            if !seen.insert(building.id) {
                return Err(ConfigError::DuplicateBuilding(building.id));
            }
            let dims = [building.height, building.width, building.depth];
            if dims.iter().any(|dim| !(dim.is_finite() && *dim > 0.0)) {
                return Err(ConfigError::InvalidFootprint { id: building.id });
            }
            if !(building.x.is_finite() && building.z.is_finite()) {
                return Err(ConfigError::InvalidPosition { id: building.id });
            }
        }
        Ok(())
    }

    /// Layout with positions clamped into the site.
    pub fn initial_layout(&self) -> Vec<Building> {
        self.buildings.iter().map(BuildingConfig::to_building).collect()
    }

    /// Ids of configured buildings that had to be clamped into the site.
    pub fn clamped_buildings(&self) -> Vec<BuildingId> {
        self.buildings
            .iter()
            .filter(|building| building.is_out_of_bounds())
            .map(|building| BuildingId(building.id))
            .collect()
    }

    /// Paused clock at the configured start.
    pub fn initial_clock(&self) -> SimulationClock {
        SimulationClock::new(self.start_hour, self.season, self.sunrise_azimuth_degrees)
    }

    pub fn placement_state(&self) -> PlacementState {
        let mut state = PlacementState::new(self.initial_layout(), self.initial_clock());
        state.set_animating(self.animation.autostart);
        state
    }
}

/// Where the active configuration came from.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigSource {
    Defaults,
    File(PathBuf),
}

#[derive(Resource, Clone, Debug)]
/// Outcome of config loading, logged once the log plugin is running.
pub struct ConfigReport {
    pub source: ConfigSource,
    pub clamped: Vec<BuildingId>,
}

impl ConfigReport {
    pub fn new(config: &SimulationConfig, source: ConfigSource) -> Self {
        Self {
            source,
            clamped: config.clamped_buildings(),
        }
    }
}

/// Log where the configuration came from and any clamped positions.
pub fn log_config_report(report: Res<ConfigReport>) {
    match &report.source {
        ConfigSource::Defaults => info!("using built-in site plan"),
        ConfigSource::File(path) => info!("loaded site plan from {}", path.display()),
    }
    for id in &report.clamped {
        warn!("building {} was placed outside the site and has been clamped", id.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config = SimulationConfig::from_toml_str("").unwrap();
        assert_eq!(config.start_hour, 12.0);
        assert_eq!(config.season, Season::Spring);
        assert_eq!(config.animation.tick_interval_ms, 50);
        assert!(!config.placement_state().is_animating());
        assert_eq!(config.initial_layout(), default_layout());
    }

    #[test]
    fn partial_document_overrides_fields() {
        let raw = r#"
            start_hour = 7.5
            season = "summer"
            sunrise_azimuth_degrees = -30.0

            [animation]
            step_hours = 0.25
            autostart = true

            [[buildings]]
            id = 7
            name = "Tower"
            x = 150.0
            z = 10.0
            height = 80.0
            width = 10.0
            depth = 10.0
        "#;
        let config = SimulationConfig::from_toml_str(raw).unwrap();
        assert_eq!(config.animation.step_hours, 0.25);
        assert_eq!(config.animation.tick_interval_ms, 50);
        assert_eq!(config.clamped_buildings(), vec![BuildingId(7)]);

        let state = config.placement_state();
        assert!(state.is_animating());
        assert_eq!(state.season(), Season::Summer);
        assert_eq!(state.sunrise_azimuth_degrees(), 330.0);
        assert_eq!(state.hour(), 7.5);
        let tower = state.building(BuildingId(7)).unwrap();
        assert_eq!(tower.x(), crate::SITE_HALF_EXTENT);
        assert_eq!(tower.footprint().height(), 80.0);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let raw = r#"
            [[buildings]]
            id = 1
            name = "A"
            x = 0.0
            z = 0.0
            height = 1.0
            width = 1.0
            depth = 1.0

            [[buildings]]
            id = 1
            name = "B"
            x = 5.0
            z = 5.0
            height = 1.0
            width = 1.0
            depth = 1.0
        "#;
        let err = SimulationConfig::from_toml_str(raw).unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateBuilding(1)));
    }

    #[test]
    fn degenerate_values_are_rejected() {
        let raw = r#"
            [[buildings]]
            id = 4
            name = "Flat"
            x = 0.0
            z = 0.0
            height = 0.0
            width = 1.0
            depth = 1.0
        "#;
        assert!(matches!(
            SimulationConfig::from_toml_str(raw),
            Err(ConfigError::InvalidFootprint { id: 4 })
        ));
        assert!(matches!(
            SimulationConfig::from_toml_str("[animation]\ntick_interval_ms = 0"),
            Err(ConfigError::InvalidAnimation)
        ));
        assert!(matches!(
            SimulationConfig::from_toml_str("buildings = []"),
            Err(ConfigError::EmptyLayout)
        ));
        assert!(matches!(
            SimulationConfig::from_toml_str("season = \"monsoon\""),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = SimulationConfig::load(Path::new("/nonexistent/sunlight.toml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/sunlight.toml"));
    }
}
