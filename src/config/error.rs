//! Error types for loading the simulation configuration

use std::path::PathBuf;

use thiserror::Error;

/// Reasons a configuration file can be rejected
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config syntax: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("building id {0} appears more than once")]
    DuplicateBuilding(u32),

    #[error("building {id} needs a positive, finite height, width, and depth")]
    InvalidFootprint { id: u32 },

    #[error("building {id} needs a finite position")]
    InvalidPosition { id: u32 },

    #[error("animation step and tick interval must both be positive")]
    InvalidAnimation,

    #[error("start hour and sunrise azimuth must be finite numbers")]
    InvalidClock,

    #[error("the building layout is empty")]
    EmptyLayout,
}
