use std::fmt;

use bevy::prelude::*;

/// Normalize a bearing into `[0, 360)`.
pub fn normalize_azimuth(degrees: f32) -> f32 {
    let normalized = degrees.rem_euclid(360.0);
    // rem_euclid rounds tiny negative inputs up to exactly 360.
    if normalized >= 360.0 { 0.0 } else { normalized }
}

/// One of the eight 45-degree compass sectors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CompassPoint {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl CompassPoint {
    /// Sectors clockwise from North.
    const CLOCKWISE: [CompassPoint; 8] = [
        CompassPoint::North,
        CompassPoint::NorthEast,
        CompassPoint::East,
        CompassPoint::SouthEast,
        CompassPoint::South,
        CompassPoint::SouthWest,
        CompassPoint::West,
        CompassPoint::NorthWest,
    ];

    /// Sector containing `azimuth_degrees`; North spans `[337.5, 22.5)`.
    pub fn from_azimuth(azimuth_degrees: f32) -> Self {
        let shifted = normalize_azimuth(azimuth_degrees) + 22.5;
        let sector = (shifted / 45.0).floor() as usize % Self::CLOCKWISE.len();
        Self::CLOCKWISE[sector]
    }

    /// Center bearing of the sector in degrees.
    pub fn bearing_degrees(self) -> f32 {
        let index = Self::CLOCKWISE
            .iter()
            .position(|point| *point == self)
            .unwrap_or_default();
        index as f32 * 45.0
    }

    /// Unit step on the ground plane, with bearing θ at `(cos θ, sin θ)` in `(x, z)`.
    pub fn ground_direction(self) -> Vec2 {
        let radians = self.bearing_degrees().to_radians();
        Vec2::new(radians.cos(), radians.sin())
    }

    /// Human-readable sector name.
    pub fn name(self) -> &'static str {
        match self {
            CompassPoint::North => "North",
            CompassPoint::NorthEast => "North-East",
            CompassPoint::East => "East",
            CompassPoint::SouthEast => "South-East",
            CompassPoint::South => "South",
            CompassPoint::SouthWest => "South-West",
            CompassPoint::West => "West",
            CompassPoint::NorthWest => "North-West",
        }
    }
}

impl fmt::Display for CompassPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
