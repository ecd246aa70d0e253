use bevy::prelude::*;
use serde::Deserialize;

/// Fixed per-season sun parameters.
#[derive(Debug)]
pub struct SeasonProfile {
    /// Display name of the season.
    pub name: &'static str,
    /// Reference calendar date, display only.
    pub reference_date: &'static str,
    /// Peak solar elevation at solar noon, in degrees.
    pub sun_elevation_degrees: f32,
    /// sRGB light tint at full intensity.
    sun_tint_srgb: [u8; 3],
}

impl SeasonProfile {
    /// Light color used for the sun at full intensity.
    pub fn sun_tint(&self) -> Color {
        let [r, g, b] = self.sun_tint_srgb;
        Color::srgb_u8(r, g, b)
    }
}

static SPRING: SeasonProfile = SeasonProfile {
    name: "Spring",
    reference_date: "Vernal equinox (Mar 21)",
    sun_elevation_degrees: 50.0,
    sun_tint_srgb: [0xFF, 0xF5, 0xE0],
};

static SUMMER: SeasonProfile = SeasonProfile {
    name: "Summer",
    reference_date: "Summer solstice (Jun 21)",
    sun_elevation_degrees: 65.0,
    sun_tint_srgb: [0xFF, 0xFF, 0xCC],
};

static AUTUMN: SeasonProfile = SeasonProfile {
    name: "Autumn",
    reference_date: "Autumnal equinox (Sep 23)",
    sun_elevation_degrees: 50.0,
    sun_tint_srgb: [0xFF, 0xD6, 0x99],
};

static WINTER: SeasonProfile = SeasonProfile {
    name: "Winter",
    reference_date: "Winter solstice (Dec 22)",
    sun_elevation_degrees: 28.0,
    sun_tint_srgb: [0xE6, 0xF0, 0xFF],
};

/// Season selector for the simulated sun path.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    #[default]
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Season {
    /// All seasons in calendar order.
    pub const ALL: [Season; 4] = [Season::Spring, Season::Summer, Season::Autumn, Season::Winter];

    /// Immutable profile for this season.
    pub fn profile(self) -> &'static SeasonProfile {
        match self {
            Season::Spring => &SPRING,
            Season::Summer => &SUMMER,
            Season::Autumn => &AUTUMN,
            Season::Winter => &WINTER,
        }
    }

    /// Shorthand for the profile's noon elevation.
    pub fn sun_elevation_degrees(self) -> f32 {
        self.profile().sun_elevation_degrees
    }
}
