use bevy::color::{LinearRgba, Mix, Srgba};
use bevy::prelude::*;

use crate::solar::sun::{DAY_END_HOUR, DAY_START_HOUR};

/// Night sky, also the start of the dawn blend.
fn night() -> Srgba {
    Srgba::rgb_u8(0x1a, 0x1a, 0x2e)
}

/// Dawn glow reached at the end of the morning blend.
fn dawn() -> Srgba {
    Srgba::rgb_u8(0xff, 0x7e, 0x5f)
}

/// Clear daytime sky.
fn daylight() -> Srgba {
    Srgba::rgb_u8(0x87, 0xce, 0xeb)
}

/// Sunset glow reached at the end of the evening blend.
fn sunset() -> Srgba {
    Srgba::rgb_u8(0xff, 0x6b, 0x35)
}

/// Blend in linear space.
fn blend(from: Srgba, to: Srgba, t: f32) -> Color {
    Color::LinearRgba(LinearRgba::from(from).mix(&LinearRgba::from(to), t))
}

fn solid(color: Srgba) -> Color {
    Color::LinearRgba(LinearRgba::from(color))
}

/// Sky color for an hour in `[0, 24)`.
///
/// Dawn blends over `[6, 8)`, the day sky holds over `[8, 17)`, dusk blends
/// over `[17, 20)`, and everything else is night.
pub fn sky_color(hour: f32) -> Color {
    if (6.0..8.0).contains(&hour) {
        blend(night(), dawn(), (hour - 6.0) / 2.0)
    } else if (8.0..17.0).contains(&hour) {
        solid(daylight())
    } else if (17.0..20.0).contains(&hour) {
        blend(daylight(), sunset(), (hour - 17.0) / 3.0)
    } else {
        solid(night())
    }
}

/// Two-level ambient fill: dim and cool at night, neutral during the day.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AmbientLevel {
    /// Relative ambient strength.
    pub intensity: f32,
    /// Ambient tint.
    pub color: Color,
}

/// Ambient fill for an hour.
pub fn ambient_level(hour: f32) -> AmbientLevel {
    if hour < DAY_START_HOUR || hour > DAY_END_HOUR {
        AmbientLevel {
            intensity: 0.15,
            color: Color::srgb_u8(0x1a, 0x1a, 0x4e),
        }
    } else {
        AmbientLevel {
            intensity: 0.35,
            color: Color::srgb_u8(0x40, 0x40, 0x40),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linear(color: Color) -> LinearRgba {
        color.to_linear()
    }

    fn close(a: Color, b: Color, eps: f32) -> bool {
        let (a, b) = (linear(a), linear(b));
        (a.red - b.red).abs() < eps && (a.green - b.green).abs() < eps && (a.blue - b.blue).abs() < eps
    }

    #[test]
    fn night_and_day_plateaus_are_constant() {
        assert_eq!(sky_color(0.0), sky_color(5.5));
        assert_eq!(sky_color(21.0), sky_color(23.9));
        assert_eq!(sky_color(8.0), sky_color(16.9));
        assert_eq!(sky_color(12.0), solid(daylight()));
    }

    #[test]
    fn blend_hits_both_ends_and_averages_linear_channels() {
        assert_eq!(blend(night(), dawn(), 0.0), solid(night()));
        assert!(close(blend(night(), dawn(), 1.0), solid(dawn()), 1e-6));

        let (a, b) = (LinearRgba::from(daylight()), LinearRgba::from(sunset()));
        let mid = linear(blend(daylight(), sunset(), 0.5));
        assert!((mid.red - (a.red + b.red) * 0.5).abs() < 1e-6);
        assert!((mid.green - (a.green + b.green) * 0.5).abs() < 1e-6);
        assert!((mid.blue - (a.blue + b.blue) * 0.5).abs() < 1e-6);
        assert_eq!(mid.alpha, 1.0);
    }

    #[test]
    fn dawn_blend_starts_exactly_at_night_color() {
        assert_eq!(sky_color(6.0), sky_color(5.999));
        assert!(close(sky_color(6.0 - 1e-4), sky_color(6.0 + 1e-4), 1e-3));
    }

    #[test]
    fn dusk_blend_starts_exactly_at_day_color() {
        assert_eq!(sky_color(17.0), sky_color(16.0));
        assert!(close(sky_color(17.0 - 1e-4), sky_color(17.0 + 1e-4), 1e-3));
    }

    #[test]
    fn blends_approach_their_glow_colors() {
        assert!(close(sky_color(8.0 - 1e-4), solid(dawn()), 1e-3));
        assert!(close(sky_color(20.0 - 1e-4), solid(sunset()), 1e-3));
        assert!(close(sky_color(7.0), blend(night(), dawn(), 0.5), 1e-6));
    }

    #[test]
    fn ambient_switches_outside_day_window() {
        assert_eq!(ambient_level(5.9).intensity, 0.15);
        assert_eq!(ambient_level(6.0).intensity, 0.35);
        assert_eq!(ambient_level(18.0).intensity, 0.35);
        assert_eq!(ambient_level(18.1).intensity, 0.15);
    }
}
