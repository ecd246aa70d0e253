//! Stylized sun path.
//!
//! The sun rises at the configured azimuth at 6:00, crosses a half-sine arc
//! whose peak depends on the season, and sets on the opposite bearing at
//! 18:00. At night it keeps sweeping the remaining half circle on a shallow
//! arc below the horizon, joining the day arc at both ends.

use std::f32::consts::PI;

use bevy::prelude::*;

/// Hour of sunrise.
pub const DAY_START_HOUR: f32 = 6.0;
/// Hour of sunset.
pub const DAY_END_HOUR: f32 = 18.0;
/// Horizontal radius of the sun's orbit around the site origin.
pub const ORBIT_RADIUS: f32 = 100.0;

const DAY_LENGTH_HOURS: f32 = DAY_END_HOUR - DAY_START_HOUR;
const NIGHT_LENGTH_HOURS: f32 = 24.0 - DAY_LENGTH_HOURS;
/// Arc height for a sun standing straight overhead.
const ZENITH_ARC_HEIGHT: f32 = 80.0;
/// Depth reached below the horizon at midnight.
const NIGHT_ARC_DEPTH: f32 = 30.0;

/// Whether `hour` lies in the closed day window `[6, 18]`.
pub fn is_daytime(hour: f32) -> bool {
    (DAY_START_HOUR..=DAY_END_HOUR).contains(&hour)
}

/// Fraction of the night elapsed, measured from the last sunset.
fn night_progress(hour: f32) -> f32 {
    if hour > DAY_END_HOUR {
        (hour - DAY_END_HOUR) / NIGHT_LENGTH_HOURS
    } else {
        (hour + 24.0 - DAY_END_HOUR) / NIGHT_LENGTH_HOURS
    }
}

/// Hours from `hour` back to the nearest day-window boundary.
fn hours_past_horizon(hour: f32) -> f32 {
    if hour > DAY_END_HOUR {
        hour - DAY_END_HOUR
    } else {
        DAY_START_HOUR - hour
    }
}

fn on_orbit(angle: f32, height: f32) -> Vec3 {
    Vec3::new(angle.cos() * ORBIT_RADIUS, height, angle.sin() * ORBIT_RADIUS)
}

/// World-space sun position for an hour in `[0, 24)`.
pub fn sun_position(hour: f32, sun_elevation_degrees: f32, sunrise_azimuth_degrees: f32) -> Vec3 {
    let rise = sunrise_azimuth_degrees.to_radians();
    if is_daytime(hour) {
        let progress = (hour - DAY_START_HOUR) / DAY_LENGTH_HOURS;
        let max_height = sun_elevation_degrees.to_radians().sin() * ZENITH_ARC_HEIGHT;
        // sin(PI) is slightly negative in f32; keep the horizon at exactly zero.
        let lift = (progress * PI).sin().max(0.0);
        return on_orbit(rise + progress * PI, lift * max_height);
    }
    let progress = night_progress(hour);
    // Depth peaks at midnight; the sine argument stays within (0, PI / 2].
    let depth = (hours_past_horizon(hour) / NIGHT_LENGTH_HOURS * PI).sin() * NIGHT_ARC_DEPTH;
    // Starts on the set bearing and ends back on the rise bearing.
    on_orbit(rise + PI + progress * PI, -depth)
}

/// Direct-light strength: 1 at noon, 0.5 at sunrise and sunset, 0 at night.
pub fn light_intensity(hour: f32) -> f32 {
    if !is_daytime(hour) {
        return 0.0;
    }
    1.0 - ((hour - 12.0).abs() / 6.0) * 0.5
}

/// Rounded sun altitude in degrees shown to the user, `None` at night.
pub fn displayed_altitude(hour: f32, sun_elevation_degrees: f32) -> Option<i32> {
    if !is_daytime(hour) {
        return None;
    }
    let progress = (hour - DAY_START_HOUR) / DAY_LENGTH_HOURS;
    Some(((progress * PI).sin().max(0.0) * sun_elevation_degrees).round() as i32)
}

/// Derived sun sample handed to the renderer each frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SunVector {
    /// Sun position in world space.
    pub position: Vec3,
    /// Direct-light intensity in `[0, 1]`.
    pub intensity: f32,
}

impl SunVector {
    /// Sample the sun for the given clock inputs.
    pub fn sample(hour: f32, sun_elevation_degrees: f32, sunrise_azimuth_degrees: f32) -> Self {
        Self {
            position: sun_position(hour, sun_elevation_degrees, sunrise_azimuth_degrees),
            intensity: light_intensity(hour),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ELEVATIONS: [f32; 3] = [28.0, 50.0, 65.0];
    const AZIMUTHS: [f32; 5] = [0.0, 45.0, 90.0, 200.0, 359.0];

    fn approx(a: Vec3, b: Vec3, eps: f32) -> bool {
        (a - b).abs().max_element() < eps
    }

    #[test]
    fn day_arc_stays_above_horizon() {
        for elevation in ELEVATIONS {
            for azimuth in AZIMUTHS {
                for step in 0..=120 {
                    let hour = DAY_START_HOUR + step as f32 * 0.1;
                    let y = sun_position(hour, elevation, azimuth).y;
                    assert!(y >= 0.0, "y = {y} at hour {hour}");
                    if step != 0 && step != 120 {
                        assert!(y > 0.0, "y = {y} at hour {hour}");
                    }
                }
                assert_eq!(sun_position(DAY_START_HOUR, elevation, azimuth).y, 0.0);
                assert_eq!(sun_position(DAY_END_HOUR, elevation, azimuth).y, 0.0);
            }
        }
    }

    #[test]
    fn night_arc_stays_below_horizon() {
        for azimuth in AZIMUTHS {
            for step in 1..48 {
                let hour = (DAY_END_HOUR + step as f32 * 0.25) % 24.0;
                let y = sun_position(hour, 50.0, azimuth).y;
                assert!(y < 0.0, "y = {y} at hour {hour}");
                assert!(y >= -NIGHT_ARC_DEPTH);
            }
        }
        let midnight = sun_position(0.0, 50.0, 90.0);
        assert!((midnight.y + NIGHT_ARC_DEPTH).abs() < 1e-3);
    }

    #[test]
    fn night_hours_one_ulp_from_the_horizon_stay_below() {
        let just_before_rise = f32::from_bits(DAY_START_HOUR.to_bits() - 1);
        let just_after_set = f32::from_bits(DAY_END_HOUR.to_bits() + 1);
        for azimuth in AZIMUTHS {
            for ulps in 0..64 {
                let before = f32::from_bits(just_before_rise.to_bits() - ulps);
                let after = f32::from_bits(just_after_set.to_bits() + ulps);
                for hour in [before, after] {
                    assert!(!is_daytime(hour));
                    let y = sun_position(hour, 65.0, azimuth).y;
                    assert!(y < 0.0, "y = {y} at hour {hour:.9}");
                }
            }
        }
    }

    #[test]
    fn sunrise_and_sunset_join_the_night_arc() {
        let eps = 1e-3;
        for elevation in ELEVATIONS {
            for azimuth in AZIMUTHS {
                let at_rise = sun_position(DAY_START_HOUR, elevation, azimuth);
                let before_rise = sun_position(DAY_START_HOUR - eps, elevation, azimuth);
                assert!(approx(at_rise, before_rise, 0.1), "{at_rise:?} vs {before_rise:?}");

                let at_set = sun_position(DAY_END_HOUR, elevation, azimuth);
                let after_set = sun_position(DAY_END_HOUR + eps, elevation, azimuth);
                assert!(approx(at_set, after_set, 0.1), "{at_set:?} vs {after_set:?}");
            }
        }
    }

    #[test]
    fn sun_rises_on_azimuth_and_sets_opposite() {
        let rise = sun_position(DAY_START_HOUR, 50.0, 90.0);
        assert!(approx(rise, Vec3::new(0.0, 0.0, ORBIT_RADIUS), 1e-3));
        let set = sun_position(DAY_END_HOUR, 50.0, 90.0);
        assert!(approx(set, Vec3::new(0.0, 0.0, -ORBIT_RADIUS), 1e-3));
    }

    #[test]
    fn summer_noon_reaches_peak_height() {
        let noon = sun_position(12.0, 65.0, 90.0);
        let expected_height = 65.0_f32.to_radians().sin() * ZENITH_ARC_HEIGHT;
        assert!((noon.y - expected_height).abs() < 1e-3);
        assert!((noon.y - 72.5).abs() < 0.1);
        let radius = Vec2::new(noon.x, noon.z).length();
        assert!((radius - ORBIT_RADIUS).abs() < 1e-3);
        // Halfway between an east rise and a west set.
        assert!(approx(noon, Vec3::new(-ORBIT_RADIUS, expected_height, 0.0), 1e-3));
    }

    #[test]
    fn intensity_peaks_at_noon_and_halves_at_horizon() {
        assert_eq!(light_intensity(12.0), 1.0);
        assert_eq!(light_intensity(6.0), 0.5);
        assert_eq!(light_intensity(18.0), 0.5);
        assert_eq!(light_intensity(9.0), 0.75);
        assert_eq!(light_intensity(5.9), 0.0);
        assert_eq!(light_intensity(18.1), 0.0);
    }

    #[test]
    fn displayed_altitude_follows_arc() {
        assert_eq!(displayed_altitude(12.0, 65.0), Some(65));
        assert_eq!(displayed_altitude(6.0, 65.0), Some(0));
        assert_eq!(displayed_altitude(9.0, 50.0), Some(35));
        assert_eq!(displayed_altitude(3.0, 50.0), None);
    }

    #[test]
    fn sample_is_deterministic() {
        assert_eq!(SunVector::sample(14.3, 28.0, 120.0), SunVector::sample(14.3, 28.0, 120.0));
    }
}
