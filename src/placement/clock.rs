use std::fmt;

use crate::solar::{Season, SunVector, normalize_azimuth};

const HOURS_PER_DAY: f32 = 24.0;

/// Wrap an hour into `[0, 24)`.
fn wrap_hour(hour: f32) -> f32 {
    let wrapped = hour.rem_euclid(HOURS_PER_DAY);
    if wrapped >= HOURS_PER_DAY { 0.0 } else { wrapped }
}

/// Simulated time of day, season, and sunrise bearing.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationClock {
    /// Current hour in `[0, 24)`.
    hour: f32,
    season: Season,
    /// Sunrise bearing in `[0, 360)`.
    sunrise_azimuth_degrees: f32,
    animating: bool,
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self::new(12.0, Season::Spring, 90.0)
    }
}

impl SimulationClock {
    /// Build a paused clock, normalizing hour and azimuth.
    pub fn new(hour: f32, season: Season, sunrise_azimuth_degrees: f32) -> Self {
        let mut clock = Self {
            hour: 12.0,
            season,
            sunrise_azimuth_degrees: 90.0,
            animating: false,
        };
        clock.set_hour(hour);
        clock.set_sunrise_azimuth(sunrise_azimuth_degrees);
        clock
    }

    pub fn hour(&self) -> f32 {
        self.hour
    }

    pub fn season(&self) -> Season {
        self.season
    }

    pub fn sunrise_azimuth_degrees(&self) -> f32 {
        self.sunrise_azimuth_degrees
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }

    /// Advance by `delta_hours`, wrapping past midnight without a jump.
    pub fn advance(&mut self, delta_hours: f32) {
        if !delta_hours.is_finite() {
            return;
        }
        self.hour = wrap_hour(self.hour + delta_hours);
    }

    /// Set the hour from a slider in `[0, 24]`; 24 reads as midnight.
    pub fn set_hour(&mut self, hour: f32) {
        if hour.is_nan() {
            return;
        }
        let clamped = hour.clamp(0.0, HOURS_PER_DAY);
        self.hour = if clamped >= HOURS_PER_DAY { 0.0 } else { clamped };
    }

    pub fn set_season(&mut self, season: Season) {
        self.season = season;
    }

    /// Store a sunrise bearing normalized into `[0, 360)`.
    pub fn set_sunrise_azimuth(&mut self, degrees: f32) {
        if !degrees.is_finite() {
            return;
        }
        self.sunrise_azimuth_degrees = normalize_azimuth(degrees);
    }

    pub fn set_animating(&mut self, animating: bool) {
        self.animating = animating;
    }

    /// Sample the sun for the current clock.
    pub fn sun_vector(&self) -> SunVector {
        SunVector::sample(
            self.hour,
            self.season.sun_elevation_degrees(),
            self.sunrise_azimuth_degrees,
        )
    }

    pub fn day_period(&self) -> DayPeriod {
        DayPeriod::from_hour(self.hour)
    }
}

/// Format an hour as a `HH:MM` wall clock.
pub fn format_clock(hour: f32) -> String {
    let hours = hour.floor() as u32;
    let minutes = (hour.fract() * 60.0).floor() as u32;
    format!("{hours:02}:{minutes:02}")
}

/// Coarse label for the part of the day.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DayPeriod {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl DayPeriod {
    pub fn from_hour(hour: f32) -> Self {
        if (6.0..12.0).contains(&hour) {
            DayPeriod::Morning
        } else if (12.0..18.0).contains(&hour) {
            DayPeriod::Afternoon
        } else if (18.0..21.0).contains(&hour) {
            DayPeriod::Evening
        } else {
            DayPeriod::Night
        }
    }
}

impl fmt::Display for DayPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DayPeriod::Morning => "Morning",
            DayPeriod::Afternoon => "Afternoon",
            DayPeriod::Evening => "Evening",
            DayPeriod::Night => "Night",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_wraps_past_midnight_without_jump() {
        let mut clock = SimulationClock::new(23.95, Season::Summer, 90.0);
        let mut previous = clock.hour();
        for _ in 0..500 {
            clock.advance(0.1);
            let hour = clock.hour();
            assert!((0.0..24.0).contains(&hour), "hour {hour} escaped the day");
            let step = (hour - previous).rem_euclid(24.0);
            assert!((step - 0.1).abs() < 1e-3, "jump of {step} from {previous} to {hour}");
            previous = hour;
        }

        let mut clock = SimulationClock::new(23.95, Season::Summer, 90.0);
        clock.advance(0.1);
        assert!((clock.hour() - 0.05).abs() < 1e-4);
    }

    #[test]
    fn advance_backwards_never_goes_negative() {
        let mut clock = SimulationClock::new(0.05, Season::Spring, 90.0);
        clock.advance(-0.1);
        assert!((clock.hour() - 23.95).abs() < 1e-4);
        clock.advance(-1e-9);
        assert!(clock.hour() >= 0.0 && clock.hour() < 24.0);
    }

    #[test]
    fn set_hour_clamps_and_normalizes_midnight() {
        let mut clock = SimulationClock::default();
        clock.set_hour(24.0);
        assert_eq!(clock.hour(), 0.0);
        clock.set_hour(30.0);
        assert_eq!(clock.hour(), 0.0);
        clock.set_hour(-2.0);
        assert_eq!(clock.hour(), 0.0);
        clock.set_hour(15.5);
        assert_eq!(clock.hour(), 15.5);
        clock.set_hour(f32::NAN);
        assert_eq!(clock.hour(), 15.5);
    }

    #[test]
    fn sunrise_azimuth_is_normalized() {
        let mut clock = SimulationClock::default();
        clock.set_sunrise_azimuth(-30.0);
        assert_eq!(clock.sunrise_azimuth_degrees(), 330.0);
        clock.set_sunrise_azimuth(400.0);
        assert_eq!(clock.sunrise_azimuth_degrees(), 40.0);
        clock.set_sunrise_azimuth(f32::INFINITY);
        assert_eq!(clock.sunrise_azimuth_degrees(), 40.0);
    }

    #[test]
    fn format_clock_floors_minutes() {
        assert_eq!(format_clock(0.0), "00:00");
        assert_eq!(format_clock(12.5), "12:30");
        assert_eq!(format_clock(6.999), "06:59");
        assert_eq!(format_clock(23.95), "23:57");
    }

    #[test]
    fn day_periods() {
        assert_eq!(DayPeriod::from_hour(6.0), DayPeriod::Morning);
        assert_eq!(DayPeriod::from_hour(12.0), DayPeriod::Afternoon);
        assert_eq!(DayPeriod::from_hour(18.0), DayPeriod::Evening);
        assert_eq!(DayPeriod::from_hour(21.0), DayPeriod::Night);
        assert_eq!(DayPeriod::from_hour(3.0), DayPeriod::Night);
    }
}
