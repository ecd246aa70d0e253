use std::time::Duration;

use bevy::prelude::*;

use crate::config::AnimationConfig;
use crate::placement::PlacementState;

#[derive(Resource, Clone, Copy, Debug)]
/// Time-lapse cadence applied while animation is running.
pub struct AnimationSettings {
    /// Hours added per tick.
    pub step_hours: f32,
    /// Real time between ticks.
    pub tick_interval: Duration,
}

impl From<AnimationConfig> for AnimationSettings {
    fn from(config: AnimationConfig) -> Self {
        Self {
            step_hours: config.step_hours,
            tick_interval: Duration::from_millis(config.tick_interval_ms),
        }
    }
}

#[derive(Resource)]
/// Repeating tick timer; present only while the clock is animating.
pub struct AnimationTicker(
    /// Bevy timer driving the fixed-period clock advance.
    pub Timer,
);

impl AnimationTicker {
    /// Build a repeating ticker with the given period.
    pub fn new(interval: Duration) -> Self {
        Self(Timer::new(interval, TimerMode::Repeating))
    }

    /// Tick the timer and return how many periods elapsed this frame.
    pub fn elapsed_ticks(&mut self, delta: Duration) -> u32 {
        self.0.tick(delta).times_finished_this_tick()
    }
}

/// Start the ticker when animation turns on and drop it when it turns off.
///
/// The ticker resource is the only handle to the timer, so removing it cancels
/// the cadence outright and at most one ticker can ever exist.
pub fn animation_lifecycle_system(
    mut commands: Commands,
    state: Res<PlacementState>,
    settings: Res<AnimationSettings>,
    ticker: Option<Res<AnimationTicker>>,
) {
    match (state.is_animating(), ticker.is_some()) {
        (true, false) => {
            commands.insert_resource(AnimationTicker::new(settings.tick_interval));
            info!("time-lapse started");
        }
        (false, true) => {
            commands.remove_resource::<AnimationTicker>();
            info!("time-lapse stopped at {:.2}h", state.hour());
        }
        _ => {}
    }
}

/// Advance the simulation clock by one step per elapsed tick.
pub fn animation_tick_system(
    time: Res<Time>,
    settings: Res<AnimationSettings>,
    mut ticker: ResMut<AnimationTicker>,
    mut state: ResMut<PlacementState>,
) {
    let ticks = ticker.elapsed_ticks(time.delta());
    for _ in 0..ticks {
        state.advance_clock(settings.step_hours);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimulationConfig;

    fn app() -> App {
        let config = SimulationConfig::default();
        let mut app = App::new();
        app.insert_resource(config.placement_state())
            .insert_resource(AnimationSettings::from(config.animation))
            .insert_resource(Time::<()>::default())
            .add_systems(
                Update,
                (
                    animation_lifecycle_system,
                    animation_tick_system.run_if(resource_exists::<AnimationTicker>),
                )
                    .chain(),
            );
        app
    }

    fn set_animating(app: &mut App, animating: bool) {
        app.world_mut()
            .resource_mut::<PlacementState>()
            .set_animating(animating);
    }

    #[test]
    fn ticker_counts_whole_periods() {
        let mut ticker = AnimationTicker::new(Duration::from_millis(50));
        assert_eq!(ticker.elapsed_ticks(Duration::from_millis(20)), 0);
        assert_eq!(ticker.elapsed_ticks(Duration::from_millis(40)), 1);
        assert_eq!(ticker.elapsed_ticks(Duration::from_millis(100)), 2);
    }

    #[test]
    fn ticker_exists_only_while_animating() {
        let mut app = app();
        app.update();
        assert!(!app.world().contains_resource::<AnimationTicker>());

        set_animating(&mut app, true);
        app.update();
        assert!(app.world().contains_resource::<AnimationTicker>());

        set_animating(&mut app, false);
        app.update();
        assert!(!app.world().contains_resource::<AnimationTicker>());

        // Repeated stop is a no-op, and restarting yields a single fresh ticker.
        app.update();
        set_animating(&mut app, true);
        app.update();
        app.update();
        assert!(app.world().contains_resource::<AnimationTicker>());
    }

    #[test]
    fn ticks_advance_the_clock() {
        let mut app = app();
        set_animating(&mut app, true);
        app.update();
        let start = app.world().resource::<PlacementState>().hour();

        app.world_mut()
            .resource_mut::<Time>()
            .advance_by(Duration::from_millis(120));
        app.update();

        let hour = app.world().resource::<PlacementState>().hour();
        assert!((hour - (start + 0.2)).abs() < 1e-4, "hour {hour} from {start}");
    }

    #[test]
    fn paused_clock_does_not_advance() {
        let mut app = app();
        app.update();
        app.world_mut()
            .resource_mut::<Time>()
            .advance_by(Duration::from_secs(5));
        app.update();
        assert_eq!(app.world().resource::<PlacementState>().hour(), 12.0);
    }
}
