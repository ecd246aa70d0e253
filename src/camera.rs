use std::f32::consts::FRAC_PI_4;

use bevy::input::mouse::{AccumulatedMouseMotion, AccumulatedMouseScroll};
use bevy::prelude::*;

use crate::input::{DragMode, PointerDrag};

/// Orbit camera circling the site origin.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct OrbitCamera {
    /// Horizontal orbit angle in radians.
    pub angle: f32,
    /// Camera height above the ground plane.
    pub height: f32,
    /// Horizontal distance from the origin.
    pub distance: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            angle: FRAC_PI_4,
            height: 60.0,
            distance: 120.0,
        }
    }
}

impl OrbitCamera {
    /// Orbit angle change per pixel of horizontal drag.
    const ANGLE_PER_PIXEL: f32 = 0.005;
    /// Height change per pixel of vertical drag.
    const HEIGHT_PER_PIXEL: f32 = 0.5;
    /// Distance change per scroll unit.
    const DISTANCE_PER_SCROLL: f32 = 0.1;
    const HEIGHT_MIN: f32 = 20.0;
    const HEIGHT_MAX: f32 = 150.0;
    const DISTANCE_MIN: f32 = 50.0;
    const DISTANCE_MAX: f32 = 250.0;

    /// Apply a pointer drag delta in pixels.
    pub fn apply_drag(&mut self, delta: Vec2) {
        self.angle += delta.x * Self::ANGLE_PER_PIXEL;
        self.height = (self.height - delta.y * Self::HEIGHT_PER_PIXEL).clamp(Self::HEIGHT_MIN, Self::HEIGHT_MAX);
    }

    /// Apply a wheel delta; positive values move the camera away.
    pub fn apply_zoom(&mut self, scroll: f32) {
        self.distance = (self.distance + scroll * Self::DISTANCE_PER_SCROLL)
            .clamp(Self::DISTANCE_MIN, Self::DISTANCE_MAX);
    }

    /// Camera transform looking at the site origin.
    pub fn transform(&self) -> Transform {
        let translation = Vec3::new(
            self.angle.cos() * self.distance,
            self.height,
            self.angle.sin() * self.distance,
        );
        Transform::from_translation(translation).looking_at(Vec3::ZERO, Vec3::Y)
    }
}

/// Orbit while dragging empty ground and zoom with the wheel.
pub fn orbit_camera_system(
    drag: Res<PointerDrag>,
    mouse_motion: Res<AccumulatedMouseMotion>,
    mouse_scroll: Res<AccumulatedMouseScroll>,
    mut camera_query: Query<(&mut Transform, &mut OrbitCamera)>,
) {
    let orbiting = drag.mode == DragMode::Orbit && mouse_motion.delta != Vec2::ZERO;
    let zooming = mouse_scroll.delta.y != 0.0;
    if !orbiting && !zooming {
        return;
    }
    for (mut transform, mut orbit) in &mut camera_query {
        if orbiting {
            orbit.apply_drag(mouse_motion.delta);
        }
        if zooming {
            // Wheel-up reports positive y; pull the camera in.
            orbit.apply_zoom(-mouse_scroll.delta.y * 10.0);
        }
        *transform = orbit.transform();
    }
}
