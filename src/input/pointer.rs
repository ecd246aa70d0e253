use bevy::math::bounding::{Aabb3d, RayCast3d};
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::camera::OrbitCamera;
use crate::input::{DragMode, PointerDrag};
use crate::placement::{Building, BuildingId, PlacementState};

/// Furthest pick distance along a camera ray.
const MAX_PICK_DISTANCE: f32 = 1_000.0;

fn building_bounds(building: &Building) -> Aabb3d {
    let footprint = building.footprint();
    let half = Vec3::new(footprint.width(), footprint.height(), footprint.depth()) * 0.5;
    Aabb3d::new(Vec3::new(building.x(), half.y, building.z()), half)
}

/// Nearest building whose body the ray passes through.
pub fn pick_building(ray: Ray3d, buildings: &[Building]) -> Option<BuildingId> {
    let cast = RayCast3d::from_ray(ray, MAX_PICK_DISTANCE);
    buildings
        .iter()
        .filter_map(|building| {
            cast.aabb_intersection_at(&building_bounds(building))
                .map(|distance| (distance, building.id()))
        })
        .min_by(|a, b| a.0.total_cmp(&b.0))
        .map(|(_, id)| id)
}

/// Where the ray meets the ground plane, as `(x, z)`.
pub fn ground_point(ray: Ray3d) -> Option<Vec2> {
    let distance = ray.intersect_plane(Vec3::ZERO, InfinitePlane3d::new(Vec3::Y))?;
    let point = ray.get_point(distance);
    Some(Vec2::new(point.x, point.z))
}

/// Drag target for a ground point, snapped to whole site units.
fn snap_to_grid(point: Vec2) -> Vec2 {
    point.round()
}

/// Select and drag buildings, or start an orbit on empty ground.
pub fn pointer_input_system(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    camera_query: Query<(&Camera, &GlobalTransform), With<OrbitCamera>>,
    mut drag: ResMut<PointerDrag>,
    mut state: ResMut<PlacementState>,
) {
    if buttons.just_released(MouseButton::Left) {
        if let DragMode::Building(id) = drag.mode {
            debug!("released building {}", id.0);
        }
        drag.mode = DragMode::Idle;
        return;
    }
    if drag.mode == DragMode::Dial {
        return;
    }
    let Ok(window) = windows.single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };
    let Ok((camera, camera_transform)) = camera_query.single() else {
        return;
    };
    let Ok(ray) = camera.viewport_to_world(camera_transform, cursor) else {
        return;
    };

    if buttons.just_pressed(MouseButton::Left) {
        match pick_building(ray, state.buildings()) {
            Some(id) => {
                state.select_building(Some(id));
                drag.mode = DragMode::Building(id);
                debug!("picked building {}", id.0);
            }
            None => {
                if state.selected_building_id().is_some() {
                    state.select_building(None);
                }
                drag.mode = DragMode::Orbit;
            }
        }
        return;
    }

    let DragMode::Building(id) = drag.mode else {
        return;
    };
    if !buttons.pressed(MouseButton::Left) {
        return;
    }
    let Some(point) = ground_point(ray) else {
        return;
    };
    let Vec2 { x, y: z } = snap_to_grid(point);
    let moved = state
        .building(id)
        .is_some_and(|building| building.x() != x || building.z() != z);
    if moved {
        state.drag_to(id, x, z);
    }
}
