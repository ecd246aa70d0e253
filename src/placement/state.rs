use bevy::prelude::*;

use crate::placement::building::{Axis, Building, BuildingId};
use crate::placement::clock::SimulationClock;
use crate::solar::{CompassPoint, Season, SunVector};

/// Distance a single nudge moves a building.
pub const NUDGE_STEP: f32 = 10.0;

#[derive(Resource, Debug)]
/// Authoritative simulation state: buildings, selection, and clock.
///
/// Every mutation goes through the methods below so the coordinate and
/// clock invariants hold no matter which input path triggered it.
pub struct PlacementState {
    buildings: Vec<Building>,
    initial_layout: Vec<Building>,
    selected: Option<BuildingId>,
    clock: SimulationClock,
}

impl PlacementState {
    /// Build state from an initial layout that `reset` returns to.
    pub fn new(initial_layout: Vec<Building>, clock: SimulationClock) -> Self {
        Self {
            buildings: initial_layout.clone(),
            initial_layout,
            selected: None,
            clock,
        }
    }

    pub fn buildings(&self) -> &[Building] {
        &self.buildings
    }

    pub fn building(&self, id: BuildingId) -> Option<&Building> {
        self.buildings.iter().find(|building| building.id() == id)
    }

    pub fn selected_building_id(&self) -> Option<BuildingId> {
        self.selected
    }

    pub fn clock(&self) -> &SimulationClock {
        &self.clock
    }

    pub fn hour(&self) -> f32 {
        self.clock.hour()
    }

    pub fn season(&self) -> Season {
        self.clock.season()
    }

    pub fn sunrise_azimuth_degrees(&self) -> f32 {
        self.clock.sunrise_azimuth_degrees()
    }

    pub fn is_animating(&self) -> bool {
        self.clock.is_animating()
    }

    pub fn sun_vector(&self) -> SunVector {
        self.clock.sun_vector()
    }

    fn building_mut(&mut self, id: BuildingId) -> Option<&mut Building> {
        self.buildings.iter_mut().find(|building| building.id() == id)
    }

    /// Offset a building, clamping each axis independently. Unknown ids are ignored.
    pub fn move_by(&mut self, id: BuildingId, dx: f32, dz: f32) {
        let Some(building) = self.building(id) else {
            return;
        };
        let (x, z) = (building.x() + dx, building.z() + dz);
        self.set_axis(id, Axis::X, x);
        self.set_axis(id, Axis::Z, z);
    }

    /// Move a building one nudge step toward a compass direction.
    pub fn nudge(&mut self, id: BuildingId, direction: CompassPoint) {
        let step = direction.ground_direction() * NUDGE_STEP;
        self.move_by(id, step.x.round(), step.y.round());
    }

    /// Set one axis of a building, clamped.
    pub fn set_axis(&mut self, id: BuildingId, axis: Axis, value: f32) {
        if let Some(building) = self.building_mut(id) {
            building.set_axis(axis, value);
        }
    }

    /// Place a building under the pointer, clamped.
    pub fn drag_to(&mut self, id: BuildingId, x: f32, z: f32) {
        self.set_axis(id, Axis::X, x);
        self.set_axis(id, Axis::Z, z);
    }

    /// Restore the initial layout and drop the selection.
    pub fn reset(&mut self) {
        self.buildings.clone_from(&self.initial_layout);
        self.selected = None;
        info!("layout reset to {} buildings", self.buildings.len());
    }

    /// Select a building, or clear the selection. Unknown ids clear it.
    pub fn select_building(&mut self, id: Option<BuildingId>) {
        self.selected = id.filter(|id| self.building(*id).is_some());
        debug!("selection {:?}", self.selected);
    }

    /// Select the building after the current one, wrapping to the first.
    pub fn cycle_selection(&mut self) {
        let next = match self.selected {
            None => 0,
            Some(current) => self
                .buildings
                .iter()
                .position(|building| building.id() == current)
                .map_or(0, |index| (index + 1) % self.buildings.len()),
        };
        self.selected = self.buildings.get(next).map(Building::id);
        debug!("selection {:?}", self.selected);
    }

    pub fn advance_clock(&mut self, delta_hours: f32) {
        self.clock.advance(delta_hours);
    }

    pub fn set_hour(&mut self, hour: f32) {
        self.clock.set_hour(hour);
    }

    pub fn set_season(&mut self, season: Season) {
        if season != self.clock.season() {
            info!("season changed to {}", season.profile().name);
        }
        self.clock.set_season(season);
    }

    pub fn set_sunrise_azimuth(&mut self, degrees: f32) {
        self.clock.set_sunrise_azimuth(degrees);
    }

    pub fn set_animating(&mut self, animating: bool) {
        self.clock.set_animating(animating);
    }

    pub fn toggle_animation(&mut self) {
        let animating = !self.clock.is_animating();
        self.clock.set_animating(animating);
    }
}
