use serde::Deserialize;

use crate::SITE_HALF_EXTENT;

/// Stable identifier of a building on the site plan.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct BuildingId(pub u32);

/// Horizontal axis addressed by slider input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Z,
}

/// Fixed box dimensions of a building, in scene units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Footprint {
    height: f32,
    width: f32,
    depth: f32,
}

impl Footprint {
    /// Build a footprint; dimensions never change afterwards.
    pub fn new(height: f32, width: f32, depth: f32) -> Self {
        Self {
            height,
            width,
            depth,
        }
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn depth(&self) -> f32 {
        self.depth
    }
}

/// Clamp one coordinate into the site-plan bounds.
pub fn clamp_to_site(value: f32) -> f32 {
    value.clamp(-SITE_HALF_EXTENT, SITE_HALF_EXTENT)
}

/// One rectangular structure on the site plan.
#[derive(Clone, Debug, PartialEq)]
pub struct Building {
    id: BuildingId,
    name: String,
    x: f32,
    z: f32,
    footprint: Footprint,
}

impl Building {
    /// Build a building with its position clamped into the site.
    pub fn new(id: BuildingId, name: impl Into<String>, x: f32, z: f32, footprint: Footprint) -> Self {
        Self {
            id,
            name: name.into(),
            x: clamp_to_site(x),
            z: clamp_to_site(z),
            footprint,
        }
    }

    pub fn id(&self) -> BuildingId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn z(&self) -> f32 {
        self.z
    }

    pub fn footprint(&self) -> Footprint {
        self.footprint
    }

    /// Write one coordinate, clamped. NaN leaves the building untouched.
    pub(super) fn set_axis(&mut self, axis: Axis, value: f32) {
        if value.is_nan() {
            return;
        }
        let clamped = clamp_to_site(value);
        match axis {
            Axis::X => self.x = clamped,
            Axis::Z => self.z = clamped,
        }
    }
}

/// Three identical slab blocks around the central pond.
pub fn default_layout() -> Vec<Building> {
    let slab = Footprint::new(45.0, 12.0, 25.0);
    vec![
        Building::new(BuildingId(1), "Building 101", -25.0, -20.0, slab),
        Building::new(BuildingId(2), "Building 102", 25.0, -20.0, slab),
        Building::new(BuildingId(3), "Building 103", 0.0, 25.0, slab),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_building_is_clamped_into_site() {
        let building = Building::new(BuildingId(9), "far", 250.0, -180.0, Footprint::new(1.0, 1.0, 1.0));
        assert_eq!(building.x(), SITE_HALF_EXTENT);
        assert_eq!(building.z(), -SITE_HALF_EXTENT);
    }

    #[test]
    fn set_axis_clamps_and_ignores_nan() {
        let mut building = default_layout().remove(0);
        building.set_axis(Axis::X, f32::INFINITY);
        assert_eq!(building.x(), SITE_HALF_EXTENT);
        building.set_axis(Axis::Z, f32::NAN);
        assert_eq!(building.z(), -20.0);
        building.set_axis(Axis::Z, -37.5);
        assert_eq!(building.z(), -37.5);
    }

    #[test]
    fn default_layout_has_unique_ids() {
        let layout = default_layout();
        let mut ids: Vec<_> = layout.iter().map(Building::id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), layout.len());
    }
}
