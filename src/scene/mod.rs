use std::collections::HashMap;

use bevy::prelude::*;

use crate::placement::BuildingId;

mod effects;
mod setup;

pub use effects::{apply_sun_system, sync_building_visuals_system};
pub use setup::setup_scene;

/// Directional light driven by the sun model.
#[derive(Component)]
pub(crate) struct SunLight;

/// Visible sun sphere that follows the light.
#[derive(Component)]
pub(crate) struct SunMarker;

/// Root entity of one rendered building.
#[derive(Component)]
pub(crate) struct BuildingVisual {
    /// Body material, tinted while the building is selected.
    pub(crate) body_material: Handle<StandardMaterial>,
}

#[derive(Resource, Default)]
/// Rendered building roots keyed by building id.
pub(crate) struct BuildingVisuals(pub(crate) HashMap<BuildingId, Entity>);
