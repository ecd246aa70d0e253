mod dial;
mod keyboard;
mod pointer;

use bevy::prelude::*;

use crate::placement::BuildingId;

pub use dial::{DIAL_ORIGIN, DIAL_SIZE, dial_input_system, dial_ring_percent};
pub use keyboard::keyboard_panel_system;
pub use pointer::pointer_input_system;

/// What the held primary button is currently manipulating.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragMode {
    #[default]
    Idle,
    /// Dragging a building across the ground plane.
    Building(BuildingId),
    /// Orbiting the camera after a press on empty ground.
    Orbit,
    /// Turning the sunrise dial.
    Dial,
}

#[derive(Resource, Debug, Default)]
/// Pointer gesture shared by the dial, picking, and orbit systems.
pub struct PointerDrag {
    pub mode: DragMode,
}
