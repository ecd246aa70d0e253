mod building;
mod clock;
mod state;

pub use building::{Building, BuildingId, Footprint, default_layout};
pub use clock::{SimulationClock, format_clock};
pub use state::PlacementState;
