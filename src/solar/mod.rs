//! Pure solar model: sun path, light levels, sky color, and compass naming.
//!
//! Nothing here holds state; every function is deterministic in its inputs so
//! the renderer can call it once per frame.

mod compass;
mod season;
mod sky;
mod sun;

pub use compass::{CompassPoint, normalize_azimuth};
pub use season::Season;
pub use sky::{ambient_level, sky_color};
pub use sun::{SunVector, displayed_altitude};
