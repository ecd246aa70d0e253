mod dial;
mod hud;

pub use dial::{setup_dial, update_dial_system};
pub use hud::{setup_hud, update_hud_system};
