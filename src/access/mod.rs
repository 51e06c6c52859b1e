mod gate;
mod role;

pub use gate::{AccessGate, Section};
pub use role::{Permission, Role};
