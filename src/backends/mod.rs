// Session backends

pub mod simulated;

pub use simulated::{SimulatedBackend, SimulatedConfig};
