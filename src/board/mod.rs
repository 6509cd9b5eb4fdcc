//! Board: card layout, counters and generation.

pub mod generator;
pub mod state;

pub use generator::BoardGenerator;
pub use state::BoardState;
