//! Card system: the tiles laid out on the board.
//!
//! ## Key Types
//!
//! - `CardPosition`: Index of a card in layout order
//! - `CardInstance`: Runtime card state (item, image, face-up, matched)

pub mod instance;

pub use crate::catalog::ItemId;
pub use instance::{CardInstance, CardPosition};
