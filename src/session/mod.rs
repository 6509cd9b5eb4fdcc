//! Game session: event handling, countdown and deferred callbacks.
//!
//! ## Key Types
//!
//! - `GameSession`: Owns the board and all mutable game state
//! - `SessionBuilder`: Configures and starts a session
//! - `SessionEvent` / `Notification`: Input and output of `handle`
//! - `Scheduler`: One-shot callbacks (mismatch revert, power-up end)
//! - `BoardView`: Render snapshot

pub mod event;
pub mod game;
pub mod scheduler;
pub mod timer;
pub mod view;

pub use event::{Notification, SessionEvent};
pub use game::{GameSession, SessionBuilder};
pub use scheduler::{Deferred, Scheduler};
pub use timer::Countdown;
pub use view::{BoardView, CardFace};
