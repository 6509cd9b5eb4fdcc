//! Terminal front-end: command parsing, text rendering and the event loop.

pub mod command;
pub mod render;
pub mod runner;

pub use command::Command;
pub use render::{describe, render};
pub use runner::run;
