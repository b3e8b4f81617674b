//! Multi-game sessions.
//!
//! A session plays a fixed number of games between two strategies. It
//! alternates who moves first, asks strategies for moves, re-prompts on
//! rejected moves, tallies wins, and keeps a record of every game.

pub mod config;
pub mod driver;
pub mod record;

pub use config::SessionConfig;
pub use driver::{Session, SessionError};
pub use record::{GameRecord, SessionReport};
