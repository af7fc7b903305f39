//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Virtual millisecond clock only, never wall time
//! - One session object owns all state
//! - No rendering or platform dependencies

pub mod keeper;
pub mod rect;
pub mod state;
pub mod tick;

pub use keeper::{Direction, Goalkeeper};
pub use rect::{Rect, overlaps};
pub use state::{Ball, BallPhase, GameEvent, GameState, KickOrigin, ResetReason, Timers};
pub use tick::{TickInput, advance, tick};
