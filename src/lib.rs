//! Penalty Kick - beat two patrolling goalkeepers
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, collisions, kick/reset state)
//! - `config`: Data-driven stage layout and timing
//! - `platform`: Browser/native input and clock glue
//! - `render`: Projection of simulation state onto positioned elements

pub mod config;
pub mod platform;
pub mod render;
pub mod sim;

pub use config::{ConfigError, GameConfig};

/// Game configuration constants (stage units and milliseconds)
pub mod consts {
    /// Stage width the default layout is designed for
    pub const STAGE_WIDTH: f32 = 640.0;

    /// Ball defaults: centered on the stage, near the bottom
    pub const BALL_START_TOP: f32 = 400.0;
    pub const BALL_START_LEFT: f32 = (STAGE_WIDTH - BALL_START_SIZE) / 2.0;
    pub const BALL_START_SIZE: f32 = 50.0;

    /// Milliseconds between ball ticks during a kick
    pub const KICK_PERIOD_MS: u32 = 25;
    /// Upward travel per ball tick
    pub const KICK_SPEED: f32 = 10.0;
    /// Per-tick size multiplier (depth effect)
    pub const KICK_SHRINK: f32 = 0.99;
    /// The ball scores once its top is above this line
    pub const GOAL_LINE: f32 = 150.0;
    /// Delay before the ball returns to the spot after a goal
    pub const GOAL_RESET_DELAY_MS: u32 = 500;

    /// Keeper defaults
    pub const KEEPER_STEP: f32 = 10.0;
    pub const KEEPER_WIDTH: f32 = 60.0;
    pub const KEEPER_HEIGHT: f32 = 60.0;

    /// Longest host frame fed to the simulation in one go
    pub const MAX_FRAME_MS: f64 = 250.0;
}
