//! Game configuration
//!
//! Defaults reproduce the reference stage: a 640-wide pitch, the ball
//! centered at the penalty spot and two keepers patrolling in front of
//! the goal. Any section may be overridden from JSON.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::Direction;

/// Problems found while loading or checking a configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("keeper {keeper} sweep bounds are inverted (min {min} > max {max})")]
    InvertedBounds { keeper: usize, min: f32, max: f32 },
    #[error("{what} period must be at least 1 ms")]
    ZeroPeriod { what: &'static str },
    #[error("{what} size must be positive (got {value})")]
    NonPositiveSize { what: &'static str, value: f32 },
    #[error("kick shrink factor must be in (0, 1], got {0}")]
    ShrinkOutOfRange(f32),
}

/// Ball starting placement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BallConfig {
    pub top: f32,
    pub left: f32,
    /// Edge length (the ball is square)
    pub size: f32,
}

impl Default for BallConfig {
    fn default() -> Self {
        Self {
            top: BALL_START_TOP,
            left: BALL_START_LEFT,
            size: BALL_START_SIZE,
        }
    }
}

/// Kick animation parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KickConfig {
    /// Milliseconds between ball ticks
    pub period_ms: u32,
    /// Upward distance per tick
    pub speed: f32,
    /// Size multiplier per tick (perspective)
    pub shrink: f32,
    /// A kick scores once the ball's top passes above this line
    pub goal_line: f32,
    /// Delay between a goal and the automatic reset
    pub reset_delay_ms: u32,
}

impl Default for KickConfig {
    fn default() -> Self {
        Self {
            period_ms: KICK_PERIOD_MS,
            speed: KICK_SPEED,
            shrink: KICK_SHRINK,
            goal_line: GOAL_LINE,
            reset_delay_ms: GOAL_RESET_DELAY_MS,
        }
    }
}

/// One goalkeeper's patrol parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeeperConfig {
    /// Starting left edge
    pub start: f32,
    pub direction: Direction,
    /// Lower sweep bound (turn right once below it)
    pub min: f32,
    /// Upper sweep bound (turn left once above it)
    pub max: f32,
    pub period_ms: u32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
    #[serde(default = "default_keeper_step")]
    pub step: f32,
}

fn default_keeper_step() -> f32 {
    KEEPER_STEP
}

/// Input bindings consumed by the host layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Controls {
    /// `KeyboardEvent.key` value that kicks
    pub kick_key: String,
    /// Double-click anywhere resets the ball
    pub reset_on_double_click: bool,
}

impl Default for Controls {
    fn default() -> Self {
        Self {
            kick_key: "Enter".to_string(),
            reset_on_double_click: true,
        }
    }
}

/// Complete game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub ball: BallConfig,
    pub kick: KickConfig,
    pub keepers: [KeeperConfig; 2],
    pub controls: Controls,
    /// A saved or scored ball refuses new kicks until it has been reset
    pub lock_until_reset: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            ball: BallConfig::default(),
            kick: KickConfig::default(),
            keepers: [
                KeeperConfig {
                    start: 310.0,
                    direction: Direction::Right,
                    min: 100.0,
                    max: 450.0,
                    period_ms: 40,
                    top: 170.0,
                    width: KEEPER_WIDTH,
                    height: KEEPER_HEIGHT,
                    step: KEEPER_STEP,
                },
                KeeperConfig {
                    start: 110.0,
                    direction: Direction::Left,
                    min: 110.0,
                    max: 440.0,
                    period_ms: 50,
                    top: 250.0,
                    width: KEEPER_WIDTH,
                    height: KEEPER_HEIGHT,
                    step: KEEPER_STEP,
                },
            ],
            controls: Controls::default(),
            lock_until_reset: false,
        }
    }
}

impl GameConfig {
    /// Element holding an optional JSON override on the game page
    pub const PAGE_ELEMENT_ID: &'static str = "game-config";

    /// Parse a (possibly partial) JSON document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a JSON config file (native only)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_path(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Every questionable setting, in declaration order.
    ///
    /// None of these stop the game from running: periods are clamped to
    /// 1 ms by the scheduler and inverted keeper bounds keep their raw
    /// oscillation.
    pub fn issues(&self) -> Vec<ConfigError> {
        let mut issues = Vec::new();

        if self.ball.size <= 0.0 {
            issues.push(ConfigError::NonPositiveSize {
                what: "ball",
                value: self.ball.size,
            });
        }
        if self.kick.period_ms == 0 {
            issues.push(ConfigError::ZeroPeriod { what: "kick" });
        }
        if !(self.kick.shrink > 0.0 && self.kick.shrink <= 1.0) {
            issues.push(ConfigError::ShrinkOutOfRange(self.kick.shrink));
        }

        for (i, keeper) in self.keepers.iter().enumerate() {
            if keeper.max < keeper.min {
                issues.push(ConfigError::InvertedBounds {
                    keeper: i + 1,
                    min: keeper.min,
                    max: keeper.max,
                });
            }
            if keeper.period_ms == 0 {
                issues.push(ConfigError::ZeroPeriod { what: "keeper" });
            }
            if keeper.width <= 0.0 || keeper.height <= 0.0 {
                issues.push(ConfigError::NonPositiveSize {
                    what: "keeper",
                    value: keeper.width.min(keeper.height),
                });
            }
        }

        issues
    }

    /// First problem found, if any
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.issues().into_iter().next() {
            Some(issue) => Err(issue),
            None => Ok(()),
        }
    }

    /// Accept a loaded config (or fall back to defaults) and log findings
    pub fn resolve(loaded: Result<Self, ConfigError>) -> Self {
        let config = match loaded {
            Ok(config) => config,
            Err(e) => {
                log::warn!("{e}; using default config");
                return Self::default();
            }
        };
        for issue in config.issues() {
            log::warn!("Config: {issue}");
        }
        config
    }

    /// Load the page's JSON override, if present (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let json = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(Self::PAGE_ELEMENT_ID))
            .and_then(|el| el.text_content());

        match json {
            Some(json) if !json.trim().is_empty() => {
                log::info!("Loaded config from #{}", Self::PAGE_ELEMENT_ID);
                Self::resolve(Self::from_json(&json))
            }
            _ => {
                log::info!("Using default config");
                Self::default()
            }
        }
    }

    /// Load a config file if a path was given (native)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: Option<&std::path::Path>) -> Self {
        match path {
            Some(path) => {
                log::info!("Loading config from {}", path.display());
                Self::resolve(Self::from_path(path))
            }
            None => {
                log::info!("Using default config");
                Self::default()
            }
        }
    }
}
