//! Game session state and core simulation types
//!
//! A `GameState` owns everything one game needs: the ball, both keepers,
//! the virtual clock and its timers. Sessions share nothing, so a host can
//! run as many side by side as it likes.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::keeper::Goalkeeper;
use super::rect::Rect;
use crate::config::{BallConfig, GameConfig, KickConfig};

/// Ball motion status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BallPhase {
    /// Resting (at the spot, where a keeper stopped it, or past the line)
    Idle,
    /// Flying toward the goal
    Kicking,
}

/// Values captured when a kick starts
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KickOrigin {
    pub top: f32,
    pub size: f32,
    /// Ball ticks elapsed since the kick started
    pub ticks: u32,
}

/// Why the ball went back to the spot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResetReason {
    /// Explicit reset command
    Command,
    /// Automatic reset after a goal
    AfterGoal,
}

/// Observable outcomes, drained by the host each frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Kicked,
    /// A keeper (index into `GameState::keepers`) stopped the ball
    Saved { keeper: usize },
    Goal,
    Reset { reason: ResetReason },
}

/// The ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Top-left corner (left, top)
    pub pos: Vec2,
    /// Edge length; the ball is always square
    pub size: f32,
    pub phase: BallPhase,
    /// Present while a kick is in flight
    pub kick: Option<KickOrigin>,
    /// Stopped ball that must be reset before the next kick
    pub locked: bool,
}

impl Ball {
    pub fn new(config: &BallConfig) -> Self {
        Self {
            pos: Vec2::new(config.left, config.top),
            size: config.size,
            phase: BallPhase::Idle,
            kick: None,
            locked: false,
        }
    }

    /// Put the ball back on the spot, idle
    pub fn place(&mut self, config: &BallConfig) {
        *self = Self::new(config);
    }

    #[inline]
    pub fn is_kicking(&self) -> bool {
        self.phase == BallPhase::Kicking
    }

    /// Start a kick from wherever the ball currently rests
    pub fn begin_kick(&mut self) {
        self.phase = BallPhase::Kicking;
        self.kick = Some(KickOrigin {
            top: self.pos.y,
            size: self.size,
            ticks: 0,
        });
    }

    /// Apply one ball tick.
    ///
    /// Position and size are derived from the tick count so the flight is
    /// reproducible: `top = origin - speed * n`, `size = origin * shrink^n`.
    pub fn advance_kick(&mut self, kick: &KickConfig) {
        let Some(origin) = self.kick.as_mut() else {
            return;
        };
        origin.ticks += 1;
        let n = origin.ticks;
        self.pos.y = origin.top - kick.speed * n as f32;
        self.size = origin.size * kick.shrink.powi(n as i32);
    }

    /// Halt in place
    pub fn stop(&mut self) {
        self.phase = BallPhase::Idle;
        self.kick = None;
    }

    /// Authoritative collision box
    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, Vec2::splat(self.size))
    }
}

/// Virtual timer table; all values are absolute clock times in ms
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Timers {
    /// Next patrol tick per keeper (never cancelled)
    pub keepers: [u64; 2],
    /// Next ball tick while a kick is in flight
    pub ball: Option<u64>,
    /// Pending automatic reset after a goal
    pub reset: Option<u64>,
}

/// Timer period with zero clamped to 1 ms
#[inline]
pub(crate) fn period(ms: u32) -> u64 {
    u64::from(ms.max(1))
}

/// Complete state of one game session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub config: GameConfig,
    pub ball: Ball,
    pub keepers: [Goalkeeper; 2],
    /// Virtual clock (ms since the session started)
    pub time_ms: u64,
    pub timers: Timers,
    /// Events emitted since the last drain
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// New session: ball on the spot, keepers patrolling from their starts
    pub fn new(config: GameConfig) -> Self {
        let keepers = config.keepers.clone().map(Goalkeeper::new);
        let timers = Timers {
            keepers: [
                period(keepers[0].config.period_ms),
                period(keepers[1].config.period_ms),
            ],
            ball: None,
            reset: None,
        };
        Self {
            ball: Ball::new(&config.ball),
            keepers,
            time_ms: 0,
            timers,
            events: Vec::new(),
            config,
        }
    }

    #[inline]
    pub fn phase(&self) -> BallPhase {
        self.ball.phase
    }

    /// A goal was scored and the automatic reset has not fired yet
    #[inline]
    pub fn awaiting_reset(&self) -> bool {
        self.timers.reset.is_some()
    }

    /// Start a kick. Returns `false` (and changes nothing) while a kick is
    /// already in flight, while a scored ball waits for its automatic
    /// reset, or while a stopped ball is locked.
    pub fn kick(&mut self) -> bool {
        if self.ball.is_kicking() {
            log::debug!("Kick ignored: ball already in flight");
            return false;
        }
        if self.awaiting_reset() {
            log::debug!("Kick ignored: goal scored, waiting for reset");
            return false;
        }
        if self.ball.locked {
            log::debug!("Kick ignored: ball must be reset first");
            return false;
        }

        self.ball.begin_kick();
        self.timers.ball = Some(self.time_ms + period(self.config.kick.period_ms));
        self.events.push(GameEvent::Kicked);
        true
    }

    /// Cancel any kick or pending goal reset and return the ball to the spot
    pub fn reset(&mut self) {
        self.reset_ball(ResetReason::Command);
    }

    pub(crate) fn reset_ball(&mut self, reason: ResetReason) {
        self.timers.ball = None;
        self.timers.reset = None;
        self.ball.place(&self.config.ball);
        self.events.push(GameEvent::Reset { reason });
    }

    /// Stop the ball where it is after a save or a goal
    pub(crate) fn stop_ball(&mut self) {
        self.timers.ball = None;
        self.ball.stop();
        self.ball.locked = self.config.lock_until_reset;
    }

    /// Take all events emitted since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
