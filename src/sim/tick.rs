//! Fixed-period simulation tick
//!
//! The game runs three periodic timers (ball, keeper 1, keeper 2) and one
//! one-shot timer (reset after a goal), all on a virtual millisecond clock.
//! The host only says how much time has passed; every timer that falls due
//! inside that span fires here, in time order.

use super::state::{GameEvent, GameState, ResetReason, period};

/// Input commands for a single host frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Kick the ball (ignored while in flight)
    pub kick: bool,
    /// Return the ball to the spot
    pub reset: bool,
}

/// Timer identities; declaration order breaks ties between timers due at
/// the same instant
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Timer {
    Keeper(usize),
    Ball,
    Reset,
}

/// Advance the session by `elapsed_ms`, applying `input` first
pub fn tick(state: &mut GameState, input: &TickInput, elapsed_ms: u64) {
    if input.reset {
        state.reset();
    }
    if input.kick {
        state.kick();
    }

    let target = state.time_ms + elapsed_ms;
    while let Some((at, timer)) = next_due(state) {
        if at > target {
            break;
        }
        state.time_ms = at;
        fire(state, timer);
    }
    state.time_ms = target;
}

/// Pure form of [`tick`]: returns the next state, leaving `state` untouched
pub fn advance(state: &GameState, input: &TickInput, elapsed_ms: u64) -> GameState {
    let mut next = state.clone();
    tick(&mut next, input, elapsed_ms);
    next
}

/// Earliest armed timer
fn next_due(state: &GameState) -> Option<(u64, Timer)> {
    let timers = &state.timers;
    [
        Some((timers.keepers[0], Timer::Keeper(0))),
        Some((timers.keepers[1], Timer::Keeper(1))),
        timers.ball.map(|at| (at, Timer::Ball)),
        timers.reset.map(|at| (at, Timer::Reset)),
    ]
    .into_iter()
    .flatten()
    .min()
}

fn fire(state: &mut GameState, timer: Timer) {
    match timer {
        Timer::Keeper(i) => {
            state.keepers[i].step();
            state.timers.keepers[i] += period(state.keepers[i].config.period_ms);
        }
        Timer::Ball => tick_ball(state),
        Timer::Reset => {
            log::debug!("Resetting ball after goal");
            state.reset_ball(ResetReason::AfterGoal);
        }
    }
}

/// One ball tick: move, then check keepers, then check the goal line
fn tick_ball(state: &mut GameState) {
    state.ball.advance_kick(&state.config.kick);

    let ball_rect = state.ball.rect();
    if let Some(keeper) = state
        .keepers
        .iter()
        .position(|k| k.rect().overlaps(&ball_rect))
    {
        state.stop_ball();
        log::info!(
            "Saved by keeper {} at top {:.0}",
            keeper + 1,
            state.ball.pos.y
        );
        state.events.push(GameEvent::Saved { keeper });
        return;
    }

    if state.ball.pos.y < state.config.kick.goal_line {
        state.stop_ball();
        log::info!("GOAL!");
        state.events.push(GameEvent::Goal);
        let reset_at = state.time_ms + u64::from(state.config.kick.reset_delay_ms);
        state.timers.reset.get_or_insert(reset_at);
        return;
    }

    state.timers.ball = Some(state.time_ms + period(state.config.kick.period_ms));
}
