//! Platform abstraction layer
//!
//! Handles the host-side glue that is identical in the browser and natively:
//! - Mapping raw input (key names, double-clicks) to game commands
//! - Turning frame timestamps into whole milliseconds for the simulation

use crate::config::Controls;
use crate::consts::MAX_FRAME_MS;
use crate::sim::TickInput;

/// Game command produced by host input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Kick,
    Reset,
}

impl Command {
    /// Queue this command for the next simulation tick
    pub fn apply(self, input: &mut TickInput) {
        match self {
            Command::Kick => input.kick = true,
            Command::Reset => input.reset = true,
        }
    }
}

impl Controls {
    /// Command bound to a `KeyboardEvent.key` value
    pub fn command_for_key(&self, key: &str) -> Option<Command> {
        (key == self.kick_key).then_some(Command::Kick)
    }

    /// Command bound to a double-click
    pub fn command_for_double_click(&self) -> Option<Command> {
        self.reset_on_double_click.then_some(Command::Reset)
    }
}

/// Converts host frame timestamps (ms, fractional) into whole elapsed
/// milliseconds, carrying the remainder into the next frame.
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last_time: Option<f64>,
    carry: f64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Elapsed whole milliseconds since the previous frame.
    ///
    /// The first frame yields 0. Long stalls (hidden tab, debugger) are
    /// capped at `MAX_FRAME_MS` so the game does not fast-forward.
    pub fn frame(&mut self, now_ms: f64) -> u64 {
        let Some(last) = self.last_time.replace(now_ms) else {
            return 0;
        };
        let delta = (now_ms - last).clamp(0.0, MAX_FRAME_MS) + self.carry;
        let whole = delta.floor();
        self.carry = delta - whole;
        whole as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings() {
        let controls = Controls::default();
        assert_eq!(controls.command_for_key("Enter"), Some(Command::Kick));
        assert_eq!(controls.command_for_key(" "), None);
        assert_eq!(controls.command_for_double_click(), Some(Command::Reset));
    }

    #[test]
    fn test_rebound_kick_key() {
        let controls = Controls {
            kick_key: " ".to_string(),
            reset_on_double_click: false,
        };
        assert_eq!(controls.command_for_key(" "), Some(Command::Kick));
        assert_eq!(controls.command_for_key("Enter"), None);
        assert_eq!(controls.command_for_double_click(), None);
    }

    #[test]
    fn test_commands_fill_tick_input() {
        let mut input = TickInput::default();
        Command::Kick.apply(&mut input);
        assert!(input.kick && !input.reset);
        Command::Reset.apply(&mut input);
        assert!(input.kick && input.reset);
    }

    #[test]
    fn test_frame_clock_carries_fractions() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.frame(1000.0), 0);
        assert_eq!(clock.frame(1016.5), 16);
        assert_eq!(clock.frame(1033.0), 17);
        assert_eq!(clock.frame(1049.6), 16);
    }

    #[test]
    fn test_frame_clock_caps_stalls_and_ignores_backwards_time() {
        let mut clock = FrameClock::new();
        clock.frame(0.0);
        assert_eq!(clock.frame(10_000.0), MAX_FRAME_MS as u64);
        assert_eq!(clock.frame(9_000.0), 0);
    }
}
