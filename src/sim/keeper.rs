//! Goalkeeper patrol motion
//!
//! Each keeper sweeps horizontally at a fixed step per tick on its own
//! period, forever. Vertical position and size never change.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::config::KeeperConfig;

/// Horizontal sweep direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Toward smaller x (-1)
    Left,
    /// Toward larger x (+1)
    Right,
}

impl Direction {
    /// Signed unit multiplier
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Direction::Left => -1.0,
            Direction::Right => 1.0,
        }
    }
}

/// A patrolling goalkeeper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goalkeeper {
    /// Current left edge
    pub pos: f32,
    pub direction: Direction,
    /// Static parameters (bounds, geometry, period)
    pub config: KeeperConfig,
}

impl Goalkeeper {
    pub fn new(config: KeeperConfig) -> Self {
        Self {
            pos: config.start,
            direction: config.direction,
            config,
        }
    }

    /// Advance one patrol tick.
    ///
    /// The two bound checks are deliberately independent. With an inverted
    /// range (`max < min`) both can fire in the same tick and the later one
    /// wins; `GameConfig::issues` reports that configuration instead of
    /// this function correcting it.
    pub fn step(&mut self) {
        if self.pos > self.config.max {
            self.direction = Direction::Left;
        }
        if self.pos < self.config.min {
            self.direction = Direction::Right;
        }
        self.pos += self.config.step * self.direction.sign();
    }

    /// Top-left corner in stage space
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.pos, self.config.top)
    }

    /// Authoritative collision box
    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(
            self.position(),
            Vec2::new(self.config.width, self.config.height),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use proptest::prelude::*;

    fn keeper(start: f32, direction: Direction, min: f32, max: f32) -> Goalkeeper {
        Goalkeeper::new(KeeperConfig {
            start,
            direction,
            min,
            max,
            ..GameConfig::default().keepers[0].clone()
        })
    }

    #[test]
    fn test_moves_one_step_per_tick() {
        let mut gk = keeper(310.0, Direction::Right, 100.0, 450.0);
        gk.step();
        assert_eq!(gk.pos, 320.0);
        gk.step();
        assert_eq!(gk.pos, 330.0);
    }

    #[test]
    fn test_turns_only_after_crossing_upper_bound() {
        let mut gk = keeper(440.0, Direction::Right, 100.0, 450.0);
        gk.step(); // 450: not yet beyond the bound
        assert_eq!(gk.pos, 450.0);
        assert_eq!(gk.direction, Direction::Right);
        gk.step(); // 460: overshoots by one step
        assert_eq!(gk.pos, 460.0);
        gk.step(); // beyond the bound, turns around
        assert_eq!(gk.direction, Direction::Left);
        assert_eq!(gk.pos, 450.0);
    }

    #[test]
    fn test_second_reference_keeper_turns_at_lower_bound() {
        let cfg = GameConfig::default();
        let mut gk = Goalkeeper::new(cfg.keepers[1].clone());
        assert_eq!(gk.pos, 110.0);
        assert_eq!(gk.direction, Direction::Left);
        gk.step();
        assert_eq!(gk.pos, 100.0);
        gk.step();
        assert_eq!(gk.direction, Direction::Right);
        assert_eq!(gk.pos, 110.0);
    }

    #[test]
    fn test_inverted_bounds_flip_twice_in_one_tick() {
        // min > max: at 300 both checks fire, the lower-bound check wins
        let mut gk = keeper(300.0, Direction::Left, 400.0, 200.0);
        gk.step();
        assert_eq!(gk.direction, Direction::Right);
        assert_eq!(gk.pos, 310.0);
    }

    #[test]
    fn test_rect_uses_fixed_geometry() {
        let gk = keeper(310.0, Direction::Right, 100.0, 450.0);
        let r = gk.rect();
        assert_eq!(r.left(), 310.0);
        assert_eq!(r.top(), gk.config.top);
        assert_eq!(r.right(), 310.0 + gk.config.width);
        assert_eq!(r.bottom(), gk.config.top + gk.config.height);
    }

    proptest! {
        #[test]
        fn keeper_stays_within_one_step_of_bounds(
            start_off in 0u32..35,
            right in any::<bool>(),
            ticks in 1usize..500,
        ) {
            let (min, max) = (100.0, 450.0);
            let dir = if right { Direction::Right } else { Direction::Left };
            let mut gk = keeper(min + start_off as f32 * 10.0, dir, min, max);
            let step = gk.config.step;
            for _ in 0..ticks {
                gk.step();
                prop_assert!(
                    gk.pos >= min - step && gk.pos <= max + step,
                    "pos {} escaped [{}, {}]", gk.pos, min - step, max + step
                );
            }
        }
    }
}
