//! Render projection
//!
//! The simulation owns every rectangle; rendering only copies them onto
//! positioned elements. `frame` is pure so it can be checked natively,
//! and `dom` applies it to the page on wasm32.

#[cfg(target_arch = "wasm32")]
pub mod dom;

use crate::sim::{GameState, Rect};

/// Box of one positioned element, in stage pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    pub top: f32,
    pub left: f32,
    pub width: f32,
    pub height: f32,
}

impl Sprite {
    pub fn from_rect(rect: &Rect) -> Self {
        Self {
            top: rect.top(),
            left: rect.left(),
            width: rect.right() - rect.left(),
            height: rect.bottom() - rect.top(),
        }
    }

    /// CSS property/value pairs for absolute positioning
    pub fn css(&self) -> [(&'static str, String); 4] {
        [
            ("top", px(self.top)),
            ("left", px(self.left)),
            ("width", px(self.width)),
            ("height", px(self.height)),
        ]
    }
}

/// Everything drawn in one frame
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub ball: Sprite,
    pub keepers: [Sprite; 2],
}

/// Project the current session state
pub fn frame(state: &GameState) -> Frame {
    Frame {
        ball: Sprite::from_rect(&state.ball.rect()),
        keepers: [
            Sprite::from_rect(&state.keepers[0].rect()),
            Sprite::from_rect(&state.keepers[1].rect()),
        ],
    }
}

#[inline]
fn px(value: f32) -> String {
    format!("{value}px")
}
