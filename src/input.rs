//! Keyboard input latch
//!
//! The host delivers raw key identifier strings ("ArrowUp", "w", ...);
//! the simulation only ever reads which direction keys are currently
//! held, sampled at tick boundaries.

use glam::Vec2;
use serde::Serialize;

/// A direction key, after identifier mapping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
}

impl Key {
    /// Map a browser-style key identifier to a direction key.
    ///
    /// Arrow keys and WASD are equivalent. Anything else is not ours;
    /// the host keeps its default handling for it.
    pub fn from_identifier(id: &str) -> Option<Self> {
        match id {
            "ArrowUp" | "w" | "W" => Some(Key::Up),
            "ArrowDown" | "s" | "S" => Some(Key::Down),
            "ArrowLeft" | "a" | "A" => Some(Key::Left),
            "ArrowRight" | "d" | "D" => Some(Key::Right),
            _ => None,
        }
    }
}

/// Currently-held direction keys (the physics game's input latch)
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct HeldKeys {
    up: bool,
    down: bool,
    left: bool,
    right: bool,
}

impl HeldKeys {
    pub fn press(&mut self, key: Key) {
        *self.slot(key) = true;
    }

    pub fn release(&mut self, key: Key) {
        *self.slot(key) = false;
    }

    /// Release everything (on restart, keyup events may never arrive)
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_held(&self, key: Key) -> bool {
        match key {
            Key::Up => self.up,
            Key::Down => self.down,
            Key::Left => self.left,
            Key::Right => self.right,
        }
    }

    /// Summed unit deltas of the held keys, Y pointing down the board.
    ///
    /// The axes are independent, so diagonal input comes out as (±1, ±1)
    /// and opposite keys on one axis cancel to zero.
    pub fn axis(&self) -> Vec2 {
        let mut v = Vec2::ZERO;
        if self.left {
            v.x -= 1.0;
        }
        if self.right {
            v.x += 1.0;
        }
        if self.up {
            v.y -= 1.0;
        }
        if self.down {
            v.y += 1.0;
        }
        v
    }

    fn slot(&mut self, key: Key) -> &mut bool {
        match key {
            Key::Up => &mut self.up,
            Key::Down => &mut self.down,
            Key::Left => &mut self.left,
            Key::Right => &mut self.right,
        }
    }
}
