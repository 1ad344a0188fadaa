//! Keyboard polling with edge detection

use crate::sim::TickInput;

/// Raw key levels as polled this frame (true = currently down)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyLevels {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub space: bool,
}

/// Tracks the previous frame's key levels to derive edges
#[derive(Debug, Clone, Default)]
pub struct KeyTracker {
    previous: KeyLevels,
}

impl KeyTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed this frame's key levels and get the simulation input.
    ///
    /// Steering keys are level-triggered. Fire triggers once, on the frame the
    /// space key goes from down to up.
    pub fn poll(&mut self, keys: KeyLevels) -> TickInput {
        let released = self.previous.space && !keys.space;
        self.previous = keys;

        TickInput {
            rotate_left: keys.left,
            rotate_right: keys.right,
            thrust: keys.up,
            fire: released,
        }
    }
}
