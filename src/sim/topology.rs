//! Toroidal play-field topology
//!
//! Leaving one edge re-enters from the opposite edge. Every moving entity is
//! wrapped exactly once per frame, after integration.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{FIELD_HEIGHT, FIELD_WIDTH};

/// Bounded wrap-around play-field `[0, width) x [0, height)`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub width: f32,
    pub height: f32,
}

impl Default for Field {
    fn default() -> Self {
        Self::new(FIELD_WIDTH, FIELD_HEIGHT)
    }
}

impl Field {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Wrap a position back into the field.
    ///
    /// A single application is enough for displacements smaller than one field
    /// dimension. Larger jumps are not corrected.
    #[inline]
    pub fn wrap(&self, pos: Vec2) -> Vec2 {
        Vec2::new(wrap_axis(pos.x, self.width), wrap_axis(pos.y, self.height))
    }

    /// True while `pos` is at least one unit away from every edge
    #[inline]
    pub fn in_interior(&self, pos: Vec2) -> bool {
        pos.x >= 1.0 && pos.y >= 1.0 && pos.x < self.width - 1.0 && pos.y < self.height - 1.0
    }

    /// True if `pos` satisfies the wrap invariant
    #[inline]
    pub fn contains(&self, pos: Vec2) -> bool {
        pos.x >= 0.0 && pos.y >= 0.0 && pos.x < self.width && pos.y < self.height
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

#[inline]
fn wrap_axis(mut v: f32, dim: f32) -> f32 {
    if v < 0.0 {
        v += dim;
    }
    // Not an else: -epsilon + dim can round up to exactly dim
    if v >= dim {
        v -= dim;
    }
    v
}
