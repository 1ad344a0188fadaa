//! Asteroids - a wrap-around arcade simulation core
//!
//! Core modules:
//! - `sim`: Frame-step simulation (motion, collisions, lifecycle, round state)
//! - `renderer`: Character-canvas wireframe renderer that consumes `sim::Frame`
//! - `platform`: Keyboard edge tracking that produces `sim::TickInput`
//! - `settings`: JSON configuration and gameplay tuning

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep used by the demo driver (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Play-field dimensions
    pub const FIELD_WIDTH: f32 = 160.0;
    pub const FIELD_HEIGHT: f32 = 100.0;

    /// Craft steering
    pub const ROTATION_SPEED: f32 = 5.0; // radians per second
    pub const THRUST_ACCEL: f32 = 20.0; // units per second²
    /// Craft draw scale; never used as a collision radius
    pub const SHIP_SIZE: u32 = 1;

    /// Projectile launch speed
    pub const PROJECTILE_SPEED: f32 = 50.0;

    /// Fragment defaults
    pub const FRAGMENT_SIZE: u32 = 16;
    pub const FRAGMENT_SPIN: f32 = 0.5; // radians per second, cosmetic
    pub const SPLIT_SPEED: f32 = 10.0;
    /// Fragments at or below this size vanish instead of splitting
    pub const MIN_SPLIT_SIZE: u32 = 4;

    /// Distance from the craft at which a fresh pair spawns after a clear
    pub const RESPAWN_OFFSET: f32 = 30.0;

    /// Scoring
    pub const HIT_SCORE: u64 = 100;
    pub const CLEAR_BONUS: u64 = 1000;
}

/// Unit vector a heading points along. Heading 0 points "up" (toward -y).
#[inline]
pub fn heading_vector(heading: f32) -> Vec2 {
    Vec2::new(heading.sin(), -heading.cos())
}

/// Rotate a point about the origin by `angle` radians
#[inline]
pub fn rotate(p: Vec2, angle: f32) -> Vec2 {
    let (s, c) = angle.sin_cos();
    Vec2::new(p.x * c - p.y * s, p.x * s + p.y * c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_heading_zero_points_up() {
        let v = heading_vector(0.0);
        assert!(v.x.abs() < 1e-6);
        assert!((v.y + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_heading_quarter_turn_points_right() {
        let v = heading_vector(FRAC_PI_2);
        assert!((v.x - 1.0).abs() < 1e-6);
        assert!(v.y.abs() < 1e-6);
    }

    #[test]
    fn test_rotate_quarter_turn() {
        let p = rotate(Vec2::new(1.0, 0.0), FRAC_PI_2);
        assert!(p.x.abs() < 1e-6);
        assert!((p.y - 1.0).abs() < 1e-6);
    }
}
