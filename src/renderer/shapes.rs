//! Model outlines and the wireframe transform

use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

use crate::rotate;
use crate::sim::ModelKind;

/// Number of vertices around a rock outline
pub const ROCK_VERTICES: usize = 20;

/// Model-space outlines for every `ModelKind`
#[derive(Debug, Clone)]
pub struct Models {
    pub ship: Vec<Vec2>,
    pub rock: Vec<Vec2>,
}

impl Models {
    /// Build the ship triangle and one jagged rock outline shared by every fragment
    pub fn generate<R: Rng>(rng: &mut R) -> Self {
        Self {
            ship: ship(),
            rock: rock(rng),
        }
    }

    pub fn get(&self, kind: ModelKind) -> &[Vec2] {
        match kind {
            ModelKind::Ship => &self.ship,
            ModelKind::Rock => &self.rock,
        }
    }
}

/// Isosceles triangle, nose pointing up
pub fn ship() -> Vec<Vec2> {
    vec![
        Vec2::new(0.0, -5.0),
        Vec2::new(-2.5, 2.5),
        Vec2::new(2.5, 2.5),
    ]
}

/// Unit circle with per-vertex radius jitter in [0.8, 1.2)
pub fn rock<R: Rng>(rng: &mut R) -> Vec<Vec2> {
    (0..ROCK_VERTICES)
        .map(|i| {
            let radius = rng.random_range(0.8..1.2f32);
            let a = (i as f32 / ROCK_VERTICES as f32) * TAU;
            Vec2::new(radius * a.sin(), radius * a.cos())
        })
        .collect()
}

/// Rotate, scale, then translate a model outline
pub fn wireframe(model: &[Vec2], pos: Vec2, rotation: f32, scale: f32) -> Vec<Vec2> {
    model
        .iter()
        .map(|&p| rotate(p, rotation) * scale + pos)
        .collect()
}
