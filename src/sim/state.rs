//! Game state and core simulation types

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::topology::Field;
use crate::consts::*;

/// Where the round is in its life
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Active gameplay
    #[default]
    Playing,
    /// Craft was struck this frame; the round resets at the top of the next tick.
    /// Clearing the field never changes the phase; it is reported as
    /// `GameEvent::FieldCleared` instead.
    Dead,
}

/// Entity shared by the craft, fragments and projectiles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpaceObject {
    /// Collision radius for fragments, draw scale for the craft, 0 for projectiles
    pub size: u32,
    pub pos: Vec2,
    /// Units per second
    pub vel: Vec2,
    /// Craft orientation, or cosmetic rotation for fragments
    pub heading: f32,
    /// Cleared on hit; the entity is dropped at compaction
    pub alive: bool,
}

impl SpaceObject {
    pub fn new(size: u32, pos: Vec2, vel: Vec2) -> Self {
        Self {
            size,
            pos,
            vel,
            heading: 0.0,
            alive: true,
        }
    }

    /// A fresh craft at rest at `pos`, pointing up
    pub fn craft(pos: Vec2) -> Self {
        Self::new(SHIP_SIZE, pos, Vec2::ZERO)
    }

    pub fn fragment(size: u32, pos: Vec2, vel: Vec2) -> Self {
        Self::new(size, pos, vel)
    }

    pub fn projectile(pos: Vec2, vel: Vec2) -> Self {
        Self::new(0, pos, vel)
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.size as f32
    }

    /// Mark for removal at the next compaction
    #[inline]
    pub fn destroy(&mut self) {
        self.alive = false;
    }
}

/// Data-driven gameplay constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub rotation_speed: f32,
    pub thrust_accel: f32,
    pub projectile_speed: f32,
    pub fragment_size: u32,
    pub fragment_spin: f32,
    pub split_speed: f32,
    pub min_split_size: u32,
    pub respawn_offset: f32,
    pub hit_score: u64,
    pub clear_bonus: u64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            rotation_speed: ROTATION_SPEED,
            thrust_accel: THRUST_ACCEL,
            projectile_speed: PROJECTILE_SPEED,
            fragment_size: FRAGMENT_SIZE,
            fragment_spin: FRAGMENT_SPIN,
            split_speed: SPLIT_SPEED,
            min_split_size: MIN_SPLIT_SIZE,
            respawn_offset: RESPAWN_OFFSET,
            hit_score: HIT_SCORE,
            clear_bonus: CLEAR_BONUS,
        }
    }
}

/// Complete round state
#[derive(Debug, Clone, Serialize)]
pub struct GameState {
    /// Seed the generator was created from
    pub seed: u64,
    pub field: Field,
    pub tuning: Tuning,
    pub score: u64,
    pub phase: RoundPhase,
    /// Player craft
    pub craft: SpaceObject,
    /// Drifting rocks, in spawn order
    pub fragments: Vec<SpaceObject>,
    /// Live shots, in fire order
    pub projectiles: Vec<SpaceObject>,
    /// Frames stepped since construction
    pub frame_count: u64,
    #[serde(skip)]
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Create a new round on the default field
    pub fn new(seed: u64) -> Self {
        Self::with_config(seed, Field::default(), Tuning::default())
    }

    pub fn with_config(seed: u64, field: Field, tuning: Tuning) -> Self {
        let mut state = Self {
            seed,
            field,
            tuning,
            score: 0,
            phase: RoundPhase::Playing,
            craft: SpaceObject::craft(field.center()),
            fragments: Vec::new(),
            projectiles: Vec::new(),
            frame_count: 0,
            rng: Pcg32::seed_from_u64(seed),
        };
        state.reset();
        state
    }

    /// The craft was struck and the round is waiting to reset
    #[inline]
    pub fn is_destroyed(&self) -> bool {
        self.phase == RoundPhase::Dead
    }

    /// Restart the round: starting pair of fragments, centered craft, zero score
    pub fn reset(&mut self) {
        self.fragments.clear();
        self.projectiles.clear();

        let size = self.tuning.fragment_size;
        for (pos, vel) in STARTING_PAIR {
            let pos = self.field.wrap(Vec2::from(pos));
            self.fragments
                .push(SpaceObject::fragment(size, pos, Vec2::from(vel)));
        }

        self.craft = SpaceObject::craft(self.field.center());
        self.score = 0;
        self.phase = RoundPhase::Playing;
    }

    /// Spawn a fresh pair beside the craft, perpendicular to its heading, drifting
    /// along the heading in opposite rotational senses
    pub fn spawn_pair_beside_craft(&mut self) {
        use std::f32::consts::FRAC_PI_2;

        let h = self.craft.heading;
        let side = h - FRAC_PI_2;
        let offset = Vec2::new(side.sin(), side.cos()) * self.tuning.respawn_offset;
        let pos = self.field.wrap(self.craft.pos + offset);
        let speed = self.tuning.split_speed;
        let size = self.tuning.fragment_size;

        for angle in [h, -h] {
            let vel = Vec2::new(angle.sin(), angle.cos()) * speed;
            self.fragments.push(SpaceObject::fragment(size, pos, vel));
        }
    }
}

/// Starting fragments as `(position, velocity)`
const STARTING_PAIR: [([f32; 2], [f32; 2]); 2] = [
    ([20.0, 20.0], [8.0, -6.0]),
    ([100.0, 20.0], [-5.0, 3.0]),
];
