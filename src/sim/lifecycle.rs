//! Spawn, split and despawn
//!
//! New entities are appended, never inserted. Dead entities stay in place
//! until `compact` runs once at the end of the frame.

use glam::Vec2;
use rand::Rng;

use super::collision::Hit;
use super::state::{SpaceObject, Tuning};
use super::topology::Field;
use crate::heading_vector;

/// Launch one projectile from the craft along its heading
pub fn fire(craft: &SpaceObject, projectiles: &mut Vec<SpaceObject>, tuning: &Tuning) {
    let vel = heading_vector(craft.heading) * tuning.projectile_speed;
    projectiles.push(SpaceObject::projectile(craft.pos, vel));
}

/// Children produced by a hit.
///
/// Fragments above `min_split_size` break into two half-size pieces flying off
/// in independent random directions. Smaller ones leave nothing behind.
pub fn split<R: Rng>(hit: &Hit, tuning: &Tuning, rng: &mut R) -> Option<[SpaceObject; 2]> {
    if hit.size <= tuning.min_split_size {
        return None;
    }

    let size = hit.size >> 1;
    let child = |rng: &mut R| {
        let angle = rng.random_range(0.0..std::f32::consts::TAU);
        let vel = Vec2::new(angle.sin(), angle.cos()) * tuning.split_speed;
        SpaceObject::fragment(size, hit.pos, vel)
    };

    Some([child(&mut *rng), child(&mut *rng)])
}

/// Drop dead fragments, and projectiles that are dead or have drifted into the
/// one-unit border band
pub fn compact(fragments: &mut Vec<SpaceObject>, projectiles: &mut Vec<SpaceObject>, field: &Field) {
    fragments.retain(|f| f.alive);
    projectiles.retain(|p| p.alive && field.in_interior(p.pos));
}
