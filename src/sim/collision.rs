//! Circle collision detection
//!
//! Everything here is a point-in-circle test: the fragment supplies the
//! circle, the craft or projectile supplies the point.

use glam::Vec2;

use super::state::SpaceObject;

/// A projectile/fragment contact found during the hit scan
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// Index into the projectile collection
    pub projectile: usize,
    /// Index into the fragment collection
    pub fragment: usize,
    /// Fragment size before the hit
    pub size: u32,
    /// Fragment position at the hit
    pub pos: Vec2,
}

/// True if `point` lies strictly inside the circle at `center`
#[inline]
pub fn overlaps(center: Vec2, radius: f32, point: Vec2) -> bool {
    center.distance(point) < radius
}

/// True if any live fragment covers the craft position.
///
/// Several overlapping fragments count the same as one.
pub fn craft_struck(craft: &SpaceObject, fragments: &[SpaceObject]) -> bool {
    fragments
        .iter()
        .filter(|f| f.alive)
        .any(|f| overlaps(f.pos, f.radius(), craft.pos))
}

/// Scan every projectile against every fragment and mark both sides of each
/// contact as destroyed.
///
/// A projectile is consumed by its first contact. A fragment destroyed earlier
/// in the scan is skipped, so it scores and splits at most once per frame.
pub fn find_hits(projectiles: &mut [SpaceObject], fragments: &mut [SpaceObject]) -> Vec<Hit> {
    let mut hits = Vec::new();

    for (pi, projectile) in projectiles.iter_mut().enumerate() {
        if !projectile.alive {
            continue;
        }

        for (fi, fragment) in fragments.iter_mut().enumerate() {
            if !fragment.alive {
                continue;
            }

            if overlaps(fragment.pos, fragment.radius(), projectile.pos) {
                projectile.destroy();
                fragment.destroy();
                hits.push(Hit {
                    projectile: pi,
                    fragment: fi,
                    size: fragment.size,
                    pos: fragment.pos,
                });
                break;
            }
        }
    }

    hits
}
