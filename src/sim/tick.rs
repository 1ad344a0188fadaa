//! Per-frame simulation step
//!
//! Core game loop. Ordering matters: the craft moves and is checked before the
//! shot is fired, fragments and projectiles move before the hit scan, and
//! nothing is removed until every check for the frame is done.

use super::collision::{craft_struck, find_hits};
use super::frame::{Frame, GameEvent};
use super::lifecycle::{compact, fire, split};
use super::motion::{integrate, spin, steer};
use super::state::{GameState, RoundPhase};

/// Input for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Held
    pub rotate_left: bool,
    /// Held
    pub rotate_right: bool,
    /// Held
    pub thrust: bool,
    /// Edge: set only on the frame the fire key is released
    pub fire: bool,
}

/// Advance the game state by `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> Frame {
    let mut events = Vec::new();
    state.frame_count += 1;

    // The craft was lost last frame
    if state.phase == RoundPhase::Dead {
        log::info!("Round over at frame {} with score {}", state.frame_count, state.score);
        state.reset();
        events.push(GameEvent::RoundReset);
    }

    let field = state.field;

    // Player controls, then velocity changes position
    steer(&mut state.craft, input, &state.tuning, dt);
    integrate(&mut state.craft, &field, dt);

    if craft_struck(&state.craft, &state.fragments) {
        log::debug!("Craft struck at {:?}", state.craft.pos);
        state.phase = RoundPhase::Dead;
        events.push(GameEvent::CraftDestroyed);
    }

    if input.fire {
        fire(&state.craft, &mut state.projectiles, &state.tuning);
        events.push(GameEvent::Fired);
    }

    for fragment in &mut state.fragments {
        integrate(fragment, &field, dt);
        spin(fragment, &state.tuning, dt);
    }
    for projectile in &mut state.projectiles {
        integrate(projectile, &field, dt);
    }

    // Children are appended only after the scan so they can't be hit this frame
    let hits = find_hits(&mut state.projectiles, &mut state.fragments);
    for hit in &hits {
        let children = split(hit, &state.tuning, &mut state.rng);
        let did_split = children.is_some();
        if let Some(children) = children {
            state.fragments.extend(children);
        }
        state.score += state.tuning.hit_score;
        log::debug!(
            "Projectile {} hit fragment {} (size {}) at {:?}, split: {}",
            hit.projectile,
            hit.fragment,
            hit.size,
            hit.pos,
            did_split
        );
        events.push(GameEvent::FragmentHit {
            size: hit.size,
            split: did_split,
        });
    }

    compact(&mut state.fragments, &mut state.projectiles, &field);

    // Field cleared: bonus and a fresh pair where the player isn't. The phase is
    // left alone so a craft lost in the same frame still resets next tick.
    if state.fragments.is_empty() {
        let bonus = state.tuning.clear_bonus;
        state.score += bonus;
        state.projectiles.clear();
        state.spawn_pair_beside_craft();
        log::info!("Field cleared, score now {}", state.score);
        events.push(GameEvent::FieldCleared { bonus });
    }

    Frame::capture(state, events)
}
