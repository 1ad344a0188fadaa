//! End-to-end round behavior through the public API

use glam::Vec2;

use asteroids_sim::consts::*;
use asteroids_sim::platform::{KeyLevels, KeyTracker};
use asteroids_sim::sim::{GameEvent, GameState, RoundPhase, SpaceObject, TickInput, tick};

fn shot_at(x: f32, y: f32) -> SpaceObject {
    SpaceObject::projectile(Vec2::new(x, y), Vec2::ZERO)
}

#[test]
fn fragment_split_scenario() {
    let mut state = GameState::new(2024);
    state.fragments = vec![
        SpaceObject::fragment(16, Vec2::new(10.0, 10.0), Vec2::ZERO),
        SpaceObject::fragment(16, Vec2::new(130.0, 85.0), Vec2::ZERO),
    ];
    state.projectiles.push(shot_at(13.0, 14.0)); // distance 5

    let frame = tick(&mut state, &TickInput::default(), 0.0);

    assert_eq!(frame.score, HIT_SCORE);
    let children = state.fragments.iter().filter(|f| f.size == 8).count();
    assert_eq!(children, 2);
    let parents = state.fragments.iter().filter(|f| f.size == 16).count();
    assert_eq!(parents, 1);
}

#[test]
fn split_chain_ends_in_clear_bonus() {
    let mut state = GameState::new(5);
    state.fragments = vec![SpaceObject::fragment(16, Vec2::new(40.0, 30.0), Vec2::ZERO)];

    // 16 -> 8 -> 4 -> gone: 1 + 2 + 4 hits
    let mut hits = 0;
    let mut cleared = false;
    for _ in 0..16 {
        let targets: Vec<Vec2> = state.fragments.iter().map(|f| f.pos).collect();
        for pos in targets {
            state.projectiles.push(shot_at(pos.x, pos.y));
        }
        let frame = tick(&mut state, &TickInput::default(), 0.0);
        hits += frame
            .events
            .iter()
            .filter(|e| matches!(e, GameEvent::FragmentHit { .. }))
            .count();
        if frame.has(GameEvent::FieldCleared { bonus: CLEAR_BONUS }) {
            cleared = true;
            break;
        }
    }

    assert!(cleared);
    assert_eq!(hits, 7);
    assert_eq!(state.score, 7 * HIT_SCORE + CLEAR_BONUS);
    assert_eq!(state.fragments.len(), 2);
    assert!(state.fragments.iter().all(|f| f.size == FRAGMENT_SIZE));
}

#[test]
fn death_resets_on_following_tick() {
    let mut state = GameState::new(5);
    // Meets the first starting rock at (36, 8) after two seconds
    state.craft.vel = Vec2::new(-22.0, -21.0);

    let mut ticks = 0;
    while state.phase != RoundPhase::Dead {
        tick(&mut state, &TickInput::default(), SIM_DT);
        ticks += 1;
        assert!(ticks < 1000, "craft never collided");
    }

    let frame = tick(&mut state, &TickInput::default(), 0.0);
    assert!(frame.has(GameEvent::RoundReset));
    assert_eq!(state.fragments.len(), 2);
    assert!(state.projectiles.is_empty());
    assert_eq!(state.score, 0);
    assert_eq!(state.craft.pos, state.field.center());
    assert_eq!(state.craft.vel, Vec2::ZERO);
}

#[test]
fn key_release_fires_a_single_shot() {
    let mut state = GameState::new(5);
    let mut keys = KeyTracker::new();
    let down = KeyLevels {
        space: true,
        ..Default::default()
    };

    for _ in 0..5 {
        let input = keys.poll(down);
        tick(&mut state, &input, 0.0);
    }
    assert!(state.projectiles.is_empty());

    let input = keys.poll(KeyLevels::default());
    tick(&mut state, &input, 0.0);
    assert_eq!(state.projectiles.len(), 1);
}
