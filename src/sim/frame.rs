//! Per-frame output consumed by the renderer and the driver

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::GameState;

/// Color tags understood by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Color {
    Yellow,
    Red,
    Green,
    Cyan,
}

/// Model outlines the renderer knows how to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModelKind {
    Ship,
    Rock,
}

/// A single draw request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Closed outline of a model, rotated, scaled, then translated
    Polygon {
        model: ModelKind,
        pos: Vec2,
        rotation: f32,
        scale: f32,
        color: Color,
    },
    Point {
        pos: Vec2,
        color: Color,
    },
    Text {
        pos: Vec2,
        text: String,
        color: Color,
    },
}

/// Gameplay events raised during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Round restarted after the craft was lost
    RoundReset,
    /// A fragment touched the craft
    CraftDestroyed,
    Fired,
    /// A projectile destroyed a fragment of `size`; `split` if it left children
    FragmentHit { size: u32, split: bool },
    /// Every fragment was destroyed
    FieldCleared { bonus: u64 },
}

/// Everything a tick produces for the outside world
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub draws: Vec<DrawCommand>,
    pub events: Vec<GameEvent>,
    pub score: u64,
}

impl Frame {
    /// Build draw requests from the current state: fragments, projectiles,
    /// craft, then the score line
    pub fn capture(state: &GameState, events: Vec<GameEvent>) -> Self {
        let mut draws = Vec::with_capacity(state.fragments.len() + state.projectiles.len() + 2);

        for f in &state.fragments {
            draws.push(DrawCommand::Polygon {
                model: ModelKind::Rock,
                pos: f.pos,
                rotation: f.heading,
                scale: f.size as f32,
                color: Color::Yellow,
            });
        }

        for p in &state.projectiles {
            draws.push(DrawCommand::Point {
                pos: p.pos,
                color: Color::Red,
            });
        }

        draws.push(DrawCommand::Polygon {
            model: ModelKind::Ship,
            pos: state.craft.pos,
            rotation: state.craft.heading,
            scale: state.craft.size as f32,
            color: Color::Green,
        });

        draws.push(DrawCommand::Text {
            pos: Vec2::new(2.0, 2.0),
            text: format!("SCORE: {}", state.score),
            color: Color::Cyan,
        });

        Self {
            draws,
            events,
            score: state.score,
        }
    }

    /// True if `event` was raised this frame
    pub fn has(&self, event: GameEvent) -> bool {
        self.events.contains(&event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::SpaceObject;

    #[test]
    fn test_capture_order_and_counts() {
        let mut state = GameState::new(5);
        state
            .projectiles
            .push(SpaceObject::projectile(Vec2::new(40.0, 40.0), Vec2::ZERO));
        state.score = 300;

        let frame = Frame::capture(&state, Vec::new());

        assert_eq!(frame.draws.len(), 5);
        assert!(matches!(
            frame.draws[0],
            DrawCommand::Polygon {
                model: ModelKind::Rock,
                color: Color::Yellow,
                ..
            }
        ));
        assert!(matches!(frame.draws[2], DrawCommand::Point { color: Color::Red, .. }));
        assert!(matches!(
            frame.draws[3],
            DrawCommand::Polygon {
                model: ModelKind::Ship,
                color: Color::Green,
                ..
            }
        ));
        match &frame.draws[4] {
            DrawCommand::Text { text, color, .. } => {
                assert_eq!(text, "SCORE: 300");
                assert_eq!(*color, Color::Cyan);
            }
            other => panic!("expected score text, got {other:?}"),
        }
        assert_eq!(frame.score, 300);
    }

    #[test]
    fn test_rock_scale_is_size() {
        let state = GameState::new(5);
        let frame = Frame::capture(&state, Vec::new());
        match &frame.draws[0] {
            DrawCommand::Polygon { scale, .. } => assert_eq!(*scale, 16.0),
            other => panic!("expected polygon, got {other:?}"),
        }
    }
}
