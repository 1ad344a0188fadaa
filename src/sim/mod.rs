//! Frame-step simulation module
//!
//! All gameplay logic lives here. This module has no rendering or platform
//! dependencies:
//! - Elapsed time is supplied by the caller, never sampled
//! - Randomness comes from the state's own generator
//! - Destruction is deferred until compaction at the end of the frame

pub mod collision;
pub mod frame;
pub mod lifecycle;
pub mod motion;
pub mod state;
pub mod tick;
pub mod topology;

pub use collision::{Hit, craft_struck, find_hits, overlaps};
pub use frame::{Color, DrawCommand, Frame, GameEvent, ModelKind};
pub use lifecycle::{compact, fire, split};
pub use motion::{integrate, spin, steer};
pub use state::{GameState, RoundPhase, SpaceObject, Tuning};
pub use tick::{TickInput, tick};
pub use topology::Field;
