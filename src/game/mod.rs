//! Game model: entities, the run lifecycle and the per-frame update.

pub mod entity;
pub mod geometry;
pub mod logic;
pub mod state;
pub mod world;

pub use entity::{Bird, Entity, EntityKind, Pipe};
pub use geometry::{Rect, Vec2};
pub use logic::{frame, FrameInput, GameEvent};
pub use state::{DebugFlags, Game, RunState, WinStage};
pub use world::World;
