//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (bricks in generation order)
//! - No rendering or platform dependencies

pub mod ball;
pub mod bricks;
pub mod collision;
pub mod paddle;
pub mod rect;
pub mod state;
pub mod tick;

pub use ball::{Ball, BallState};
pub use bricks::{BRICK_GUTTER, Brick, BrickField};
pub use collision::{CollisionReport, CollisionResolver, PaddleHit, Wall};
pub use paddle::Paddle;
pub use rect::Rect;
pub use state::{GameEvent, GameSession, SessionPhase, Snapshot};
pub use tick::{TickInput, tick};
