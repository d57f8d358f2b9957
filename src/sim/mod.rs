//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure and deterministic:
//! - Obstacle poses are recomputed from elapsed time, never integrated
//! - Seeded RNG only, consumed by nothing but the spawner
//! - Fixed step order within a frame
//! - No rendering or platform dependencies

pub mod obstacle;
pub mod spawn;
pub mod state;
pub mod tick;

pub use obstacle::{Obstacle, ObstacleKind};
pub use spawn::maybe_spawn;
pub use state::{Boat, GamePhase, GameState};
pub use tick::{FrameInput, tick};
