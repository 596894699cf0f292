//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Discrete tick only, one cell of movement per tick
//! - Seeded RNG only
//! - State owned exclusively by one [`Simulation`] instance
//! - No rendering or platform dependencies

pub mod arena;
pub mod body;
pub mod spawn;
pub mod state;
pub mod tick;

pub use arena::{Arena, CellMarker};
pub use body::{Body, Direction};
pub use spawn::{SpecialFood, Spawner};
pub use state::{Phase, Simulation, Snapshot};
pub use tick::{TickOutcome, tick};
