//! Grid Snake - a grid-exact snake simulation engine
//!
//! Core modules:
//! - `sim`: Deterministic simulation (body, arena, item spawning, tick loop)
//! - `settings`: Difficulty presets resolved into session parameters
//!
//! The engine is tick-driven: an external driver calls [`sim::tick`] at the
//! cadence the chosen preset dictates and renders from [`sim::Snapshot`].
//! No rendering, windowing, or input polling lives in this crate's core.

pub mod settings;
pub mod sim;

pub use settings::{Difficulty, SessionConfig};
pub use sim::{Simulation, Snapshot, TickOutcome};

/// Game configuration constants
pub mod consts {
    /// Segments a fresh snake starts with
    pub const INITIAL_BODY_LENGTH: usize = 3;

    /// Hard cap on obstacles regardless of preset formula
    pub const MAX_OBSTACLES: usize = 20;
    /// Random attempts allowed per obstacle before it is skipped
    pub const OBSTACLE_ATTEMPTS: u32 = 100;
    /// Obstacles keep this many cells clear of the border
    pub const OBSTACLE_MARGIN: i32 = 2;

    /// Food spawns anywhere strictly inside the wall ring
    pub const FOOD_MARGIN: i32 = 1;
    /// Points for ordinary food
    pub const FOOD_SCORE: u32 = 10;
    /// Points for special food
    pub const SPECIAL_FOOD_SCORE: u32 = 30;
    /// Ticks a special food stays on the board
    pub const SPECIAL_FOOD_LIFETIME: u32 = 100;
    /// Special food spawns with probability 1 in SPECIAL_FOOD_ODDS
    pub const SPECIAL_FOOD_ODDS: u32 = 5;
}

/// Wrap a coordinate onto `[0, size)` toroidally.
///
/// The snake advances one cell per tick, so only single-step overshoot
/// (`-1` or `size`) occurs in practice; the modulo form handles any input.
/// In-range coordinates pass through unchanged.
#[inline]
pub fn wrap_coord(v: i32, size: i32) -> i32 {
    v.rem_euclid(size)
}
