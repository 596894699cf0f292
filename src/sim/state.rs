//! Session state and the render-ready snapshot view
//!
//! A [`Simulation`] owns the arena, body, and spawner outright; collaborators
//! receive them explicitly. There is no shared or ambient game state.

use glam::IVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::arena::{Arena, CellMarker};
use super::body::{Body, Direction};
use super::spawn::Spawner;
use crate::consts::INITIAL_BODY_LENGTH;
use crate::settings::{Difficulty, SessionConfig};

/// Whether the session is still accepting ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Active gameplay
    Running,
    /// Run ended; score is frozen and further ticks are ignored
    Terminated,
}

/// One complete snake session
#[derive(Debug, Clone)]
pub struct Simulation {
    /// Parameters resolved from the difficulty preset
    pub config: SessionConfig,
    /// Session seed for reproducibility
    pub seed: u64,
    /// All randomness flows through this one generator
    pub rng: Pcg32,
    pub arena: Arena,
    pub body: Body,
    pub spawner: Spawner,
    /// Direction the snake is currently moving
    pub direction: Direction,
    /// Buffered input, consumed at the start of the next tick
    pub pending_direction: Option<Direction>,
    pub score: u32,
    pub phase: Phase,
}

impl Simulation {
    /// Start a fresh session: walls, obstacles, a centered 3-segment snake
    /// facing right, and the first food already on the board.
    pub fn new_session(difficulty: Difficulty, seed: u64) -> Self {
        let config = SessionConfig::from_preset(difficulty);
        let mut rng = Pcg32::seed_from_u64(seed);

        let mut arena = Arena::new(config.grid_size);
        arena.place_obstacles(config.obstacle_count, &mut rng);

        let center = (config.grid_size / 2) as i32;
        let facing = Direction::Right;
        let body = Body::new(IVec2::new(center, center), facing, INITIAL_BODY_LENGTH);

        let mut spawner = Spawner::new();
        spawner.spawn_food(&mut arena, &mut rng);
        spawner.maybe_spawn_special(&mut arena, &mut rng);

        log::info!(
            "new {} session: grid {size}x{size}, seed {seed}",
            config.difficulty.as_str(),
            size = config.grid_size,
        );

        Self {
            config,
            seed,
            rng,
            arena,
            body,
            spawner,
            direction: facing,
            pending_direction: None,
            score: 0,
            phase: Phase::Running,
        }
    }

    /// Buffer a turn for the next tick. The exact reverse of the most recent
    /// accepted direction is rejected; anything else overwrites the buffer.
    pub fn set_direction(&mut self, new: Direction) {
        let current = self.pending_direction.unwrap_or(self.direction);
        if new != current.opposite() {
            self.pending_direction = Some(new);
        }
    }

    /// Read-only view sufficient to render a frame
    pub fn snapshot(&self) -> Snapshot {
        let size = self.arena.size();
        let mut cells = Vec::with_capacity(size * size);
        for y in 0..size as i32 {
            for x in 0..size as i32 {
                cells.push(self.arena.cell_at(x, y));
            }
        }
        Snapshot {
            grid_size: size,
            cells,
            body: self.body.segments().collect(),
            score: self.score,
            special_food_timer: self.spawner.special.timer,
            phase: self.phase,
        }
    }
}

/// Owned copy of everything a renderer needs for one frame
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub grid_size: usize,
    /// Row-major markers, `grid_size * grid_size` entries
    cells: Vec<CellMarker>,
    /// Body cells, head first
    pub body: Vec<IVec2>,
    pub score: u32,
    pub special_food_timer: u32,
    pub phase: Phase,
}

impl Snapshot {
    /// Marker at `(x, y)`; out-of-range reads as `Wall`, like the arena
    pub fn cell_at(&self, x: i32, y: i32) -> CellMarker {
        let size = self.grid_size as i32;
        if x < 0 || x >= size || y < 0 || y >= size {
            return CellMarker::Wall;
        }
        self.cells[y as usize * self.grid_size + x as usize]
    }
}
