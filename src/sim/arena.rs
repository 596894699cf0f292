//! Arena grid and static cell markers
//!
//! The arena stores only static content: walls, obstacles, and food items.
//! The snake never lives in the grid; its occupancy comes from
//! [`super::Body`], which keeps the two representations from drifting.

use glam::IVec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::{MAX_OBSTACLES, OBSTACLE_ATTEMPTS, OBSTACLE_MARGIN};

/// What a grid cell holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CellMarker {
    #[default]
    Empty,
    Wall,
    Obstacle,
    Food,
    SpecialFood,
}

/// A square grid of cell markers with a fixed wall perimeter
#[derive(Debug, Clone)]
pub struct Arena {
    size: usize,
    grid: Vec<CellMarker>,
}

impl Arena {
    /// Allocate a `size x size` grid with walls stamped on the perimeter.
    ///
    /// Panics on a non-positive size; a session cannot exist without a grid.
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "arena size must be positive");
        let mut arena = Self {
            size,
            grid: vec![CellMarker::Empty; size * size],
        };
        let last = (size - 1) as i32;
        for i in 0..size as i32 {
            arena.set_cell(i, 0, CellMarker::Wall);
            arena.set_cell(i, last, CellMarker::Wall);
            arena.set_cell(0, i, CellMarker::Wall);
            arena.set_cell(last, i, CellMarker::Wall);
        }
        arena
    }

    /// Side length of the grid
    pub fn size(&self) -> usize {
        self.size
    }

    /// Marker at `(x, y)`. Out-of-range coordinates read as `Wall`, so
    /// callers never need a separate bounds check.
    pub fn cell_at(&self, x: i32, y: i32) -> CellMarker {
        if !self.in_bounds(x, y) {
            return CellMarker::Wall;
        }
        self.grid[y as usize * self.size + x as usize]
    }

    /// Overwrite the marker at `(x, y)`. Out-of-range writes are ignored;
    /// stale timer cleanup may target an already-absent position.
    pub fn set_cell(&mut self, x: i32, y: i32, marker: CellMarker) {
        if self.in_bounds(x, y) {
            self.grid[y as usize * self.size + x as usize] = marker;
        }
    }

    fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && (x as usize) < self.size && y >= 0 && (y as usize) < self.size
    }

    /// Scatter up to `count` obstacles on empty interior cells, keeping
    /// [`OBSTACLE_MARGIN`] cells clear of the border.
    ///
    /// Each obstacle gets [`OBSTACLE_ATTEMPTS`] random draws; one that finds
    /// no free cell is skipped, so the placed count may undershoot `count`.
    /// Returns the number actually placed.
    pub fn place_obstacles(&mut self, count: usize, rng: &mut Pcg32) -> usize {
        let count = count.min(MAX_OBSTACLES);
        let mut placed = 0;
        for _ in 0..count {
            for _ in 0..OBSTACLE_ATTEMPTS {
                let cell = self.sample_cell(OBSTACLE_MARGIN, rng);
                if self.cell_at(cell.x, cell.y) == CellMarker::Empty {
                    self.set_cell(cell.x, cell.y, CellMarker::Obstacle);
                    placed += 1;
                    break;
                }
            }
        }
        if placed < count {
            log::debug!("placed {placed}/{count} obstacles, rest skipped");
        }
        placed
    }

    /// Find an empty cell at least `margin` cells from the border.
    ///
    /// Random draws are bounded at `size * size`; after that a deterministic
    /// scan of the margin-interior finds any remaining empty cell. Panics if
    /// the scan comes up empty, since a fully packed arena means the session
    /// can no longer place items at all.
    pub fn find_empty_cell(&self, margin: i32, rng: &mut Pcg32) -> IVec2 {
        let max_draws = (self.size * self.size) as u32;
        for _ in 0..max_draws {
            let cell = self.sample_cell(margin, rng);
            if self.cell_at(cell.x, cell.y) == CellMarker::Empty {
                return cell;
            }
        }
        // Rare fallback: the board is nearly full, scan instead of looping
        let hi = self.size as i32 - margin;
        for y in margin..hi {
            for x in margin..hi {
                if self.cell_at(x, y) == CellMarker::Empty {
                    return IVec2::new(x, y);
                }
            }
        }
        panic!("no empty cell left in arena interior (margin {margin})");
    }

    /// Uniform random cell inside `[margin, size - margin)` on both axes
    fn sample_cell(&self, margin: i32, rng: &mut Pcg32) -> IVec2 {
        let hi = self.size as i32 - margin;
        IVec2::new(rng.random_range(margin..hi), rng.random_range(margin..hi))
    }

    /// Count cells carrying `marker` (test and invariant support)
    pub fn count_marker(&self, marker: CellMarker) -> usize {
        self.grid.iter().filter(|&&m| m == marker).count()
    }
}
