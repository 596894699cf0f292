//! Snake body and movement directions
//!
//! The body is an ordered run of grid cells, head first. Both growth
//! (head prepend) and advance (tail drop) are O(1) on the deque.

use std::collections::VecDeque;

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// One of the four grid movement directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// Unit step for this direction. Y grows downward (row-major grid).
    pub fn delta(&self) -> IVec2 {
        match self {
            Direction::Up => IVec2::new(0, -1),
            Direction::Right => IVec2::new(1, 0),
            Direction::Down => IVec2::new(0, 1),
            Direction::Left => IVec2::new(-1, 0),
        }
    }

    /// The exact reverse of this direction
    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
        }
    }
}

/// The snake's body: occupied cells in head-to-tail order.
///
/// A running simulation never shrinks the body below one segment; between a
/// growth and the collision check of the same tick the head may transiently
/// duplicate another segment, which is exactly what self-collision means.
#[derive(Debug, Clone)]
pub struct Body {
    segments: VecDeque<IVec2>,
}

impl Body {
    /// Build a straight body with `head` at the front and the remaining
    /// segments extending opposite `facing`.
    pub fn new(head: IVec2, facing: Direction, length: usize) -> Self {
        let back = facing.opposite().delta();
        let segments = (0..length as i32).map(|i| head + back * i).collect();
        Self { segments }
    }

    /// Add a new head cell
    pub fn prepend(&mut self, cell: IVec2) {
        self.segments.push_front(cell);
    }

    /// Remove the tail cell.
    ///
    /// Panics if only one segment remains: a running simulation never
    /// shrinks the body to nothing, so reaching that state is a bug upstream.
    pub fn drop_tail(&mut self) {
        assert!(
            self.segments.len() > 1,
            "drop_tail on a single-segment body"
        );
        self.segments.pop_back();
    }

    /// The current head cell
    pub fn head(&self) -> IVec2 {
        *self.segments.front().expect("body is never empty")
    }

    /// Whether any segment other than the head occupies `cell`
    pub fn occupies_excluding_head(&self, cell: IVec2) -> bool {
        self.segments.iter().skip(1).any(|&s| s == cell)
    }

    /// Cells in head-to-tail order
    pub fn segments(&self) -> impl Iterator<Item = IVec2> + '_ {
        self.segments.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }
}
