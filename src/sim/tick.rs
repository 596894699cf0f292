//! The per-tick state transition
//!
//! One call advances the snake exactly one cell: consume the buffered turn,
//! wrap the candidate head, grow first, decide retention from what the arena
//! holds, age the special food, then test collisions against the committed
//! head. A terminated session ignores further ticks and freezes its score.

use glam::IVec2;

use super::arena::CellMarker;
use super::state::{Phase, Simulation};
use crate::consts::{FOOD_SCORE, SPECIAL_FOOD_SCORE};
use crate::wrap_coord;

/// What a single tick produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Running,
    Terminated,
}

/// Advance the simulation one discrete step
pub fn tick(sim: &mut Simulation) -> TickOutcome {
    if sim.phase == Phase::Terminated {
        return TickOutcome::Terminated;
    }

    if let Some(turn) = sim.pending_direction.take() {
        sim.direction = turn;
    }

    // Candidate head, wrapped toroidally. Wrap resolves before the arena is
    // consulted, so falling off an edge lands on the opposite wall cell and
    // reads as a wall collision rather than a pass-through.
    let size = sim.arena.size() as i32;
    let raw = sim.body.head() + sim.direction.delta();
    let candidate = IVec2::new(wrap_coord(raw.x, size), wrap_coord(raw.y, size));

    // Grow first, decide retention after
    sim.body.prepend(candidate);

    let marker = sim.arena.cell_at(candidate.x, candidate.y);
    match marker {
        CellMarker::Food => {
            sim.score += FOOD_SCORE;
            sim.arena
                .set_cell(candidate.x, candidate.y, CellMarker::Empty);
            sim.spawner.food = None;
            sim.spawner.spawn_food(&mut sim.arena, &mut sim.rng);
            sim.spawner.maybe_spawn_special(&mut sim.arena, &mut sim.rng);
        }
        CellMarker::SpecialFood => {
            sim.score += SPECIAL_FOOD_SCORE;
            sim.spawner.special.clear();
            sim.arena
                .set_cell(candidate.x, candidate.y, CellMarker::Empty);
            sim.spawner.spawn_food(&mut sim.arena, &mut sim.rng);
            sim.spawner.maybe_spawn_special(&mut sim.arena, &mut sim.rng);
        }
        // Empty, wall, obstacle, or own body: net length stays put
        _ => sim.body.drop_tail(),
    }

    sim.spawner.tick_special(&mut sim.arena);

    let head = sim.body.head();
    let collided = matches!(marker, CellMarker::Wall | CellMarker::Obstacle)
        || sim.body.occupies_excluding_head(head);
    if collided {
        sim.phase = Phase::Terminated;
        log::info!("game over at ({}, {}), score {}", head.x, head.y, sim.score);
        return TickOutcome::Terminated;
    }

    TickOutcome::Running
}
