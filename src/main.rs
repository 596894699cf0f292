//! Grid Snake entry point
//!
//! Headless demo driver: runs a session at the preset's tick cadence with a
//! small autopilot steering through the public engine surface, then prints
//! the final snapshot. Real front ends own their input polling and drawing;
//! this binary exists to exercise the engine end to end.

use std::time::{SystemTime, UNIX_EPOCH};

use gridsnake::sim::{CellMarker, Direction, Phase, Simulation, tick};
use gridsnake::{Difficulty, Snapshot};

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let difficulty = args
        .next()
        .and_then(|s| Difficulty::from_str(&s))
        .unwrap_or_default();
    let seed = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(0)
        });

    log::info!("starting {} demo session, seed {seed}", difficulty.as_str());

    let mut sim = Simulation::new_session(difficulty, seed);
    let interval = sim.config.tick_interval;
    let mut ticks = 0u32;

    // The greedy pilot usually traps itself well before this
    let max_ticks = 5_000;

    while sim.phase == Phase::Running && ticks < max_ticks {
        if let Some(turn) = autopilot(&sim) {
            sim.set_direction(turn);
        }
        tick(&mut sim);
        ticks += 1;
        std::thread::sleep(interval);
    }

    let snap = sim.snapshot();
    print_board(&snap);
    println!(
        "game over after {ticks} ticks - score {} (difficulty {}, seed {seed})",
        snap.score,
        difficulty.as_str()
    );
}

/// Steer toward the current food, never into something that kills this tick.
///
/// Tries directions in order of how much they close the distance to the food
/// and takes the first one whose next cell is survivable. Returns `None` when
/// every option is lethal; the snake then keeps its heading and the engine
/// settles it.
fn autopilot(sim: &Simulation) -> Option<Direction> {
    let head = sim.body.head();
    let target = sim.spawner.special.pos.or(sim.spawner.food)?;

    let mut candidates = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];
    // Closest-approach first
    candidates.sort_by_key(|d| {
        let next = head + d.delta();
        let gap = target - next;
        gap.x.abs() + gap.y.abs()
    });

    candidates.into_iter().find(|&d| {
        if d == sim.direction.opposite() {
            return false;
        }
        let next = head + d.delta();
        let marker = sim.arena.cell_at(next.x, next.y);
        let blocked = matches!(marker, CellMarker::Wall | CellMarker::Obstacle);
        !blocked && !sim.body.occupies_excluding_head(next)
    })
}

/// Dump the final board as text, one character per cell
fn print_board(snap: &Snapshot) {
    for y in 0..snap.grid_size as i32 {
        let mut line = String::with_capacity(snap.grid_size);
        for x in 0..snap.grid_size as i32 {
            let cell = glam::IVec2::new(x, y);
            let ch = if snap.body.first() == Some(&cell) {
                '@'
            } else if snap.body.contains(&cell) {
                'o'
            } else {
                match snap.cell_at(x, y) {
                    CellMarker::Empty => '.',
                    CellMarker::Wall => '#',
                    CellMarker::Obstacle => 'X',
                    CellMarker::Food => '*',
                    CellMarker::SpecialFood => '$',
                }
            };
            line.push(ch);
        }
        println!("{line}");
    }
}
