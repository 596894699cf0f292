//! Food spawning and the timed special-food lifecycle

use glam::IVec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::arena::{Arena, CellMarker};
use crate::consts::{FOOD_MARGIN, SPECIAL_FOOD_LIFETIME, SPECIAL_FOOD_ODDS};

/// Special-food position and remaining lifetime. Timer 0 means absent.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SpecialFood {
    pub pos: Option<IVec2>,
    pub timer: u32,
}

impl SpecialFood {
    pub fn is_active(&self) -> bool {
        self.timer > 0
    }

    pub fn clear(&mut self) {
        self.pos = None;
        self.timer = 0;
    }
}

/// Places food items on empty cells and drives special-food expiry.
///
/// At most one ordinary food and one special food exist at a time; the
/// spawner owns their recorded positions, the arena holds the markers.
#[derive(Debug, Clone, Default)]
pub struct Spawner {
    pub food: Option<IVec2>,
    pub special: SpecialFood,
}

impl Spawner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a new ordinary food on a random empty cell.
    ///
    /// Any food still on the board is cleared first, so the arena never
    /// carries two `Food` markers.
    pub fn spawn_food(&mut self, arena: &mut Arena, rng: &mut Pcg32) {
        if let Some(old) = self.food.take() {
            arena.set_cell(old.x, old.y, CellMarker::Empty);
        }
        let cell = arena.find_empty_cell(FOOD_MARGIN, rng);
        arena.set_cell(cell.x, cell.y, CellMarker::Food);
        self.food = Some(cell);
        log::debug!("food spawned at ({}, {})", cell.x, cell.y);
    }

    /// With probability 1 in [`SPECIAL_FOOD_ODDS`], place a special food and
    /// start its lifetime timer. No-op while a special food is already active.
    pub fn maybe_spawn_special(&mut self, arena: &mut Arena, rng: &mut Pcg32) {
        if self.special.is_active() {
            return;
        }
        if rng.random_range(0..SPECIAL_FOOD_ODDS) != 0 {
            return;
        }
        let cell = arena.find_empty_cell(FOOD_MARGIN, rng);
        arena.set_cell(cell.x, cell.y, CellMarker::SpecialFood);
        self.special.pos = Some(cell);
        self.special.timer = SPECIAL_FOOD_LIFETIME;
        log::debug!("special food spawned at ({}, {})", cell.x, cell.y);
    }

    /// Advance the special-food timer one tick; on expiry the marker reverts
    /// to empty and the position becomes absent.
    pub fn tick_special(&mut self, arena: &mut Arena) {
        if self.special.timer == 0 {
            return;
        }
        self.special.timer -= 1;
        if self.special.timer == 0 {
            if let Some(pos) = self.special.pos {
                arena.set_cell(pos.x, pos.y, CellMarker::Empty);
            }
            self.special.pos = None;
            log::debug!("special food expired");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_spawn_food_marks_one_empty_interior_cell() {
        let mut arena = Arena::new(15);
        let mut rng = Pcg32::seed_from_u64(3);
        let mut spawner = Spawner::new();

        spawner.spawn_food(&mut arena, &mut rng);

        let pos = spawner.food.expect("food recorded");
        assert_eq!(arena.cell_at(pos.x, pos.y), CellMarker::Food);
        assert_eq!(arena.count_marker(CellMarker::Food), 1);
        assert!((1..14).contains(&pos.x) && (1..14).contains(&pos.y));
    }

    #[test]
    fn test_special_spawn_sets_full_timer() {
        let mut arena = Arena::new(15);
        let mut spawner = Spawner::new();
        // Walk seeds until the 1-in-5 draw hits; deterministic per seed
        for seed in 0..50 {
            let mut rng = Pcg32::seed_from_u64(seed);
            spawner.maybe_spawn_special(&mut arena, &mut rng);
            if spawner.special.is_active() {
                break;
            }
        }
        assert!(spawner.special.is_active());
        assert_eq!(spawner.special.timer, SPECIAL_FOOD_LIFETIME);
        let pos = spawner.special.pos.unwrap();
        assert_eq!(arena.cell_at(pos.x, pos.y), CellMarker::SpecialFood);
    }

    #[test]
    fn test_no_second_special_while_active() {
        let mut arena = Arena::new(15);
        let mut rng = Pcg32::seed_from_u64(3);
        let mut spawner = Spawner::new();
        spawner.special.pos = Some(IVec2::new(5, 5));
        spawner.special.timer = 40;

        for _ in 0..100 {
            spawner.maybe_spawn_special(&mut arena, &mut rng);
        }
        assert_eq!(spawner.special.timer, 40);
        assert_eq!(arena.count_marker(CellMarker::SpecialFood), 0);
    }

    #[test]
    fn test_special_expires_after_lifetime() {
        let mut arena = Arena::new(15);
        let mut spawner = Spawner::new();
        let pos = IVec2::new(6, 6);
        arena.set_cell(pos.x, pos.y, CellMarker::SpecialFood);
        spawner.special.pos = Some(pos);
        spawner.special.timer = SPECIAL_FOOD_LIFETIME;

        for i in 0..SPECIAL_FOOD_LIFETIME {
            assert!(spawner.special.is_active(), "still alive at tick {i}");
            spawner.tick_special(&mut arena);
        }
        assert!(!spawner.special.is_active());
        assert_eq!(spawner.special.pos, None);
        assert_eq!(arena.cell_at(pos.x, pos.y), CellMarker::Empty);
    }

    #[test]
    fn test_tick_special_absent_is_noop() {
        let mut arena = Arena::new(15);
        let mut spawner = Spawner::new();
        spawner.tick_special(&mut arena);
        assert_eq!(spawner.special.timer, 0);
    }
}
