//! Difficulty presets and session parameters
//!
//! A preset is resolved once at session start into a [`SessionConfig`];
//! nothing about a running session changes difficulty afterward.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::MAX_OBSTACLES;

/// Difficulty preset levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" | "med" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Arena side length for this preset
    pub fn grid_size(&self) -> usize {
        match self {
            Difficulty::Easy => 15,
            Difficulty::Medium => 20,
            Difficulty::Hard => 25,
        }
    }

    /// Obstacles placed at session start, capped at [`MAX_OBSTACLES`]
    pub fn obstacle_count(&self) -> usize {
        let size = self.grid_size();
        let count = match self {
            Difficulty::Easy => size / 4,
            Difficulty::Medium => size / 2,
            Difficulty::Hard => size,
        };
        count.min(MAX_OBSTACLES)
    }

    /// Wall-clock interval between ticks at this preset
    pub fn tick_interval(&self) -> Duration {
        let ms = match self {
            Difficulty::Easy => 200,
            Difficulty::Medium => 150,
            Difficulty::Hard => 100,
        };
        Duration::from_millis(ms)
    }
}

/// Session parameters resolved from a [`Difficulty`] preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    pub difficulty: Difficulty,
    pub grid_size: usize,
    pub obstacle_count: usize,
    pub tick_interval: Duration,
}

impl SessionConfig {
    pub fn from_preset(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            grid_size: difficulty.grid_size(),
            obstacle_count: difficulty.obstacle_count(),
            tick_interval: difficulty.tick_interval(),
        }
    }
}
