use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_GRID_SIZE: u16 = 20;
pub const DEFAULT_INITIAL_SPEED: u32 = 200;
pub const DEFAULT_SPEED_INCREASE: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("grid size must be at least 2, got {0}")]
    GridTooSmall(u16),
    #[error("initial speed must be greater than zero")]
    ZeroSpeed,
}

// Only grid_size drives the rules. initial_speed (ms per tick) and
// speed_increase are hints for whatever schedules the ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // Side length of the square, wrapping board
    pub grid_size: u16,
    pub initial_speed: u32,
    pub speed_increase: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            grid_size: DEFAULT_GRID_SIZE,
            initial_speed: DEFAULT_INITIAL_SPEED,
            speed_increase: DEFAULT_SPEED_INCREASE,
        }
    }
}

impl GameConfig {
    pub fn new(grid_size: u16) -> Self {
        GameConfig {
            grid_size,
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        // A single cell is always taken by the snake, leaving nowhere to put food.
        if self.grid_size < 2 {
            return Err(ConfigError::GridTooSmall(self.grid_size));
        }
        if self.initial_speed == 0 {
            return Err(ConfigError::ZeroSpeed);
        }
        Ok(())
    }

    pub fn initial_tick(&self) -> Duration {
        Duration::from_millis(self.initial_speed as u64)
    }
}
