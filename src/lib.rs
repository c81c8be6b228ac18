//! Conway's Game of Life on a bounded board
//!
//! The transition engine in [`game_of_life`] is pure: every generation is a
//! fresh [`Grid`] computed from an untouched snapshot of the previous one.
//! [`animation`] drives it on a background thread at a chosen pace.

pub mod animation;
pub mod config;
pub mod error;
pub mod game_of_life;
pub mod utils;

pub use animation::{AnimationDriver, GenerationsPerMinute, LifeSession};
pub use config::Settings;
pub use error::LifeError;
pub use game_of_life::{Grid, LifeRules};

/// Advance a grid by `generations` steps
pub fn simulate(grid: &Grid, generations: usize) -> Grid {
    LifeRules::evolve_generations(grid, generations)
}
