//! Game of Life core functionality

pub mod analysis;
pub mod grid;
pub mod io;
pub mod patterns;
pub mod rules;

pub use analysis::{Behavior, EvolutionAnalysis, EvolutionTracker};
pub use grid::{Grid, DEFAULT_GRID_SIZE};
pub use io::{
    create_example_grids, load_grid_auto, load_grid_from_file, load_grids_from_directory,
    load_snapshot, read_snapshot, save_grid_auto, save_grid_to_file, save_snapshot,
    write_snapshot,
};
pub use rules::LifeRules;
