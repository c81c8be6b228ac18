//! Conway's B3/S23 transition engine

use super::Grid;
use crate::error::LifeError;
use rayon::prelude::*;

/// Moore neighborhood offsets as (row, col) deltas
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Game of Life rules engine
pub struct LifeRules;

impl LifeRules {
    /// Count the live cells among the eight neighbors of `(row, col)`.
    ///
    /// Off-board neighbors count as dead, there is no wraparound.
    pub fn count_live_neighbors(grid: &Grid, row: usize, col: usize) -> u8 {
        NEIGHBOR_OFFSETS
            .iter()
            .filter(|&&(dr, dc)| {
                match (row.checked_add_signed(dr), col.checked_add_signed(dc)) {
                    (Some(r), Some(c)) => grid.alive_at(r, c),
                    _ => false,
                }
            })
            .count() as u8
    }

    /// Next state of a single cell
    pub fn next_state(live_neighbors: u8, currently_alive: bool) -> bool {
        matches!((currently_alive, live_neighbors), (true, 2) | (true, 3) | (false, 3))
    }

    /// Advance the grid one generation
    pub fn step(current: &Grid) -> Grid {
        let mut next = current.clone();
        Self::fill_next(current, &mut next);
        next
    }

    /// Advance into an existing buffer of the same shape.
    ///
    /// `current` is only read, so two grids can be swapped back and forth
    /// without reallocating each generation.
    pub fn step_into(current: &Grid, next: &mut Grid) -> Result<(), LifeError> {
        if current.dimensions() != next.dimensions() {
            return Err(LifeError::DimensionMismatch {
                expected: current.dimensions(),
                found: next.dimensions(),
            });
        }
        Self::fill_next(current, next);
        Ok(())
    }

    fn fill_next(current: &Grid, next: &mut Grid) {
        let cols = current.cols();
        next.cells_mut()
            .par_chunks_mut(cols)
            .enumerate()
            .for_each(|(row, out)| {
                for (col, cell) in out.iter_mut().enumerate() {
                    let neighbors = Self::count_live_neighbors(current, row, col);
                    let alive = current.alive_at(row, col);
                    *cell = Self::next_state(neighbors, alive);
                }
            });
    }

    /// Evolve the grid for multiple generations
    pub fn evolve_generations(grid: &Grid, generations: usize) -> Grid {
        let mut current = grid.clone();
        let mut next = grid.clone();
        for _ in 0..generations {
            Self::fill_next(&current, &mut next);
            std::mem::swap(&mut current, &mut next);
        }
        current
    }

    /// Every generation from 0 to `generations`, inclusive
    pub fn evolution_path(grid: &Grid, generations: usize) -> Vec<Grid> {
        let mut path = Vec::with_capacity(generations + 1);
        path.push(grid.clone());
        for _ in 0..generations {
            let next = Self::step(&path[path.len() - 1]);
            path.push(next);
        }
        path
    }
}
