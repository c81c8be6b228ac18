//! Classification of an evolution path

use super::Grid;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;

/// What a run has settled into by its last generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Behavior {
    /// Every cell is dead
    Extinct,
    /// Unchanged by a step
    StillLife,
    /// Returns to the same configuration every `period` steps
    Oscillator { period: usize },
    /// No repetition observed yet
    Evolving,
}

/// Summary of an evolution path, generation 0 first
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionAnalysis {
    pub generations: usize,
    pub behavior: Behavior,
    /// First generation that is part of the final cycle, if one was found
    pub settled_at: Option<usize>,
    pub min_population: usize,
    pub max_population: usize,
    pub final_population: usize,
}

/// Population figures that cover a whole run, not just the kept window
#[derive(Debug, Clone, Copy)]
struct RunStats {
    min_population: usize,
    max_population: usize,
    first_empty: Option<usize>,
}

impl EvolutionAnalysis {
    /// Analyze an evolution path. Returns `None` for an empty path.
    pub fn analyze(evolution_path: &[Grid]) -> Option<Self> {
        let populations = evolution_path.iter().map(Grid::living_count);
        let stats = RunStats {
            min_population: populations.clone().min().unwrap_or(0),
            max_population: populations.max().unwrap_or(0),
            first_empty: evolution_path.iter().position(Grid::is_empty),
        };
        Self::summarize(evolution_path, 0, stats)
    }

    /// Classify `window`, whose first grid is generation `offset` of the run
    fn summarize(window: &[Grid], offset: usize, stats: RunStats) -> Option<Self> {
        let last_idx = window.len().checked_sub(1)?;
        let last = &window[last_idx];

        let (behavior, settled_at) = if last.is_empty() {
            (Behavior::Extinct, stats.first_empty)
        } else {
            match Self::find_period(window) {
                Some(1) => (Behavior::StillLife, Some(offset + Self::cycle_start(window, 1))),
                Some(period) => (
                    Behavior::Oscillator { period },
                    Some(offset + Self::cycle_start(window, period)),
                ),
                None => (Behavior::Evolving, None),
            }
        };

        Some(Self {
            generations: offset + last_idx,
            behavior,
            settled_at,
            min_population: stats.min_population,
            max_population: stats.max_population,
            final_population: last.living_count(),
        })
    }

    /// Smallest distance back to an earlier copy of the final generation
    fn find_period(evolution_path: &[Grid]) -> Option<usize> {
        let last_idx = evolution_path.len() - 1;
        let last = &evolution_path[last_idx];
        (1..=last_idx).find(|&period| evolution_path[last_idx - period] == *last)
    }

    /// Earliest generation from which the path repeats with `period`
    fn cycle_start(evolution_path: &[Grid], period: usize) -> usize {
        let mut start = evolution_path.len() - 1 - period;
        while start > 0 && evolution_path[start - 1] == evolution_path[start - 1 + period] {
            start -= 1;
        }
        start
    }
}

/// Incremental form of [`EvolutionAnalysis::analyze`] for long runs.
///
/// Only the last `window` generations are kept. Population figures and the
/// extinction point still cover the whole run; cycles are only found when
/// they fit inside the window, and `settled_at` can be no earlier than the
/// oldest kept generation.
#[derive(Debug, Clone)]
pub struct EvolutionTracker {
    recent: VecDeque<Grid>,
    window: usize,
    seen: usize,
    stats: RunStats,
}

impl EvolutionTracker {
    pub const DEFAULT_WINDOW: usize = 256;

    pub fn new(window: usize) -> Self {
        let window = window.max(1);
        Self {
            recent: VecDeque::with_capacity(window),
            window,
            seen: 0,
            stats: RunStats {
                min_population: 0,
                max_population: 0,
                first_empty: None,
            },
        }
    }

    /// Record the next generation, starting with generation 0
    pub fn push(&mut self, grid: Grid) {
        let population = grid.living_count();
        if self.seen == 0 {
            self.stats.min_population = population;
            self.stats.max_population = population;
        } else {
            self.stats.min_population = self.stats.min_population.min(population);
            self.stats.max_population = self.stats.max_population.max(population);
        }
        if population == 0 && self.stats.first_empty.is_none() {
            self.stats.first_empty = Some(self.seen);
        }

        if self.recent.len() == self.window {
            self.recent.pop_front();
        }
        self.recent.push_back(grid);
        self.seen += 1;
    }

    /// Generations recorded so far
    pub fn len(&self) -> usize {
        self.seen
    }

    pub fn is_empty(&self) -> bool {
        self.seen == 0
    }

    /// Summarize the run; `None` if nothing was recorded
    pub fn finish(self) -> Option<EvolutionAnalysis> {
        let offset = self.seen - self.recent.len();
        let window: Vec<Grid> = self.recent.into();
        EvolutionAnalysis::summarize(&window, offset, self.stats)
    }
}

impl fmt::Display for Behavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Behavior::Extinct => write!(f, "Extinct"),
            Behavior::StillLife => write!(f, "Still Life"),
            Behavior::Oscillator { period } => write!(f, "Oscillator (period {})", period),
            Behavior::Evolving => write!(f, "Evolving"),
        }
    }
}

impl fmt::Display for EvolutionAnalysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Evolution Analysis:")?;
        writeln!(f, "  Generations: {}", self.generations)?;
        writeln!(f, "  Type: {}", self.behavior)?;
        if let Some(settled_at) = self.settled_at {
            writeln!(f, "  Settled at generation: {}", settled_at)?;
        }
        writeln!(
            f,
            "  Population: {} final, {}..={} over the run",
            self.final_population, self.min_population, self.max_population
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_of_life::LifeRules;

    fn grid_with(rows: usize, cols: usize, live: &[(usize, usize)]) -> Grid {
        live.iter().fold(Grid::dead(rows, cols).unwrap(), |grid, &(r, c)| {
            grid.with_cell(r, c, true).unwrap()
        })
    }

    #[test]
    fn test_empty_path() {
        assert!(EvolutionAnalysis::analyze(&[]).is_none());
    }

    #[test]
    fn test_block_detection() {
        let block = grid_with(4, 4, &[(1, 1), (1, 2), (2, 1), (2, 2)]);
        let analysis = EvolutionAnalysis::analyze(&LifeRules::evolution_path(&block, 3)).unwrap();
        assert_eq!(analysis.behavior, Behavior::StillLife);
        assert_eq!(analysis.settled_at, Some(0));
        assert_eq!(analysis.final_population, 4);
    }

    #[test]
    fn test_blinker_detection() {
        let blinker = grid_with(5, 5, &[(2, 1), (2, 2), (2, 3)]);
        let analysis = EvolutionAnalysis::analyze(&LifeRules::evolution_path(&blinker, 4)).unwrap();
        assert_eq!(analysis.behavior, Behavior::Oscillator { period: 2 });
        assert_eq!(analysis.settled_at, Some(0));
    }

    #[test]
    fn test_lone_cell_goes_extinct() {
        let lone = grid_with(5, 5, &[(2, 2)]);
        let analysis = EvolutionAnalysis::analyze(&LifeRules::evolution_path(&lone, 3)).unwrap();
        assert_eq!(analysis.behavior, Behavior::Extinct);
        assert_eq!(analysis.settled_at, Some(1));
        assert_eq!(analysis.min_population, 0);
        assert_eq!(analysis.max_population, 1);
    }

    #[test]
    fn test_glider_is_evolving() {
        let glider = grid_with(10, 10, &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)]);
        let analysis = EvolutionAnalysis::analyze(&LifeRules::evolution_path(&glider, 4)).unwrap();
        assert_eq!(analysis.behavior, Behavior::Evolving);
        assert_eq!(analysis.settled_at, None);
        assert_eq!(analysis.final_population, 5);
    }

    #[test]
    fn test_single_generation_path() {
        let block = grid_with(4, 4, &[(1, 1), (1, 2), (2, 1), (2, 2)]);
        let analysis = EvolutionAnalysis::analyze(&[block]).unwrap();
        assert_eq!(analysis.generations, 0);
        assert_eq!(analysis.behavior, Behavior::Evolving);
    }

    #[test]
    fn test_tracker_matches_full_path() {
        let glider = grid_with(10, 10, &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)]);
        let path = LifeRules::evolution_path(&glider, 40);

        let mut tracker = EvolutionTracker::new(path.len());
        for grid in &path {
            tracker.push(grid.clone());
        }
        assert_eq!(tracker.len(), 41);
        assert_eq!(tracker.finish(), EvolutionAnalysis::analyze(&path));
    }

    #[test]
    fn test_tracker_window_is_bounded() {
        let blinker = grid_with(5, 5, &[(2, 1), (2, 2), (2, 3)]);
        let mut tracker = EvolutionTracker::new(3);
        for grid in LifeRules::evolution_path(&blinker, 10) {
            tracker.push(grid);
            assert!(tracker.recent.len() <= 3);
        }

        let analysis = tracker.finish().unwrap();
        assert_eq!(analysis.generations, 10);
        assert_eq!(analysis.behavior, Behavior::Oscillator { period: 2 });
        // Oldest generation still held
        assert_eq!(analysis.settled_at, Some(8));
    }

    #[test]
    fn test_tracker_keeps_run_wide_population() {
        let lone = grid_with(5, 5, &[(2, 2)]);
        let mut tracker = EvolutionTracker::new(2);
        for grid in LifeRules::evolution_path(&lone, 10) {
            tracker.push(grid);
        }

        let analysis = tracker.finish().unwrap();
        assert_eq!(analysis.behavior, Behavior::Extinct);
        assert_eq!(analysis.settled_at, Some(1));
        assert_eq!(analysis.min_population, 0);
        assert_eq!(analysis.max_population, 1);
    }

    #[test]
    fn test_empty_tracker() {
        let tracker = EvolutionTracker::new(EvolutionTracker::DEFAULT_WINDOW);
        assert!(tracker.is_empty());
        assert!(tracker.finish().is_none());
    }
}
