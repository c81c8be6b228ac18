//! Built-in starting patterns

use super::Grid;
use anyhow::Result;

/// Named patterns as (row, col) offsets of their live cells
const PATTERNS: &[(&str, &[(usize, usize)])] = &[
    ("glider", &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)]),
    ("blinker", &[(0, 0), (0, 1), (0, 2)]),
    ("block", &[(0, 0), (0, 1), (1, 0), (1, 1)]),
    ("beacon", &[(0, 0), (0, 1), (1, 0), (2, 3), (3, 2), (3, 3)]),
    ("toad", &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)]),
    (
        "r-pentomino",
        &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)],
    ),
];

/// Names of all built-in patterns
pub fn names() -> impl Iterator<Item = &'static str> {
    PATTERNS.iter().map(|(name, _)| *name)
}

/// Live cell offsets of a pattern
pub fn cells(name: &str) -> Option<&'static [(usize, usize)]> {
    PATTERNS
        .iter()
        .find(|(candidate, _)| candidate.eq_ignore_ascii_case(name))
        .map(|(_, cells)| *cells)
}

/// Place a named pattern in the middle of an otherwise dead board
pub fn named(name: &str, rows: usize, cols: usize) -> Result<Grid> {
    let offsets = cells(name).ok_or_else(|| {
        anyhow::anyhow!(
            "Unknown pattern '{}'. Available: {}",
            name,
            names().collect::<Vec<_>>().join(", ")
        )
    })?;

    let height = offsets.iter().map(|(r, _)| r + 1).max().unwrap_or(0);
    let width = offsets.iter().map(|(_, c)| c + 1).max().unwrap_or(0);
    if height > rows || width > cols {
        anyhow::bail!(
            "Pattern '{}' ({}x{}) does not fit on a {}x{} board",
            name,
            height,
            width,
            rows,
            cols
        );
    }

    let top = (rows - height) / 2;
    let left = (cols - width) / 2;
    let mut grid = Grid::dead(rows, cols)?;
    for &(r, c) in offsets {
        grid = grid.with_cell(top + r, left + c, true)?;
    }
    Ok(grid)
}
