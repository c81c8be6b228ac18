//! Display and output formatting utilities

use crate::config::OutputFormat;
use crate::game_of_life::{save_grid_to_file, save_snapshot, Grid};
use anyhow::{Context, Result};
use itertools::Itertools;
use std::path::{Path, PathBuf};

const ALIVE: char = 'O';
const DEAD: char = '.';

/// Format grids for the terminal
pub struct GridFormatter;

impl GridFormatter {
    /// Format a grid in compact form
    pub fn format_grid_compact(grid: &Grid) -> String {
        grid.to_string()
    }

    /// Format a grid with coordinates
    pub fn format_grid_with_coords(grid: &Grid) -> String {
        let mut output = String::new();

        output.push_str("   ");
        output.push_str(&(0..grid.cols()).map(|x| format!("{:2}", x % 10)).join(""));
        output.push('\n');

        for (y, row) in grid.to_rows().into_iter().enumerate() {
            output.push_str(&format!("{:2} ", y));
            for cell in row {
                output.push(' ');
                output.push(if cell { ALIVE } else { DEAD });
            }
            output.push('\n');
        }

        output
    }

    /// One animation frame with its generation header
    pub fn format_frame(generation: u64, grid: &Grid) -> String {
        format!(
            "Generation {} (Living: {}):\n{}",
            generation,
            grid.living_count(),
            Self::format_grid_compact(grid)
        )
    }

    /// Several grids next to each other, e.g. consecutive generations
    pub fn format_side_by_side(grids: &[Grid]) -> String {
        if grids.is_empty() {
            return "No grids to compare".to_string();
        }

        let max_height = grids.iter().map(Grid::rows).max().unwrap_or(0);
        let mut output = String::new();

        for row in 0..max_height {
            let line = grids
                .iter()
                .map(|grid| {
                    if row < grid.rows() {
                        (0..grid.cols())
                            .map(|col| {
                                if grid.get(row as isize, col as isize) {
                                    ALIVE
                                } else {
                                    DEAD
                                }
                            })
                            .collect::<String>()
                    } else {
                        " ".repeat(grid.cols())
                    }
                })
                .join("  |  ");
            output.push_str(&line);
            output.push('\n');
        }

        output
    }

    /// Save a grid under `output_dir` in the requested format
    pub fn save_grid<P: AsRef<Path>>(
        grid: &Grid,
        output_dir: P,
        name: &str,
        format: OutputFormat,
    ) -> Result<PathBuf> {
        let output_dir = output_dir.as_ref();
        std::fs::create_dir_all(output_dir)
            .with_context(|| format!("Failed to create directory: {}", output_dir.display()))?;

        let stem = match format {
            OutputFormat::Visual => format!("{}_visual", name),
            OutputFormat::Text | OutputFormat::Json => name.to_string(),
        };
        let path = output_dir.join(format!("{}.{}", stem, format.extension()));

        match format {
            OutputFormat::Text => save_grid_to_file(grid, &path)?,
            OutputFormat::Json => save_snapshot(grid, &path)?,
            OutputFormat::Visual => {
                let content = format!(
                    "{} ({}x{}, Living: {})\n{}",
                    name,
                    grid.rows(),
                    grid.cols(),
                    grid.living_count(),
                    Self::format_grid_with_coords(grid)
                );
                std::fs::write(&path, content)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
            }
        }

        Ok(path)
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    /// Check if terminal supports color
    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err() && (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    pub fn error(text: &str) -> String {
        Self::colored(text, Color::Red)
    }

    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_of_life::{load_grid_auto, patterns};
    use tempfile::tempdir;

    #[test]
    fn test_grid_formatting() {
        let cells = vec![
            vec![true, false, true],
            vec![false, true, false],
            vec![true, false, true],
        ];
        let grid = Grid::from_cells(cells).unwrap();

        assert_eq!(GridFormatter::format_grid_compact(&grid), "O.O\n.O.\nO.O\n");

        let with_coords = GridFormatter::format_grid_with_coords(&grid);
        assert!(with_coords.starts_with("    0 1 2\n"));
        assert!(with_coords.contains(" 1  . O .\n"));
    }

    #[test]
    fn test_frame_header() {
        let grid = patterns::named("blinker", 3, 3).unwrap();
        let frame = GridFormatter::format_frame(4, &grid);
        assert!(frame.starts_with("Generation 4 (Living: 3):\n"));
    }

    #[test]
    fn test_side_by_side() {
        let a = patterns::named("blinker", 3, 3).unwrap();
        let b = patterns::named("block", 2, 2).unwrap();
        let output = GridFormatter::format_side_by_side(&[a, b]);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines, vec!["...  |  OO", "OOO  |  OO", "...  |    "]);
    }

    #[test]
    fn test_save_grid_formats() {
        let temp_dir = tempdir().unwrap();
        let grid = patterns::named("glider", 6, 6).unwrap();

        let text = GridFormatter::save_grid(&grid, temp_dir.path(), "g", OutputFormat::Text).unwrap();
        let json = GridFormatter::save_grid(&grid, temp_dir.path(), "g", OutputFormat::Json).unwrap();
        let visual =
            GridFormatter::save_grid(&grid, temp_dir.path(), "g", OutputFormat::Visual).unwrap();

        assert_eq!(text.file_name().unwrap(), "g.txt");
        assert_eq!(json.file_name().unwrap(), "g.json");
        assert_eq!(visual.file_name().unwrap(), "g_visual.txt");
        assert_eq!(load_grid_auto(&text).unwrap(), grid);
        assert_eq!(load_grid_auto(&json).unwrap(), grid);
        assert!(std::fs::read_to_string(visual).unwrap().contains("Living: 5"));
    }

    #[test]
    fn test_color_output() {
        let colored = ColorOutput::colored("test", Color::Red);
        assert!(colored.contains("test"));

        let success = ColorOutput::success("OK");
        assert!(success.contains("OK"));

        let error = ColorOutput::error("Error: bad board");
        assert!(error.contains("Error: bad board"));
    }
}
