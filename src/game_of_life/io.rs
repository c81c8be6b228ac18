//! File I/O operations for Game of Life grids

use super::{patterns, Grid};
use anyhow::{Context, Result};
use std::io::{Read, Write};
use std::path::Path;

/// Load a grid from a text file
/// Format: Each line represents a row, with '1' for alive cells and '0' for dead cells
pub fn load_grid_from_file<P: AsRef<Path>>(path: P) -> Result<Grid> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read grid file: {}", path.as_ref().display()))?;

    parse_grid_from_string(&content)
        .with_context(|| format!("Failed to parse grid from file: {}", path.as_ref().display()))
}

/// Parse a grid from a string representation
pub fn parse_grid_from_string(content: &str) -> Result<Grid> {
    let lines: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    if lines.is_empty() {
        anyhow::bail!("Grid file is empty or contains no valid rows");
    }

    let mut cells = Vec::with_capacity(lines.len());

    for (row_idx, line) in lines.iter().enumerate() {
        let mut row = Vec::with_capacity(line.len());
        for (col_idx, ch) in line.chars().enumerate() {
            match ch {
                '0' => row.push(false),
                '1' => row.push(true),
                _ => anyhow::bail!(
                    "Invalid character '{}' at position ({}, {}). Only '0' and '1' are allowed",
                    ch,
                    row_idx,
                    col_idx
                ),
            }
        }
        cells.push(row);
    }

    // Ragged input surfaces as the typed shape error
    Ok(Grid::from_cells(cells)?)
}

/// Save a grid to a text file
pub fn save_grid_to_file<P: AsRef<Path>>(grid: &Grid, path: P) -> Result<()> {
    create_parent_dir(path.as_ref())?;

    std::fs::write(&path, grid_to_string(grid))
        .with_context(|| format!("Failed to write grid to file: {}", path.as_ref().display()))?;

    Ok(())
}

/// Convert a grid to string representation
pub fn grid_to_string(grid: &Grid) -> String {
    let (rows, cols) = grid.dimensions();
    let mut result = String::with_capacity(rows * (cols + 1));

    for row in grid.to_rows() {
        result.extend(row.into_iter().map(|cell| if cell { '1' } else { '0' }));
        result.push('\n');
    }

    result
}

/// Write a grid snapshot (dimensions plus row-major cells) to a byte stream
pub fn write_snapshot<W: Write>(grid: &Grid, writer: W) -> Result<()> {
    serde_json::to_writer(writer, grid).context("Failed to encode grid snapshot")
}

/// Read a grid snapshot back; a snapshot with a broken shape is rejected
pub fn read_snapshot<R: Read>(reader: R) -> Result<Grid> {
    serde_json::from_reader(reader).context("Failed to decode grid snapshot")
}

/// Save a grid snapshot to a file
pub fn save_snapshot<P: AsRef<Path>>(grid: &Grid, path: P) -> Result<()> {
    let path = path.as_ref();
    create_parent_dir(path)?;

    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create snapshot file: {}", path.display()))?;
    let mut writer = std::io::BufWriter::new(file);
    write_snapshot(grid, &mut writer)?;
    writer
        .flush()
        .with_context(|| format!("Failed to write snapshot file: {}", path.display()))
}

/// Load a grid snapshot from a file
pub fn load_snapshot<P: AsRef<Path>>(path: P) -> Result<Grid> {
    let path = path.as_ref();
    let file = std::fs::File::open(path)
        .with_context(|| format!("Failed to open snapshot file: {}", path.display()))?;

    read_snapshot(std::io::BufReader::new(file))
        .with_context(|| format!("Failed to load snapshot: {}", path.display()))
}

/// Load a grid choosing the format from the file extension
pub fn load_grid_auto<P: AsRef<Path>>(path: P) -> Result<Grid> {
    if is_snapshot_path(path.as_ref()) {
        load_snapshot(path)
    } else {
        load_grid_from_file(path)
    }
}

/// Save a grid choosing the format from the file extension
pub fn save_grid_auto<P: AsRef<Path>>(grid: &Grid, path: P) -> Result<()> {
    if is_snapshot_path(path.as_ref()) {
        save_snapshot(grid, path)
    } else {
        save_grid_to_file(grid, path)
    }
}

fn is_snapshot_path(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

fn create_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    Ok(())
}

/// Load multiple grids from a directory
pub fn load_grids_from_directory<P: AsRef<Path>>(dir_path: P) -> Result<Vec<(String, Grid)>> {
    let dir = std::fs::read_dir(&dir_path)
        .with_context(|| format!("Failed to read directory: {}", dir_path.as_ref().display()))?;

    let mut grids = Vec::new();

    for entry in dir {
        let entry = entry.context("Failed to read directory entry")?;
        let path = entry.path();

        let known_format = path
            .extension()
            .is_some_and(|ext| ext == "txt" || ext == "json");
        if !path.is_file() || !known_format {
            continue;
        }

        let filename = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("unknown")
            .to_string();

        match load_grid_auto(&path) {
            Ok(grid) => grids.push((filename, grid)),
            Err(e) => eprintln!("Warning: Failed to load {}: {:#}", path.display(), e),
        }
    }

    grids.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(grids)
}

/// Create example grid files for testing
pub fn create_example_grids<P: AsRef<Path>>(output_dir: P) -> Result<()> {
    let dir = output_dir.as_ref();
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    for (name, rows, cols) in [("glider", 5, 5), ("blinker", 3, 3), ("block", 4, 4), ("beacon", 6, 6)] {
        let grid = patterns::named(name, rows, cols)?;
        let filename = format!("{}.txt", name);
        std::fs::write(dir.join(&filename), grid_to_string(&grid))
            .with_context(|| format!("Failed to write {}", filename))?;
    }

    Ok(())
}
