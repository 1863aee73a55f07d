use crate::{Cell, Grid};
use anyhow::{Context, Result};
use std::path::Path;

/// Parses a text board into a `width x height` field.
///
/// Every character except space and line breaks is an alive cell.
/// Short lines and missing lines are dead, anything beyond the field is dropped.
pub fn parse_board(text: &str, width: usize, height: usize) -> Grid {
    let mut grid = Grid::blank(width, height);
    let mut truncated = false;
    for (y, line) in text.lines().enumerate() {
        if y >= height {
            truncated = true;
            break;
        }
        for (x, c) in line.chars().enumerate() {
            if x >= width {
                truncated = true;
                break;
            }
            if c != ' ' && c != '\r' {
                grid.set(x, y, Cell::Alive);
            }
        }
    }
    if truncated {
        log::warn!("board does not fit into {}x{}, extra cells dropped", width, height);
    }
    grid
}

/// Reads a board file; failing to open or decode it is the only error.
pub fn load_board(path: impl AsRef<Path>, width: usize, height: usize) -> Result<Grid> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to load board from {}", path.display()))?;
    let grid = parse_board(&text, width, height);
    log::info!(
        "loaded board {} ({} alive cells)",
        path.display(),
        grid.population()
    );
    Ok(grid)
}

/// Serializes the field so that [`parse_board`] restores it.
pub fn write_board(grid: &Grid) -> String {
    let mut result = String::with_capacity((grid.width() + 1) * grid.height());
    for row in grid.rows() {
        let line = row
            .iter()
            .map(|c| if c.is_alive() { '#' } else { ' ' })
            .collect::<String>();
        result.push_str(line.trim_end());
        result.push('\n');
    }
    result
}
