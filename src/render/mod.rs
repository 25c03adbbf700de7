//! Text rendering of the result grid.
//!
//! The output groups the grid into 3x3 blocks for readability: cells within
//! a block are joined by single spaces, blocks by three spaces, and a blank
//! line follows the third and sixth rows. The grouping is purely visual;
//! this puzzle variant has no 3x3 box constraint.

use crate::puzzle::{Grid, GRID_SIZE};

/// A possibly partial result grid; `None` renders as `.`
pub type DisplayGrid = [[Option<u8>; GRID_SIZE]; GRID_SIZE];

/// Render a display grid. Pure; printing is the caller's responsibility.
pub fn render(grid: &DisplayGrid) -> String {
    let mut out = String::new();
    for (r, row) in grid.iter().enumerate() {
        let cells: Vec<String> = row
            .iter()
            .map(|value| match value {
                Some(digit) => digit.to_string(),
                None => ".".to_string(),
            })
            .collect();
        let blocks: Vec<String> = cells.chunks(3).map(|block| block.join(" ")).collect();
        out.push_str(&blocks.join("   "));
        out.push('\n');
        if r == 2 || r == 5 {
            out.push('\n');
        }
    }
    out
}

/// Render a fully solved grid.
pub fn render_solved(grid: &Grid) -> String {
    let mut display: DisplayGrid = [[None; GRID_SIZE]; GRID_SIZE];
    for (r, row) in grid.iter().enumerate() {
        for (c, &value) in row.iter().enumerate() {
            display[r][c] = Some(value);
        }
    }
    render(&display)
}
