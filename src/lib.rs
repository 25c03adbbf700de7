//! Math-sudoku solver backed by Z3.
//!
//! The puzzle is a 9x9 grid with the classic row/column distinctness rules
//! (no 3x3 box rule in this variant) plus a fixed set of arithmetic cage
//! constraints. The crate encodes the instance as integer constraints,
//! delegates the actual search to Z3, and renders the resulting grid.

pub mod encode;
pub mod puzzle;
pub mod render;
