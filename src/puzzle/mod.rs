//! Puzzle data model: cell positions, cage constraints, and the fixed
//! instance this program solves.

use std::fmt;

/// Grid side length
pub const GRID_SIZE: usize = 9;

/// 1-indexed (row, column) grid position
pub type Pos = (usize, usize);

/// A fully solved grid of cell values in 1..=9
pub type Grid = [[u8; GRID_SIZE]; GRID_SIZE];

/// Arithmetic operator of a cage constraint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CageOp {
    /// Single cell pinned to the target value
    Equal,
    /// Absolute difference of two cells equals the target
    Minus,
    /// One of two cells is exactly target times the other
    Divide,
    /// Product of all cells equals the target
    Times,
    /// Sum of all cells equals the target
    Plus,
}

impl CageOp {
    fn arity_matches(&self, cells: usize) -> bool {
        match self {
            CageOp::Equal => cells == 1,
            CageOp::Minus | CageOp::Divide => cells == 2,
            CageOp::Times | CageOp::Plus => cells >= 2,
        }
    }

    fn expected_arity(&self) -> &'static str {
        match self {
            CageOp::Equal => "exactly 1",
            CageOp::Minus | CageOp::Divide => "exactly 2",
            CageOp::Times | CageOp::Plus => "at least 2",
        }
    }
}

impl fmt::Display for CageOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CageOp::Equal => "equal",
            CageOp::Minus => "minus",
            CageOp::Divide => "divide",
            CageOp::Times => "times",
            CageOp::Plus => "plus",
        };
        write!(f, "{}", name)
    }
}

/// Error in a cage definition, caught before anything is asserted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    /// Number of cells does not match the operator's arity
    CageArity {
        op: CageOp,
        expected: &'static str,
        got: usize,
    },
    /// Cell position outside the 9x9 grid
    CellOutOfRange { pos: Pos },
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PuzzleError::CageArity { op, expected, got } => {
                write!(f, "{} cage expects {} cell(s), got {}", op, expected, got)
            }
            PuzzleError::CellOutOfRange { pos } => {
                write!(
                    f,
                    "cell position ({}, {}) is outside the {}x{} grid",
                    pos.0, pos.1, GRID_SIZE, GRID_SIZE
                )
            }
        }
    }
}

impl std::error::Error for PuzzleError {}

/// An arithmetic constraint over a fixed set of cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cage {
    pub op: CageOp,
    pub target: i64,
    pub cells: Vec<Pos>,
}

impl Cage {
    pub fn new(op: CageOp, target: i64, cells: &[Pos]) -> Self {
        Self {
            op,
            target,
            cells: cells.to_vec(),
        }
    }

    pub fn equal(target: i64, cell: Pos) -> Self {
        Self::new(CageOp::Equal, target, &[cell])
    }

    pub fn minus(target: i64, a: Pos, b: Pos) -> Self {
        Self::new(CageOp::Minus, target, &[a, b])
    }

    pub fn divide(target: i64, a: Pos, b: Pos) -> Self {
        Self::new(CageOp::Divide, target, &[a, b])
    }

    pub fn times(target: i64, cells: &[Pos]) -> Self {
        Self::new(CageOp::Times, target, cells)
    }

    pub fn plus(target: i64, cells: &[Pos]) -> Self {
        Self::new(CageOp::Plus, target, cells)
    }

    /// Check operator arity and cell bounds
    pub fn validate(&self) -> Result<(), PuzzleError> {
        if !self.op.arity_matches(self.cells.len()) {
            return Err(PuzzleError::CageArity {
                op: self.op,
                expected: self.op.expected_arity(),
                got: self.cells.len(),
            });
        }
        for &pos in &self.cells {
            let (row, col) = pos;
            if !(1..=GRID_SIZE).contains(&row) || !(1..=GRID_SIZE).contains(&col) {
                return Err(PuzzleError::CellOutOfRange { pos });
            }
        }
        Ok(())
    }

    /// Evaluate the cage equation over concrete values, independent of the
    /// solver. The cage must have passed `validate`.
    pub fn satisfied_by(&self, grid: &Grid) -> bool {
        let vals: Vec<i64> = self
            .cells
            .iter()
            .map(|&(row, col)| i64::from(grid[row - 1][col - 1]))
            .collect();
        match self.op {
            CageOp::Equal => vals[0] == self.target,
            CageOp::Minus => (vals[0] - vals[1]).abs() == self.target,
            CageOp::Divide => {
                vals[0] == self.target * vals[1] || vals[1] == self.target * vals[0]
            }
            CageOp::Times => vals.iter().product::<i64>() == self.target,
            CageOp::Plus => vals.iter().sum::<i64>() == self.target,
        }
    }
}

impl fmt::Display for Cage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}", self.op, self.target)?;
        for (row, col) in &self.cells {
            write!(f, ", ({}, {})", row, col)?;
        }
        write!(f, ")")
    }
}

/// The fixed puzzle instance, in declaration order. Order is preserved when
/// asserting so solver behavior is reproducible run to run.
pub fn instance_cages() -> Vec<Cage> {
    vec![
        Cage::times(1120, &[(1, 1), (2, 1), (2, 2), (3, 1)]),
        Cage::minus(8, (1, 2), (1, 3)),
        Cage::times(168, &[(1, 4), (1, 5), (1, 6)]),
        Cage::times(48, &[(1, 7), (1, 8), (2, 8)]),
        Cage::times(18, &[(1, 9), (2, 9), (3, 9)]),
        Cage::plus(13, &[(2, 3), (3, 2), (3, 3), (3, 4)]),
        Cage::plus(21, &[(2, 4), (2, 5), (2, 6)]),
        Cage::plus(24, &[(2, 7), (3, 6), (3, 7), (3, 8)]),
        Cage::times(108, &[(4, 1), (4, 2), (5, 2)]),
        Cage::plus(9, &[(4, 3), (4, 4)]),
        Cage::minus(4, (3, 5), (4, 5)),
        Cage::minus(5, (4, 6), (4, 7)),
        Cage::plus(22, &[(4, 8), (4, 9), (5, 8)]),
        Cage::plus(9, &[(5, 1), (6, 1), (7, 1)]),
        Cage::minus(5, (6, 2), (7, 2)),
        Cage::divide(3, (5, 3), (5, 4)),
        Cage::plus(15, &[(5, 5), (5, 6), (5, 7)]),
        Cage::times(42, &[(6, 3), (6, 4)]),
        Cage::times(32, &[(7, 3), (7, 4)]),
        Cage::divide(3, (6, 5), (7, 5)),
        Cage::plus(17, &[(6, 6), (6, 7)]),
        Cage::plus(3, &[(7, 6), (7, 7)]),
        Cage::times(20, &[(6, 8), (7, 8)]),
        Cage::times(120, &[(5, 9), (6, 9), (7, 9)]),
        Cage::times(2160, &[(8, 1), (8, 2), (9, 1), (9, 2)]),
        Cage::plus(17, &[(8, 3), (8, 4), (9, 3)]),
        Cage::plus(3, &[(8, 5), (8, 6)]),
        Cage::times(96, &[(9, 4), (9, 5), (9, 6)]),
        Cage::times(35, &[(8, 7), (9, 7)]),
        Cage::plus(8, &[(8, 8), (8, 9), (9, 8)]),
        Cage::equal(7, (9, 9)),
    ]
}
