//! Z3 encoding of the puzzle and the single solve call.
//!
//! One `Encoder` is created per run. It owns the solver handle and the 9x9
//! grid of integer decision variables; the classic rules and the cage
//! equations are asserted exactly once, then `solve` performs one blocking
//! satisfiability check and reads the model back into a concrete grid.

use std::time::Duration;

use z3::ast::{Ast, Bool, Int};
use z3::{Context, Params, SatResult, Solver};

use crate::puzzle::{Cage, CageOp, Grid, Pos, PuzzleError, GRID_SIZE};

/// Configuration for the solve call
#[derive(Debug, Clone, Default)]
pub struct SolveConfig {
    /// Timeout for the satisfiability check (None means wait indefinitely)
    pub timeout: Option<Duration>,
}

impl SolveConfig {
    /// Create a config with a specific timeout in seconds
    pub fn with_timeout_secs(secs: u64) -> Self {
        Self {
            timeout: Some(Duration::from_secs(secs)),
        }
    }
}

/// Outcome of the satisfiability check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveResult {
    /// A satisfying assignment was found and read back
    Solved(Grid),
    /// The constraints admit no solution; not an internal fault
    Unsat,
    /// Could not determine (timeout, solver fault, etc.)
    Unknown(String),
}

/// Per-run encoder owning the solver and the variable grid
pub struct Encoder<'ctx> {
    ctx: &'ctx Context,
    solver: Solver<'ctx>,
    cells: Vec<Vec<Int<'ctx>>>,
}

impl<'ctx> Encoder<'ctx> {
    pub fn new(ctx: &'ctx Context) -> Self {
        Self::with_config(ctx, &SolveConfig::default())
    }

    pub fn with_config(ctx: &'ctx Context, config: &SolveConfig) -> Self {
        let solver = Solver::new(ctx);
        if let Some(timeout) = config.timeout {
            let mut params = Params::new(ctx);
            params.set_u32("timeout", timeout.as_millis() as u32);
            solver.set_params(&params);
        }

        let cells = (1..=GRID_SIZE)
            .map(|row| {
                (1..=GRID_SIZE)
                    .map(|col| Int::new_const(ctx, format!("cell_{}_{}", row, col)))
                    .collect()
            })
            .collect();

        Self { ctx, solver, cells }
    }

    /// Variable for a 1-indexed position; positions must already be validated
    fn cell(&self, pos: Pos) -> &Int<'ctx> {
        &self.cells[pos.0 - 1][pos.1 - 1]
    }

    /// Assert the classic rules: every cell in 1..=9, all values distinct
    /// per row and per column. This variant has no 3x3 box rule.
    pub fn assert_classic(&self) {
        let one = Int::from_i64(self.ctx, 1);
        let nine = Int::from_i64(self.ctx, 9);
        for row in &self.cells {
            for cell in row {
                self.solver.assert(&cell.ge(&one));
                self.solver.assert(&cell.le(&nine));
            }
        }

        for row in &self.cells {
            let vars: Vec<&Int> = row.iter().collect();
            self.solver.assert(&Int::distinct(self.ctx, &vars));
        }
        for col in 0..GRID_SIZE {
            let vars: Vec<&Int> = self.cells.iter().map(|row| &row[col]).collect();
            self.solver.assert(&Int::distinct(self.ctx, &vars));
        }
    }

    /// Validate a cage and assert its equation.
    pub fn assert_cage(&self, cage: &Cage) -> Result<(), PuzzleError> {
        cage.validate()?;

        let vars: Vec<&Int> = cage.cells.iter().map(|&pos| self.cell(pos)).collect();
        let target = Int::from_i64(self.ctx, cage.target);

        match cage.op {
            CageOp::Equal => {
                self.solver.assert(&vars[0]._eq(&target));
            }
            CageOp::Minus => {
                // |a - b| == target, without a solver Abs primitive
                let fwd = Int::sub(self.ctx, &[vars[0], vars[1]])._eq(&target);
                let rev = Int::sub(self.ctx, &[vars[1], vars[0]])._eq(&target);
                self.solver.assert(&Bool::or(self.ctx, &[&fwd, &rev]));
            }
            CageOp::Divide => {
                // Exact symmetric ratio: a == target * b or b == target * a.
                // Encoded multiplicatively so integer division truncation
                // can never satisfy the constraint by accident.
                let fwd = vars[0]._eq(&Int::mul(self.ctx, &[&target, vars[1]]));
                let rev = vars[1]._eq(&Int::mul(self.ctx, &[&target, vars[0]]));
                self.solver.assert(&Bool::or(self.ctx, &[&fwd, &rev]));
            }
            CageOp::Times => {
                self.solver.assert(&Int::mul(self.ctx, &vars)._eq(&target));
            }
            CageOp::Plus => {
                self.solver.assert(&Int::add(self.ctx, &vars)._eq(&target));
            }
        }
        Ok(())
    }

    /// Assert a list of cages in declaration order.
    pub fn assert_cages(&self, cages: &[Cage]) -> Result<(), PuzzleError> {
        for cage in cages {
            self.assert_cage(cage)?;
        }
        Ok(())
    }

    /// Number of assertions accumulated so far
    pub fn assertion_count(&self) -> usize {
        self.solver.get_assertions().len()
    }

    /// Run the single satisfiability check and read back the model.
    pub fn solve(&self) -> SolveResult {
        match self.solver.check() {
            SatResult::Sat => {
                let model = match self.solver.get_model() {
                    Some(model) => model,
                    None => {
                        return SolveResult::Unknown(
                            "solver reported sat but produced no model".to_string(),
                        )
                    }
                };
                let mut grid: Grid = [[0; GRID_SIZE]; GRID_SIZE];
                for (r, row) in self.cells.iter().enumerate() {
                    for (c, cell) in row.iter().enumerate() {
                        match model.eval(cell, true).and_then(|v| v.as_i64()) {
                            Some(v @ 1..=9) => grid[r][c] = v as u8,
                            _ => {
                                return SolveResult::Unknown(format!(
                                    "no usable model value for cell_{}_{}",
                                    r + 1,
                                    c + 1
                                ))
                            }
                        }
                    }
                }
                SolveResult::Solved(grid)
            }
            SatResult::Unsat => SolveResult::Unsat,
            SatResult::Unknown => SolveResult::Unknown(
                self.solver
                    .get_reason_unknown()
                    .unwrap_or_else(|| "solver returned unknown".to_string()),
            ),
        }
    }
}
