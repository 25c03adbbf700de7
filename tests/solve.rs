//! End-to-end scenarios against the real solver: encode the fixed instance,
//! solve it, and check the returned grid is a genuine witness.

use mathdoku::encode::{Encoder, SolveResult};
use mathdoku::puzzle::{self, Cage, Grid, GRID_SIZE};
use z3::{Config, Context};

fn solve_instance() -> Grid {
    let cfg = Config::new();
    let ctx = Context::new(&cfg);
    let encoder = Encoder::new(&ctx);
    encoder.assert_classic();
    encoder
        .assert_cages(&puzzle::instance_cages())
        .expect("instance cages are well-formed");
    match encoder.solve() {
        SolveResult::Solved(grid) => grid,
        other => panic!("expected the instance to solve, got {:?}", other),
    }
}

fn assert_rows_and_columns_are_permutations(grid: &Grid) {
    let expected: Vec<u8> = (1..=9).collect();
    for i in 0..GRID_SIZE {
        let mut row: Vec<u8> = grid[i].to_vec();
        row.sort_unstable();
        assert_eq!(row, expected, "row {} is not a permutation of 1-9", i + 1);

        let mut col: Vec<u8> = (0..GRID_SIZE).map(|r| grid[r][i]).collect();
        col.sort_unstable();
        assert_eq!(col, expected, "column {} is not a permutation of 1-9", i + 1);
    }
}

#[test]
fn test_instance_solves_to_a_valid_witness() {
    let grid = solve_instance();
    assert_rows_and_columns_are_permutations(&grid);
    for cage in puzzle::instance_cages() {
        assert!(
            cage.satisfied_by(&grid),
            "cage {} not satisfied by the solved grid",
            cage
        );
    }
}

#[test]
fn test_bottom_right_cell_is_pinned_to_seven() {
    let grid = solve_instance();
    assert_eq!(grid[8][8], 7);
}

#[test]
fn test_first_row_product_cage() {
    let grid = solve_instance();
    let product: i64 = [(1, 4), (1, 5), (1, 6)]
        .iter()
        .map(|&(r, c): &(usize, usize)| i64::from(grid[r - 1][c - 1]))
        .product();
    assert_eq!(product, 168);
}

#[test]
fn test_divide_cage_has_exact_ratio() {
    let grid = solve_instance();
    let a = i64::from(grid[4][2]); // (5, 3)
    let b = i64::from(grid[4][3]); // (5, 4)
    assert!(a == 3 * b || b == 3 * a, "values {} and {} have no 3:1 ratio", a, b);
}

#[test]
fn test_resolving_yields_another_valid_witness() {
    // The solver promises a witness, not a unique or stable one; both runs
    // must independently satisfy every constraint.
    let first = solve_instance();
    let second = solve_instance();
    for grid in [&first, &second] {
        assert_rows_and_columns_are_permutations(grid);
        for cage in puzzle::instance_cages() {
            assert!(cage.satisfied_by(grid));
        }
    }
}

#[test]
fn test_added_contradiction_is_reported_unsat() {
    let cfg = Config::new();
    let ctx = Context::new(&cfg);
    let encoder = Encoder::new(&ctx);
    encoder.assert_classic();
    encoder
        .assert_cages(&puzzle::instance_cages())
        .expect("instance cages are well-formed");
    // (9, 9) is already pinned to 7 by the instance
    encoder.assert_cage(&Cage::equal(1, (9, 9))).unwrap();
    assert_eq!(encoder.solve(), SolveResult::Unsat);
}
