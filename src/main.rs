use clap::Parser;
use std::process;
use std::time::{Duration, Instant};
use z3::{Config, Context};

use mathdoku::encode::{Encoder, SolveConfig, SolveResult};
use mathdoku::puzzle;
use mathdoku::render;

// --- Command Line Arguments ---

#[derive(Parser)]
#[command(name = "mathdoku")]
#[command(about = "mathdoku - math sudoku solver backed by Z3")]
#[command(version)]
struct Args {
    /// Solver timeout in seconds (waits indefinitely if not set)
    #[arg(long)]
    timeout: Option<u64>,
    /// Enable verbose output
    #[arg(long, short)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    let cages = puzzle::instance_cages();
    let solve_config = SolveConfig {
        timeout: args.timeout.map(Duration::from_secs),
    };

    let cfg = Config::new();
    let ctx = Context::new(&cfg);
    let encoder = Encoder::with_config(&ctx, &solve_config);

    encoder.assert_classic();
    if let Err(e) = encoder.assert_cages(&cages) {
        eprintln!("Invalid puzzle definition: {}", e);
        process::exit(2);
    }

    if args.verbose {
        println!(
            "Encoded {} cage constraints ({} assertions total)",
            cages.len(),
            encoder.assertion_count()
        );
    }

    let start = Instant::now();
    match encoder.solve() {
        SolveResult::Solved(grid) => {
            if args.verbose {
                println!("Solved in {:.2?}", start.elapsed());
            }
            println!("Solved sudoku:");
            print!("{}", render::render_solved(&grid));
        }
        SolveResult::Unsat => {
            println!("Invalid constraints -- cannot solve");
            process::exit(1);
        }
        SolveResult::Unknown(reason) => {
            eprintln!("Solver could not decide satisfiability: {}", reason);
            process::exit(2);
        }
    }
}
