//! Basic example of using the Sudoku engine

use sudoku_engine::{Generator, Solver};

fn main() {
    env_logger::init();

    // Generate a puzzle
    let mut generator = Generator::new();
    let generated = generator.generate(3).expect("level 3 is a valid level");

    println!("Generated puzzle (level {}):", generated.level);
    println!("{}\n", generated.puzzle);
    println!(
        "Cleared {} of {} cells",
        generated.removed, generated.requested
    );

    // Assess it
    let solver = Solver::new();
    let (difficulty, hint_count) = solver.assess(&generated.puzzle);
    println!("Assessed difficulty: {} ({} quick hints)\n", difficulty, hint_count);

    // Show the opening deductions
    println!("First deductions:");
    for hint in solver.hint_sequence(&generated.puzzle, 5) {
        println!("  {}", hint);
    }

    println!("\nSolution:");
    println!("{}", generated.solution);
}
