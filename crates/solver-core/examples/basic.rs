//! Basic example of using the solver engine

use solver_core::{grid_is_valid, Grid, Solver};

fn main() {
    // Parse a puzzle from the 81-character line format
    let puzzle_string =
        "53--7----6--195----98----6-8---6---34--8-3--17---2---6-6----28----419--5-----8--79";
    let puzzle = match Grid::from_line(puzzle_string) {
        Some(grid) => grid,
        None => {
            eprintln!("Puzzle line must be exactly 81 characters");
            return;
        }
    };

    println!("Puzzle:");
    println!("{}", puzzle);

    // Show some stats
    println!("Given cells: {}", puzzle.filled_count());
    println!("Empty cells: {}", puzzle.empty_count());
    println!("Givens valid: {}\n", grid_is_valid(&puzzle));

    // Solve it
    println!("Solving...\n");
    let solver = Solver::new();
    if let Some(solution) = solver.solve(&puzzle) {
        println!("Solution:");
        println!("{}", solution);
        println!("\nAs a line: {}", solution.to_line());
    } else {
        println!("No solution found");
    }

    // The line-in, line-out shortcut the adapters use
    println!("\n--- Solving straight from a line ---\n");
    if let Some(solution_line) = solver.solve_line(puzzle_string) {
        println!("{}", solution_line);
    }
}
