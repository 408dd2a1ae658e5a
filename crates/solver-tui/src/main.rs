mod app;
mod board;
mod render;
mod theme;

use app::{App, AppAction};
use board::Board;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use solver_core::{grid_is_valid, Grid, Solver};
use std::io::{self, Write};
use std::process::ExitCode;
use std::time::Duration;

#[derive(Parser)]
#[command(
    name = "sudoku-solver",
    version,
    about = "Solve 9x9 Sudoku puzzles in the terminal"
)]
struct Args {
    /// Starting puzzle in the 81-character line format
    puzzle: Option<String>,

    /// Print the solution and exit instead of opening the board
    #[arg(long)]
    batch: bool,

    /// Use the light color theme
    #[arg(long)]
    light: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    if args.batch {
        return run_batch(&args);
    }

    let board = match &args.puzzle {
        Some(line) => match Board::from_line(line) {
            Some(board) => board,
            None => {
                eprintln!("Puzzle must be exactly 81 characters");
                return ExitCode::FAILURE;
            }
        },
        None => Board::new(),
    };

    match run_tui(App::new(board, args.light)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Solve once and print the result, line in, line out.
fn run_batch(args: &Args) -> ExitCode {
    let line = match &args.puzzle {
        Some(line) => line,
        None => {
            eprintln!("--batch needs a puzzle argument");
            return ExitCode::FAILURE;
        }
    };
    let puzzle = match Grid::from_line(line) {
        Some(grid) => grid,
        None => {
            eprintln!("Puzzle must be exactly 81 characters");
            return ExitCode::FAILURE;
        }
    };
    if !grid_is_valid(&puzzle) {
        eprintln!("Puzzle has conflicting digits");
        return ExitCode::FAILURE;
    }
    match Solver::new().solve(&puzzle) {
        Some(solution) => {
            println!("{}", solution.to_line());
            ExitCode::SUCCESS
        }
        None => {
            eprintln!("No solution exists");
            ExitCode::FAILURE
        }
    }
}

fn run_tui(mut app: App) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let result = run_app(&mut stdout, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(stdout, LeaveAlternateScreen)?;

    result
}

fn run_app(stdout: &mut io::Stdout, app: &mut App) -> io::Result<()> {
    loop {
        render::render(stdout, app)?;
        stdout.flush()?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Handle Ctrl+C
                if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                    break;
                }

                match app.handle_key(key) {
                    AppAction::Continue => {}
                    AppAction::Quit => break,
                }
            }
        } else {
            app.tick();
        }
    }

    Ok(())
}
