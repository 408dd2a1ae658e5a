use crate::board::Board;
use crate::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent};
use solver_core::{grid_is_valid, Position, Solver};

/// Result of handling a key press
pub enum AppAction {
    Continue,
    Quit,
}

/// The main application state
pub struct App {
    /// The editable board
    pub board: Board,
    /// Currently selected cell position
    pub cursor: Position,
    /// Color theme
    pub theme: Theme,
    /// Message to display
    pub message: Option<String>,
    /// Message timer
    message_timer: u32,
    solver: Solver,
    light_theme: bool,
}

impl App {
    pub fn new(board: Board, light_theme: bool) -> Self {
        Self {
            board,
            cursor: Position::new(4, 4),
            theme: if light_theme { Theme::light() } else { Theme::dark() },
            message: None,
            message_timer: 0,
            solver: Solver::new(),
            light_theme,
        }
    }

    /// Update timers (called every tick)
    pub fn tick(&mut self) {
        if self.message_timer > 0 {
            self.message_timer -= 1;
            if self.message_timer == 0 {
                self.message = None;
            }
        }
    }

    /// Show a temporary message
    pub fn show_message(&mut self, msg: &str) {
        self.message = Some(msg.to_string());
        self.message_timer = 30; // ~3 seconds at 100ms poll
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) -> AppAction {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return AppAction::Quit,

            // Navigation
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-1, 0),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(1, 0),
            KeyCode::Left | KeyCode::Char('h') => self.move_cursor(0, -1),
            KeyCode::Right | KeyCode::Char('l') => self.move_cursor(0, 1),

            // Digit input
            KeyCode::Char(c @ '1'..='9') => {
                let value = c as u8 - b'0';
                self.board.set(self.cursor, value);
            }

            // Clear cell
            KeyCode::Char('0') | KeyCode::Delete | KeyCode::Backspace => {
                self.board.clear_cell(self.cursor);
            }

            // Solve
            KeyCode::Char('s') | KeyCode::Enter => self.solve(),

            // Clear board
            KeyCode::Char('c') => {
                self.board.clear();
                self.show_message("Board cleared");
            }

            // Theme toggle
            KeyCode::Char('t') => {
                self.light_theme = !self.light_theme;
                self.theme = if self.light_theme {
                    Theme::light()
                } else {
                    Theme::dark()
                };
            }

            _ => {}
        }

        AppAction::Continue
    }

    /// Run the solver on the current board and fill in the result.
    fn solve(&mut self) {
        if !grid_is_valid(self.board.grid()) {
            self.show_message("Board has conflicting digits");
            return;
        }
        match self.solver.solve(self.board.grid()) {
            Some(solution) => {
                self.board.apply_solution(&solution);
                self.show_message("Solved");
            }
            None => self.show_message("No solution exists"),
        }
    }

    fn move_cursor(&mut self, row_delta: i32, col_delta: i32) {
        let new_row = (self.cursor.row as i32 + row_delta).clamp(0, 8) as usize;
        let new_col = (self.cursor.col as i32 + col_delta).clamp(0, 8) as usize;
        self.cursor = Position::new(new_row, new_col);
    }
}
