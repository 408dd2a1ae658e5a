use crate::app::App;
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute,
    style::{Print, SetBackgroundColor, SetForegroundColor},
    terminal::{self, Clear, ClearType},
};
use solver_core::Position;
use std::io;

/// Grid dimensions: 37 chars wide x 19 tall.
/// Each cell is 3 chars, plus a border column between cells.
const GRID_WIDTH: u16 = 37;
const GRID_HEIGHT: u16 = 19;

const THICK_SEPARATOR: &str = "+===+===+===+===+===+===+===+===+===+";
const THIN_SEPARATOR: &str = "+---+---+---+---+---+---+---+---+---+";

pub fn render(stdout: &mut io::Stdout, app: &App) -> io::Result<()> {
    let (term_width, term_height) = terminal::size()?;

    execute!(stdout, Hide, Clear(ClearType::All))?;

    let start_x = if term_width > GRID_WIDTH {
        (term_width - GRID_WIDTH) / 2
    } else {
        1
    };
    let start_y = if term_height > GRID_HEIGHT + 4 { 2 } else { 0 };

    render_grid(stdout, app, start_x, start_y)?;

    let controls_y = start_y + GRID_HEIGHT + 1;
    render_controls(stdout, app, start_x, controls_y)?;

    if let Some(ref msg) = app.message {
        render_message(stdout, app, msg, term_width, controls_y + 2)?;
    }

    execute!(stdout, Show)?;
    Ok(())
}

fn render_grid(stdout: &mut io::Stdout, app: &App, x: u16, y: u16) -> io::Result<()> {
    let theme = &app.theme;

    execute!(stdout, SetBackgroundColor(theme.bg))?;

    // Top border (thick)
    execute!(
        stdout,
        MoveTo(x, y),
        SetForegroundColor(theme.box_border),
        Print(THICK_SEPARATOR)
    )?;

    for row in 0..9 {
        let cell_y = y + 1 + row as u16 * 2;
        execute!(stdout, MoveTo(x, cell_y))?;

        for col in 0..9 {
            // Thick borders at 3x3 boundaries
            if col % 3 == 0 {
                execute!(stdout, SetForegroundColor(theme.box_border), Print("\u{2551}"))?;
            } else {
                execute!(stdout, SetForegroundColor(theme.border), Print("\u{2502}"))?;
            }

            render_cell(stdout, app, Position::new(row, col))?;
        }
        execute!(stdout, SetForegroundColor(theme.box_border), Print("\u{2551}"))?;

        // Horizontal separator below the row
        execute!(stdout, MoveTo(x, cell_y + 1))?;
        if (row + 1) % 3 == 0 {
            execute!(
                stdout,
                SetForegroundColor(theme.box_border),
                Print(THICK_SEPARATOR)
            )?;
        } else {
            execute!(
                stdout,
                SetForegroundColor(theme.border),
                Print(THIN_SEPARATOR)
            )?;
        }
    }

    Ok(())
}

fn render_cell(stdout: &mut io::Stdout, app: &App, pos: Position) -> io::Result<()> {
    let theme = &app.theme;
    let is_cursor = pos == app.cursor;

    let bg = if is_cursor { theme.cursor_bg } else { theme.bg };

    let (text, fg) = match app.board.grid().get(pos) {
        Some(value) => {
            let fg = if app.board.has_conflict(pos) {
                theme.error
            } else if app.board.is_entered(pos) {
                theme.entered
            } else {
                theme.solved
            };
            (format!(" {} ", value), fg)
        }
        None => (" . ".to_string(), theme.empty),
    };

    execute!(
        stdout,
        SetBackgroundColor(bg),
        SetForegroundColor(fg),
        Print(text),
        SetBackgroundColor(theme.bg)
    )?;

    Ok(())
}

fn render_controls(stdout: &mut io::Stdout, app: &App, x: u16, y: u16) -> io::Result<()> {
    let theme = &app.theme;
    let bindings = [
        ("1-9", "enter"),
        ("0", "erase"),
        ("hjkl", "move"),
        ("s", "solve"),
        ("c", "clear"),
        ("t", "theme"),
        ("q", "quit"),
    ];

    execute!(stdout, MoveTo(x, y), SetBackgroundColor(theme.bg))?;
    for (i, (keys, action)) in bindings.iter().enumerate() {
        if i > 0 {
            execute!(stdout, SetForegroundColor(theme.info), Print("  "))?;
        }
        execute!(
            stdout,
            SetForegroundColor(theme.key),
            Print(keys),
            SetForegroundColor(theme.info),
            Print(format!(" {}", action))
        )?;
    }

    Ok(())
}

fn render_message(
    stdout: &mut io::Stdout,
    app: &App,
    msg: &str,
    term_width: u16,
    y: u16,
) -> io::Result<()> {
    let theme = &app.theme;
    let x = if term_width > msg.len() as u16 {
        (term_width - msg.len() as u16) / 2
    } else {
        0
    };

    execute!(
        stdout,
        MoveTo(x, y),
        SetBackgroundColor(theme.bg),
        SetForegroundColor(theme.message),
        Print(msg)
    )?;

    Ok(())
}
