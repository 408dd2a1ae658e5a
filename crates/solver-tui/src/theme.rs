use crossterm::style::Color;

/// Color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    /// Background color
    pub bg: Color,
    /// Grid border color
    pub border: Color,
    /// Box border color (thicker 3x3 separators)
    pub box_border: Color,
    /// User-entered digit color
    pub entered: Color,
    /// Solver-filled digit color
    pub solved: Color,
    /// Empty cell dot color
    pub empty: Color,
    /// Cursor cell background
    pub cursor_bg: Color,
    /// Conflicting digit color
    pub error: Color,
    /// Status message color
    pub message: Color,
    /// Key binding text color
    pub key: Color,
    /// Help text color
    pub info: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            bg: Color::Rgb { r: 20, g: 22, b: 30 },
            border: Color::Rgb { r: 70, g: 75, b: 90 },
            box_border: Color::Rgb { r: 130, g: 140, b: 170 },
            entered: Color::Rgb { r: 255, g: 255, b: 255 },
            solved: Color::Rgb { r: 80, g: 180, b: 255 },
            empty: Color::Rgb { r: 90, g: 95, b: 115 },
            cursor_bg: Color::Rgb { r: 70, g: 90, b: 140 },
            error: Color::Rgb { r: 255, g: 90, b: 90 },
            message: Color::Rgb { r: 90, g: 255, b: 130 },
            key: Color::Rgb { r: 255, g: 210, b: 100 },
            info: Color::Rgb { r: 160, g: 165, b: 185 },
        }
    }

    /// Light theme
    pub fn light() -> Self {
        Self {
            bg: Color::Rgb { r: 248, g: 248, b: 252 },
            border: Color::Rgb { r: 180, g: 180, b: 195 },
            box_border: Color::Rgb { r: 60, g: 60, b: 80 },
            entered: Color::Rgb { r: 0, g: 0, b: 0 },
            solved: Color::Rgb { r: 30, g: 100, b: 200 },
            empty: Color::Rgb { r: 170, g: 170, b: 185 },
            cursor_bg: Color::Rgb { r: 180, g: 200, b: 255 },
            error: Color::Rgb { r: 220, g: 50, b: 50 },
            message: Color::Rgb { r: 40, g: 160, b: 60 },
            key: Color::Rgb { r: 200, g: 120, b: 20 },
            info: Color::Rgb { r: 90, g: 90, b: 110 },
        }
    }
}
