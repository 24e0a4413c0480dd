use crate::playback::Highlight;
use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub border_focused: Color,
    pub border_normal: Color,
    pub current_line_bg: Color,
    pub bar: Color,       // Untouched bars
    pub comparing: Color, // Red
    pub swapping: Color,  // Yellow
    pub sorted: Color,    // Green
    pub pivot: Color,     // Purple
    pub merging: Color,   // Cyan
    pub active: Color,    // Light blue
}

impl Theme {
    pub fn highlight(&self, highlight: Highlight) -> Color {
        match highlight {
            Highlight::Comparing => self.comparing,
            Highlight::Swapping => self.swapping,
            Highlight::Pivot => self.pivot,
            Highlight::Merging => self.merging,
            Highlight::Selected | Highlight::Active => self.active,
        }
    }
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    current_line_bg: Color::Rgb(50, 50, 70),   // Slightly lighter BG for current line
    bar: Color::Rgb(100, 116, 139),
    comparing: Color::Rgb(248, 113, 113),
    swapping: Color::Rgb(251, 191, 36),
    sorted: Color::Rgb(52, 211, 153),
    pivot: Color::Rgb(167, 139, 250),
    merging: Color::Rgb(34, 211, 238),
    active: Color::Rgb(96, 165, 250),
};
