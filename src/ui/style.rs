// Stylize provides bold()/dim() on Style
use ratatui::style::{Style, Stylize};
use ratatui::style::{Color, Modifier};

pub const ACCENT: Color = Color::Cyan;
pub const QUEST_BORDER: Color = Color::Magenta;
pub const HELP: Color = Color::Yellow;

pub fn dim_unless_focused(is_focused: bool, style: Style) -> Style {
    if is_focused { style.bold() } else { style.dim() }
}

pub fn field_border(is_focused: bool) -> Style {
    if is_focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

pub fn selected_row() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(QUEST_BORDER)
        .add_modifier(Modifier::BOLD)
}
