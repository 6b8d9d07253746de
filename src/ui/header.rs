use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Tabs, Widget},
};

use crate::app::Screen;
use crate::ui::style::ACCENT;

pub fn render_header(screen: Screen, area: Rect, buf: &mut Buffer) {
    let titles: Vec<String> = Screen::all()
        .iter()
        .enumerate()
        .map(|(i, s)| format!(" {} {} ", i + 1, s.title()))
        .collect();

    let tabs = Tabs::new(titles)
        .block(
            Block::bordered()
                .title(" MAKER · Facilitator ")
                .title_alignment(Alignment::Left)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(ACCENT))
        )
        .select(screen.index())
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(ACCENT)
                .add_modifier(Modifier::BOLD)
        )
        .divider("|");

    Widget::render(tabs, area, buf);
}
