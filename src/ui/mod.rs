pub mod dashboard;
pub mod header;
pub mod quests;
pub mod style;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    widgets::Widget,
};
use crate::app::{App, Screen};
use crate::quest::manager::QuestManager;

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        render_app(self.screen, &self.quests, area, buf);
    }
}

pub fn render_app(screen: Screen, quests: &QuestManager, area: Rect, buf: &mut Buffer) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(1),     // Screen
        ])
        .split(area);

    header::render_header(screen, chunks[0], buf);

    match screen {
        Screen::Dashboard => dashboard::render_dashboard(chunks[1], buf),
        Screen::Quests => quests::render_quests(quests, chunks[1], buf),
    }
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
pub(crate) mod test_support {
    use ratatui::{backend::TestBackend, Terminal};

    use super::render_app;
    use crate::app::Screen;
    use crate::quest::manager::QuestManager;

    /// Render one frame and return its text, one string per row.
    pub fn render_to_lines(screen: Screen, quests: &QuestManager, width: u16, height: u16) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| render_app(screen, quests, frame.area(), frame.buffer_mut()))
            .unwrap();

        let buffer = terminal.backend().buffer();
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect()
    }

    pub fn contains(lines: &[String], needle: &str) -> bool {
        lines.iter().any(|line| line.contains(needle))
    }
}
