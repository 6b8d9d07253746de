// src/ui/dashboard.rs
// Static landing screen

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Paragraph, Widget, Wrap},
};

use crate::ui::style::{ACCENT, HELP};

const FEATURES: [(&str, &str); 4] = [
    ("Manage Quests", "Create and edit quests for participants"),
    ("View Participants", "Monitor participant progress and engagement"),
    ("Analytics", "View detailed analytics and reports"),
    ("Settings", "Configure quest settings and preferences"),
];

pub fn render_dashboard(area: Rect, buf: &mut Buffer) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),  // Hero
            Constraint::Min(6),     // Feature cards
            Constraint::Length(3),  // Help
        ])
        .split(area);

    let hero = Paragraph::new(vec![
        Line::styled(
            "Facilitator Dashboard",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Line::styled(
            "Manage quests and guide participants",
            Style::default().fg(Color::Gray),
        ),
    ])
    .block(
        Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(ACCENT))
    )
    .alignment(Alignment::Center);
    Widget::render(hero, chunks[0], buf);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    let cells: Vec<Rect> = rows
        .iter()
        .flat_map(|row| {
            Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(*row)
                .to_vec()
        })
        .collect();

    for ((title, description), cell) in FEATURES.iter().zip(cells) {
        let card = Paragraph::new(vec![
            Line::styled(*title, Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
            Line::from(""),
            Line::styled(*description, Style::default().fg(Color::Gray)),
        ])
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::DarkGray))
        )
        .wrap(Wrap { trim: true });
        Widget::render(card, cell, buf);
    }

    let help = Paragraph::new("Enter/2: Manage Quests • Tab: Switch Screen • q: Quit")
        .block(
            Block::bordered()
                .border_style(Style::default().fg(HELP))
        )
        .style(Style::default().fg(HELP))
        .alignment(Alignment::Center);
    Widget::render(help, chunks[2], buf);
}

#[cfg(test)]
mod tests {
    use crate::app::Screen;
    use crate::quest::manager::QuestManager;
    use crate::ui::test_support::{contains, render_to_lines};

    #[test]
    fn shows_all_feature_cards() {
        let lines = render_to_lines(Screen::Dashboard, &QuestManager::new(), 100, 30);
        for title in ["Manage Quests", "View Participants", "Analytics", "Settings"] {
            assert!(contains(&lines, title), "missing card {}", title);
        }
        assert!(contains(&lines, "Facilitator Dashboard"));
    }
}
