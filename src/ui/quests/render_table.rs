use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Cell, Paragraph, Row, Table, Widget, Wrap},
};

use crate::quest::manager::QuestManager;
use crate::ui::style::{selected_row, QUEST_BORDER};

pub(super) fn render_quest_table(manager: &QuestManager, area: Rect, buf: &mut Buffer) {
    let visible = manager.visible_quests();
    let block = Block::bordered()
        .title(format!(" Quests ({}) ", visible.len()))
        .border_style(Style::default().fg(QUEST_BORDER));

    if visible.is_empty() {
        let text = if manager.quests().is_empty() {
            "No quests yet. Press 'n' to add a new quest."
        } else {
            "No quests match the search."
        };
        let empty_msg = Paragraph::new(text)
            .block(block)
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        Widget::render(empty_msg, area, buf);
        return;
    }

    let header = Row::new(["Title", "Difficulty", "Scheduled For", "Status", "Action"])
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .bottom_margin(1);

    let rows: Vec<Row> = visible
        .iter()
        .enumerate()
        .map(|(i, quest)| {
            let is_selected = i == manager.selected_index();
            let prefix = if is_selected { "▶ " } else { "  " };
            let action = if quest.is_published() {
                "[e] Edit  [a] Archive"
            } else {
                "[e] Edit  [p] Publish"
            };
            let status_style = if is_selected {
                Style::default()
            } else {
                Style::default().fg(quest.status.color())
            };

            let row = Row::new(vec![
                Cell::from(format!("{}{}", prefix, quest.title)),
                Cell::from(quest.difficulty.map(|d| d.as_str().to_string()).unwrap_or_default()),
                Cell::from(quest.scheduled.clone().unwrap_or_default()),
                Cell::from(quest.status.as_str().to_string()).style(status_style),
                Cell::from(action),
            ]);

            if is_selected {
                row.style(selected_row())
            } else {
                row.style(Style::default().fg(Color::White))
            }
        })
        .collect();

    let widths = [
        Constraint::Percentage(35),
        Constraint::Length(14),
        Constraint::Length(15),
        Constraint::Length(11),
        Constraint::Min(22),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .column_spacing(1);
    Widget::render(table, area, buf);
}
