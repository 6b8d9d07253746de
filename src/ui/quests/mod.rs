// src/ui/quests/mod.rs
// Quest management screen: search box, quest table, status, help, modal

mod render_table;
mod render_modal;

use chrono::Utc;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Paragraph, Widget},
};

use crate::quest::manager::QuestManager;
use crate::ui::style::{field_border, HELP};

const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];

pub fn render_quests(manager: &QuestManager, area: Rect, buf: &mut Buffer) {
    let status = status_line(manager);
    let has_status = status.is_some();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(if has_status {
            vec![
                Constraint::Length(3),  // Search
                Constraint::Min(3),     // Quest table
                Constraint::Length(3),  // Status
                Constraint::Length(3),  // Help
            ]
        } else {
            vec![
                Constraint::Length(3),  // Search
                Constraint::Min(3),     // Quest table
                Constraint::Length(3),  // Help
            ]
        })
        .split(area);

    render_search(manager, chunks[0], buf);
    render_table::render_quest_table(manager, chunks[1], buf);

    let help_index = if let Some(status) = status {
        let status_widget = Paragraph::new(status)
            .block(
                Block::bordered()
                    .border_style(Style::default().fg(Color::Yellow))
                    .title(" Status ")
            )
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center);
        Widget::render(status_widget, chunks[2], buf);
        3
    } else {
        2
    };

    let help = Paragraph::new(help_text(manager))
        .block(
            Block::bordered()
                .border_style(Style::default().fg(HELP))
        )
        .style(Style::default().fg(HELP))
        .alignment(Alignment::Center);
    Widget::render(help, chunks[help_index], buf);

    if let Some(form) = manager.modal() {
        render_modal::render_quest_modal(form, manager.is_loading(), manager.message(), area, buf);
    }
}

fn render_search(manager: &QuestManager, area: Rect, buf: &mut Buffer) {
    let focused = manager.is_search_focused();
    let (text, style) = if manager.search().is_empty() && !focused {
        ("Search quests...".to_string(), Style::default().fg(Color::DarkGray))
    } else {
        let cursor = if focused { "_" } else { "" };
        (format!("{}{}", manager.search(), cursor), Style::default().fg(Color::White))
    };

    let search = Paragraph::new(text)
        .block(
            Block::bordered()
                .title(" Search ")
                .border_style(field_border(focused))
        )
        .style(style);
    Widget::render(search, area, buf);
}

fn status_line(manager: &QuestManager) -> Option<String> {
    if manager.is_loading() {
        let frame = (Utc::now().timestamp_subsec_millis() / 100) as usize % SPINNER.len();
        return Some(format!("{} Working...", SPINNER[frame]));
    }
    manager.message().map(str::to_string)
}

fn help_text(manager: &QuestManager) -> &'static str {
    if manager.is_search_focused() {
        return "Type to filter by title • Enter/Esc: Done";
    }
    match manager.selected_quest() {
        Some(quest) if quest.is_published() => {
            "↑/↓: Navigate • n: New Quest • e: Edit • a: Archive • /: Search • r: Reload • Esc: Dashboard"
        }
        Some(_) => {
            "↑/↓: Navigate • n: New Quest • e: Edit • p: Publish • /: Search • r: Reload • Esc: Dashboard"
        }
        None => "n: New Quest • /: Search • r: Reload • Esc: Dashboard • q: Quit",
    }
}
