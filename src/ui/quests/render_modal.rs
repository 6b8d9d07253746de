use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Clear, Paragraph, Widget, Wrap},
};

use crate::quest::manager::{FormField, QuestForm};
use crate::quest::Difficulty;
use crate::ui::centered_rect;
use crate::ui::style::{dim_unless_focused, field_border};

pub(super) fn render_quest_modal(
    form: &QuestForm,
    loading: bool,
    message: Option<&str>,
    area: Rect,
    buf: &mut Buffer,
) {
    let popup = centered_rect(70, 80, area);
    Widget::render(Clear, popup, buf);

    let block = Block::bordered()
        .title(format!(" {} ", form.heading()))
        .title_alignment(Alignment::Center)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Green));
    let inner = block.inner(popup);
    Widget::render(block, popup, buf);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Title
            Constraint::Min(3),     // Description
            Constraint::Length(3),  // Difficulty
            Constraint::Length(3),  // Buttons
            Constraint::Length(1),  // Message
            Constraint::Length(1),  // Help
        ])
        .split(inner);

    render_text_field("Title", &form.title, form.focus == FormField::Title, chunks[0], buf);
    render_text_field(
        "Description",
        &form.description,
        form.focus == FormField::Description,
        chunks[1],
        buf,
    );
    render_difficulty(form, chunks[2], buf);
    render_buttons(form, loading, chunks[3], buf);

    if let Some(message) = message {
        Widget::render(
            Paragraph::new(message)
                .style(Style::default().fg(Color::Yellow))
                .alignment(Alignment::Center),
            chunks[4],
            buf,
        );
    }

    Widget::render(
        Paragraph::new("Tab: Next Field • ←/→: Difficulty • Ctrl-S: Save • Esc: Cancel")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center),
        chunks[5],
        buf,
    );
}

fn render_text_field(label: &str, value: &str, focused: bool, area: Rect, buf: &mut Buffer) {
    let cursor = if focused { "_" } else { "" };
    let field = Paragraph::new(format!("{}{}", value, cursor))
        .block(
            Block::bordered()
                .title(format!(" {} ", label))
                .border_style(field_border(focused))
        )
        .style(Style::default().fg(Color::White))
        .wrap(Wrap { trim: false });
    Widget::render(field, area, buf);
}

fn render_difficulty(form: &QuestForm, area: Rect, buf: &mut Buffer) {
    let focused = form.focus == FormField::Difficulty;
    let mut spans = Vec::new();
    for difficulty in Difficulty::all() {
        let style = if difficulty == form.difficulty {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!(" {} ", difficulty.as_str()), style));
        spans.push(Span::raw("  "));
    }

    let field = Paragraph::new(Line::from(spans))
        .block(
            Block::bordered()
                .title(" Difficulty ")
                .border_style(field_border(focused))
        )
        .alignment(Alignment::Center);
    Widget::render(field, area, buf);
}

fn render_buttons(form: &QuestForm, loading: bool, area: Rect, buf: &mut Buffer) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let cancel = Paragraph::new("Cancel")
        .block(Block::bordered().border_style(field_border(form.focus == FormField::Cancel)))
        .style(dim_unless_focused(form.focus == FormField::Cancel, Style::default().fg(Color::White)))
        .alignment(Alignment::Center);
    Widget::render(cancel, halves[0], buf);

    let submit_focused = form.focus == FormField::Submit;
    let submit_style = if loading {
        Style::default().fg(Color::DarkGray)
    } else {
        dim_unless_focused(submit_focused, Style::default().fg(Color::Green))
    };
    let submit = Paragraph::new(form.submit_label(loading))
        .block(Block::bordered().border_style(field_border(submit_focused)))
        .style(submit_style)
        .alignment(Alignment::Center);
    Widget::render(submit, halves[1], buf);
}
