use ratatui::style::Color;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuestStatus {
    #[default]
    Draft,
    Published,
}

impl QuestStatus {
    pub fn as_str(&self) -> &str {
        match self {
            QuestStatus::Draft => "Draft",
            QuestStatus::Published => "Published",
        }
    }

    pub fn color(&self) -> Color {
        match self {
            QuestStatus::Draft => Color::Yellow,
            QuestStatus::Published => Color::Green,
        }
    }
}
