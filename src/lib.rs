pub mod app;
pub mod config;
pub mod error;
pub mod event;
pub mod quest;
pub mod ui;
pub mod util;

pub use config::MakerConfig;
pub use error::{MakerError, Result};
pub use quest::{Difficulty, NewQuest, Quest, QuestStatus, QuestStore, QuestUpdate};
