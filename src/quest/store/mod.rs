// src/quest/store/mod.rs
// Async CRUD over the quest list persisted as one JSON value in local storage

mod latency;
mod read_quests;
mod next_id;
mod fetch_quests;
mod create_quest;
mod update_quest;
mod delete_quest;
mod publish_quest;
mod clear_quests;
mod snapshot;

pub use latency::Latency;

use std::sync::Arc;
use tokio::sync::Mutex;

use crate::util::database::Database;

/// Storage key used when the config does not name one.
pub const DEFAULT_STORAGE_KEY: &str = "maker_mock_quests_v1";

/// Every mutation reads the whole list, changes it and writes it back.
/// `write_lock` spans that cycle so tasks in this process never interleave.
#[derive(Debug, Clone)]
pub struct QuestStore {
    database: Database,
    storage_key: String,
    latency: Latency,
    write_lock: Arc<Mutex<()>>,
}

impl QuestStore {
    pub fn new(database: Database, storage_key: impl Into<String>, latency: Latency) -> Self {
        Self {
            database,
            storage_key: storage_key.into(),
            latency,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }
}
