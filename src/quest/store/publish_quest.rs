use crate::error::Result;
use crate::quest::{Quest, QuestStatus, QuestUpdate};

use super::QuestStore;

impl QuestStore {
    pub async fn publish_quest(&self, id: i64) -> Result<Option<Quest>> {
        self.update_quest(id, QuestUpdate::status(QuestStatus::Published)).await
    }
}
