use crate::error::Result;
use crate::quest::{NewQuest, Quest, QuestStatus, DEFAULT_TITLE};

use super::{next_id::next_id, Latency, QuestStore};

impl QuestStore {
    pub async fn create_quest(&self, payload: NewQuest) -> Result<Quest> {
        Latency::wait(self.latency.create).await;
        let _guard = self.write_lock.lock().await;

        let mut quests = self.read_quests()?;
        let quest = Quest {
            id: next_id(&quests),
            title: payload
                .title
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            description: payload.description,
            difficulty: payload.difficulty,
            scheduled: payload.scheduled,
            status: QuestStatus::Draft,
        };

        quests.insert(0, quest.clone());
        self.write_quests(&quests)?;

        tracing::debug!(id = quest.id, title = %quest.title, "created quest");
        Ok(quest)
    }
}
