use crate::error::Result;
use crate::quest::{Quest, QuestUpdate};

use super::{Latency, QuestStore};

impl QuestStore {
    /// `Ok(None)` when no quest has this id; storage is left untouched then.
    pub async fn update_quest(&self, id: i64, updates: QuestUpdate) -> Result<Option<Quest>> {
        Latency::wait(self.latency.update).await;
        let _guard = self.write_lock.lock().await;

        let mut quests = self.read_quests()?;
        let Some(quest) = quests.iter_mut().find(|q| q.id == id) else {
            tracing::debug!(id, "update skipped, quest not found");
            return Ok(None);
        };

        quest.apply(updates);
        let updated = quest.clone();
        self.write_quests(&quests)?;

        tracing::debug!(id, status = updated.status.as_str(), "updated quest");
        Ok(Some(updated))
    }
}
