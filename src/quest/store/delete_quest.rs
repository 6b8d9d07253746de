use crate::error::Result;

use super::{Latency, QuestStore};

impl QuestStore {
    /// Returns whether a quest was removed.
    pub async fn delete_quest(&self, id: i64) -> Result<bool> {
        Latency::wait(self.latency.delete).await;
        let _guard = self.write_lock.lock().await;

        let mut quests = self.read_quests()?;
        let before = quests.len();
        quests.retain(|q| q.id != id);
        self.write_quests(&quests)?;

        let removed = quests.len() < before;
        tracing::debug!(id, removed, "deleted quest");
        Ok(removed)
    }
}
