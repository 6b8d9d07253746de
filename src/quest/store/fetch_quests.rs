use crate::error::Result;
use crate::quest::Quest;

use super::{Latency, QuestStore};

impl QuestStore {
    /// The full list in storage order, most recently created first.
    pub async fn fetch_quests(&self) -> Result<Vec<Quest>> {
        Latency::wait(self.latency.fetch).await;
        let _guard = self.write_lock.lock().await;

        let quests = self.read_quests()?;
        tracing::debug!(count = quests.len(), "fetched quests");
        Ok(quests)
    }
}
