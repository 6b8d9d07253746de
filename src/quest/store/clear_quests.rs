use crate::error::Result;

use super::QuestStore;

impl QuestStore {
    pub async fn clear_quests(&self) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        self.write_quests(&[])?;
        tracing::info!(key = %self.storage_key, "cleared stored quests");
        Ok(())
    }
}
