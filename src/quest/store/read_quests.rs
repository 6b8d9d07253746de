use crate::error::Result;
use crate::log_warn;
use crate::quest::Quest;
use crate::util::database::LocalStorage;

use super::QuestStore;

impl QuestStore {
    /// Missing, blank or unparseable content is replaced by an empty list.
    /// Callers never see the corruption.
    pub(super) fn read_quests(&self) -> Result<Vec<Quest>> {
        let raw = match self.database.get_item(&self.storage_key)? {
            Some(raw) if !raw.trim().is_empty() => raw,
            _ => {
                self.write_quests(&[])?;
                return Ok(Vec::new());
            }
        };

        match serde_json::from_str::<Vec<Quest>>(&raw) {
            Ok(quests) => Ok(quests),
            Err(e) => {
                tracing::warn!(key = %self.storage_key, error = %e, "stored quests unreadable, starting fresh");
                log_warn!("Stored quests under '{}' were unreadable ({}); reset to empty", self.storage_key, e);
                self.write_quests(&[])?;
                Ok(Vec::new())
            }
        }
    }

    pub(super) fn write_quests(&self, quests: &[Quest]) -> Result<()> {
        let raw = serde_json::to_string(quests)?;
        self.database.set_item(&self.storage_key, &raw)
    }
}
