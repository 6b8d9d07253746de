use crate::error::Result;
use crate::quest::Quest;

use super::QuestStore;

impl QuestStore {
    /// The stored list without the simulated fetch delay. Used to hand the
    /// screen fresh rows after a mutation that already paid its own delay.
    pub async fn snapshot(&self) -> Result<Vec<Quest>> {
        let _guard = self.write_lock.lock().await;
        self.read_quests()
    }
}
