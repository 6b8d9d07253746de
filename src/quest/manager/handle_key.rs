use ratatui::crossterm::event::{KeyCode, KeyEvent};

use crate::log_debug;
use crate::quest::QuestStatus;

use super::{QuestManager, StoreRequest};

impl QuestManager {
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<StoreRequest> {
        if self.modal.is_some() {
            return self.handle_modal_key(key);
        }
        if self.search_focused {
            self.handle_search_key(key);
            return None;
        }
        self.handle_list_key(key.code)
    }

    fn handle_list_key(&mut self, key_code: KeyCode) -> Option<StoreRequest> {
        match key_code {
            KeyCode::Up | KeyCode::Char('k') => {
                if self.selected > 0 {
                    self.selected -= 1;
                }
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected < self.visible_quests().len().saturating_sub(1) {
                    self.selected += 1;
                }
                None
            }
            KeyCode::Char('n') => {
                self.open_create();
                None
            }
            KeyCode::Char('e') | KeyCode::Enter => {
                if let Some(quest) = self.selected_quest().cloned() {
                    self.start_edit(&quest);
                }
                None
            }
            KeyCode::Char('p') => self.row_action(QuestStatus::Draft, StoreRequest::Publish),
            KeyCode::Char('a') => self.row_action(QuestStatus::Published, StoreRequest::Archive),
            KeyCode::Char('r') if !self.loading => {
                self.loading = true;
                Some(StoreRequest::Load)
            }
            KeyCode::Char('/') => {
                self.search_focused = true;
                None
            }
            _ => None,
        }
    }

    /// Drafts can be published and published quests archived, never the reverse.
    fn row_action(
        &mut self,
        required: QuestStatus,
        request: fn(i64) -> StoreRequest,
    ) -> Option<StoreRequest> {
        if self.loading {
            return None;
        }
        let quest = self.selected_quest()?;
        if quest.status != required {
            log_debug!("Ignoring action on quest {} in status {}", quest.id, quest.status.as_str());
            return None;
        }
        let id = quest.id;
        self.loading = true;
        Some(request(id))
    }
}
