// src/quest/manager/mod.rs
// UI state for the quest management screen. Key presses become store
// requests, store responses become new state.

mod form;
mod request;
mod handle_key;
mod handle_modal_key;
mod handle_search_key;
mod submit;
mod apply_response;

pub use form::{FormField, QuestForm};
pub use request::{RequestKind, StoreOutcome, StoreRequest, StoreResponse};

use crate::quest::Quest;

pub const CREATED_MESSAGE: &str = "Quest created.";
pub const UPDATED_MESSAGE: &str = "Quest updated.";
pub const SAVE_FAILED_MESSAGE: &str = "Failed to save quest.";

#[derive(Debug, Default)]
pub struct QuestManager {
    quests: Vec<Quest>,
    loading: bool,
    message: Option<String>,
    /// `Some` while the create/edit modal is open.
    modal: Option<QuestForm>,
    /// Index into the rows that pass the search filter.
    selected: usize,
    search: String,
    search_focused: bool,
}

impl QuestManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// First request of a session. With `reset` the stored list is wiped first.
    pub fn start(&mut self, reset: bool) -> StoreRequest {
        self.loading = true;
        if reset {
            StoreRequest::Reset
        } else {
            StoreRequest::Load
        }
    }

    /// True when key presses belong to the modal or the search box.
    pub fn captures_input(&self) -> bool {
        self.modal.is_some() || self.search_focused
    }

    pub fn quests(&self) -> &[Quest] {
        &self.quests
    }

    pub fn visible_quests(&self) -> Vec<&Quest> {
        self.quests
            .iter()
            .filter(|q| q.matches_search(&self.search))
            .collect()
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_quest(&self) -> Option<&Quest> {
        self.visible_quests().get(self.selected).copied()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn modal(&self) -> Option<&QuestForm> {
        self.modal.as_ref()
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn is_search_focused(&self) -> bool {
        self.search_focused
    }

    pub fn open_create(&mut self) {
        self.modal = Some(QuestForm::create());
    }

    pub fn start_edit(&mut self, quest: &Quest) {
        self.modal = Some(QuestForm::edit(quest));
    }

    pub fn close_modal(&mut self) {
        self.modal = None;
    }

    /// Closes the modal only if it is still the form that sent `editing_id`.
    fn close_modal_for(&mut self, editing_id: Option<i64>) {
        if self.modal.as_ref().is_some_and(|form| form.editing_id == editing_id) {
            self.modal = None;
        }
    }

    /// Keeps the highlight on quest `id` after the rows change, clamping
    /// the old index when that quest is gone.
    fn reselect(&mut self, id: Option<i64>) {
        let visible = self.visible_quests();
        let row = id.and_then(|id| visible.iter().position(|q| q.id == id));
        let len = visible.len();
        match row {
            Some(row) => self.selected = row,
            None if self.selected >= len => self.selected = len.saturating_sub(1),
            None => {}
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::quest::{Difficulty, QuestStatus};

    pub fn quest(id: i64, title: &str, status: QuestStatus) -> Quest {
        Quest {
            id,
            title: title.to_string(),
            description: None,
            difficulty: Some(Difficulty::Beginner),
            scheduled: None,
            status,
        }
    }

    /// A manager that already finished its initial load with `quests`.
    pub fn loaded(quests: Vec<Quest>) -> QuestManager {
        let mut manager = QuestManager::new();
        manager.start(false);
        manager.apply_response(StoreResponse::Done {
            outcome: StoreOutcome::Loaded,
            snapshot: quests,
        });
        manager
    }
}
