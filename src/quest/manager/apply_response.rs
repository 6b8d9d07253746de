use crate::{log_error, log_info};

use super::{
    QuestManager, RequestKind, StoreOutcome, StoreResponse, CREATED_MESSAGE, SAVE_FAILED_MESSAGE,
    UPDATED_MESSAGE,
};

impl QuestManager {
    /// The stored snapshot always replaces the local list; the outcome only
    /// decides the message and whether the modal closes. The modal closes
    /// only when it is the form that made the request.
    pub fn apply_response(&mut self, response: StoreResponse) {
        self.loading = false;

        match response {
            StoreResponse::Done { outcome, snapshot } => {
                match outcome {
                    StoreOutcome::Loaded => {
                        log_info!("Loaded {} quests", snapshot.len());
                    }
                    StoreOutcome::Created(quest) => {
                        log_info!("Created quest {} ({})", quest.id, quest.title);
                        self.message = Some(CREATED_MESSAGE.to_string());
                        self.close_modal_for(None);
                    }
                    StoreOutcome::Updated(id, updated) => {
                        if updated.is_some() {
                            log_info!("Updated quest {}", id);
                            self.message = Some(UPDATED_MESSAGE.to_string());
                        }
                        self.close_modal_for(Some(id));
                    }
                    StoreOutcome::Published(id, published) => {
                        log_info!("Publish quest {}: {}", id, published.is_some());
                    }
                    StoreOutcome::Archived(id, removed) => {
                        log_info!("Archive quest {}: {}", id, removed);
                    }
                }
                let selected_id = self.selected_quest().map(|q| q.id);
                self.quests = snapshot;
                self.reselect(selected_id);
            }
            StoreResponse::Failed { kind, error } => {
                log_error!("Quest {:?} request failed: {}", kind, error);
                if matches!(kind, RequestKind::Create | RequestKind::Update) {
                    self.message = Some(SAVE_FAILED_MESSAGE.to_string());
                }
            }
        }
    }
}
