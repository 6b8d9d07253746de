use crate::log_info;

use super::{FormField, QuestManager, StoreRequest};

impl QuestManager {
    /// Ignored while a request is in flight. An empty title keeps the modal
    /// open with focus on the title field.
    pub fn submit(&mut self) -> Option<StoreRequest> {
        if self.loading {
            return None;
        }
        let form = self.modal.as_mut()?;
        if form.title.trim().is_empty() {
            form.focus = FormField::Title;
            return None;
        }

        let request = match form.editing_id {
            Some(id) => StoreRequest::Update(id, form.to_update()),
            None => StoreRequest::Create(form.to_new_quest()),
        };
        log_info!("Submitting quest form: {:?}", request.kind());

        self.loading = true;
        self.message = None;
        Some(request)
    }
}

#[cfg(test)]
mod tests {
    use crate::quest::manager::test_support::{loaded, quest};
    use crate::quest::manager::{FormField, StoreRequest};
    use crate::quest::{Difficulty, QuestStatus, QuestUpdate};

    #[test]
    fn blank_title_is_not_submitted() {
        let mut manager = loaded(Vec::new());
        manager.open_create();
        assert_eq!(manager.submit(), None);
        assert!(!manager.is_loading());
        assert_eq!(manager.modal().unwrap().focus, FormField::Title);
    }

    #[test]
    fn editing_submits_an_update_for_that_id() {
        let existing = quest(5, "Bridge Lab", QuestStatus::Draft);
        let mut manager = loaded(vec![existing.clone()]);
        manager.start_edit(&existing);

        assert_eq!(
            manager.submit(),
            Some(StoreRequest::Update(
                5,
                QuestUpdate {
                    title: Some("Bridge Lab".to_string()),
                    description: Some(String::new()),
                    difficulty: Some(Difficulty::Beginner),
                    scheduled: None,
                    status: None,
                }
            ))
        );
        assert!(manager.is_loading());
    }

    #[test]
    fn submit_is_disabled_while_loading() {
        let mut manager = loaded(Vec::new());
        manager.open_create();
        manager.modal.as_mut().unwrap().title = "Soap Making".to_string();

        assert!(manager.submit().is_some());
        assert_eq!(manager.submit(), None);
    }

    #[test]
    fn submit_without_modal_does_nothing() {
        let mut manager = loaded(Vec::new());
        assert_eq!(manager.submit(), None);
    }
}
