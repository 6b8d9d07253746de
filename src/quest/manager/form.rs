use crate::quest::{Difficulty, NewQuest, Quest, QuestUpdate};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Description,
    Difficulty,
    Submit,
    Cancel,
}

impl FormField {
    const ORDER: [FormField; 5] = [
        FormField::Title,
        FormField::Description,
        FormField::Difficulty,
        FormField::Submit,
        FormField::Cancel,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        Self::ORDER[(self.position() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// One form for both create and edit; `editing_id` tells them apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestForm {
    pub editing_id: Option<i64>,
    pub title: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub focus: FormField,
}

impl QuestForm {
    pub fn create() -> Self {
        Self {
            editing_id: None,
            title: String::new(),
            description: String::new(),
            difficulty: Difficulty::Beginner,
            focus: FormField::Title,
        }
    }

    pub fn edit(quest: &Quest) -> Self {
        Self {
            editing_id: Some(quest.id),
            title: quest.title.clone(),
            description: quest.description.clone().unwrap_or_default(),
            difficulty: quest.difficulty.unwrap_or_default(),
            focus: FormField::Title,
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing_id.is_some()
    }

    pub fn heading(&self) -> &'static str {
        if self.is_editing() {
            "Edit Quest"
        } else {
            "Create New Quest"
        }
    }

    pub fn submit_label(&self, loading: bool) -> &'static str {
        match (loading, self.is_editing()) {
            (true, true) => "Saving...",
            (true, false) => "Creating...",
            (false, true) => "Save Changes",
            (false, false) => "Create Quest",
        }
    }

    pub fn to_new_quest(&self) -> NewQuest {
        NewQuest {
            title: Some(self.title.trim().to_string()),
            description: Some(self.description.clone()).filter(|d| !d.is_empty()),
            difficulty: Some(self.difficulty),
            scheduled: None,
        }
    }

    /// The description is always sent so an edit can clear it.
    pub fn to_update(&self) -> QuestUpdate {
        QuestUpdate {
            title: Some(self.title.trim().to_string()),
            description: Some(self.description.clone()),
            difficulty: Some(self.difficulty),
            scheduled: None,
            status: None,
        }
    }

    pub(super) fn push_char(&mut self, c: char) {
        match self.focus {
            FormField::Title => self.title.push(c),
            FormField::Description => self.description.push(c),
            _ => {}
        }
    }

    pub(super) fn pop_char(&mut self) {
        match self.focus {
            FormField::Title => {
                self.title.pop();
            }
            FormField::Description => {
                self.description.pop();
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quest::QuestStatus;

    #[test]
    fn focus_cycles_in_both_directions() {
        assert_eq!(FormField::Cancel.next(), FormField::Title);
        assert_eq!(FormField::Title.prev(), FormField::Cancel);
        assert_eq!(FormField::Description.next(), FormField::Difficulty);
    }

    #[test]
    fn edit_prefills_from_quest() {
        let quest = Quest {
            id: 3,
            title: "Soldering 101".to_string(),
            description: None,
            difficulty: Some(Difficulty::Advanced),
            scheduled: None,
            status: QuestStatus::Published,
        };
        let form = QuestForm::edit(&quest);

        assert_eq!(form.editing_id, Some(3));
        assert_eq!(form.title, "Soldering 101");
        assert_eq!(form.description, "");
        assert_eq!(form.difficulty, Difficulty::Advanced);
        assert_eq!(form.heading(), "Edit Quest");
        assert_eq!(form.submit_label(false), "Save Changes");
        assert_eq!(form.submit_label(true), "Saving...");
    }

    #[test]
    fn new_quest_payload_drops_empty_description() {
        let mut form = QuestForm::create();
        form.title = "  Kite Build ".to_string();
        let payload = form.to_new_quest();

        assert_eq!(payload.title.as_deref(), Some("Kite Build"));
        assert_eq!(payload.description, None);
        assert_eq!(payload.difficulty, Some(Difficulty::Beginner));
        assert_eq!(form.submit_label(true), "Creating...");
    }

    #[test]
    fn update_payload_never_touches_status() {
        let form = QuestForm::create();
        assert_eq!(form.to_update().status, None);
        assert_eq!(form.to_update().description.as_deref(), Some(""));
    }
}
