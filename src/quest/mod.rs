// src/quest/mod.rs

pub mod store;
pub mod manager;
mod difficulty;
mod status;

pub use difficulty::Difficulty;
pub use status::QuestStatus;
pub use store::QuestStore;

use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};

/// Title given to quests created without one.
pub const DEFAULT_TITLE: &str = "Untitled Quest";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quest {
    pub id: i64,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "or_default")]
    pub difficulty: Option<Difficulty>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled: Option<String>,
    #[serde(default, deserialize_with = "or_default")]
    pub status: QuestStatus,
}

/// Unknown enum values read as the default instead of failing the whole list.
fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// Payload for a new quest. Nothing here is validated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewQuest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub scheduled: Option<String>,
}

/// Shallow patch: every `Some` field overwrites, every `None` is left alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub scheduled: Option<String>,
    pub status: Option<QuestStatus>,
}

impl NewQuest {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = Some(difficulty);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl QuestUpdate {
    pub fn status(status: QuestStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }
}

impl Quest {
    pub fn apply(&mut self, updates: QuestUpdate) {
        if let Some(title) = updates.title {
            self.title = title;
        }
        if let Some(description) = updates.description {
            self.description = Some(description);
        }
        if let Some(difficulty) = updates.difficulty {
            self.difficulty = Some(difficulty);
        }
        if let Some(scheduled) = updates.scheduled {
            self.scheduled = Some(scheduled);
        }
        if let Some(status) = updates.status {
            self.status = status;
        }
    }

    pub fn is_published(&self) -> bool {
        self.status == QuestStatus::Published
    }

    pub fn matches_search(&self, query: &str) -> bool {
        let query = query.trim();
        query.is_empty() || self.title.to_lowercase().contains(&query.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quest() -> Quest {
        Quest {
            id: 7,
            title: "Trail Walk".to_string(),
            description: Some("Loop around the lake".to_string()),
            difficulty: Some(Difficulty::Beginner),
            scheduled: None,
            status: QuestStatus::Draft,
        }
    }

    #[test]
    fn apply_only_touches_present_fields() {
        let mut q = quest();
        q.apply(QuestUpdate {
            difficulty: Some(Difficulty::Advanced),
            ..QuestUpdate::default()
        });

        assert_eq!(q.difficulty, Some(Difficulty::Advanced));
        assert_eq!(q.title, "Trail Walk");
        assert_eq!(q.description.as_deref(), Some("Loop around the lake"));
        assert_eq!(q.status, QuestStatus::Draft);
        assert_eq!(q.id, 7);
    }

    #[test]
    fn stored_json_omits_absent_fields() {
        let json = serde_json::to_value(quest()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 7,
                "title": "Trail Walk",
                "description": "Loop around the lake",
                "difficulty": "Beginner",
                "status": "Draft"
            })
        );
    }

    #[test]
    fn missing_status_reads_as_draft() {
        let q: Quest = serde_json::from_str(r#"{"id":1,"title":"Lab"}"#).unwrap();
        assert_eq!(q.status, QuestStatus::Draft);
        assert_eq!(q.difficulty, None);
    }

    #[test]
    fn unknown_enum_values_fall_back_per_record() {
        let quests: Vec<Quest> = serde_json::from_str(
            r#"[{"id":2,"title":"Forge","difficulty":"Expert","status":"Archived"},
                {"id":1,"title":"Lab","difficulty":"Advanced","status":"Published"}]"#,
        )
        .unwrap();

        assert_eq!(quests[0].difficulty, None);
        assert_eq!(quests[0].status, QuestStatus::Draft);
        assert_eq!(quests[1].difficulty, Some(Difficulty::Advanced));
        assert_eq!(quests[1].status, QuestStatus::Published);
    }

    #[test]
    fn search_is_case_insensitive_on_title() {
        let q = quest();
        assert!(q.matches_search("trail"));
        assert!(q.matches_search("  "));
        assert!(!q.matches_search("lake"));
    }
}
