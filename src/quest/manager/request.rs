use crate::error::Result;
use crate::quest::{NewQuest, Quest, QuestStore, QuestUpdate};

/// Work the screen hands to the app to run against the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreRequest {
    Load,
    /// Clear everything, then load.
    Reset,
    Create(NewQuest),
    Update(i64, QuestUpdate),
    Publish(i64),
    Archive(i64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    Load,
    Reset,
    Create,
    Update,
    Publish,
    Archive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreOutcome {
    Loaded,
    Created(Quest),
    Updated(i64, Option<Quest>),
    Published(i64, Option<Quest>),
    Archived(i64, bool),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreResponse {
    /// `snapshot` is the stored list read right after the operation.
    Done {
        outcome: StoreOutcome,
        snapshot: Vec<Quest>,
    },
    Failed {
        kind: RequestKind,
        error: String,
    },
}

impl StoreRequest {
    pub fn kind(&self) -> RequestKind {
        match self {
            StoreRequest::Load => RequestKind::Load,
            StoreRequest::Reset => RequestKind::Reset,
            StoreRequest::Create(_) => RequestKind::Create,
            StoreRequest::Update(..) => RequestKind::Update,
            StoreRequest::Publish(_) => RequestKind::Publish,
            StoreRequest::Archive(_) => RequestKind::Archive,
        }
    }

    /// Never fails: store errors come back as [`StoreResponse::Failed`].
    pub async fn execute(self, store: &QuestStore) -> StoreResponse {
        let kind = self.kind();
        match self.run(store).await {
            Ok((outcome, snapshot)) => StoreResponse::Done { outcome, snapshot },
            Err(e) => StoreResponse::Failed {
                kind,
                error: e.to_string(),
            },
        }
    }

    async fn run(self, store: &QuestStore) -> Result<(StoreOutcome, Vec<Quest>)> {
        let outcome = match self {
            StoreRequest::Load => {
                return Ok((StoreOutcome::Loaded, store.fetch_quests().await?));
            }
            StoreRequest::Reset => {
                store.clear_quests().await?;
                return Ok((StoreOutcome::Loaded, store.snapshot().await?));
            }
            StoreRequest::Create(payload) => StoreOutcome::Created(store.create_quest(payload).await?),
            StoreRequest::Update(id, updates) => {
                StoreOutcome::Updated(id, store.update_quest(id, updates).await?)
            }
            StoreRequest::Publish(id) => StoreOutcome::Published(id, store.publish_quest(id).await?),
            StoreRequest::Archive(id) => StoreOutcome::Archived(id, store.delete_quest(id).await?),
        };

        let snapshot = store.snapshot().await?;
        Ok((outcome, snapshot))
    }
}
