use chrono::Utc;

use crate::quest::Quest;

/// Wall-clock milliseconds, bumped past the largest stored id when the clock
/// has not moved on since the last create.
pub(super) fn next_id(existing: &[Quest]) -> i64 {
    let now = Utc::now().timestamp_millis();
    match existing.iter().map(|q| q.id).max() {
        Some(max) if max >= now => max + 1,
        _ => now,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quest::QuestStatus;

    fn quest_with_id(id: i64) -> Quest {
        Quest {
            id,
            title: "q".to_string(),
            description: None,
            difficulty: None,
            scheduled: None,
            status: QuestStatus::Draft,
        }
    }

    #[test]
    fn uses_clock_for_an_empty_list() {
        let before = Utc::now().timestamp_millis();
        let id = next_id(&[]);
        assert!(id >= before);
    }

    #[test]
    fn skips_past_ids_from_the_future() {
        let future = Utc::now().timestamp_millis() + 60_000;
        assert_eq!(next_id(&[quest_with_id(5), quest_with_id(future)]), future + 1);
    }
}
