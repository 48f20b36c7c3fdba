//! Record Entity
//!
//! One user-entered title/description pair. Records are immutable once
//! created; the list only ever gains or loses whole records.

use serde::{Deserialize, Serialize};

/// A persisted item, stored verbatim as `{ "id", "title", "description" }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Unique within the list
    pub id: String,
    pub title: String,
    pub description: String,
}

impl Record {
    pub fn new(id: impl Into<String>, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Allocate a time-based id (Unix millis) that no record in `existing` uses
pub fn next_record_id(existing: &[Record]) -> String {
    next_record_id_at(chrono::Utc::now().timestamp_millis(), existing)
}

fn next_record_id_at(now_ms: i64, existing: &[Record]) -> String {
    let in_use = |id: &str| existing.iter().any(|record| record.id == id);

    let candidate = now_ms.to_string();
    if !in_use(candidate.as_str()) {
        return candidate;
    }

    // Same millisecond (or clock went backwards): step past the largest numeric id
    let largest = existing
        .iter()
        .filter_map(|record| record.id.parse::<i64>().ok())
        .max()
        .unwrap_or(now_ms)
        .max(now_ms);
    if let Some(next) = largest.checked_add(1) {
        return next.to_string();
    }

    // Numeric space exhausted by foreign data
    (1..)
        .map(|n: u64| format!("{}-{}", now_ms, n))
        .find(|id| !in_use(id.as_str()))
        .unwrap_or(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_creation() {
        let record = Record::new("1", "Milk", "2L");
        assert_eq!(record.id, "1");
        assert_eq!(record.title, "Milk");
        assert_eq!(record.description, "2L");
    }

    #[test]
    fn test_record_json_shape() {
        let record = Record::new("1700000000000", "Milk", "2L");
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"id":"1700000000000","title":"Milk","description":"2L"}"#);
    }

    #[test]
    fn test_id_is_clock_millis_when_free() {
        assert_eq!(next_record_id_at(1_700_000_000_000, &[]), "1700000000000");
    }

    #[test]
    fn test_id_collision_steps_forward() {
        let existing = vec![
            Record::new("1700000000000", "a", "b"),
            Record::new("1700000000001", "c", "d"),
        ];
        assert_eq!(next_record_id_at(1_700_000_000_000, &existing), "1700000000002");
    }

    #[test]
    fn test_id_collision_ignores_foreign_ids() {
        let existing = vec![
            Record::new("5", "a", "b"),
            Record::new("not-a-number", "c", "d"),
        ];
        assert_eq!(next_record_id_at(5, &existing), "6");
    }

    #[test]
    fn test_id_collision_at_numeric_limit_uses_suffix() {
        let existing = vec![
            Record::new(i64::MAX.to_string(), "a", "b"),
            Record::new("5", "c", "d"),
            Record::new("5-1", "e", "f"),
        ];
        let id = next_record_id_at(5, &existing);
        assert_eq!(id, "5-2");
        assert!(existing.iter().all(|r| r.id != id));
    }

    #[test]
    fn test_consecutive_ids_are_unique() {
        let mut records = Vec::new();
        for n in 0..50 {
            let id = next_record_id(&records);
            assert!(records.iter().all(|r: &Record| r.id != id));
            records.push(Record::new(id, format!("t{}", n), "d"));
        }
        assert_eq!(records.len(), 50);
    }
}
