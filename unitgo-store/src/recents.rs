//! Recent conversion history

use std::time::{SystemTime, UNIX_EPOCH};
use serde::{Serialize, Deserialize};

/// Most-recent entries kept per store
pub const MAX_RECENTS: usize = 10;

/// One recorded conversion. `value` is the source input; `result` is
/// the converted numeric value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentConversion {
    pub from_unit_id: String,
    pub to_unit_id: String,
    pub value: f64,
    pub result: f64,
    /// Unix seconds at recording time
    pub timestamp: u64,
}

impl RecentConversion {
    /// Record a conversion with the current timestamp
    pub fn new(from_unit_id: &str, to_unit_id: &str, value: f64, result: f64) -> Self {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();
        RecentConversion {
            from_unit_id: from_unit_id.to_string(),
            to_unit_id: to_unit_id.to_string(),
            value,
            result,
            timestamp,
        }
    }

    fn same_pair(&self, other: &RecentConversion) -> bool {
        self.from_unit_id == other.from_unit_id && self.to_unit_id == other.to_unit_id
    }
}

/// Bounded most-recent-first list, deduplicated by unit pair
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecentList {
    entries: Vec<RecentConversion>,
}

impl RecentList {
    pub fn new() -> Self {
        RecentList { entries: Vec::new() }
    }

    /// Insert at the front, replacing any older entry for the same
    /// unit pair, and drop entries beyond the cap.
    pub fn add(&mut self, record: RecentConversion) {
        self.entries.retain(|r| !r.same_pair(&record));
        self.entries.insert(0, record);
        self.entries.truncate(MAX_RECENTS);
    }

    pub fn entries(&self) -> &[RecentConversion] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(from: &str, to: &str, value: f64) -> RecentConversion {
        RecentConversion::new(from, to, value, value * 2.0)
    }

    #[test]
    fn test_inserts_at_front() {
        let mut recents = RecentList::new();
        recents.add(record("m", "ft", 1.0));
        recents.add(record("kg", "lb", 2.0));

        assert_eq!(recents.entries()[0].from_unit_id, "kg");
        assert_eq!(recents.entries()[1].from_unit_id, "m");
    }

    #[test]
    fn test_dedup_by_unit_pair() {
        let mut recents = RecentList::new();
        recents.add(record("m", "ft", 1.0));
        recents.add(record("kg", "lb", 2.0));
        recents.add(record("m", "ft", 3.0));

        assert_eq!(recents.len(), 2);
        assert_eq!(recents.entries()[0].from_unit_id, "m");
        assert_eq!(recents.entries()[0].value, 3.0);
    }

    #[test]
    fn test_reverse_pair_is_distinct() {
        let mut recents = RecentList::new();
        recents.add(record("m", "ft", 1.0));
        recents.add(record("ft", "m", 2.0));
        assert_eq!(recents.len(), 2);
    }

    #[test]
    fn test_cap() {
        let mut recents = RecentList::new();
        for i in 0..15 {
            recents.add(record(&format!("u{}", i), "m", i as f64));
        }
        assert_eq!(recents.len(), MAX_RECENTS);
        // Most recent survives, oldest dropped
        assert_eq!(recents.entries()[0].from_unit_id, "u14");
        assert!(!recents.entries().iter().any(|r| r.from_unit_id == "u0"));
    }

    #[test]
    fn test_serializes_as_plain_array() {
        let mut recents = RecentList::new();
        recents.add(record("m", "ft", 1.0));
        let json = serde_json::to_string(&recents).unwrap();
        assert!(json.starts_with('['));
        let back: RecentList = serde_json::from_str(&json).unwrap();
        assert_eq!(back, recents);
    }
}
