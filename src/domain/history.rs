use std::collections::{BTreeSet, HashMap};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub analysis_id: i64,
    pub date: NaiveDate,
    pub skin_type: String,
    pub summary: String,
}

/// Collapses the history to one entry per distinct date. Dates keep their
/// first-seen order; when a date repeats, the most recently seen entry wins.
pub fn latest_per_date(entries: &[HistoryEntry]) -> Vec<HistoryEntry> {
    let mut order: Vec<NaiveDate> = Vec::new();
    let mut by_date: HashMap<NaiveDate, HistoryEntry> = HashMap::new();
    for entry in entries {
        if !by_date.contains_key(&entry.date) {
            order.push(entry.date);
        }
        by_date.insert(entry.date, entry.clone());
    }
    order
        .into_iter()
        .filter_map(|date| by_date.remove(&date))
        .collect()
}

/// All entries recorded on the given date, in their original order.
pub fn entries_on(entries: &[HistoryEntry], date: NaiveDate) -> Vec<HistoryEntry> {
    entries.iter().filter(|e| e.date == date).cloned().collect()
}

/// What the calendar list shows: everything for the selected date, or the
/// per-date latest entries when nothing is selected.
pub fn visible_entries(entries: &[HistoryEntry], selected: Option<NaiveDate>) -> Vec<HistoryEntry> {
    match selected {
        Some(date) => entries_on(entries, date),
        None => latest_per_date(entries),
    }
}

/// Distinct dates carrying at least one entry, for calendar marking.
pub fn dates_with_entries(entries: &[HistoryEntry]) -> BTreeSet<NaiveDate> {
    entries.iter().map(|e| e.date).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: i64, date: &str) -> HistoryEntry {
        HistoryEntry {
            analysis_id: id,
            date: date.parse().unwrap(),
            skin_type: "DRY".to_string(),
            summary: format!("analysis {id}"),
        }
    }

    #[test]
    fn no_selection_shows_one_entry_per_date() {
        let entries = vec![
            entry(1, "2025-01-01"),
            entry(2, "2025-01-01"),
            entry(3, "2025-01-02"),
        ];
        let visible = visible_entries(&entries, None);
        assert_eq!(visible.len(), 2);
        // the later duplicate replaces the earlier one for its date
        assert_eq!(visible[0].analysis_id, 2);
        assert_eq!(visible[1].analysis_id, 3);
    }

    #[test]
    fn selection_shows_every_entry_of_that_date() {
        let entries = vec![
            entry(1, "2025-01-01"),
            entry(2, "2025-01-01"),
            entry(3, "2025-01-02"),
        ];
        let selected = "2025-01-01".parse().ok();
        let visible = visible_entries(&entries, selected);
        assert_eq!(visible.len(), 2);
        assert_eq!(visible[0].analysis_id, 1);
        assert_eq!(visible[1].analysis_id, 2);
    }

    #[test]
    fn selection_with_no_entries_is_empty() {
        let entries = vec![entry(1, "2025-01-01")];
        let visible = visible_entries(&entries, "2025-03-03".parse().ok());
        assert!(visible.is_empty());
    }

    #[test]
    fn dates_keep_first_seen_order_under_duplicates() {
        let entries = vec![
            entry(1, "2025-01-02"),
            entry(2, "2025-01-01"),
            entry(3, "2025-01-02"),
        ];
        let visible = latest_per_date(&entries);
        assert_eq!(visible.len(), 2);
        assert_eq!(visible[0].analysis_id, 3);
        assert_eq!(visible[1].analysis_id, 2);
    }

    #[test]
    fn marked_dates_are_distinct_and_sorted() {
        let entries = vec![
            entry(1, "2025-01-02"),
            entry(2, "2025-01-01"),
            entry(3, "2025-01-02"),
        ];
        let dates: Vec<_> = dates_with_entries(&entries).into_iter().collect();
        assert_eq!(
            dates,
            vec![
                "2025-01-01".parse::<NaiveDate>().unwrap(),
                "2025-01-02".parse::<NaiveDate>().unwrap(),
            ]
        );
    }

    #[test]
    fn wire_date_format_is_iso() {
        let json = serde_json::to_value(entry(9, "2025-01-19")).unwrap();
        assert_eq!(json["date"], "2025-01-19");
        assert_eq!(json["analysisId"], 9);
    }
}
