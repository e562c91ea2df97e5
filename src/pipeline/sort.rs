//! Sorting stage and shared comparators

use std::cmp::Ordering;
use super::{Record, SortDirection, SortState};

/// Stable sort of the visible records by the active key
pub fn sort_records<R: Record>(records: &mut [&R], state: SortState<R::SortKey>) {
    records.sort_by(|a, b| {
        let ordering = a.compare_by(b, state.key);
        match state.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}

/// Case-insensitive text ordering
pub fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Optional text ordering; missing values first
pub fn compare_optional_text(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => compare_text(a, b),
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
    }
}

/// Optional amount ordering; missing values first
pub fn compare_amount(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Maintenance;
    use crate::pipeline::MaintenanceSortKey;

    fn record(id: i64, priority: &str) -> Maintenance {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "title": format!("Task {}", id),
            "maintenance_type": "preventive",
            "priority": priority,
            "status": "scheduled",
            "scheduled_date": "2024-05-10",
        }))
        .unwrap()
    }

    #[test]
    fn test_priority_sort_uses_rank_table() {
        let records = vec![record(1, "low"), record(2, "critical"), record(3, "medium")];
        let mut visible: Vec<&Maintenance> = records.iter().collect();
        sort_records(
            &mut visible,
            SortState { key: MaintenanceSortKey::Priority, direction: SortDirection::Descending },
        );
        let priorities: Vec<&str> = visible.iter().map(|m| m.priority.as_str()).collect();
        assert_eq!(priorities, vec!["critical", "medium", "low"]);
    }

    #[test]
    fn test_sort_is_stable() {
        let records = vec![record(1, "high"), record(2, "low"), record(3, "high"), record(4, "high")];
        let mut visible: Vec<&Maintenance> = records.iter().collect();
        sort_records(
            &mut visible,
            SortState { key: MaintenanceSortKey::Priority, direction: SortDirection::Descending },
        );
        let ids: Vec<i64> = visible.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 3, 4, 2]);
    }

    #[test]
    fn test_missing_values_sort_first() {
        assert_eq!(compare_amount(None, Some(1.0)), Ordering::Less);
        assert_eq!(compare_optional_text(Some("a"), None), Ordering::Greater);
        assert_eq!(compare_text("apple", "Banana"), Ordering::Less);
    }
}
