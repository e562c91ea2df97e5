//! State held by one list screen

use chrono::NaiveDate;
use tracing::warn;
use crate::pipeline::{self, CriteriaAction, CriteriaFor, Record};
use crate::utils::errors::Result;
use super::notification::Notification;

/// Records, criteria and loading flag for a list screen
///
/// The record list is the last successful load. Criteria changes never touch
/// it; the visible rows are recomputed from scratch by `visible`.
#[derive(Debug, Clone)]
pub struct ListView<R: Record> {
    records: Vec<R>,
    criteria: CriteriaFor<R>,
    loading: bool,
}

impl<R: Record> Default for ListView<R> {
    fn default() -> Self {
        Self::new(CriteriaFor::<R>::default())
    }
}

impl<R: Record> ListView<R> {
    /// Empty view with initial criteria, waiting for its first load
    pub fn new(criteria: CriteriaFor<R>) -> Self {
        Self {
            records: Vec::new(),
            criteria,
            loading: true,
        }
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn criteria(&self) -> &CriteriaFor<R> {
        &self.criteria
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn begin_loading(&mut self) {
        self.loading = true;
    }

    /// Apply one change from the screen controls
    pub fn dispatch(&mut self, action: CriteriaAction<R::Field, R::SortKey>) {
        let criteria = std::mem::take(&mut self.criteria);
        self.criteria = criteria.reduce(action);
    }

    /// Store the outcome of a fetch
    ///
    /// A failed fetch leaves the screen with an empty list rather than stale
    /// rows, and hands back the notification to show.
    pub fn finish_loading(&mut self, result: Result<Vec<R>>) -> Option<Notification> {
        self.loading = false;
        match result {
            Ok(records) => {
                self.records = records;
                None
            }
            Err(e) => {
                warn!(entity = R::ENTITY, error = %e, "Failed to load list");
                self.records.clear();
                Some(Notification::from_error(&e))
            }
        }
    }

    /// Replace the record with the same id, or append it
    pub fn upsert(&mut self, record: R) {
        match self.records.iter_mut().find(|r| r.id() == record.id()) {
            Some(existing) => *existing = record,
            None => self.records.push(record),
        }
    }

    /// Drop a deleted record, returning whether it was present
    pub fn remove(&mut self, id: i64) -> bool {
        let before = self.records.len();
        self.records.retain(|r| r.id() != id);
        self.records.len() != before
    }

    /// Rows to display under the current criteria
    pub fn visible(&self, today: NaiveDate) -> Vec<&R> {
        pipeline::run(&self.records, &self.criteria, today)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Maintenance;
    use crate::pipeline::{CategoryFilter, MaintenanceField, MaintenanceSortKey, SortDirection};
    use crate::state::notification::Redirect;
    use crate::utils::errors::{ApiError, CourtDeskError};

    fn maintenance(id: i64, title: &str, priority: &str) -> Maintenance {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "title": title,
            "maintenance_type": "corrective",
            "status": "scheduled",
            "priority": priority,
            "venue": 1,
            "scheduled_date": "2024-06-01",
        }))
        .unwrap()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    #[test]
    fn test_new_view_is_loading() {
        let view = ListView::<Maintenance>::default();
        assert!(view.is_loading());
        assert!(view.visible(today()).is_empty());
    }

    #[test]
    fn test_dispatch_narrows_without_touching_records() {
        let mut view = ListView::<Maintenance>::default();
        view.finish_loading(Ok(vec![
            maintenance(1, "Net repair", "low"),
            maintenance(2, "Floor sanding", "critical"),
            maintenance(3, "Light check", "high"),
        ]));

        view.dispatch(CriteriaAction::SetFilter(MaintenanceField::Priority, CategoryFilter::parse("critical")));
        assert_eq!(view.visible(today()).len(), 1);
        assert_eq!(view.records().len(), 3);

        view.dispatch(CriteriaAction::Reset);
        assert_eq!(view.visible(today()).len(), 3);
    }

    #[test]
    fn test_sort_toggle_through_dispatch() {
        let mut view = ListView::<Maintenance>::new(CriteriaFor::<Maintenance>::sorted_by(
            MaintenanceSortKey::Priority,
            SortDirection::Descending,
        ));
        view.finish_loading(Ok(vec![
            maintenance(1, "Net repair", "low"),
            maintenance(2, "Floor sanding", "critical"),
            maintenance(3, "Light check", "medium"),
        ]));

        let ids: Vec<i64> = view.visible(today()).iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);

        view.dispatch(CriteriaAction::SortBy(MaintenanceSortKey::Priority));
        let ids: Vec<i64> = view.visible(today()).iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 3, 2]);
    }

    #[test]
    fn test_failed_load_clears_list() {
        let mut view = ListView::<Maintenance>::default();
        view.finish_loading(Ok(vec![maintenance(1, "Net repair", "low")]));

        view.begin_loading();
        let notification = view
            .finish_loading(Err(CourtDeskError::Api(ApiError::Unauthorized { status: 401 })))
            .expect("notification");

        assert!(view.records().is_empty());
        assert!(!view.is_loading());
        assert_eq!(notification.redirect, Some(Redirect::Login));
    }

    #[test]
    fn test_upsert_and_remove() {
        let mut view = ListView::<Maintenance>::default();
        view.finish_loading(Ok(vec![maintenance(1, "Net repair", "low")]));

        view.upsert(maintenance(1, "Net replacement", "high"));
        view.upsert(maintenance(2, "Floor sanding", "medium"));
        assert_eq!(view.records().len(), 2);
        assert_eq!(view.records()[0].title, "Net replacement");

        assert!(view.remove(2));
        assert!(!view.remove(2));
        assert_eq!(view.records().len(), 1);
    }
}
