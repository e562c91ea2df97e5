//! Collection view pipeline
//!
//! Every list screen holds its full record list in memory and derives what it
//! shows by running filter → sort → aggregate over it. The pipeline is a pure
//! function of the records, the criteria and the reference day; the source
//! slice is never mutated and nothing is cached between runs.

pub mod criteria;
pub mod filter;
pub mod sort;
pub mod records;
pub mod stats;

pub use criteria::{Criteria, CriteriaAction, CategoryFilter, DateFilter, DateWindow, SortDirection, SortState};
pub use records::{
    EventField, EventSortKey, MaintenanceField, MaintenanceSortKey, ParticipantField, ParticipantSortKey,
    CourtPricingField, CourtPricingSortKey, ServicePricingField, ServicePricingSortKey, PromotionField,
    PromotionSortKey,
};
pub use stats::{EventStats, MaintenanceStats, ParticipantStats, PricingStats, PopularEvent};

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt::Debug;
use std::time::Instant;
use chrono::NaiveDate;
use crate::utils::logging;

/// A record that can be shown in a list screen
pub trait Record {
    /// Categorical fields usable in equality filters
    type Field: Copy + PartialEq + Debug;
    /// Columns the list can be sorted by
    type SortKey: Copy + PartialEq + Debug;

    /// Entity name used in logs and messages
    const ENTITY: &'static str;

    /// Server-assigned identity
    fn id(&self) -> i64;

    /// Text fields matched by the free-text search
    fn search_fields(&self) -> Vec<Cow<'_, str>>;

    /// Value of a categorical field; `None` means absent
    fn field_value(&self, field: Self::Field) -> Option<Cow<'_, str>>;

    /// Primary date used by date filters
    fn primary_date(&self) -> Option<&str>;

    /// Ascending comparison by one sort key
    fn compare_by(&self, other: &Self, key: Self::SortKey) -> Ordering;
}

/// Criteria type for a given record type
pub type CriteriaFor<R> = Criteria<<R as Record>::Field, <R as Record>::SortKey>;

/// Filter and sort `records`, returning references in display order
pub fn run<'a, R: Record>(records: &'a [R], criteria: &CriteriaFor<R>, today: NaiveDate) -> Vec<&'a R> {
    let started = Instant::now();

    let mut visible = filter::apply(records, criteria, today);
    if let Some(state) = criteria.sort {
        sort::sort_records(&mut visible, state);
    }

    logging::log_pipeline_run(
        R::ENTITY,
        records.len(),
        visible.len(),
        started.elapsed().as_micros() as u64,
    );
    visible
}
