//! Search, filter and sort criteria held by a list screen

use chrono::NaiveDate;
use crate::utils::helpers::{date_part, iso_date, month_prefix, week_bounds};

/// Complete set of criteria for one list screen
///
/// `F` names the categorical fields a screen can filter on and `K` the keys
/// it can sort by.
#[derive(Debug, Clone, PartialEq)]
pub struct Criteria<F, K> {
    pub search: String,
    pub filters: Vec<(F, CategoryFilter)>,
    pub date: DateFilter,
    pub sort: Option<SortState<K>>,
}

impl<F, K> Default for Criteria<F, K> {
    fn default() -> Self {
        Self {
            search: String::new(),
            filters: Vec::new(),
            date: DateFilter::All,
            sort: None,
        }
    }
}

/// A single change made from the screen controls
#[derive(Debug, Clone, PartialEq)]
pub enum CriteriaAction<F, K> {
    SetSearch(String),
    SetFilter(F, CategoryFilter),
    ClearFilter(F),
    SetDate(DateFilter),
    /// Select a sort column; selecting the active column flips direction
    SortBy(K),
    Reset,
}

impl<F: Copy + PartialEq, K: Copy + PartialEq> Criteria<F, K> {
    /// Start from default criteria with an initial sort
    pub fn sorted_by(key: K, direction: SortDirection) -> Self {
        Self {
            sort: Some(SortState { key, direction }),
            ..Self::default()
        }
    }

    /// Apply one action, producing the next criteria
    pub fn reduce(mut self, action: CriteriaAction<F, K>) -> Self {
        match action {
            CriteriaAction::SetSearch(term) => self.search = term,
            CriteriaAction::SetFilter(field, filter) => {
                self.filters.retain(|(f, _)| *f != field);
                if filter != CategoryFilter::All {
                    self.filters.push((field, filter));
                }
            }
            CriteriaAction::ClearFilter(field) => self.filters.retain(|(f, _)| *f != field),
            CriteriaAction::SetDate(date) => self.date = date,
            CriteriaAction::SortBy(key) => self.sort = Some(SortState::select(self.sort, key)),
            CriteriaAction::Reset => return Self::default(),
        }
        self
    }

    /// Active filter for `field`
    pub fn filter_for(&self, field: F) -> &CategoryFilter {
        self.filters
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, filter)| filter)
            .unwrap_or(&CategoryFilter::All)
    }

    /// Whether nothing narrows the list
    pub fn is_unconstrained(&self) -> bool {
        self.search.is_empty()
            && self.filters.iter().all(|(_, filter)| *filter == CategoryFilter::All)
            && self.date == DateFilter::All
    }
}

/// Equality filter on one categorical field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    /// The `all` sentinel: no constraint
    All,
    /// The `unassigned`/`none` sentinel: the field must be absent
    Unassigned,
    Equals(String),
}

impl CategoryFilter {
    /// Parse a select-box value, honouring the sentinels
    pub fn parse(value: &str) -> Self {
        match value {
            "" | "all" => CategoryFilter::All,
            "unassigned" | "none" => CategoryFilter::Unassigned,
            other => CategoryFilter::Equals(other.to_string()),
        }
    }

    pub fn matches(&self, value: Option<&str>) -> bool {
        let value = value.filter(|v| !v.is_empty());
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Unassigned => value.is_none(),
            CategoryFilter::Equals(expected) => value == Some(expected.as_str()),
        }
    }
}

/// Date constraint applied to a record's primary date
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateFilter {
    All,
    /// Exact `YYYY-MM-DD` match
    On(String),
    Today,
    ThisWeek,
    ThisMonth,
    Past,
    Future,
}

impl DateFilter {
    /// Parse a filter control value; anything unrecognised is an exact date
    pub fn parse(value: &str) -> Self {
        match value {
            "" | "all" => DateFilter::All,
            "today" => DateFilter::Today,
            "this-week" | "this_week" | "week" => DateFilter::ThisWeek,
            "this-month" | "this_month" | "month" => DateFilter::ThisMonth,
            "past" => DateFilter::Past,
            "future" | "upcoming" => DateFilter::Future,
            exact => DateFilter::On(exact.to_string()),
        }
    }

    /// Fix the filter against a reference day
    pub fn resolve(&self, today: NaiveDate) -> DateWindow {
        match self {
            DateFilter::All => DateWindow::Any,
            DateFilter::On(date) => DateWindow::Exactly(date.clone()),
            DateFilter::Today => DateWindow::Exactly(iso_date(today)),
            DateFilter::ThisWeek => {
                let (start, end) = week_bounds(today);
                DateWindow::Between(iso_date(start), iso_date(end))
            }
            DateFilter::ThisMonth => DateWindow::InMonth(month_prefix(today)),
            DateFilter::Past => DateWindow::Before(iso_date(today)),
            DateFilter::Future => DateWindow::After(iso_date(today)),
        }
    }
}

/// A date filter resolved to concrete ISO bounds
///
/// All comparisons are lexical on `YYYY-MM-DD` strings. Record dates that do
/// not start with that shape never match a constrained window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateWindow {
    Any,
    Exactly(String),
    Between(String, String),
    InMonth(String),
    Before(String),
    After(String),
}

impl DateWindow {
    pub fn contains(&self, date: Option<&str>) -> bool {
        if *self == DateWindow::Any {
            return true;
        }
        let Some(day) = date.and_then(date_part) else {
            return false;
        };
        match self {
            DateWindow::Any => true,
            DateWindow::Exactly(expected) => day == expected,
            DateWindow::Between(start, end) => start.as_str() <= day && day <= end.as_str(),
            DateWindow::InMonth(prefix) => day.starts_with(prefix.as_str()),
            DateWindow::Before(bound) => day < bound.as_str(),
            DateWindow::After(bound) => day > bound.as_str(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn reversed(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState<K> {
    pub key: K,
    pub direction: SortDirection,
}

impl<K: Copy + PartialEq> SortState<K> {
    /// Next sort after the user picks `key`
    pub fn select(current: Option<SortState<K>>, key: K) -> Self {
        match current {
            Some(state) if state.key == key => SortState {
                key,
                direction: state.direction.reversed(),
            },
            _ => SortState {
                key,
                direction: SortDirection::Ascending,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Field {
        Status,
        Venue,
    }

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Key {
        Title,
        Date,
    }

    type TestCriteria = Criteria<Field, Key>;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_category_filter_sentinels() {
        assert_eq!(CategoryFilter::parse("all"), CategoryFilter::All);
        assert_eq!(CategoryFilter::parse(""), CategoryFilter::All);
        assert_eq!(CategoryFilter::parse("unassigned"), CategoryFilter::Unassigned);
        assert_eq!(CategoryFilter::parse("none"), CategoryFilter::Unassigned);

        let unassigned = CategoryFilter::Unassigned;
        assert!(unassigned.matches(None));
        assert!(unassigned.matches(Some("")));
        assert!(!unassigned.matches(Some("4")));

        let equals = CategoryFilter::parse("scheduled");
        assert!(equals.matches(Some("scheduled")));
        assert!(!equals.matches(Some("completed")));
        assert!(!equals.matches(None));
    }

    #[test]
    fn test_set_filter_replaces_and_all_removes() {
        let criteria = TestCriteria::default()
            .reduce(CriteriaAction::SetFilter(Field::Status, CategoryFilter::parse("scheduled")))
            .reduce(CriteriaAction::SetFilter(Field::Venue, CategoryFilter::Unassigned))
            .reduce(CriteriaAction::SetFilter(Field::Status, CategoryFilter::parse("overdue")));
        assert_eq!(criteria.filters.len(), 2);
        assert_eq!(criteria.filter_for(Field::Status), &CategoryFilter::Equals("overdue".to_string()));

        let criteria = criteria.reduce(CriteriaAction::SetFilter(Field::Status, CategoryFilter::All));
        assert_eq!(criteria.filter_for(Field::Status), &CategoryFilter::All);
        assert_eq!(criteria.filters.len(), 1);

        let criteria = criteria.reduce(CriteriaAction::ClearFilter(Field::Venue));
        assert!(criteria.is_unconstrained());
    }

    #[test]
    fn test_sort_toggles_on_same_key() {
        let criteria = TestCriteria::default().reduce(CriteriaAction::SortBy(Key::Title));
        assert_eq!(criteria.sort.unwrap().direction, SortDirection::Ascending);

        let criteria = criteria.reduce(CriteriaAction::SortBy(Key::Title));
        assert_eq!(criteria.sort.unwrap().direction, SortDirection::Descending);

        let criteria = criteria.reduce(CriteriaAction::SortBy(Key::Date));
        assert_eq!(
            criteria.sort,
            Some(SortState { key: Key::Date, direction: SortDirection::Ascending })
        );
    }

    #[test]
    fn test_reset_clears_everything() {
        let criteria = TestCriteria::sorted_by(Key::Date, SortDirection::Descending)
            .reduce(CriteriaAction::SetSearch("court".to_string()))
            .reduce(CriteriaAction::SetDate(DateFilter::Today))
            .reduce(CriteriaAction::Reset);
        assert_eq!(criteria, TestCriteria::default());
    }

    #[test]
    fn test_date_filter_parse() {
        assert_eq!(DateFilter::parse("all"), DateFilter::All);
        assert_eq!(DateFilter::parse("this-week"), DateFilter::ThisWeek);
        assert_eq!(DateFilter::parse("month"), DateFilter::ThisMonth);
        assert_eq!(DateFilter::parse("2024-05-01"), DateFilter::On("2024-05-01".to_string()));
    }

    #[test]
    fn test_today_window() {
        let window = DateFilter::Today.resolve(day(2024, 5, 10));
        assert!(window.contains(Some("2024-05-10")));
        assert!(window.contains(Some("2024-05-10T18:00:00Z")));
        assert!(!window.contains(Some("2024-05-09")));
        assert!(!window.contains(None));
    }

    #[test]
    fn test_week_and_month_windows() {
        // Friday
        let today = day(2024, 5, 10);
        let week = DateFilter::ThisWeek.resolve(today);
        assert!(week.contains(Some("2024-05-06")));
        assert!(week.contains(Some("2024-05-12")));
        assert!(!week.contains(Some("2024-05-05")));
        assert!(!week.contains(Some("2024-05-13")));

        let month = DateFilter::ThisMonth.resolve(today);
        assert!(month.contains(Some("2024-05-31")));
        assert!(!month.contains(Some("2024-06-01")));
    }

    #[test]
    fn test_past_and_future_exclude_today() {
        let today = day(2024, 5, 10);
        let past = DateFilter::Past.resolve(today);
        let future = DateFilter::Future.resolve(today);
        assert!(past.contains(Some("2024-05-09")));
        assert!(!past.contains(Some("2024-05-10")));
        assert!(future.contains(Some("2024-05-11")));
        assert!(!future.contains(Some("2024-05-10")));
    }

    #[test]
    fn test_malformed_dates_never_match() {
        let today = day(2024, 5, 10);
        for filter in [DateFilter::Today, DateFilter::Past, DateFilter::Future, DateFilter::ThisMonth] {
            assert!(!filter.resolve(today).contains(Some("10/05/2024")));
            assert!(!filter.resolve(today).contains(Some("")));
        }
        assert!(DateFilter::All.resolve(today).contains(Some("garbage")));
    }
}
