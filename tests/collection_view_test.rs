//! List screen scenarios: fetch, narrow, sort and summarise

mod helpers;

use helpers::*;
use pretty_assertions::assert_eq;
use serde_json::json;

use CourtDesk::models::{CourtPricing, Event, Maintenance, PricingPromotion};
use CourtDesk::pipeline::{
    CategoryFilter, CriteriaAction, DateFilter, EventField, EventSortKey, EventStats, MaintenanceSortKey,
    PricingStats,
};
use CourtDesk::state::{ListView, NotificationLevel, Redirect};

#[test]
fn test_event_stats_over_five_statuses() {
    let events = vec![
        event(1, "A", "upcoming", "2024-06-01"),
        event(2, "B", "upcoming", "2024-06-02"),
        event(3, "C", "ongoing", "2024-05-30"),
        event(4, "D", "completed", "2024-05-01"),
        event(5, "E", "cancelled", "2024-05-05"),
    ];

    let stats = EventStats::from_records(&events);
    assert_eq!(stats.total_events, 5);
    assert_eq!(stats.upcoming_events, 2);
    assert_eq!(stats.ongoing_events, 1);
    assert_eq!(stats.completed_events, 1);
    assert_eq!(stats.cancelled_events, 1);
}

#[test]
fn test_today_filter_excludes_yesterday() {
    let mut view = ListView::<Event>::default();
    view.finish_loading(Ok(vec![
        event(1, "Yesterday's drills", "completed", "2024-06-11"),
        event(2, "Today's ladder", "ongoing", "2024-06-12"),
        event(3, "Late entry", "ongoing", "2024-06-12T19:00:00"),
    ]));

    view.dispatch(CriteriaAction::SetDate(DateFilter::parse("today")));
    let ids: Vec<i64> = view.visible(date(2024, 6, 12)).iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![2, 3]);
}

#[test]
fn test_week_filter_runs_monday_to_sunday() {
    let mut view = ListView::<Event>::default();
    view.finish_loading(Ok(vec![
        event(1, "Sunday before", "completed", "2024-06-09"),
        event(2, "Monday", "upcoming", "2024-06-10"),
        event(3, "Sunday", "upcoming", "2024-06-16"),
        event(4, "Next Monday", "upcoming", "2024-06-17"),
        event(5, "Bad date", "upcoming", "next week"),
    ]));

    view.dispatch(CriteriaAction::SetDate(DateFilter::parse("this-week")));
    let ids: Vec<i64> = view.visible(date(2024, 6, 12)).iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![2, 3]);
}

#[test]
fn test_non_ascii_digit_dates_never_match() {
    let mut view = ListView::<Event>::default();
    view.finish_loading(Ok(vec![
        event(1, "Arabic digits", "upcoming", "٢٠٢٤-٠٦-١٢"),
        event(2, "Fullwidth digits", "upcoming", "２０２４-０６-１２"),
        event(3, "Today's ladder", "ongoing", "2024-06-12"),
    ]));

    for filter in ["today", "this-week", "this-month", "past", "future", "2024-06-12"] {
        view.dispatch(CriteriaAction::SetDate(DateFilter::parse(filter)));
        let ids: Vec<i64> = view.visible(date(2024, 6, 12)).iter().map(|e| e.id).collect();
        assert!(!ids.contains(&1) && !ids.contains(&2), "filter {} matched {:?}", filter, ids);
    }

    view.dispatch(CriteriaAction::SetDate(DateFilter::parse("all")));
    assert_eq!(view.visible(date(2024, 6, 12)).len(), 3);
}

#[test]
fn test_priority_descending() {
    let mut view = ListView::<Maintenance>::default();
    view.finish_loading(Ok(vec![
        maintenance(1, "Low", "scheduled", "low"),
        maintenance(2, "Critical", "scheduled", "critical"),
        maintenance(3, "Medium", "scheduled", "medium"),
    ]));

    view.dispatch(CriteriaAction::SortBy(MaintenanceSortKey::Priority));
    view.dispatch(CriteriaAction::SortBy(MaintenanceSortKey::Priority));
    let priorities: Vec<&str> = view.visible(date(2024, 6, 12)).iter().map(|m| m.priority.as_str()).collect();
    assert_eq!(priorities, vec!["critical", "medium", "low"]);
}

#[test]
fn test_search_respects_accents() {
    let mut view = ListView::<Event>::default();
    let mut hall = event(1, "Evening social", "upcoming", "2024-06-20");
    hall.venue_name = Some("Sân cầu lông Phú Thọ".to_string());
    view.finish_loading(Ok(vec![hall, event(2, "Morning drills", "upcoming", "2024-06-21")]));

    view.dispatch(CriteriaAction::SetSearch("san".to_string()));
    assert!(view.visible(date(2024, 6, 12)).is_empty());

    view.dispatch(CriteriaAction::SetSearch("SÂN".to_string()));
    let ids: Vec<i64> = view.visible(date(2024, 6, 12)).iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![1]);
}

#[test]
fn test_combined_criteria_and_reset() {
    let mut view = ListView::<Event>::default();
    let mut tournament = event(3, "City open", "upcoming", "2024-06-22");
    tournament.event_type = serde_json::from_value(json!("tournament")).unwrap();
    tournament.venue = None;
    view.finish_loading(Ok(vec![
        event(1, "Doubles night", "upcoming", "2024-06-14"),
        event(2, "Doubles cup", "completed", "2024-05-14"),
        tournament,
    ]));

    view.dispatch(CriteriaAction::SetSearch("doubles".to_string()));
    view.dispatch(CriteriaAction::SetFilter(EventField::Status, CategoryFilter::parse("upcoming")));
    let ids: Vec<i64> = view.visible(date(2024, 6, 12)).iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![1]);

    view.dispatch(CriteriaAction::Reset);
    view.dispatch(CriteriaAction::SetFilter(EventField::Venue, CategoryFilter::parse("none")));
    let ids: Vec<i64> = view.visible(date(2024, 6, 12)).iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![3]);

    view.dispatch(CriteriaAction::ClearFilter(EventField::Venue));
    view.dispatch(CriteriaAction::SortBy(EventSortKey::StartDate));
    let ids: Vec<i64> = view.visible(date(2024, 6, 12)).iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![2, 1, 3]);
}

#[test]
fn test_pricing_stats_over_catalog() {
    let prices: Vec<CourtPricing> = serde_json::from_value(json!([
        court_pricing_json(1, "Court 1", 80000.0, false),
        court_pricing_json(2, "Court 2", 120000.0, true),
        {
            "id": 3, "court_name": "Court 3", "start_time": "06:00", "end_time": "17:00",
            "price_per_hour": 10000.0, "is_active": false
        },
    ]))
    .unwrap();
    let promotions: Vec<PricingPromotion> = serde_json::from_value(json!([
        promotion_json(1, "Early bird", "2024-06-01", "2024-06-30"),
        promotion_json(2, "Spring", "2024-03-01", "2024-05-31"),
    ]))
    .unwrap();

    let stats = PricingStats::from_records(&prices, &promotions, "2024-06-12");
    assert_eq!(stats.court_prices, 3);
    assert_eq!(stats.active_court_prices, 2);
    assert_eq!(stats.peak_hour_prices, 1);
    assert_eq!(stats.min_hourly_price, Some(80000.0));
    assert_eq!(stats.max_hourly_price, Some(120000.0));
    assert_eq!(stats.average_hourly_price, Some(100000.0));
    assert_eq!(stats.active_promotions, 1);
}

#[tokio::test]
async fn test_fetched_list_feeds_the_view() {
    let mock = ApiMockServer::new().await;
    mock.mock_get(
        "maintenance/",
        json!({
            "count": 3, "next": null, "previous": null,
            "results": [
                maintenance_json(1, "Replace nets", "scheduled", "medium"),
                maintenance_json(2, "Fix leak", "overdue", "critical"),
                maintenance_json(3, "Paint lines", "completed", "low"),
            ]
        }),
    )
    .await;

    let services = mock.services();
    let mut view = ListView::<Maintenance>::default();
    let notification = view.finish_loading(services.maintenance_service.list().await);
    assert!(notification.is_none());

    view.dispatch(CriteriaAction::SetSearch("fix".to_string()));
    let visible = view.visible(date(2024, 6, 12));
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].title, "Fix leak");
}

#[tokio::test]
async fn test_failed_fetch_leaves_empty_list_and_notifies() {
    let mock = ApiMockServer::new().await;
    mock.mock_error("GET", "events/", 401, None).await;

    let services = mock.services();
    let mut view = ListView::<Event>::default();
    view.finish_loading(Ok(vec![event(1, "Stale", "upcoming", "2024-06-20")]));

    view.begin_loading();
    let notification = view
        .finish_loading(services.event_service.list_events().await)
        .expect("notification");

    assert!(view.records().is_empty());
    assert_eq!(notification.level, NotificationLevel::Warning);
    assert_eq!(notification.redirect, Some(Redirect::Login));
}
