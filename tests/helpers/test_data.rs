//! JSON fixtures in the shape the REST API returns

use chrono::NaiveDate;
use serde_json::{json, Value};

use CourtDesk::models::{Event, Maintenance};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub fn event_json(id: i64, title: &str, status: &str, start_date: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "description": format!("{} description", title),
        "start_date": start_date,
        "start_time": "18:00:00",
        "end_time": "21:00:00",
        "status": status,
        "event_type": "social",
        "max_participants": 24,
        "current_participants": 10,
        "is_public": true,
        "venue": 1,
        "venue_name": "Riverside Sports Hall",
    })
}

pub fn event(id: i64, title: &str, status: &str, start_date: &str) -> Event {
    serde_json::from_value(event_json(id, title, status, start_date)).expect("event fixture")
}

pub fn maintenance_json(id: i64, title: &str, status: &str, priority: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "maintenance_type": "preventive",
        "priority": priority,
        "status": status,
        "scheduled_date": "2024-06-10",
        "estimated_cost": 500000.0,
        "venue": 1,
        "venue_name": "Riverside Sports Hall",
        "court": 3,
        "court_name": "Court 3",
    })
}

pub fn maintenance(id: i64, title: &str, status: &str, priority: &str) -> Maintenance {
    serde_json::from_value(maintenance_json(id, title, status, priority)).expect("maintenance fixture")
}

pub fn participant_json(id: i64, name: &str, status: &str) -> Value {
    json!({
        "id": id,
        "event": 1,
        "user": 100 + id,
        "user_name": name,
        "user_email": format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        "status": status,
        "registered_at": "2024-05-01T09:30:00Z",
    })
}

pub fn court_pricing_json(id: i64, court_name: &str, price: f64, peak: bool) -> Value {
    json!({
        "id": id,
        "court": id,
        "court_name": court_name,
        "venue_name": "Riverside Sports Hall",
        "sport_type": "badminton",
        "day_of_week": null,
        "start_time": if peak { "17:00:00" } else { "06:00:00" },
        "end_time": if peak { "21:00:00" } else { "17:00:00" },
        "price_per_hour": price,
        "is_peak_hour": peak,
        "is_active": true,
    })
}

pub fn promotion_json(id: i64, title: &str, start_date: &str, end_date: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "discount_type": "percentage",
        "discount_value": 10.0,
        "start_date": start_date,
        "end_date": end_date,
        "is_active": true,
    })
}
