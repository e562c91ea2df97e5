//! Event model

use serde::{Deserialize, Serialize};
use chrono::NaiveDate;
use crate::utils::helpers::{date_part, iso_date};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub start_date: String,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(default)]
    pub max_participants: Option<u32>,
    #[serde(default)]
    pub current_participants: u32,
    pub status: EventStatus,
    pub event_type: EventType,
    #[serde(default)]
    pub is_public: bool,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub venue: Option<i64>,
    #[serde(default)]
    pub venue_name: Option<String>,
    #[serde(default)]
    pub court: Option<i64>,
    #[serde(default)]
    pub court_name: Option<String>,
    #[serde(default)]
    pub organizer: Option<i64>,
    #[serde(default)]
    pub organizer_name: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub registration_fee: Option<f64>,
}

impl Event {
    /// Last day of the event; single-day events end on their start date
    pub fn last_day(&self) -> &str {
        self.end_date.as_deref().unwrap_or(&self.start_date)
    }

    /// Free places left, `None` when capacity is unlimited
    pub fn remaining_places(&self) -> Option<u32> {
        self.max_participants
            .map(|max| max.saturating_sub(self.current_participants))
    }

    /// Whether registration capacity has been reached
    pub fn is_full(&self) -> bool {
        self.remaining_places() == Some(0)
    }

    /// Status implied by the event dates relative to `today`
    ///
    /// Cancelled events stay cancelled. Dates are compared as ISO strings;
    /// an event with a malformed start date keeps its current status.
    pub fn derived_status(&self, today: NaiveDate) -> EventStatus {
        if self.status == EventStatus::Cancelled {
            return EventStatus::Cancelled;
        }

        let today = iso_date(today);
        let Some(start) = date_part(&self.start_date) else {
            return self.status;
        };
        let end = date_part(self.last_day()).unwrap_or(start);

        if today.as_str() < start {
            EventStatus::Upcoming
        } else if today.as_str() > end {
            EventStatus::Completed
        } else {
            EventStatus::Ongoing
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventStatus {
    Upcoming,
    Ongoing,
    Completed,
    Cancelled,
    #[serde(other)]
    Unknown,
}

impl EventStatus {
    pub const ALL: [EventStatus; 4] = [
        EventStatus::Upcoming,
        EventStatus::Ongoing,
        EventStatus::Completed,
        EventStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventStatus::Upcoming => "upcoming",
            EventStatus::Ongoing => "ongoing",
            EventStatus::Completed => "completed",
            EventStatus::Cancelled => "cancelled",
            EventStatus::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    Tournament,
    Training,
    Social,
    League,
    #[serde(other)]
    Other,
}

impl EventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Tournament => "tournament",
            EventType::Training => "training",
            EventType::Social => "social",
            EventType::League => "league",
            EventType::Other => "other",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventParticipant {
    pub id: i64,
    pub event: i64,
    pub user: i64,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub user_email: Option<String>,
    pub status: ParticipantStatus,
    pub registered_at: String,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParticipantStatus {
    Registered,
    Confirmed,
    Attended,
    Cancelled,
    #[serde(other)]
    Unknown,
}

impl ParticipantStatus {
    pub const ALL: [ParticipantStatus; 4] = [
        ParticipantStatus::Registered,
        ParticipantStatus::Confirmed,
        ParticipantStatus::Attended,
        ParticipantStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ParticipantStatus::Registered => "registered",
            ParticipantStatus::Confirmed => "confirmed",
            ParticipantStatus::Attended => "attended",
            ParticipantStatus::Cancelled => "cancelled",
            ParticipantStatus::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateEventRequest {
    pub title: String,
    pub description: Option<String>,
    pub start_date: String,
    pub end_date: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub max_participants: Option<u32>,
    pub event_type: Option<EventType>,
    pub is_public: bool,
    pub is_featured: bool,
    pub venue: Option<i64>,
    pub court: Option<i64>,
    pub registration_fee: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateEventRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_participants: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<EventStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_public: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_featured: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterParticipantRequest {
    pub user: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
