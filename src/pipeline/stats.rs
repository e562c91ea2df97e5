//! Aggregation stage
//!
//! Each summary is one linear pass over whichever slice the screen passes in,
//! filtered or full.

use std::collections::BTreeMap;
use serde::Serialize;
use crate::models::{
    CourtPricing, Event, EventParticipant, EventStatus, Maintenance, MaintenanceStatus, MaintenanceType,
    ParticipantStatus, Priority, PricingPromotion,
};
use crate::utils::helpers::percentage;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PopularEvent {
    pub id: i64,
    pub title: String,
    pub participants: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EventStats {
    pub total_events: usize,
    pub upcoming_events: usize,
    pub ongoing_events: usize,
    pub completed_events: usize,
    pub cancelled_events: usize,
    pub public_events: usize,
    pub featured_events: usize,
    pub total_participants: u64,
    /// Sum of capacities of events that have one
    pub total_capacity: u64,
    /// Participants of capped events over `total_capacity`, in percent
    pub fill_rate: f64,
    pub most_popular: Option<PopularEvent>,
}

impl EventStats {
    pub fn from_records<'a, I>(events: I) -> Self
    where
        I: IntoIterator<Item = &'a Event>,
    {
        let mut stats = EventStats::default();
        let mut capped_participants = 0u64;

        for event in events {
            stats.total_events += 1;
            match event.status {
                EventStatus::Upcoming => stats.upcoming_events += 1,
                EventStatus::Ongoing => stats.ongoing_events += 1,
                EventStatus::Completed => stats.completed_events += 1,
                EventStatus::Cancelled => stats.cancelled_events += 1,
                EventStatus::Unknown => {}
            }
            if event.is_public {
                stats.public_events += 1;
            }
            if event.is_featured {
                stats.featured_events += 1;
            }

            stats.total_participants += u64::from(event.current_participants);
            if let Some(max) = event.max_participants {
                stats.total_capacity += u64::from(max);
                capped_participants += u64::from(event.current_participants);
            }

            let beats_current = stats
                .most_popular
                .as_ref()
                .map_or(true, |popular| event.current_participants > popular.participants);
            if beats_current {
                stats.most_popular = Some(PopularEvent {
                    id: event.id,
                    title: event.title.clone(),
                    participants: event.current_participants,
                });
            }
        }

        stats.fill_rate = percentage(capped_participants as f64, stats.total_capacity as f64);
        stats
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MaintenanceStats {
    pub total: usize,
    pub scheduled: usize,
    pub in_progress: usize,
    pub completed: usize,
    pub cancelled: usize,
    pub postponed: usize,
    pub overdue: usize,
    pub total_estimated_cost: f64,
    pub total_actual_cost: f64,
    /// Actual minus estimated, over records that have both
    pub cost_variance: f64,
    /// Completed over total, in percent
    pub completion_rate: f64,
    pub by_priority: BTreeMap<Priority, usize>,
    pub by_type: BTreeMap<MaintenanceType, usize>,
}

impl MaintenanceStats {
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a Maintenance>,
    {
        let mut stats = MaintenanceStats::default();

        for record in records {
            stats.total += 1;
            match record.status {
                MaintenanceStatus::Scheduled => stats.scheduled += 1,
                MaintenanceStatus::InProgress => stats.in_progress += 1,
                MaintenanceStatus::Completed => stats.completed += 1,
                MaintenanceStatus::Cancelled => stats.cancelled += 1,
                MaintenanceStatus::Postponed => stats.postponed += 1,
                MaintenanceStatus::Overdue => stats.overdue += 1,
                MaintenanceStatus::Unknown => {}
            }

            stats.total_estimated_cost += record.estimated_cost.unwrap_or(0.0);
            stats.total_actual_cost += record.actual_cost.unwrap_or(0.0);
            stats.cost_variance += record.cost_variance().unwrap_or(0.0);

            *stats.by_priority.entry(record.priority).or_default() += 1;
            *stats.by_type.entry(record.maintenance_type).or_default() += 1;
        }

        stats.completion_rate = percentage(stats.completed as f64, stats.total as f64);
        stats
    }

    /// Sum of the per-status counters
    pub fn status_total(&self) -> usize {
        self.scheduled + self.in_progress + self.completed + self.cancelled + self.postponed + self.overdue
    }

    /// Records still needing work (scheduled, in progress or overdue)
    pub fn open(&self) -> usize {
        self.scheduled + self.in_progress + self.overdue
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ParticipantStats {
    pub total: usize,
    pub registered: usize,
    pub confirmed: usize,
    pub attended: usize,
    pub cancelled: usize,
    /// Attended over non-cancelled registrations, in percent
    pub attendance_rate: f64,
}

impl ParticipantStats {
    pub fn from_records<'a, I>(participants: I) -> Self
    where
        I: IntoIterator<Item = &'a EventParticipant>,
    {
        let mut stats = ParticipantStats::default();

        for participant in participants {
            stats.total += 1;
            match participant.status {
                ParticipantStatus::Registered => stats.registered += 1,
                ParticipantStatus::Confirmed => stats.confirmed += 1,
                ParticipantStatus::Attended => stats.attended += 1,
                ParticipantStatus::Cancelled => stats.cancelled += 1,
                ParticipantStatus::Unknown => {}
            }
        }

        let active = stats.total - stats.cancelled;
        stats.attendance_rate = percentage(stats.attended as f64, active as f64);
        stats
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PricingStats {
    pub court_prices: usize,
    pub active_court_prices: usize,
    pub peak_hour_prices: usize,
    /// Over active court prices only
    pub min_hourly_price: Option<f64>,
    pub max_hourly_price: Option<f64>,
    pub average_hourly_price: Option<f64>,
    pub active_promotions: usize,
}

impl PricingStats {
    /// Summarise court prices and the promotions running on `today` (ISO)
    pub fn from_records<'a, P, Q>(court_prices: P, promotions: Q, today: &str) -> Self
    where
        P: IntoIterator<Item = &'a CourtPricing>,
        Q: IntoIterator<Item = &'a PricingPromotion>,
    {
        let mut stats = PricingStats::default();
        let mut sum = 0.0;

        for pricing in court_prices {
            stats.court_prices += 1;
            if pricing.is_peak_hour {
                stats.peak_hour_prices += 1;
            }
            if !pricing.is_active {
                continue;
            }
            stats.active_court_prices += 1;
            sum += pricing.price_per_hour;
            stats.min_hourly_price = Some(
                stats.min_hourly_price.map_or(pricing.price_per_hour, |min| min.min(pricing.price_per_hour)),
            );
            stats.max_hourly_price = Some(
                stats.max_hourly_price.map_or(pricing.price_per_hour, |max| max.max(pricing.price_per_hour)),
            );
        }

        if stats.active_court_prices > 0 {
            stats.average_hourly_price = Some(sum / stats.active_court_prices as f64);
        }

        stats.active_promotions = promotions
            .into_iter()
            .filter(|promotion| promotion.is_running_on(today))
            .count();
        stats
    }
}
