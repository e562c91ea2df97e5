//! Key/value rows for the summary sheet

use crate::pipeline::{EventStats, MaintenanceStats, ParticipantStats, PricingStats};
use crate::utils::helpers::{format_money, format_percentage};

/// Statistics that can be flattened into `metric,value` rows
pub trait SummaryRows {
    fn summary_rows(&self) -> Vec<(String, String)>;
}

fn row(label: &str, value: impl ToString) -> (String, String) {
    (label.to_string(), value.to_string())
}

impl SummaryRows for EventStats {
    fn summary_rows(&self) -> Vec<(String, String)> {
        let mut rows = vec![
            row("Total events", self.total_events),
            row("Upcoming", self.upcoming_events),
            row("Ongoing", self.ongoing_events),
            row("Completed", self.completed_events),
            row("Cancelled", self.cancelled_events),
            row("Public", self.public_events),
            row("Featured", self.featured_events),
            row("Total participants", self.total_participants),
            row("Total capacity", self.total_capacity),
            row("Fill rate", format_percentage(self.fill_rate)),
        ];
        if let Some(popular) = &self.most_popular {
            rows.push(row(
                "Most popular",
                format!("{} ({} participants)", popular.title, popular.participants),
            ));
        }
        rows
    }
}

impl SummaryRows for MaintenanceStats {
    fn summary_rows(&self) -> Vec<(String, String)> {
        let mut rows = vec![
            row("Total records", self.total),
            row("Scheduled", self.scheduled),
            row("In progress", self.in_progress),
            row("Completed", self.completed),
            row("Cancelled", self.cancelled),
            row("Postponed", self.postponed),
            row("Overdue", self.overdue),
            row("Open", self.open()),
            row("Estimated cost", format_money(self.total_estimated_cost)),
            row("Actual cost", format_money(self.total_actual_cost)),
            row("Cost variance", format_money(self.cost_variance)),
            row("Completion rate", format_percentage(self.completion_rate)),
        ];
        rows.extend(
            self.by_priority
                .iter()
                .map(|(priority, count)| row(&format!("Priority: {}", priority.as_str()), count)),
        );
        rows.extend(
            self.by_type
                .iter()
                .map(|(kind, count)| row(&format!("Type: {}", kind.as_str()), count)),
        );
        rows
    }
}

impl SummaryRows for ParticipantStats {
    fn summary_rows(&self) -> Vec<(String, String)> {
        vec![
            row("Total registrations", self.total),
            row("Registered", self.registered),
            row("Confirmed", self.confirmed),
            row("Attended", self.attended),
            row("Cancelled", self.cancelled),
            row("Attendance rate", format_percentage(self.attendance_rate)),
        ]
    }
}

impl SummaryRows for PricingStats {
    fn summary_rows(&self) -> Vec<(String, String)> {
        let money = |value: Option<f64>| value.map(format_money).unwrap_or_else(|| "-".to_string());
        vec![
            row("Court prices", self.court_prices),
            row("Active court prices", self.active_court_prices),
            row("Peak hour prices", self.peak_hour_prices),
            row("Lowest hourly price", money(self.min_hourly_price)),
            row("Highest hourly price", money(self.max_hourly_price)),
            row("Average hourly price", money(self.average_hourly_price)),
            row("Active promotions", self.active_promotions),
        ]
    }
}
