//! Maintenance model

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Maintenance {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub maintenance_type: MaintenanceType,
    pub priority: Priority,
    pub status: MaintenanceStatus,
    pub scheduled_date: String,
    #[serde(default)]
    pub started_date: Option<String>,
    #[serde(default)]
    pub completed_date: Option<String>,
    #[serde(default)]
    pub estimated_cost: Option<f64>,
    #[serde(default)]
    pub actual_cost: Option<f64>,
    #[serde(default)]
    pub estimated_duration_hours: Option<f64>,
    #[serde(default)]
    pub actual_duration_hours: Option<f64>,
    #[serde(default)]
    pub venue: Option<i64>,
    #[serde(default)]
    pub venue_name: Option<String>,
    #[serde(default)]
    pub court: Option<i64>,
    #[serde(default)]
    pub court_name: Option<String>,
    #[serde(default)]
    pub equipment: Option<i64>,
    #[serde(default)]
    pub equipment_name: Option<String>,
    #[serde(default)]
    pub assigned_to: Option<i64>,
    #[serde(default)]
    pub assigned_to_name: Option<String>,
    #[serde(default)]
    pub created_by: Option<i64>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Maintenance {
    /// Actual minus estimated cost, when both are known
    pub fn cost_variance(&self) -> Option<f64> {
        match (self.actual_cost, self.estimated_cost) {
            (Some(actual), Some(estimated)) => Some(actual - estimated),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaintenanceStatus {
    Scheduled,
    InProgress,
    Completed,
    Cancelled,
    Postponed,
    Overdue,
    #[serde(other)]
    Unknown,
}

impl MaintenanceStatus {
    pub const ALL: [MaintenanceStatus; 6] = [
        MaintenanceStatus::Scheduled,
        MaintenanceStatus::InProgress,
        MaintenanceStatus::Completed,
        MaintenanceStatus::Cancelled,
        MaintenanceStatus::Postponed,
        MaintenanceStatus::Overdue,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MaintenanceStatus::Scheduled => "scheduled",
            MaintenanceStatus::InProgress => "in_progress",
            MaintenanceStatus::Completed => "completed",
            MaintenanceStatus::Cancelled => "cancelled",
            MaintenanceStatus::Postponed => "postponed",
            MaintenanceStatus::Overdue => "overdue",
            MaintenanceStatus::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaintenanceType {
    Preventive,
    Corrective,
    Emergency,
    Inspection,
    Cleaning,
    Upgrade,
    #[serde(other)]
    Other,
}

impl MaintenanceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MaintenanceType::Preventive => "preventive",
            MaintenanceType::Corrective => "corrective",
            MaintenanceType::Emergency => "emergency",
            MaintenanceType::Inspection => "inspection",
            MaintenanceType::Cleaning => "cleaning",
            MaintenanceType::Upgrade => "upgrade",
            MaintenanceType::Other => "other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
    #[serde(other)]
    Unknown,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Critical => "critical",
            Priority::Unknown => "unknown",
        }
    }

    /// Sort rank; unrecognised priorities rank below `low`
    pub fn rank(&self) -> u8 {
        match self {
            Priority::Critical => 4,
            Priority::High => 3,
            Priority::Medium => 2,
            Priority::Low => 1,
            Priority::Unknown => 0,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateMaintenanceRequest {
    pub title: String,
    pub description: Option<String>,
    pub maintenance_type: Option<MaintenanceType>,
    pub priority: Option<Priority>,
    pub scheduled_date: String,
    pub estimated_cost: Option<f64>,
    pub estimated_duration_hours: Option<f64>,
    pub venue: Option<i64>,
    pub court: Option<i64>,
    pub equipment: Option<i64>,
    pub assigned_to: Option<i64>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateMaintenanceRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<MaintenanceStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_cost: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_duration_hours: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Statistics computed server-side by `maintenance/statistics/`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaintenanceServerStats {
    pub total: u64,
    pub scheduled: u64,
    pub in_progress: u64,
    pub completed: u64,
    pub overdue: u64,
    pub total_cost: f64,
}
