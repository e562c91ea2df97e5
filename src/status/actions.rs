//! Static tables of the status actions each screen offers

use crate::models::{EventStatus, MaintenanceStatus, ParticipantStatus};
use crate::utils::errors::{CourtDeskError, Result};

/// Common shape of a status action table
pub trait StatusAction: Copy + PartialEq + std::fmt::Debug + 'static {
    type Status: Copy + std::fmt::Debug;

    /// Actions offered while a record is in `status`
    fn available(status: Self::Status) -> &'static [Self];

    /// Status requested by the action
    fn target(self) -> Self::Status;

    fn label(self) -> &'static str;

    fn status_name(status: Self::Status) -> &'static str;

    /// Target status if the action is offered for `current`, otherwise an
    /// `InvalidStateTransition` error
    fn check(self, current: Self::Status) -> Result<Self::Status> {
        if Self::available(current).contains(&self) {
            Ok(self.target())
        } else {
            Err(CourtDeskError::InvalidStateTransition {
                from: Self::status_name(current).to_string(),
                to: Self::status_name(self.target()).to_string(),
            })
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaintenanceAction {
    Start,
    Complete,
    Cancel,
    Postpone,
    Reschedule,
}

impl StatusAction for MaintenanceAction {
    type Status = MaintenanceStatus;

    fn available(status: MaintenanceStatus) -> &'static [Self] {
        use MaintenanceAction::*;
        match status {
            MaintenanceStatus::Scheduled => &[Start, Postpone, Cancel],
            MaintenanceStatus::InProgress => &[Complete, Cancel],
            MaintenanceStatus::Postponed => &[Reschedule, Cancel],
            MaintenanceStatus::Overdue => &[Start, Cancel],
            MaintenanceStatus::Completed | MaintenanceStatus::Cancelled | MaintenanceStatus::Unknown => &[],
        }
    }

    fn target(self) -> MaintenanceStatus {
        match self {
            MaintenanceAction::Start => MaintenanceStatus::InProgress,
            MaintenanceAction::Complete => MaintenanceStatus::Completed,
            MaintenanceAction::Cancel => MaintenanceStatus::Cancelled,
            MaintenanceAction::Postpone => MaintenanceStatus::Postponed,
            MaintenanceAction::Reschedule => MaintenanceStatus::Scheduled,
        }
    }

    fn label(self) -> &'static str {
        match self {
            MaintenanceAction::Start => "start",
            MaintenanceAction::Complete => "complete",
            MaintenanceAction::Cancel => "cancel",
            MaintenanceAction::Postpone => "postpone",
            MaintenanceAction::Reschedule => "reschedule",
        }
    }

    fn status_name(status: MaintenanceStatus) -> &'static str {
        status.as_str()
    }
}

impl std::str::FromStr for MaintenanceAction {
    type Err = CourtDeskError;

    fn from_str(value: &str) -> Result<Self> {
        match value {
            "start" => Ok(MaintenanceAction::Start),
            "complete" => Ok(MaintenanceAction::Complete),
            "cancel" => Ok(MaintenanceAction::Cancel),
            "postpone" => Ok(MaintenanceAction::Postpone),
            "reschedule" => Ok(MaintenanceAction::Reschedule),
            other => Err(CourtDeskError::InvalidInput(format!("unknown maintenance action '{}'", other))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventAction {
    Start,
    Complete,
    Cancel,
}

impl StatusAction for EventAction {
    type Status = EventStatus;

    fn available(status: EventStatus) -> &'static [Self] {
        use EventAction::*;
        match status {
            EventStatus::Upcoming => &[Start, Cancel],
            EventStatus::Ongoing => &[Complete, Cancel],
            EventStatus::Completed | EventStatus::Cancelled | EventStatus::Unknown => &[],
        }
    }

    fn target(self) -> EventStatus {
        match self {
            EventAction::Start => EventStatus::Ongoing,
            EventAction::Complete => EventStatus::Completed,
            EventAction::Cancel => EventStatus::Cancelled,
        }
    }

    fn label(self) -> &'static str {
        match self {
            EventAction::Start => "start",
            EventAction::Complete => "complete",
            EventAction::Cancel => "cancel",
        }
    }

    fn status_name(status: EventStatus) -> &'static str {
        status.as_str()
    }
}

impl std::str::FromStr for EventAction {
    type Err = CourtDeskError;

    fn from_str(value: &str) -> Result<Self> {
        match value {
            "start" => Ok(EventAction::Start),
            "complete" => Ok(EventAction::Complete),
            "cancel" => Ok(EventAction::Cancel),
            other => Err(CourtDeskError::InvalidInput(format!("unknown event action '{}'", other))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticipantAction {
    Confirm,
    MarkAttended,
    Cancel,
}

impl StatusAction for ParticipantAction {
    type Status = ParticipantStatus;

    fn available(status: ParticipantStatus) -> &'static [Self] {
        use ParticipantAction::*;
        match status {
            ParticipantStatus::Registered => &[Confirm, Cancel],
            ParticipantStatus::Confirmed => &[MarkAttended, Cancel],
            ParticipantStatus::Attended | ParticipantStatus::Cancelled | ParticipantStatus::Unknown => &[],
        }
    }

    fn target(self) -> ParticipantStatus {
        match self {
            ParticipantAction::Confirm => ParticipantStatus::Confirmed,
            ParticipantAction::MarkAttended => ParticipantStatus::Attended,
            ParticipantAction::Cancel => ParticipantStatus::Cancelled,
        }
    }

    fn label(self) -> &'static str {
        match self {
            ParticipantAction::Confirm => "confirm",
            ParticipantAction::MarkAttended => "mark attended",
            ParticipantAction::Cancel => "cancel",
        }
    }

    fn status_name(status: ParticipantStatus) -> &'static str {
        status.as_str()
    }
}
