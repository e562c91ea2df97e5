//! Status actions
//!
//! Statuses are validated server-side. Locally we only decide which action
//! buttons a record offers, using exhaustive per-status tables.

pub mod actions;

pub use actions::{StatusAction, MaintenanceAction, EventAction, ParticipantAction};
