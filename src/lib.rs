//! CourtDesk
//!
//! Client library for a sports-facility management API. List screens keep
//! their records in memory and derive what they show through the collection
//! view pipeline (filter, sort, aggregate); services talk to the REST API and
//! reports can be exported as CSV.

#![allow(non_snake_case)]

pub mod config;
pub mod export;
pub mod forms;
pub mod models;
pub mod pipeline;
pub mod services;
pub mod state;
pub mod status;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{CourtDeskError, ErrorOutcome, Result};

// Re-export main components for easy access
pub use pipeline::{Criteria, CriteriaAction, Record};
pub use services::ServiceFactory;
pub use state::{ListView, Notification};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
