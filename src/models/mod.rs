//! Data models module
//!
//! This module contains all records exchanged with the facility API

pub mod event;
pub mod maintenance;
pub mod pricing;
pub mod directory;

// Re-export commonly used models
pub use event::{Event, EventStatus, EventType, EventParticipant, ParticipantStatus, CreateEventRequest, UpdateEventRequest, RegisterParticipantRequest};
pub use maintenance::{Maintenance, MaintenanceStatus, MaintenanceType, Priority, CreateMaintenanceRequest, UpdateMaintenanceRequest, MaintenanceServerStats};
pub use pricing::{CourtPricing, ServicePricing, PricingPromotion, DiscountType};
pub use directory::{Venue, Court, Equipment, UserSummary, FormOptions};
