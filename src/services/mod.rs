//! Services module
//!
//! This module contains the screen-level services that talk to the REST API

pub mod api_client;
pub mod directory;
pub mod events;
pub mod maintenance;
pub mod pricing;

// Re-export commonly used services
pub use api_client::{ApiClient, ListResponse, Page};
pub use directory::DirectoryService;
pub use events::{EventService, StatusPatch};
pub use maintenance::MaintenanceService;
pub use pricing::{PricingService, PricingCatalog};

use crate::config::settings::Settings;
use crate::forms::FormLimits;
use crate::utils::errors::Result;

/// Service factory for creating and managing all services
#[derive(Clone, Debug)]
pub struct ServiceFactory {
    pub event_service: EventService,
    pub maintenance_service: MaintenanceService,
    pub pricing_service: PricingService,
    pub directory_service: DirectoryService,
}

impl ServiceFactory {
    /// Create a new ServiceFactory with all services sharing one API client
    pub fn new(settings: &Settings) -> Result<Self> {
        let client = ApiClient::new(&settings.api)?;
        Ok(Self::with_client(client, FormLimits::from(&settings.dashboard)))
    }

    /// Build the services around an existing client
    pub fn with_client(client: ApiClient, limits: FormLimits) -> Self {
        Self {
            event_service: EventService::new(client.clone(), limits),
            maintenance_service: MaintenanceService::new(client.clone(), limits),
            pricing_service: PricingService::new(client.clone()),
            directory_service: DirectoryService::new(client),
        }
    }
}
