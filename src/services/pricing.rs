//! Pricing catalog service
//!
//! The catalog is public, so these calls do not require a token.

use tracing::debug;
use crate::models::{CourtPricing, PricingPromotion, ServicePricing};
use crate::utils::errors::Result;
use super::api_client::ApiClient;

/// Everything the public pricing page shows
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PricingCatalog {
    pub court_prices: Vec<CourtPricing>,
    pub services: Vec<ServicePricing>,
    pub promotions: Vec<PricingPromotion>,
}

#[derive(Clone, Debug)]
pub struct PricingService {
    client: ApiClient,
}

impl PricingService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn court_prices(&self) -> Result<Vec<CourtPricing>> {
        self.client.get_list("pricing/courts/").await
    }

    pub async fn service_prices(&self) -> Result<Vec<ServicePricing>> {
        self.client.get_list("pricing/services/").await
    }

    pub async fn promotions(&self) -> Result<Vec<PricingPromotion>> {
        self.client.get_list("pricing/promotions/").await
    }

    /// Fetch the three catalog lists concurrently
    pub async fn load_catalog(&self) -> Result<PricingCatalog> {
        let (court_prices, services, promotions) =
            tokio::try_join!(self.court_prices(), self.service_prices(), self.promotions())?;

        debug!(
            court_prices = court_prices.len(),
            services = services.len(),
            promotions = promotions.len(),
            "Loaded pricing catalog"
        );
        Ok(PricingCatalog { court_prices, services, promotions })
    }
}
