//! Venue, court, equipment and user lookups for form option lists

use tracing::debug;
use crate::models::{Court, Equipment, FormOptions, UserSummary, Venue};
use crate::utils::errors::Result;
use super::api_client::ApiClient;

#[derive(Clone, Debug)]
pub struct DirectoryService {
    client: ApiClient,
}

impl DirectoryService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn venues(&self) -> Result<Vec<Venue>> {
        self.client.require_auth()?;
        self.client.get_list("venues/").await
    }

    /// Courts, optionally restricted to one venue
    pub async fn courts(&self, venue: Option<i64>) -> Result<Vec<Court>> {
        self.client.require_auth()?;
        match venue {
            Some(venue) => self.client.get_list_with_query("courts/", &[("venue", venue)]).await,
            None => self.client.get_list("courts/").await,
        }
    }

    pub async fn equipment(&self) -> Result<Vec<Equipment>> {
        self.client.require_auth()?;
        self.client.get_list("equipment/").await
    }

    pub async fn users(&self) -> Result<Vec<UserSummary>> {
        self.client.require_auth()?;
        self.client.get_list("users/").await
    }

    /// Fetch all option lists concurrently before a form is shown
    pub async fn load_form_options(&self) -> Result<FormOptions> {
        let (venues, courts, equipment, users) =
            tokio::try_join!(self.venues(), self.courts(None), self.equipment(), self.users())?;

        debug!(
            venues = venues.len(),
            courts = courts.len(),
            equipment = equipment.len(),
            users = users.len(),
            "Loaded form options"
        );
        Ok(FormOptions { venues, courts, equipment, users })
    }
}
