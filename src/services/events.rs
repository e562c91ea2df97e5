//! Event service implementation
//!
//! This service handles event listing, creation, updates, image uploads,
//! participant registration and status changes against the REST API.

use chrono::NaiveDate;
use reqwest::multipart::{Form, Part};
use serde::Serialize;
use tracing::{debug, info, warn};
use crate::forms::{FormLimits, Validate};
use crate::models::{
    CreateEventRequest, Event, EventParticipant, EventStatus, ParticipantStatus, RegisterParticipantRequest,
    UpdateEventRequest,
};
use crate::status::{EventAction, ParticipantAction, StatusAction};
use crate::utils::errors::{ApiError, CourtDeskError, Result};
use crate::utils::logging;
use super::api_client::ApiClient;

/// Body sent when only the status changes
#[derive(Debug, Clone, Serialize)]
pub struct StatusPatch<S> {
    pub status: S,
}

/// Event service for the admin dashboard
#[derive(Clone, Debug)]
pub struct EventService {
    client: ApiClient,
    limits: FormLimits,
}

impl EventService {
    /// Create a new EventService instance
    pub fn new(client: ApiClient, limits: FormLimits) -> Self {
        Self { client, limits }
    }

    /// Fetch every event
    pub async fn list_events(&self) -> Result<Vec<Event>> {
        self.client.require_auth()?;
        let events: Vec<Event> = self.client.get_list("events/").await?;
        debug!(count = events.len(), "Fetched events");
        Ok(events)
    }

    /// Fetch one event
    pub async fn get_event(&self, id: i64) -> Result<Event> {
        self.client.require_auth()?;
        self.client
            .get(&format!("events/{}/", id))
            .await
            .map_err(|e| not_found_as(e, "event", id))
    }

    /// Validate and submit a new event
    pub async fn create_event(&self, request: &CreateEventRequest) -> Result<Event> {
        self.client.require_auth()?;
        request.validate(&self.limits)?;

        let event: Event = self.client.post("events/", request).await?;
        info!(event_id = event.id, title = %event.title, "Event created");
        Ok(event)
    }

    /// Apply a partial update
    pub async fn update_event(&self, id: i64, request: &UpdateEventRequest) -> Result<Event> {
        self.client.require_auth()?;
        let event: Event = self
            .client
            .patch(&format!("events/{}/", id), request)
            .await
            .map_err(|e| not_found_as(e, "event", id))?;
        info!(event_id = id, "Event updated");
        Ok(event)
    }

    /// Delete an event
    pub async fn delete_event(&self, id: i64) -> Result<()> {
        self.client.require_auth()?;
        self.client
            .delete(&format!("events/{}/", id))
            .await
            .map_err(|e| not_found_as(e, "event", id))?;
        info!(event_id = id, "Event deleted");
        Ok(())
    }

    /// Upload the event banner image as multipart form data
    pub async fn upload_image(&self, id: i64, file_name: &str, bytes: Vec<u8>, mime: &str) -> Result<Event> {
        self.client.require_auth()?;
        let part = Part::bytes(bytes).file_name(file_name.to_string()).mime_str(mime)?;
        let form = Form::new().part("image", part);

        let event: Event = self
            .client
            .post_multipart(&format!("events/{}/upload_image/", id), form)
            .await
            .map_err(|e| not_found_as(e, "event", id))?;
        info!(event_id = id, file_name = file_name, "Event image uploaded");
        Ok(event)
    }

    /// Request a status change offered by the action table
    pub async fn apply_action(&self, event: &Event, action: EventAction) -> Result<Event> {
        let target = action.check(event.status)?;
        self.patch_status(event, target).await
    }

    async fn patch_status(&self, event: &Event, target: EventStatus) -> Result<Event> {
        self.client.require_auth()?;
        logging::log_status_change("event", event.id, event.status.as_str(), target.as_str());
        self.client
            .patch(&format!("events/{}/", event.id), &StatusPatch { status: target })
            .await
            .map_err(|e| not_found_as(e, "event", event.id))
    }

    /// Patch every event whose stored status disagrees with its dates
    ///
    /// Returns the updated events. Per-record failures are logged and
    /// skipped; a credentials failure stops the sync and is returned.
    pub async fn sync_statuses(&self, events: &[Event], today: NaiveDate) -> Result<Vec<Event>> {
        let stale: Vec<(&Event, EventStatus)> = events
            .iter()
            .filter_map(|event| {
                let derived = event.derived_status(today);
                (derived != event.status && event.status != EventStatus::Unknown).then_some((event, derived))
            })
            .collect();

        let mut updated = Vec::with_capacity(stale.len());
        for (event, derived) in stale {
            match self.patch_status(event, derived).await {
                Ok(event) => updated.push(event),
                Err(e) if e.requires_login() => return Err(e),
                Err(e) => warn!(event_id = event.id, error = %e, "Failed to sync event status"),
            }
        }

        info!(updated = updated.len(), "Event statuses synced");
        Ok(updated)
    }

    /// Fetch the registrations of one event
    pub async fn list_participants(&self, event_id: i64) -> Result<Vec<EventParticipant>> {
        self.client.require_auth()?;
        self.client
            .get_list(&format!("events/{}/participants/", event_id))
            .await
            .map_err(|e| not_found_as(e, "event", event_id))
    }

    /// Register a user for an event
    pub async fn register_participant(
        &self,
        event: &Event,
        request: &RegisterParticipantRequest,
    ) -> Result<EventParticipant> {
        self.client.require_auth()?;
        if event.is_full() {
            return Err(CourtDeskError::InvalidInput(format!("Event '{}' is full", event.title)));
        }

        let participant: EventParticipant = self
            .client
            .post(&format!("events/{}/participants/", event.id), request)
            .await
            .map_err(|e| not_found_as(e, "event", event.id))?;
        info!(event_id = event.id, user_id = request.user, "Participant registered");
        Ok(participant)
    }

    /// Change a registration's status through the participant action table
    pub async fn apply_participant_action(
        &self,
        participant: &EventParticipant,
        action: ParticipantAction,
    ) -> Result<EventParticipant> {
        self.client.require_auth()?;
        let target: ParticipantStatus = action.check(participant.status)?;
        logging::log_status_change("participant", participant.id, participant.status.as_str(), target.as_str());

        self.client
            .patch(&format!("event-participants/{}/", participant.id), &StatusPatch { status: target })
            .await
            .map_err(|e| not_found_as(e, "participant", participant.id))
    }
}

/// Turn an API 404 into a typed not-found for `resource`
pub(crate) fn not_found_as(error: CourtDeskError, resource: &'static str, id: i64) -> CourtDeskError {
    match error {
        CourtDeskError::Api(ApiError::NotFound { .. }) => CourtDeskError::NotFound { resource, id },
        other => other,
    }
}
