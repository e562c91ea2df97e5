//! Maintenance form validation

use crate::models::CreateMaintenanceRequest;
use crate::utils::errors::FieldErrors;
use super::{non_negative, require_date, require_text, FormLimits, Validate};

impl Validate for CreateMaintenanceRequest {
    fn field_errors(&self, _limits: &FormLimits) -> FieldErrors {
        let mut errors = FieldErrors::new();

        require_text(&mut errors, "title", &self.title, "Title");
        if self.venue.is_none() {
            errors.add("venue", "Venue is required");
        }
        require_date(&mut errors, "scheduled_date", &self.scheduled_date, "Scheduled date");
        non_negative(&mut errors, "estimated_cost", self.estimated_cost, "Estimated cost");
        non_negative(
            &mut errors,
            "estimated_duration_hours",
            self.estimated_duration_hours,
            "Estimated duration",
        );

        errors
    }
}
