//! Event form validation

use crate::models::CreateEventRequest;
use crate::utils::errors::FieldErrors;
use super::{non_negative, optional_date, optional_time, require_date, require_text, FormLimits, Validate};

impl Validate for CreateEventRequest {
    fn field_errors(&self, limits: &FormLimits) -> FieldErrors {
        let mut errors = FieldErrors::new();

        require_text(&mut errors, "title", &self.title, "Title");

        let start = require_date(&mut errors, "start_date", &self.start_date, "Start date");
        let end = optional_date(&mut errors, "end_date", self.end_date.as_deref(), "End date");
        if let (Some(start), Some(end)) = (start, end) {
            if end < start {
                errors.add("end_date", "End date cannot be before start date");
            }
        }

        let start_time = optional_time(&mut errors, "start_time", self.start_time.as_deref(), "Start time");
        let end_time = optional_time(&mut errors, "end_time", self.end_time.as_deref(), "End time");
        let single_day = end.map_or(true, |end| Some(end) == start);
        if let (Some(start_time), Some(end_time)) = (start_time, end_time) {
            if single_day && end_time <= start_time {
                errors.add("end_time", "End time must be after start time");
            }
        }

        if let Some(max) = self.max_participants {
            if max == 0 {
                errors.add("max_participants", "Maximum participants must be at least 1");
            } else if max > limits.max_event_capacity {
                errors.add(
                    "max_participants",
                    format!("Maximum participants cannot exceed {}", limits.max_event_capacity),
                );
            }
        }

        non_negative(&mut errors, "registration_fee", self.registration_fee, "Registration fee");

        errors
    }
}
