//! Client-side form validation
//!
//! Only required-field presence and numeric ranges are checked here; every
//! other invariant is enforced by the API.

pub mod event;
pub mod maintenance;

use regex::Regex;
use std::sync::LazyLock;
use crate::config::DashboardConfig;
use crate::utils::errors::{FieldErrors, Result};
use crate::utils::helpers::date_part;

static CLOCK_TIME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([01][0-9]|2[0-3]):[0-5][0-9](:[0-5][0-9])?$").expect("valid time pattern"));

/// Numeric limits applied by the forms
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormLimits {
    pub max_event_capacity: u32,
}

impl Default for FormLimits {
    fn default() -> Self {
        Self::from(&DashboardConfig::default())
    }
}

impl From<&DashboardConfig> for FormLimits {
    fn from(config: &DashboardConfig) -> Self {
        Self {
            max_event_capacity: config.max_event_capacity,
        }
    }
}

/// A submit payload that can be checked before it is sent
pub trait Validate {
    /// Every problem found, keyed by form field
    fn field_errors(&self, limits: &FormLimits) -> FieldErrors;

    /// Abort submission when any field is invalid
    fn validate(&self, limits: &FormLimits) -> Result<()> {
        self.field_errors(limits).into_result()
    }
}

fn require_text(errors: &mut FieldErrors, field: &str, value: &str, label: &str) {
    if value.trim().is_empty() {
        errors.add(field, format!("{} is required", label));
    }
}

/// Check a required date; returns the well-formed date part
fn require_date<'a>(errors: &mut FieldErrors, field: &str, value: &'a str, label: &str) -> Option<&'a str> {
    if value.trim().is_empty() {
        errors.add(field, format!("{} is required", label));
        return None;
    }
    optional_date(errors, field, Some(value), label)
}

fn optional_date<'a>(errors: &mut FieldErrors, field: &str, value: Option<&'a str>, label: &str) -> Option<&'a str> {
    let value = value.filter(|v| !v.is_empty())?;
    match date_part(value) {
        Some(day) if day.len() == value.len() => Some(day),
        _ => {
            errors.add(field, format!("{} must be a date (YYYY-MM-DD)", label));
            None
        }
    }
}

fn optional_time<'a>(errors: &mut FieldErrors, field: &str, value: Option<&'a str>, label: &str) -> Option<&'a str> {
    let value = value.filter(|v| !v.is_empty())?;
    if CLOCK_TIME.is_match(value) {
        Some(value)
    } else {
        errors.add(field, format!("{} must be a time (HH:MM)", label));
        None
    }
}

fn non_negative(errors: &mut FieldErrors, field: &str, value: Option<f64>, label: &str) {
    if let Some(value) = value {
        if !value.is_finite() || value < 0.0 {
            errors.add(field, format!("{} cannot be negative", label));
        }
    }
}
