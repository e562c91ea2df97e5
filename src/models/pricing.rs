//! Pricing catalog models

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourtPricing {
    pub id: i64,
    #[serde(default)]
    pub court: Option<i64>,
    #[serde(default)]
    pub court_name: Option<String>,
    #[serde(default)]
    pub venue_name: Option<String>,
    #[serde(default)]
    pub sport_type: Option<String>,
    /// 0 = Monday .. 6 = Sunday; `None` applies to every day
    #[serde(default)]
    pub day_of_week: Option<u8>,
    pub start_time: String,
    pub end_time: String,
    pub price_per_hour: f64,
    #[serde(default)]
    pub is_peak_hour: bool,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServicePricing {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub service_type: Option<String>,
    pub price: f64,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingPromotion {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    pub discount_type: DiscountType,
    pub discount_value: f64,
    pub start_date: String,
    pub end_date: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl PricingPromotion {
    /// Price after applying this promotion, never below zero
    pub fn apply(&self, price: f64) -> f64 {
        let discounted = match self.discount_type {
            DiscountType::Percentage => price * (1.0 - self.discount_value.clamp(0.0, 100.0) / 100.0),
            DiscountType::Fixed => price - self.discount_value,
            DiscountType::Other => price,
        };
        discounted.max(0.0)
    }

    /// Whether the promotion is active and `date` (ISO) falls in its window
    pub fn is_running_on(&self, date: &str) -> bool {
        self.is_active && self.start_date.as_str() <= date && date <= self.end_date.as_str()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscountType {
    Percentage,
    Fixed,
    #[serde(other)]
    Other,
}

impl DiscountType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiscountType::Percentage => "percentage",
            DiscountType::Fixed => "fixed",
            DiscountType::Other => "other",
        }
    }
}

fn default_true() -> bool {
    true
}
