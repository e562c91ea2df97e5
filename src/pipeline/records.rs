//! `Record` implementations for every list screen

use std::borrow::Cow;
use std::cmp::Ordering;
use crate::models::{CourtPricing, Event, EventParticipant, Maintenance, PricingPromotion, ServicePricing};
use crate::utils::errors::CourtDeskError;
use super::sort::{compare_amount, compare_optional_text, compare_text};
use super::Record;

/// Declares a field or sort-key enum together with its control keywords
macro_rules! keyword_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $keyword:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $keyword),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = CourtDeskError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                match value {
                    $($keyword => Ok($name::$variant),)+
                    other => Err(CourtDeskError::InvalidInput(format!(
                        "unknown {} '{}', expected one of: {}",
                        stringify!($name),
                        other,
                        [$($keyword),+].join(", ")
                    ))),
                }
            }
        }
    };
}

keyword_enum!(
    /// Filterable event columns
    EventField {
        Status => "status",
        EventType => "type",
        Venue => "venue",
        Court => "court",
        Organizer => "organizer",
        Visibility => "visibility",
        Featured => "featured",
    }
);

keyword_enum!(
    /// Sortable event columns
    EventSortKey {
        Title => "title",
        StartDate => "start_date",
        Status => "status",
        EventType => "type",
        Participants => "participants",
        Capacity => "capacity",
    }
);

keyword_enum!(
    /// Filterable maintenance columns
    MaintenanceField {
        Status => "status",
        Priority => "priority",
        MaintenanceType => "type",
        Venue => "venue",
        Court => "court",
        Equipment => "equipment",
        AssignedTo => "assigned_to",
    }
);

keyword_enum!(
    /// Sortable maintenance columns
    MaintenanceSortKey {
        Title => "title",
        ScheduledDate => "scheduled_date",
        Priority => "priority",
        Status => "status",
        MaintenanceType => "type",
        EstimatedCost => "estimated_cost",
        ActualCost => "actual_cost",
    }
);

keyword_enum!(
    /// Filterable participant columns
    ParticipantField {
        Status => "status",
    }
);

keyword_enum!(
    /// Sortable participant columns
    ParticipantSortKey {
        Name => "name",
        RegisteredAt => "registered_at",
        Status => "status",
    }
);

keyword_enum!(
    /// Filterable court pricing columns
    CourtPricingField {
        SportType => "sport",
        Venue => "venue",
        Court => "court",
        DayOfWeek => "day",
        PeakHour => "peak",
        Active => "active",
    }
);

keyword_enum!(
    /// Sortable court pricing columns
    CourtPricingSortKey {
        Price => "price",
        StartTime => "start_time",
        Court => "court",
        Venue => "venue",
    }
);

keyword_enum!(
    /// Filterable service pricing columns
    ServicePricingField {
        ServiceType => "type",
        Active => "active",
    }
);

keyword_enum!(
    /// Sortable service pricing columns
    ServicePricingSortKey {
        Name => "name",
        Price => "price",
    }
);

keyword_enum!(
    /// Filterable promotion columns
    PromotionField {
        DiscountType => "discount_type",
        Active => "active",
    }
);

keyword_enum!(
    /// Sortable promotion columns
    PromotionSortKey {
        Title => "title",
        StartDate => "start_date",
        EndDate => "end_date",
        Discount => "discount",
    }
);

fn flag(value: bool) -> Option<Cow<'static, str>> {
    Some(Cow::Borrowed(if value { "yes" } else { "no" }))
}

fn id_value(id: Option<i64>) -> Option<Cow<'static, str>> {
    id.map(|id| Cow::Owned(id.to_string()))
}

fn push_optional<'a>(fields: &mut Vec<Cow<'a, str>>, value: &'a Option<String>) {
    if let Some(value) = value.as_deref() {
        fields.push(Cow::Borrowed(value));
    }
}

impl Record for Event {
    type Field = EventField;
    type SortKey = EventSortKey;

    const ENTITY: &'static str = "event";

    fn id(&self) -> i64 {
        self.id
    }

    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        let mut fields = vec![Cow::Borrowed(self.title.as_str())];
        push_optional(&mut fields, &self.description);
        push_optional(&mut fields, &self.venue_name);
        push_optional(&mut fields, &self.court_name);
        push_optional(&mut fields, &self.organizer_name);
        fields
    }

    fn field_value(&self, field: EventField) -> Option<Cow<'_, str>> {
        match field {
            EventField::Status => Some(Cow::Borrowed(self.status.as_str())),
            EventField::EventType => Some(Cow::Borrowed(self.event_type.as_str())),
            EventField::Venue => id_value(self.venue),
            EventField::Court => id_value(self.court),
            EventField::Organizer => id_value(self.organizer),
            EventField::Visibility => Some(Cow::Borrowed(if self.is_public { "public" } else { "private" })),
            EventField::Featured => flag(self.is_featured),
        }
    }

    fn primary_date(&self) -> Option<&str> {
        Some(&self.start_date)
    }

    fn compare_by(&self, other: &Self, key: EventSortKey) -> Ordering {
        match key {
            EventSortKey::Title => compare_text(&self.title, &other.title),
            EventSortKey::StartDate => self
                .start_date
                .cmp(&other.start_date)
                .then_with(|| self.start_time.cmp(&other.start_time)),
            EventSortKey::Status => self.status.as_str().cmp(other.status.as_str()),
            EventSortKey::EventType => self.event_type.as_str().cmp(other.event_type.as_str()),
            EventSortKey::Participants => self.current_participants.cmp(&other.current_participants),
            EventSortKey::Capacity => self.max_participants.cmp(&other.max_participants),
        }
    }
}

impl Record for Maintenance {
    type Field = MaintenanceField;
    type SortKey = MaintenanceSortKey;

    const ENTITY: &'static str = "maintenance";

    fn id(&self) -> i64 {
        self.id
    }

    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        let mut fields = vec![Cow::Owned(self.id.to_string()), Cow::Borrowed(self.title.as_str())];
        push_optional(&mut fields, &self.description);
        push_optional(&mut fields, &self.venue_name);
        push_optional(&mut fields, &self.court_name);
        push_optional(&mut fields, &self.equipment_name);
        push_optional(&mut fields, &self.assigned_to_name);
        fields
    }

    fn field_value(&self, field: MaintenanceField) -> Option<Cow<'_, str>> {
        match field {
            MaintenanceField::Status => Some(Cow::Borrowed(self.status.as_str())),
            MaintenanceField::Priority => Some(Cow::Borrowed(self.priority.as_str())),
            MaintenanceField::MaintenanceType => Some(Cow::Borrowed(self.maintenance_type.as_str())),
            MaintenanceField::Venue => id_value(self.venue),
            MaintenanceField::Court => id_value(self.court),
            MaintenanceField::Equipment => id_value(self.equipment),
            MaintenanceField::AssignedTo => id_value(self.assigned_to),
        }
    }

    fn primary_date(&self) -> Option<&str> {
        Some(&self.scheduled_date)
    }

    fn compare_by(&self, other: &Self, key: MaintenanceSortKey) -> Ordering {
        match key {
            MaintenanceSortKey::Title => compare_text(&self.title, &other.title),
            MaintenanceSortKey::ScheduledDate => self.scheduled_date.cmp(&other.scheduled_date),
            MaintenanceSortKey::Priority => self.priority.rank().cmp(&other.priority.rank()),
            MaintenanceSortKey::Status => self.status.as_str().cmp(other.status.as_str()),
            MaintenanceSortKey::MaintenanceType => {
                self.maintenance_type.as_str().cmp(other.maintenance_type.as_str())
            }
            MaintenanceSortKey::EstimatedCost => compare_amount(self.estimated_cost, other.estimated_cost),
            MaintenanceSortKey::ActualCost => compare_amount(self.actual_cost, other.actual_cost),
        }
    }
}

impl Record for EventParticipant {
    type Field = ParticipantField;
    type SortKey = ParticipantSortKey;

    const ENTITY: &'static str = "participant";

    fn id(&self) -> i64 {
        self.id
    }

    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        let mut fields = Vec::new();
        push_optional(&mut fields, &self.user_name);
        push_optional(&mut fields, &self.user_email);
        push_optional(&mut fields, &self.notes);
        fields
    }

    fn field_value(&self, field: ParticipantField) -> Option<Cow<'_, str>> {
        match field {
            ParticipantField::Status => Some(Cow::Borrowed(self.status.as_str())),
        }
    }

    fn primary_date(&self) -> Option<&str> {
        Some(&self.registered_at)
    }

    fn compare_by(&self, other: &Self, key: ParticipantSortKey) -> Ordering {
        match key {
            ParticipantSortKey::Name => {
                compare_optional_text(self.user_name.as_deref(), other.user_name.as_deref())
            }
            ParticipantSortKey::RegisteredAt => self.registered_at.cmp(&other.registered_at),
            ParticipantSortKey::Status => self.status.as_str().cmp(other.status.as_str()),
        }
    }
}

impl Record for CourtPricing {
    type Field = CourtPricingField;
    type SortKey = CourtPricingSortKey;

    const ENTITY: &'static str = "court_pricing";

    fn id(&self) -> i64 {
        self.id
    }

    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        let mut fields = Vec::new();
        push_optional(&mut fields, &self.court_name);
        push_optional(&mut fields, &self.venue_name);
        push_optional(&mut fields, &self.sport_type);
        push_optional(&mut fields, &self.description);
        fields
    }

    fn field_value(&self, field: CourtPricingField) -> Option<Cow<'_, str>> {
        match field {
            CourtPricingField::SportType => self.sport_type.as_deref().map(Cow::Borrowed),
            CourtPricingField::Venue => self.venue_name.as_deref().map(Cow::Borrowed),
            CourtPricingField::Court => id_value(self.court),
            CourtPricingField::DayOfWeek => self.day_of_week.map(|day| Cow::Owned(day.to_string())),
            CourtPricingField::PeakHour => flag(self.is_peak_hour),
            CourtPricingField::Active => flag(self.is_active),
        }
    }

    fn primary_date(&self) -> Option<&str> {
        None
    }

    fn compare_by(&self, other: &Self, key: CourtPricingSortKey) -> Ordering {
        match key {
            CourtPricingSortKey::Price => self.price_per_hour.total_cmp(&other.price_per_hour),
            CourtPricingSortKey::StartTime => self.start_time.cmp(&other.start_time),
            CourtPricingSortKey::Court => {
                compare_optional_text(self.court_name.as_deref(), other.court_name.as_deref())
            }
            CourtPricingSortKey::Venue => {
                compare_optional_text(self.venue_name.as_deref(), other.venue_name.as_deref())
            }
        }
    }
}

impl Record for ServicePricing {
    type Field = ServicePricingField;
    type SortKey = ServicePricingSortKey;

    const ENTITY: &'static str = "service_pricing";

    fn id(&self) -> i64 {
        self.id
    }

    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        let mut fields = vec![Cow::Borrowed(self.name.as_str())];
        push_optional(&mut fields, &self.description);
        push_optional(&mut fields, &self.service_type);
        fields
    }

    fn field_value(&self, field: ServicePricingField) -> Option<Cow<'_, str>> {
        match field {
            ServicePricingField::ServiceType => self.service_type.as_deref().map(Cow::Borrowed),
            ServicePricingField::Active => flag(self.is_active),
        }
    }

    fn primary_date(&self) -> Option<&str> {
        None
    }

    fn compare_by(&self, other: &Self, key: ServicePricingSortKey) -> Ordering {
        match key {
            ServicePricingSortKey::Name => compare_text(&self.name, &other.name),
            ServicePricingSortKey::Price => self.price.total_cmp(&other.price),
        }
    }
}

impl Record for PricingPromotion {
    type Field = PromotionField;
    type SortKey = PromotionSortKey;

    const ENTITY: &'static str = "promotion";

    fn id(&self) -> i64 {
        self.id
    }

    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        let mut fields = vec![Cow::Borrowed(self.title.as_str())];
        push_optional(&mut fields, &self.description);
        push_optional(&mut fields, &self.code);
        fields
    }

    fn field_value(&self, field: PromotionField) -> Option<Cow<'_, str>> {
        match field {
            PromotionField::DiscountType => Some(Cow::Borrowed(self.discount_type.as_str())),
            PromotionField::Active => flag(self.is_active),
        }
    }

    fn primary_date(&self) -> Option<&str> {
        Some(&self.start_date)
    }

    fn compare_by(&self, other: &Self, key: PromotionSortKey) -> Ordering {
        match key {
            PromotionSortKey::Title => compare_text(&self.title, &other.title),
            PromotionSortKey::StartDate => self.start_date.cmp(&other.start_date),
            PromotionSortKey::EndDate => self.end_date.cmp(&other.end_date),
            PromotionSortKey::Discount => self.discount_value.total_cmp(&other.discount_value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords_round_trip_through_from_str() {
        for key in MaintenanceSortKey::ALL {
            assert_eq!(key.as_str().parse::<MaintenanceSortKey>().unwrap(), *key);
        }
        for field in EventField::ALL {
            assert_eq!(field.as_str().parse::<EventField>().unwrap(), *field);
        }
    }

    #[test]
    fn test_unknown_keyword_lists_choices() {
        let err = "colour".parse::<EventSortKey>().unwrap_err();
        let message = err.to_string();
        assert!(message.contains("colour"));
        assert!(message.contains("start_date"));
    }

    #[test]
    fn test_maintenance_search_includes_identifier() {
        let record: Maintenance = serde_json::from_value(serde_json::json!({
            "id": 42,
            "title": "Replace net",
            "maintenance_type": "corrective",
            "priority": "low",
            "status": "scheduled",
            "scheduled_date": "2024-05-10",
            "equipment_name": "Net post",
        }))
        .unwrap();
        let fields = record.search_fields();
        assert!(fields.iter().any(|f| f == "42"));
        assert!(fields.iter().any(|f| f == "Net post"));
        assert_eq!(record.field_value(MaintenanceField::AssignedTo), None);
    }
}
