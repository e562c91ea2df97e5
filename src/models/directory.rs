//! Venue, court, equipment and user records used to fill form options

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Venue {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Court {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub venue: Option<i64>,
    #[serde(default)]
    pub sport_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Equipment {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub equipment_type: Option<String>,
    #[serde(default)]
    pub venue: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl UserSummary {
    /// Full name when known, otherwise the username
    pub fn display_name(&self) -> String {
        let full = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        if full.is_empty() {
            self.username.clone()
        } else {
            full
        }
    }
}

/// Everything a create/edit form needs to populate its select boxes
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormOptions {
    pub venues: Vec<Venue>,
    pub courts: Vec<Court>,
    pub equipment: Vec<Equipment>,
    pub users: Vec<UserSummary>,
}

impl FormOptions {
    /// Courts belonging to one venue
    pub fn courts_for_venue(&self, venue_id: i64) -> Vec<&Court> {
        self.courts
            .iter()
            .filter(|court| court.venue == Some(venue_id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name() {
        let mut user = UserSummary {
            id: 1,
            username: "lan.nguyen".to_string(),
            first_name: Some("Lan".to_string()),
            last_name: Some("Nguyen".to_string()),
            email: None,
        };
        assert_eq!(user.display_name(), "Lan Nguyen");

        user.first_name = None;
        user.last_name = Some(String::new());
        assert_eq!(user.display_name(), "lan.nguyen");
    }

    #[test]
    fn test_courts_for_venue() {
        let options = FormOptions {
            courts: vec![
                Court { id: 1, name: "A".to_string(), venue: Some(1), sport_type: None },
                Court { id: 2, name: "B".to_string(), venue: Some(2), sport_type: None },
                Court { id: 3, name: "C".to_string(), venue: Some(1), sport_type: None },
            ],
            ..Default::default()
        };
        let ids: Vec<i64> = options.courts_for_venue(1).iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }
}
