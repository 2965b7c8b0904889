use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::Entity;

/// A scheduled flight with per-rank pricing and seat counts.
///
/// `number_of_available_tickets_of_each_rank` is caller-maintained. Creating
/// a ticket never decrements it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Flight {
    pub id: u64,
    pub start_date_and_time: DateTime<Utc>,
    pub end_date_and_time: DateTime<Utc>,
    pub departure_point: String,
    pub destination_point: String,
    pub price_of_tickets_of_each_rank: i64,
    pub total_number_of_tickets_of_each_rank: i64,
    pub number_of_available_tickets_of_each_rank: i64,
    #[serde(default = "Utc::now")]
    pub date_of_creation: DateTime<Utc>,
}

impl Entity for Flight {
    const KIND: &'static str = "flight";

    fn id(&self) -> u64 {
        self.id
    }

    fn set_id(&mut self, id: u64) {
        self.id = id;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names() {
        let raw = r#"{
            "id": 3,
            "startDateAndTime": "2024-06-01T08:30:00Z",
            "endDateAndTime": "2024-06-01T12:05:00Z",
            "departurePoint": "SVO",
            "destinationPoint": "LED",
            "priceOfTicketsOfEachRank": 4500,
            "totalNumberOfTicketsOfEachRank": 60,
            "numberOfAvailableTicketsOfEachRank": 60,
            "dateOfCreation": "2024-05-01T00:00:00Z"
        }"#;

        let flight: Flight = serde_json::from_str(raw).unwrap();
        assert_eq!(flight.id(), 3);
        assert_eq!(flight.destination_point, "LED");

        let back: Flight = serde_json::from_value(serde_json::to_value(&flight).unwrap()).unwrap();
        assert_eq!(back, flight);
    }
}
