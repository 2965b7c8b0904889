use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Entity, Flight, User};

/// A booked seat.
///
/// Flight and user are snapshots taken from the request body; they are not
/// looked up or kept in sync with their own stores.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Ticket {
    pub id: u64,
    pub flight: Flight,
    pub user: User,
    /// Fare class, free text ("Economy", "Business", "Deluxe").
    pub rank: String,
    pub price: i64,
    #[serde(default = "Utc::now")]
    pub date_of_creation: DateTime<Utc>,
}

impl Entity for Ticket {
    const KIND: &'static str = "ticket";

    fn id(&self) -> u64 {
        self.id
    }

    fn set_id(&mut self, id: u64) {
        self.id = id;
    }
}
