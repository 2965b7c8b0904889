use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::Entity;

/// A registered customer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
    pub id: u64,
    pub phone: u64,
    pub email: String,
    pub password: String,
    pub booked_tickets: bool,
    #[serde(default = "Utc::now")]
    pub date_of_creation: DateTime<Utc>,
    #[serde(default = "Utc::now", alias = "datOfUpdate")]
    pub date_of_update: DateTime<Utc>,
}

impl Entity for User {
    const KIND: &'static str = "user";

    fn id(&self) -> u64 {
        self.id
    }

    fn set_id(&mut self, id: u64) {
        self.id = id;
    }
}
