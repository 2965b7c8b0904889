use aerodesk_core::{Flight, Ticket, User};

use crate::EntityStore;

/// The three entity stores served by the API.
///
/// Each store has its own lock, so work on one entity kind never waits on
/// another.
#[derive(Debug, Default)]
pub struct AdminStorage {
    pub users: EntityStore<User>,
    pub tickets: EntityStore<Ticket>,
    pub flights: EntityStore<Flight>,
}

impl AdminStorage {
    pub fn new() -> Self {
        Self::default()
    }
}
