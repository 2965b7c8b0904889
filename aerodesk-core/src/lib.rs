pub mod entity;
pub mod flight;
pub mod ticket;
pub mod user;

pub use entity::Entity;
pub use flight::Flight;
pub use ticket::Ticket;
pub use user::User;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("no such {kind}")]
    NotFound { kind: &'static str, id: u64 },
}

pub type StoreResult<T> = Result<T, StoreError>;
