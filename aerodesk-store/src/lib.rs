pub mod admin;
pub mod app_config;
pub mod entity_store;

pub use admin::AdminStorage;
pub use entity_store::EntityStore;
