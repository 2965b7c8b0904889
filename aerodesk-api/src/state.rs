use std::sync::Arc;

use aerodesk_store::AdminStorage;

#[derive(Clone, Default)]
pub struct AppState {
    pub storage: Arc<AdminStorage>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}
