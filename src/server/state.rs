use std::sync::Arc;

use crate::features::lookup::LookupService;

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<LookupService>,
}

impl AppState {
    pub fn new(service: Arc<LookupService>) -> Self {
        Self { service }
    }
}
