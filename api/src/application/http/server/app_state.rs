use std::sync::Arc;

use querykit_core::domain::query::services::QueryKitService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: QueryKitService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: QueryKitService) -> Self {
        Self { args, service }
    }
}
