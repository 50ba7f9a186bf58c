use crate::domain::{common::QueryKitConfig, query::services::QueryKitService};

pub fn create_service(config: QueryKitConfig) -> QueryKitService {
    QueryKitService::new(config)
}
