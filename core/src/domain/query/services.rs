use tracing::instrument;

use crate::domain::{
    common::{ParserLimits, QueryKitConfig},
    query::{
        entities::{errors::QueryError, query_request::QueryRequest},
        parser::QueryRequestParser,
        ports::{QueryRequestService, ValueSource},
    },
};

#[derive(Clone, Debug, Default)]
pub struct QueryKitService {
    pub limits: ParserLimits,
}

impl QueryKitService {
    pub fn new(config: QueryKitConfig) -> Self {
        Self {
            limits: config.limits,
        }
    }
}

impl QueryRequestService for QueryKitService {
    #[instrument(level = "debug", skip_all)]
    fn build_query_request(&self, values: &dyn ValueSource) -> Result<QueryRequest, QueryError> {
        QueryRequestParser::new(values, &self.limits).parse()
    }
}
