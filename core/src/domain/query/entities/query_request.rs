use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::query::entities::{condition_group::ConditionGroup, sort_field::SortField};

/// Typed, hierarchical description of a list query.
///
/// Built once per parse (or through
/// [`QueryRequestBuilder`](crate::domain::query::builder::QueryRequestBuilder))
/// and handed to the executor as a snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
pub struct QueryRequest {
    pub page: Option<i32>,
    pub page_size: Option<i32>,
    pub search_value: Option<String>,
    pub sort_fields: Vec<SortField>,
    pub root_group: ConditionGroup,
}

impl QueryRequest {
    /// Sort fields in presentation order: ascending `sort_index`, ties kept in
    /// discovery order.
    pub fn ordered_sort_fields(&self) -> Vec<&SortField> {
        let mut fields: Vec<&SortField> = self.sort_fields.iter().collect();
        fields.sort_by_key(|field| field.sort_index());
        fields
    }

    pub fn has_conditions(&self) -> bool {
        !self.root_group.is_empty()
    }
}
