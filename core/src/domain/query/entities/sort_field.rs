use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::query::{entities::errors::QueryError, value_objects::SortOrientation};

/// One clause of a multi-field sort. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct SortField {
    field_name: String,
    sort_index: i32,
    orientation: SortOrientation,
}

impl SortField {
    pub fn new(
        field_name: impl Into<String>,
        orientation: SortOrientation,
        sort_index: i32,
    ) -> Result<Self, QueryError> {
        let field_name = field_name.into();
        if field_name.trim().is_empty() {
            return Err(QueryError::EmptyFieldName);
        }

        Ok(Self {
            field_name,
            sort_index,
            orientation,
        })
    }

    pub fn field_name(&self) -> &str {
        &self.field_name
    }

    pub fn sort_index(&self) -> i32 {
        self.sort_index
    }

    pub fn orientation(&self) -> SortOrientation {
        self.orientation
    }
}
