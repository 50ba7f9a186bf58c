use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::query::{
    entities::errors::QueryError,
    value_objects::{ConditionValue, DataType, RelationalOperator},
};

/// A single field-level relational test.
///
/// `data_type` and `is_collection` are fixed at construction: either taken
/// from the encoded input, or inferred from `value` when built in code. A
/// present value always agrees with both.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Condition {
    field_name: String,
    #[schema(value_type = Option<Object>)]
    value: Option<ConditionValue>,
    operator: RelationalOperator,
    data_type: DataType,
    is_collection: bool,
}

impl Condition {
    /// Builds a condition whose type tag and collection flag are inferred from
    /// `value`. An absent value infers `String` and a scalar.
    pub fn new(
        field_name: impl Into<String>,
        value: Option<ConditionValue>,
        operator: RelationalOperator,
    ) -> Result<Self, QueryError> {
        let (data_type, is_collection) = match &value {
            Some(value) => (value.element_data_type(), value.is_collection()),
            None => (DataType::String, false),
        };

        Self::with_data_type(field_name, value, operator, data_type, is_collection)
    }

    /// Builds a condition with an explicit type tag and collection flag.
    ///
    /// Fails when a present `value` disagrees with them: a scalar of another
    /// type, a collection element of another type, or a scalar/collection
    /// shape that contradicts `is_collection`.
    pub fn with_data_type(
        field_name: impl Into<String>,
        value: Option<ConditionValue>,
        operator: RelationalOperator,
        data_type: DataType,
        is_collection: bool,
    ) -> Result<Self, QueryError> {
        let field_name = field_name.into();
        if field_name.trim().is_empty() {
            return Err(QueryError::EmptyFieldName);
        }

        if let Some(value) = &value {
            if value.is_collection() != is_collection {
                return Err(QueryError::CollectionMismatch {
                    field_name,
                    is_collection,
                });
            }

            let leaves = match value {
                ConditionValue::Scalar(leaf) => std::slice::from_ref(leaf),
                ConditionValue::Collection(items) => items.as_slice(),
            };
            if leaves.iter().any(|leaf| leaf.data_type() != data_type) {
                return Err(QueryError::ValueTypeMismatch {
                    field_name,
                    data_type: data_type.to_string(),
                });
            }
        }

        Ok(Self {
            field_name,
            value,
            operator,
            data_type,
            is_collection,
        })
    }

    pub fn field_name(&self) -> &str {
        &self.field_name
    }

    pub fn value(&self) -> Option<&ConditionValue> {
        self.value.as_ref()
    }

    pub fn operator(&self) -> RelationalOperator {
        self.operator
    }

    pub fn data_type(&self) -> DataType {
        self.data_type
    }

    pub fn is_collection(&self) -> bool {
        self.is_collection
    }
}
