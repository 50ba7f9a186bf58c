use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("Field name must not be empty")]
    EmptyFieldName,

    #[error("Unknown data type: {0}")]
    UnknownDataType(String),

    #[error("Unknown operator: {0}")]
    UnknownOperator(String),

    #[error("Value {raw:?} cannot be converted to {data_type}")]
    InvalidValue { data_type: String, raw: String },

    #[error("Value of {field_name} does not match its declared type {data_type}")]
    ValueTypeMismatch {
        field_name: String,
        data_type: String,
    },

    #[error("Value of {field_name} does not match its collection flag ({is_collection})")]
    CollectionMismatch {
        field_name: String,
        is_collection: bool,
    },

    #[error("Condition group nesting exceeds the maximum depth of {max}")]
    DepthExceeded { max: usize },

    #[error("Query contains more than {max} conditions")]
    TooManyConditions { max: usize },

    #[error("Query contains more than {max} condition groups")]
    TooManyGroups { max: usize },

    #[error("Query contains more than {max} sort fields")]
    TooManySortFields { max: usize },

    #[error("end_group called without an open group")]
    GroupNotOpen,
}
