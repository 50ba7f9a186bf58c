use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, SecondsFormat, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::query::entities::errors::QueryError;

/// Combinator of a condition group. Wire codes: 0 = And, 1 = Or.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, ToSchema)]
pub enum LogicalOperator {
    #[default]
    And,
    Or,
}

impl LogicalOperator {
    pub fn code(self) -> i32 {
        match self {
            LogicalOperator::And => 0,
            LogicalOperator::Or => 1,
        }
    }
}

impl TryFrom<i32> for LogicalOperator {
    type Error = QueryError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(LogicalOperator::And),
            1 => Ok(LogicalOperator::Or),
            _ => Err(QueryError::UnknownOperator(code.to_string())),
        }
    }
}

impl FromStr for LogicalOperator {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(code) = s.parse::<i32>() {
            return LogicalOperator::try_from(code);
        }
        match s.to_ascii_lowercase().as_str() {
            "and" => Ok(LogicalOperator::And),
            "or" => Ok(LogicalOperator::Or),
            _ => Err(QueryError::UnknownOperator(s.to_string())),
        }
    }
}

/// Sort direction. Wire codes: 0 = Ascending, 1 = Descending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, ToSchema)]
pub enum SortOrientation {
    #[default]
    Ascending,
    Descending,
}

impl SortOrientation {
    pub fn code(self) -> i32 {
        match self {
            SortOrientation::Ascending => 0,
            SortOrientation::Descending => 1,
        }
    }
}

impl TryFrom<i32> for SortOrientation {
    type Error = QueryError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(SortOrientation::Ascending),
            1 => Ok(SortOrientation::Descending),
            _ => Err(QueryError::UnknownOperator(code.to_string())),
        }
    }
}

impl FromStr for SortOrientation {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(code) = s.parse::<i32>() {
            return SortOrientation::try_from(code);
        }
        match s.to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortOrientation::Ascending),
            "desc" | "descending" => Ok(SortOrientation::Descending),
            _ => Err(QueryError::UnknownOperator(s.to_string())),
        }
    }
}

/// Relational test applied by a condition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, ToSchema)]
pub enum RelationalOperator {
    #[default]
    Equal,
    NotEqual,
    GreaterThan,
    GreaterOrEqual,
    LessThan,
    LessOrEqual,
    Contains,
    NotContains,
    StartsWith,
    EndsWith,
    In,
    NotIn,
}

impl RelationalOperator {
    pub const ALL: [RelationalOperator; 12] = [
        RelationalOperator::Equal,
        RelationalOperator::NotEqual,
        RelationalOperator::GreaterThan,
        RelationalOperator::GreaterOrEqual,
        RelationalOperator::LessThan,
        RelationalOperator::LessOrEqual,
        RelationalOperator::Contains,
        RelationalOperator::NotContains,
        RelationalOperator::StartsWith,
        RelationalOperator::EndsWith,
        RelationalOperator::In,
        RelationalOperator::NotIn,
    ];

    /// Stable wire code; the position in [`RelationalOperator::ALL`].
    pub fn code(self) -> i32 {
        match self {
            RelationalOperator::Equal => 0,
            RelationalOperator::NotEqual => 1,
            RelationalOperator::GreaterThan => 2,
            RelationalOperator::GreaterOrEqual => 3,
            RelationalOperator::LessThan => 4,
            RelationalOperator::LessOrEqual => 5,
            RelationalOperator::Contains => 6,
            RelationalOperator::NotContains => 7,
            RelationalOperator::StartsWith => 8,
            RelationalOperator::EndsWith => 9,
            RelationalOperator::In => 10,
            RelationalOperator::NotIn => 11,
        }
    }
}

impl TryFrom<i32> for RelationalOperator {
    type Error = QueryError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        usize::try_from(code)
            .ok()
            .and_then(|index| RelationalOperator::ALL.get(index).copied())
            .ok_or_else(|| QueryError::UnknownOperator(code.to_string()))
    }
}

impl FromStr for RelationalOperator {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(code) = s.parse::<i32>() {
            return RelationalOperator::try_from(code);
        }
        match s.to_ascii_lowercase().as_str() {
            "eq" => Ok(RelationalOperator::Equal),
            "ne" => Ok(RelationalOperator::NotEqual),
            "gt" => Ok(RelationalOperator::GreaterThan),
            "gte" => Ok(RelationalOperator::GreaterOrEqual),
            "lt" => Ok(RelationalOperator::LessThan),
            "lte" => Ok(RelationalOperator::LessOrEqual),
            "contains" => Ok(RelationalOperator::Contains),
            "ncontains" => Ok(RelationalOperator::NotContains),
            "startswith" => Ok(RelationalOperator::StartsWith),
            "endswith" => Ok(RelationalOperator::EndsWith),
            "in" => Ok(RelationalOperator::In),
            "nin" => Ok(RelationalOperator::NotIn),
            _ => Err(QueryError::UnknownOperator(s.to_string())),
        }
    }
}

/// Closed set of semantic type tags a condition value can carry.
///
/// Tags are matched case-sensitively against their wire names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, ToSchema)]
pub enum DataType {
    Boolean,
    Byte,
    Int16,
    Int32,
    Int64,
    Single,
    Double,
    Decimal,
    Char,
    #[default]
    String,
    Guid,
    DateTime,
}

impl DataType {
    pub fn as_str(self) -> &'static str {
        match self {
            DataType::Boolean => "Boolean",
            DataType::Byte => "Byte",
            DataType::Int16 => "Int16",
            DataType::Int32 => "Int32",
            DataType::Int64 => "Int64",
            DataType::Single => "Single",
            DataType::Double => "Double",
            DataType::Decimal => "Decimal",
            DataType::Char => "Char",
            DataType::String => "String",
            DataType::Guid => "Guid",
            DataType::DateTime => "DateTime",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DataType {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Boolean" => Ok(DataType::Boolean),
            "Byte" => Ok(DataType::Byte),
            "Int16" => Ok(DataType::Int16),
            "Int32" => Ok(DataType::Int32),
            "Int64" => Ok(DataType::Int64),
            "Single" => Ok(DataType::Single),
            "Double" => Ok(DataType::Double),
            "Decimal" => Ok(DataType::Decimal),
            "Char" => Ok(DataType::Char),
            "String" => Ok(DataType::String),
            "Guid" => Ok(DataType::Guid),
            "DateTime" => Ok(DataType::DateTime),
            _ => Err(QueryError::UnknownDataType(s.to_string())),
        }
    }
}

/// A single typed value compared by a condition.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum LeafValue {
    Boolean(bool),
    Byte(u8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    Single(f32),
    Double(f64),
    Decimal(Decimal),
    Char(char),
    String(String),
    Guid(Uuid),
    DateTime(DateTime<Utc>),
}

impl LeafValue {
    pub fn data_type(&self) -> DataType {
        match self {
            LeafValue::Boolean(_) => DataType::Boolean,
            LeafValue::Byte(_) => DataType::Byte,
            LeafValue::Int16(_) => DataType::Int16,
            LeafValue::Int32(_) => DataType::Int32,
            LeafValue::Int64(_) => DataType::Int64,
            LeafValue::Single(_) => DataType::Single,
            LeafValue::Double(_) => DataType::Double,
            LeafValue::Decimal(_) => DataType::Decimal,
            LeafValue::Char(_) => DataType::Char,
            LeafValue::String(_) => DataType::String,
            LeafValue::Guid(_) => DataType::Guid,
            LeafValue::DateTime(_) => DataType::DateTime,
        }
    }
}

/// Raw wire form, the inverse of coercion.
impl fmt::Display for LeafValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LeafValue::Boolean(v) => write!(f, "{v}"),
            LeafValue::Byte(v) => write!(f, "{v}"),
            LeafValue::Int16(v) => write!(f, "{v}"),
            LeafValue::Int32(v) => write!(f, "{v}"),
            LeafValue::Int64(v) => write!(f, "{v}"),
            LeafValue::Single(v) => write!(f, "{v}"),
            LeafValue::Double(v) => write!(f, "{v}"),
            LeafValue::Decimal(v) => write!(f, "{v}"),
            LeafValue::Char(v) => write!(f, "{v}"),
            LeafValue::String(v) => f.write_str(v),
            LeafValue::Guid(v) => write!(f, "{}", v.hyphenated()),
            LeafValue::DateTime(v) => {
                f.write_str(&v.to_rfc3339_opts(SecondsFormat::AutoSi, true))
            }
        }
    }
}

/// Value of a condition: one leaf or an ordered sequence of leaves.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ConditionValue {
    Scalar(LeafValue),
    Collection(Vec<LeafValue>),
}

impl ConditionValue {
    pub fn is_collection(&self) -> bool {
        matches!(self, ConditionValue::Collection(_))
    }

    /// Type of the scalar, or of the first element of a collection.
    /// Empty collections report `String`.
    pub fn element_data_type(&self) -> DataType {
        match self {
            ConditionValue::Scalar(leaf) => leaf.data_type(),
            ConditionValue::Collection(items) => items
                .first()
                .map(LeafValue::data_type)
                .unwrap_or_default(),
        }
    }
}

impl From<LeafValue> for ConditionValue {
    fn from(value: LeafValue) -> Self {
        ConditionValue::Scalar(value)
    }
}

impl From<Vec<LeafValue>> for ConditionValue {
    fn from(values: Vec<LeafValue>) -> Self {
        ConditionValue::Collection(values)
    }
}

macro_rules! leaf_conversions {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for LeafValue {
                fn from(value: $ty) -> Self {
                    LeafValue::$variant(value.into())
                }
            }

            impl From<$ty> for ConditionValue {
                fn from(value: $ty) -> Self {
                    ConditionValue::Scalar(LeafValue::from(value))
                }
            }

            impl From<Vec<$ty>> for ConditionValue {
                fn from(values: Vec<$ty>) -> Self {
                    ConditionValue::Collection(values.into_iter().map(LeafValue::from).collect())
                }
            }
        )*
    };
}

leaf_conversions!(
    bool => Boolean,
    u8 => Byte,
    i16 => Int16,
    i32 => Int32,
    i64 => Int64,
    f32 => Single,
    f64 => Double,
    Decimal => Decimal,
    char => Char,
    String => String,
    &str => String,
    Uuid => Guid,
    DateTime<Utc> => DateTime,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relational_operator_codes_are_stable() {
        for (index, op) in RelationalOperator::ALL.iter().enumerate() {
            assert_eq!(op.code(), index as i32);
            assert_eq!(RelationalOperator::try_from(index as i32), Ok(*op));
        }
        assert!(RelationalOperator::try_from(12).is_err());
        assert!(RelationalOperator::try_from(-1).is_err());
    }

    #[test]
    fn test_operator_mnemonics() {
        assert_eq!("gte".parse(), Ok(RelationalOperator::GreaterOrEqual));
        assert_eq!("NIN".parse(), Ok(RelationalOperator::NotIn));
        assert_eq!(" 1 ".parse(), Ok(LogicalOperator::Or));
        assert_eq!("desc".parse(), Ok(SortOrientation::Descending));
        assert!("xor".parse::<LogicalOperator>().is_err());
    }

    #[test]
    fn test_data_type_names_are_case_sensitive() {
        assert_eq!("Int32".parse(), Ok(DataType::Int32));
        assert_eq!(
            "int32".parse::<DataType>(),
            Err(QueryError::UnknownDataType("int32".to_string()))
        );
        assert!("Object".parse::<DataType>().is_err());
    }

    #[test]
    fn test_element_data_type() {
        assert_eq!(ConditionValue::from(5).element_data_type(), DataType::Int32);
        assert_eq!(
            ConditionValue::from(vec![Uuid::nil()]).element_data_type(),
            DataType::Guid
        );
        assert_eq!(
            ConditionValue::Collection(Vec::new()).element_data_type(),
            DataType::String
        );
    }

    #[test]
    fn test_leaf_wire_form() {
        let id = Uuid::parse_str("{6f9619ff-8b86-d011-b42d-00cf4fc964ff}").unwrap();
        assert_eq!(
            LeafValue::Guid(id).to_string(),
            "6f9619ff-8b86-d011-b42d-00cf4fc964ff"
        );
        let at = DateTime::parse_from_rfc3339("2024-03-01T10:00:00+02:00")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(LeafValue::DateTime(at).to_string(), "2024-03-01T08:00:00Z");
    }

    #[test]
    fn test_json_shape() {
        let value = ConditionValue::from(vec!["Paris", "Lyon"]);
        assert_eq!(
            serde_json::to_value(&value).unwrap(),
            serde_json::json!(["Paris", "Lyon"])
        );
        assert_eq!(
            serde_json::to_value(RelationalOperator::GreaterOrEqual).unwrap(),
            serde_json::json!("GreaterOrEqual")
        );
        assert_eq!(
            serde_json::to_value(ConditionValue::from(true)).unwrap(),
            serde_json::json!(true)
        );
    }
}
