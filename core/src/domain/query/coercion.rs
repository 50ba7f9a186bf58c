use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::domain::query::{
    entities::errors::QueryError,
    keys::COLLECTION_DELIMITER,
    value_objects::{
        ConditionValue, DataType, LeafValue, LogicalOperator, RelationalOperator, SortOrientation,
    },
};

/// Conversion from a raw request string. `None` means the string does not
/// represent a value of this type.
pub trait FromRawValue: Sized {
    fn from_raw(raw: &str) -> Option<Self>;
}

/// Converts an optional raw value into `T`.
///
/// Absent, empty and whitespace-only input never parse.
pub fn try_parse_primitive<T: FromRawValue>(raw: Option<&str>) -> Option<T> {
    let raw = raw?;
    if raw.trim().is_empty() {
        return None;
    }
    T::from_raw(raw)
}

impl FromRawValue for String {
    fn from_raw(raw: &str) -> Option<Self> {
        Some(raw.to_string())
    }
}

impl FromRawValue for bool {
    fn from_raw(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.eq_ignore_ascii_case("true") {
            Some(true)
        } else if raw.eq_ignore_ascii_case("false") {
            Some(false)
        } else {
            None
        }
    }
}

impl FromRawValue for char {
    fn from_raw(raw: &str) -> Option<Self> {
        let mut chars = raw.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c),
            _ => None,
        }
    }
}

impl FromRawValue for DateTime<Utc> {
    fn from_raw(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if let Ok(at) = DateTime::parse_from_rfc3339(raw) {
            return Some(at.with_timezone(&Utc));
        }
        for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
            if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
                return Some(naive.and_utc());
            }
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|naive| naive.and_utc())
    }
}

impl FromRawValue for Uuid {
    fn from_raw(raw: &str) -> Option<Self> {
        Uuid::parse_str(raw.trim()).ok()
    }
}

macro_rules! from_str_raw_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FromRawValue for $ty {
                fn from_raw(raw: &str) -> Option<Self> {
                    <$ty as FromStr>::from_str(raw.trim()).ok()
                }
            }
        )*
    };
}

from_str_raw_value!(
    u8,
    i16,
    i32,
    i64,
    f32,
    f64,
    Decimal,
    LogicalOperator,
    RelationalOperator,
    SortOrientation
);

/// Converts one raw element to the leaf type named by `data_type`.
pub fn coerce_scalar(data_type: DataType, raw: &str) -> Result<LeafValue, QueryError> {
    let leaf = match data_type {
        DataType::Boolean => bool::from_raw(raw).map(LeafValue::Boolean),
        DataType::Byte => u8::from_raw(raw).map(LeafValue::Byte),
        DataType::Int16 => i16::from_raw(raw).map(LeafValue::Int16),
        DataType::Int32 => i32::from_raw(raw).map(LeafValue::Int32),
        DataType::Int64 => i64::from_raw(raw).map(LeafValue::Int64),
        DataType::Single => f32::from_raw(raw).map(LeafValue::Single),
        DataType::Double => f64::from_raw(raw).map(LeafValue::Double),
        DataType::Decimal => Decimal::from_raw(raw).map(LeafValue::Decimal),
        DataType::Char => char::from_raw(raw).map(LeafValue::Char),
        DataType::String => String::from_raw(raw).map(LeafValue::String),
        DataType::Guid => Uuid::from_raw(raw).map(LeafValue::Guid),
        DataType::DateTime => DateTime::<Utc>::from_raw(raw).map(LeafValue::DateTime),
    };

    leaf.ok_or_else(|| QueryError::InvalidValue {
        data_type: data_type.to_string(),
        raw: raw.to_string(),
    })
}

/// Converts a raw value to a scalar, or, when `is_collection` is set, splits
/// it on `~` and converts every element with the same type.
///
/// A single element that fails to convert fails the whole value.
pub fn coerce_value(
    data_type: DataType,
    raw: &str,
    is_collection: bool,
) -> Result<ConditionValue, QueryError> {
    if !is_collection {
        return coerce_scalar(data_type, raw).map(ConditionValue::Scalar);
    }

    raw.split(COLLECTION_DELIMITER)
        .map(|part| coerce_scalar(data_type, part))
        .collect::<Result<Vec<_>, _>>()
        .map(ConditionValue::Collection)
}

/// Resolves the type tag and coerces `raw`. An absent raw value is `Ok(None)`.
pub fn coerce_leaf(
    data_type: &str,
    raw: Option<&str>,
    is_collection: bool,
) -> Result<Option<ConditionValue>, QueryError> {
    let data_type = DataType::from_str(data_type)?;
    raw.map(|raw| coerce_value(data_type, raw, is_collection))
        .transpose()
}
