//! Flat key convention used to carry a [`QueryRequest`] in a query string or
//! form body.
//!
//! ```text
//! page, pageSize, search
//! __qsort[i].__n / .__i / .__o                  sort field, index, orientation
//! __cdgr.__o                                    root group operator
//! __cdgr.__cd[i].__n / .__o / .__t / .__v / .__l
//! __cdgr.__cdgr[j].__o ...                      nested groups, recursively
//! ```
//!
//! Field names, operator codes and type names must not contain `.` or `[`.
//!
//! [`QueryRequest`]: crate::domain::query::entities::QueryRequest

pub const PAGE: &str = "page";
pub const PAGE_SIZE: &str = "pageSize";
pub const SEARCH: &str = "search";

/// Separator between the elements of a collection value.
pub const COLLECTION_DELIMITER: char = '~';

pub mod sort {
    pub const ENTITY: &str = "__qsort";
    pub const FIELD_NAME: &str = "__n";
    pub const SORT_INDEX: &str = "__i";
    pub const ORIENTATION: &str = "__o";
}

pub mod group {
    pub const ENTITY: &str = "__cdgr";
    pub const OPERATOR: &str = "__o";
}

pub mod condition {
    pub const ENTITY: &str = "__cd";
    pub const FIELD_NAME: &str = "__n";
    pub const OPERATOR: &str = "__o";
    pub const DATA_TYPE: &str = "__t";
    pub const VALUE: &str = "__v";
    pub const IS_COLLECTION: &str = "__l";
}

pub const ROOT_GROUP_PREFIX: &str = group::ENTITY;

pub fn sort_key(index: usize, property: &str) -> String {
    format!("{}[{index}].{property}", sort::ENTITY)
}

pub fn group_operator_key(prefix: &str) -> String {
    format!("{prefix}.{}", group::OPERATOR)
}

pub fn condition_key(prefix: &str, index: usize, property: &str) -> String {
    format!("{prefix}.{}[{index}].{property}", condition::ENTITY)
}

pub fn sub_group_prefix(prefix: &str, index: usize) -> String {
    format!("{prefix}.{}[{index}]", group::ENTITY)
}
