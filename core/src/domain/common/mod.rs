use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, Default)]
pub struct QueryKitConfig {
    pub limits: ParserLimits,
}

/// Upper bounds applied while rebuilding a request from a value source.
///
/// Depth is counted from the root group (depth 0). Condition entries are
/// counted across the whole tree, including entries that end up dropped.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ParserLimits {
    pub max_depth: usize,
    pub max_conditions: usize,
    pub max_groups: usize,
    pub max_sort_fields: usize,
}

impl Default for ParserLimits {
    fn default() -> Self {
        Self {
            max_depth: 8,
            max_conditions: 256,
            max_groups: 64,
            max_sort_fields: 32,
        }
    }
}

impl ParserLimits {
    pub fn unbounded() -> Self {
        Self {
            max_depth: usize::MAX,
            max_conditions: usize::MAX,
            max_groups: usize::MAX,
            max_sort_fields: usize::MAX,
        }
    }
}
