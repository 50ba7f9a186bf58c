use tracing::{debug, trace, warn};

use crate::domain::{
    common::ParserLimits,
    query::{
        coercion::{FromRawValue, coerce_value, try_parse_primitive},
        entities::{
            condition::Condition, condition_group::ConditionGroup, errors::QueryError,
            query_request::QueryRequest, sort_field::SortField,
        },
        keys::{self, condition, sort},
        ports::ValueSource,
        value_objects::{DataType, LogicalOperator, RelationalOperator, SortOrientation},
    },
};

/// Single-use recursive-descent parser rebuilding a [`QueryRequest`] from a
/// flat [`ValueSource`].
///
/// Repeating runs (sort entries, conditions, sub-groups) end at the first
/// index without a field name (or operator, for groups).
pub struct QueryRequestParser<'a> {
    values: &'a dyn ValueSource,
    limits: &'a ParserLimits,
    conditions_seen: usize,
    groups_seen: usize,
}

impl<'a> QueryRequestParser<'a> {
    pub fn new(values: &'a dyn ValueSource, limits: &'a ParserLimits) -> Self {
        Self {
            values,
            limits,
            conditions_seen: 0,
            groups_seen: 0,
        }
    }

    pub fn parse(mut self) -> Result<QueryRequest, QueryError> {
        let page = self.read_present::<i32>(keys::PAGE);
        let page_size = self.read_present::<i32>(keys::PAGE_SIZE);
        let search_value = self.read::<String>(keys::SEARCH);

        let sort_fields = self.parse_sort_fields()?;

        // A missing root operator still yields an (empty) root group.
        let root_group = self
            .parse_group(keys::ROOT_GROUP_PREFIX, 0)?
            .unwrap_or_default();

        Ok(QueryRequest {
            page,
            page_size,
            search_value,
            sort_fields,
            root_group,
        })
    }

    fn read<T: FromRawValue>(&self, key: &str) -> Option<T> {
        try_parse_primitive(self.values.first_value(key).as_deref())
    }

    fn read_present<T: FromRawValue>(&self, key: &str) -> Option<T> {
        if !self.values.has_any(key) {
            return None;
        }
        self.read(key)
    }

    fn parse_sort_fields(&self) -> Result<Vec<SortField>, QueryError> {
        let mut sort_fields = Vec::new();

        for counter in 0.. {
            let Some(field_name) = self.read::<String>(&keys::sort_key(counter, sort::FIELD_NAME))
            else {
                trace!(counter, "end of sort run");
                break;
            };

            if counter >= self.limits.max_sort_fields {
                warn!(max = self.limits.max_sort_fields, "too many sort fields");
                return Err(QueryError::TooManySortFields {
                    max: self.limits.max_sort_fields,
                });
            }

            let sort_index = self
                .read::<i32>(&keys::sort_key(counter, sort::SORT_INDEX))
                .unwrap_or(0);
            let orientation = self
                .read::<SortOrientation>(&keys::sort_key(counter, sort::ORIENTATION))
                .unwrap_or_default();

            sort_fields.push(SortField::new(field_name, orientation, sort_index)?);
        }

        Ok(sort_fields)
    }

    /// Parses the group stored under `prefix`. `Ok(None)` means no group
    /// exists there, which ends the caller's sub-group run.
    fn parse_group(
        &mut self,
        prefix: &str,
        depth: usize,
    ) -> Result<Option<ConditionGroup>, QueryError> {
        let Some(operator) = self.read::<LogicalOperator>(&keys::group_operator_key(prefix)) else {
            return Ok(None);
        };

        if depth > self.limits.max_depth {
            warn!(prefix, max = self.limits.max_depth, "condition group nested too deep");
            return Err(QueryError::DepthExceeded {
                max: self.limits.max_depth,
            });
        }

        self.groups_seen += 1;
        if self.groups_seen > self.limits.max_groups {
            warn!(prefix, max = self.limits.max_groups, "too many condition groups");
            return Err(QueryError::TooManyGroups {
                max: self.limits.max_groups,
            });
        }

        let mut group = ConditionGroup::new(operator);

        for counter in 0.. {
            let Some(field_name) =
                self.read::<String>(&keys::condition_key(prefix, counter, condition::FIELD_NAME))
            else {
                trace!(prefix, counter, "end of condition run");
                break;
            };

            self.conditions_seen += 1;
            if self.conditions_seen > self.limits.max_conditions {
                warn!(prefix, max = self.limits.max_conditions, "too many conditions");
                return Err(QueryError::TooManyConditions {
                    max: self.limits.max_conditions,
                });
            }

            // An unusable entry is dropped; the run goes on.
            if let Some(condition) = self.parse_condition(prefix, counter, field_name) {
                group.add_condition(condition);
            }
        }

        for counter in 0.. {
            match self.parse_group(&keys::sub_group_prefix(prefix, counter), depth + 1)? {
                Some(sub_group) => group.add_sub_group(sub_group),
                None => break,
            }
        }

        Ok(Some(group))
    }

    fn parse_condition(&self, prefix: &str, index: usize, field_name: String) -> Option<Condition> {
        let key = |property: &str| keys::condition_key(prefix, index, property);

        let raw_operator = self.values.first_value(&key(condition::OPERATOR));
        let operator = match try_parse_primitive::<i32>(raw_operator.as_deref()) {
            Some(code) => match RelationalOperator::try_from(code) {
                Ok(operator) => operator,
                Err(error) => {
                    debug!(prefix, index, field_name = %field_name, %error, "condition skipped");
                    return None;
                }
            },
            None => try_parse_primitive::<RelationalOperator>(raw_operator.as_deref())
                .unwrap_or_default(),
        };

        let Some(type_name) = self.read::<String>(&key(condition::DATA_TYPE)) else {
            debug!(prefix, index, field_name = %field_name, "condition without data type skipped");
            return None;
        };
        let data_type = match type_name.parse::<DataType>() {
            Ok(data_type) => data_type,
            Err(error) => {
                debug!(prefix, index, field_name = %field_name, %error, "condition skipped");
                return None;
            }
        };

        let is_collection = self
            .read::<bool>(&key(condition::IS_COLLECTION))
            .unwrap_or(false);

        let value = match self.read::<String>(&key(condition::VALUE)) {
            Some(raw) => match coerce_value(data_type, &raw, is_collection) {
                Ok(value) => Some(value),
                Err(error) => {
                    debug!(prefix, index, field_name = %field_name, %error, "condition skipped");
                    return None;
                }
            },
            None => None,
        };

        Condition::with_data_type(field_name, value, operator, data_type, is_collection).ok()
    }
}
