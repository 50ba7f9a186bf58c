use crate::domain::query::{
    entities::{
        condition::Condition, condition_group::ConditionGroup, errors::QueryError,
        query_request::QueryRequest, sort_field::SortField,
    },
    value_objects::{ConditionValue, DataType, LogicalOperator, RelationalOperator, SortOrientation},
};

/// Programmatic construction of a [`QueryRequest`].
///
/// Groups opened with [`begin_group`](Self::begin_group) are tracked on an
/// explicit stack; conditions go to the innermost open group, or to the root
/// when none is open. The first invalid call is remembered and returned by
/// [`build`](Self::build).
///
/// ```
/// use querykit_core::domain::query::{
///     builder::QueryRequestBuilder, LogicalOperator, RelationalOperator, SortOrientation,
/// };
///
/// let request = QueryRequestBuilder::new()
///     .page(1)
///     .page_size(20)
///     .sort_by("created_at", SortOrientation::Descending)
///     .condition("status", "active", RelationalOperator::Equal)
///     .begin_group(LogicalOperator::Or)
///     .condition("age", 18, RelationalOperator::LessThan)
///     .condition("age", 65, RelationalOperator::GreaterOrEqual)
///     .end_group()
///     .build()
///     .unwrap();
///
/// assert_eq!(request.root_group.sub_groups().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct QueryRequestBuilder {
    page: Option<i32>,
    page_size: Option<i32>,
    search_value: Option<String>,
    sort_fields: Vec<SortField>,
    root: ConditionGroup,
    open_groups: Vec<ConditionGroup>,
    error: Option<QueryError>,
}

impl QueryRequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, page: i32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn page_size(mut self, page_size: i32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    pub fn search_value(mut self, search_value: impl Into<String>) -> Self {
        self.search_value = Some(search_value.into());
        self
    }

    /// Appends a sort field ranked after every field added so far
    /// (`max(sort_index) + 1`, starting at 1).
    pub fn sort_by(self, field_name: impl Into<String>, orientation: SortOrientation) -> Self {
        let sort_index = self
            .sort_fields
            .iter()
            .map(SortField::sort_index)
            .max()
            .unwrap_or(0)
            + 1;
        self.sort_by_index(field_name, orientation, sort_index)
    }

    pub fn sort_by_index(
        mut self,
        field_name: impl Into<String>,
        orientation: SortOrientation,
        sort_index: i32,
    ) -> Self {
        match SortField::new(field_name, orientation, sort_index) {
            Ok(field) => self.sort_fields.push(field),
            Err(error) => self.record(error),
        }
        self
    }

    /// Sets the operator of the innermost open group (or the root).
    pub fn operator(mut self, operator: LogicalOperator) -> Self {
        self.current_group().set_operator(operator);
        self
    }

    /// Adds a condition whose type tag is inferred from `value`.
    pub fn condition(
        mut self,
        field_name: impl Into<String>,
        value: impl Into<ConditionValue>,
        operator: RelationalOperator,
    ) -> Self {
        let condition = Condition::new(field_name, Some(value.into()), operator);
        self.push_condition(condition);
        self
    }

    pub fn typed_condition(
        mut self,
        field_name: impl Into<String>,
        value: Option<ConditionValue>,
        operator: RelationalOperator,
        data_type: DataType,
        is_collection: bool,
    ) -> Self {
        let condition =
            Condition::with_data_type(field_name, value, operator, data_type, is_collection);
        self.push_condition(condition);
        self
    }

    pub fn begin_group(mut self, operator: LogicalOperator) -> Self {
        self.open_groups.push(ConditionGroup::new(operator));
        self
    }

    pub fn end_group(mut self) -> Self {
        match self.open_groups.pop() {
            Some(group) => self.current_group().add_sub_group(group),
            None => self.record(QueryError::GroupNotOpen),
        }
        self
    }

    /// Closes any group still open and returns the finished request.
    pub fn build(mut self) -> Result<QueryRequest, QueryError> {
        if let Some(error) = self.error {
            return Err(error);
        }

        while let Some(group) = self.open_groups.pop() {
            self.current_group().add_sub_group(group);
        }

        Ok(QueryRequest {
            page: self.page,
            page_size: self.page_size,
            search_value: self.search_value,
            sort_fields: self.sort_fields,
            root_group: self.root,
        })
    }

    fn current_group(&mut self) -> &mut ConditionGroup {
        self.open_groups.last_mut().unwrap_or(&mut self.root)
    }

    fn push_condition(&mut self, condition: Result<Condition, QueryError>) {
        match condition {
            Ok(condition) => self.current_group().add_condition(condition),
            Err(error) => self.record(error),
        }
    }

    fn record(&mut self, error: QueryError) {
        self.error.get_or_insert(error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::query::value_objects::LeafValue;

    #[test]
    fn test_sort_by_continues_after_max_index() {
        let request = QueryRequestBuilder::new()
            .sort_by("a", SortOrientation::Ascending)
            .sort_by_index("b", SortOrientation::Descending, 7)
            .sort_by("c", SortOrientation::Ascending)
            .build()
            .unwrap();

        let indexes: Vec<i32> = request
            .sort_fields
            .iter()
            .map(SortField::sort_index)
            .collect();
        assert_eq!(indexes, vec![1, 7, 8]);
    }

    #[test]
    fn test_nested_groups_follow_the_stack() {
        let request = QueryRequestBuilder::new()
            .operator(LogicalOperator::Or)
            .condition("a", 1, RelationalOperator::Equal)
            .begin_group(LogicalOperator::And)
            .condition("b", 2, RelationalOperator::Equal)
            .begin_group(LogicalOperator::Or)
            .condition("c", 3, RelationalOperator::Equal)
            .end_group()
            .end_group()
            .condition("d", 4, RelationalOperator::Equal)
            .build()
            .unwrap();

        let root = &request.root_group;
        assert_eq!(root.operator(), LogicalOperator::Or);
        assert_eq!(root.conditions().len(), 2);
        assert_eq!(root.conditions()[1].field_name(), "d");

        let outer = &root.sub_groups()[0];
        assert_eq!(outer.conditions()[0].field_name(), "b");
        assert_eq!(outer.sub_groups()[0].operator(), LogicalOperator::Or);
        assert_eq!(
            outer.sub_groups()[0].conditions()[0].value(),
            Some(&ConditionValue::Scalar(LeafValue::Int32(3)))
        );
    }

    #[test]
    fn test_build_closes_open_groups() {
        let request = QueryRequestBuilder::new()
            .begin_group(LogicalOperator::Or)
            .begin_group(LogicalOperator::And)
            .condition("x", true, RelationalOperator::Equal)
            .build()
            .unwrap();

        let outer = &request.root_group.sub_groups()[0];
        assert_eq!(outer.operator(), LogicalOperator::Or);
        assert_eq!(outer.sub_groups()[0].conditions().len(), 1);
    }

    #[test]
    fn test_unbalanced_end_group_fails() {
        let result = QueryRequestBuilder::new().end_group().build();
        assert_eq!(result, Err(QueryError::GroupNotOpen));
    }

    #[test]
    fn test_typed_condition_must_match_its_value() {
        let result = QueryRequestBuilder::new()
            .typed_condition(
                "n",
                Some(vec![1, 2].into()),
                RelationalOperator::In,
                DataType::Int32,
                false,
            )
            .build();
        assert_eq!(
            result,
            Err(QueryError::CollectionMismatch {
                field_name: "n".to_string(),
                is_collection: false,
            })
        );

        let result = QueryRequestBuilder::new()
            .typed_condition(
                "n",
                Some("1".into()),
                RelationalOperator::Equal,
                DataType::Int32,
                false,
            )
            .build();
        assert!(matches!(result, Err(QueryError::ValueTypeMismatch { .. })));
    }

    #[test]
    fn test_first_error_wins() {
        let result = QueryRequestBuilder::new()
            .sort_by("", SortOrientation::Ascending)
            .end_group()
            .build();
        assert_eq!(result, Err(QueryError::EmptyFieldName));
    }
}
