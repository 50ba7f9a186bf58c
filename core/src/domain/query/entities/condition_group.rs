use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::query::{entities::condition::Condition, value_objects::LogicalOperator};

/// A node of the filter tree. Holds no reference to its parent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
pub struct ConditionGroup {
    operator: LogicalOperator,
    conditions: Vec<Condition>,
    #[schema(no_recursion)]
    sub_groups: Vec<ConditionGroup>,
}

impl ConditionGroup {
    pub fn new(operator: LogicalOperator) -> Self {
        Self {
            operator,
            conditions: Vec::new(),
            sub_groups: Vec::new(),
        }
    }

    pub fn operator(&self) -> LogicalOperator {
        self.operator
    }

    pub(crate) fn set_operator(&mut self, operator: LogicalOperator) {
        self.operator = operator;
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    pub fn sub_groups(&self) -> &[ConditionGroup] {
        &self.sub_groups
    }

    pub fn add_condition(&mut self, condition: Condition) {
        self.conditions.push(condition);
    }

    pub fn add_sub_group(&mut self, group: ConditionGroup) {
        self.sub_groups.push(group);
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty() && self.sub_groups.is_empty()
    }
}
