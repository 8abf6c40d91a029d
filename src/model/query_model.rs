use serde::Serialize;

use crate::model::conditions::{
    AggregateCondition, CaseCondition, FilterCondition, HavingCondition, JoinCondition,
};

/// All condition lists extracted from one query.
///
/// Each list keeps the order in which its conditions occur in the source query.
/// The model is built once and only read afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryModel {
    joins: Vec<JoinCondition>,
    filters: Vec<FilterCondition>,
    aggregates: Vec<AggregateCondition>,
    case_conditions: Vec<CaseCondition>,
    having_conditions: Vec<HavingCondition>,
}

impl QueryModel {
    /// Assemble a model from already-extracted condition lists.
    pub fn new(
        joins: Vec<JoinCondition>,
        filters: Vec<FilterCondition>,
        aggregates: Vec<AggregateCondition>,
        case_conditions: Vec<CaseCondition>,
        having_conditions: Vec<HavingCondition>,
    ) -> Self {
        Self {
            joins,
            filters,
            aggregates,
            case_conditions,
            having_conditions,
        }
    }

    /// Equality joins, in join-clause order.
    pub fn joins(&self) -> &[JoinCondition] {
        &self.joins
    }

    /// WHERE-clause filters, in predicate order.
    pub fn filters(&self) -> &[FilterCondition] {
        &self.filters
    }

    /// Function-call projections, in projection order.
    pub fn aggregates(&self) -> &[AggregateCondition] {
        &self.aggregates
    }

    /// CASE branches (currently always empty).
    pub fn case_conditions(&self) -> &[CaseCondition] {
        &self.case_conditions
    }

    /// HAVING comparisons, in predicate order.
    pub fn having_conditions(&self) -> &[HavingCondition] {
        &self.having_conditions
    }

    /// Returns `true` when no condition of any category was extracted.
    pub fn is_empty(&self) -> bool {
        self.joins.is_empty()
            && self.filters.is_empty()
            && self.aggregates.is_empty()
            && self.case_conditions.is_empty()
            && self.having_conditions.is_empty()
    }
}
