/// Filter, join, aggregate, having, and case condition records.
pub mod conditions;
/// Immutable aggregate of every condition list extracted from one query.
pub mod query_model;
/// Generated scenarios and their type, criticality, and intent enums.
pub mod scenario;

pub use conditions::{
    AggregateCondition, CaseCondition, FilterCondition, FilterOperator, HavingCondition,
    HavingOperator, JoinCondition,
};
pub use query_model::QueryModel;
pub use scenario::{Criticality, Scenario, ScenarioType, TestIntent};
