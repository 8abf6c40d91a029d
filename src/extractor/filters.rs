use sqlparser::ast::Expr;
use tracing::debug;

use crate::error::ExtractError;
use crate::model::{FilterCondition, FilterOperator};
use crate::parser::predicate::Predicate;

/// Walk a WHERE predicate and append one [`FilterCondition`] per recognized leaf.
///
/// AND and OR are both flattened: a leaf reachable only through an OR branch is
/// recorded exactly like one that is always required. Unrecognized leaves are
/// skipped.
pub fn extract_filters(
    expr: &Expr,
    conditions: &mut Vec<FilterCondition>,
) -> Result<(), ExtractError> {
    match Predicate::classify(expr) {
        Predicate::Conjunction { left, right } | Predicate::Disjunction { left, right } => {
            extract_filters(left, conditions)?;
            extract_filters(right, conditions)?;
        }
        Predicate::Equality { left, right } => {
            conditions.push(FilterCondition::new(
                left.to_string(),
                FilterOperator::Eq,
                vec![right.to_string()],
            ));
        }
        Predicate::GreaterThan { left, right } => {
            conditions.push(FilterCondition::new(
                left.to_string(),
                FilterOperator::Gt,
                vec![right.to_string()],
            ));
        }
        Predicate::Between { expr, low, high } => {
            conditions.push(FilterCondition::new(
                expr.to_string(),
                FilterOperator::Between,
                vec![low.to_string(), high.to_string()],
            ));
        }
        Predicate::InList { expr, list } => {
            if list.is_empty() {
                return Err(ExtractError::UnsupportedQueryShape(format!(
                    "IN list on {expr} has no values"
                )));
            }
            conditions.push(FilterCondition::new(
                expr.to_string(),
                FilterOperator::In,
                list.iter().map(ToString::to_string).collect(),
            ));
        }
        Predicate::InSubquery { expr, subquery } => {
            conditions.push(FilterCondition::new(
                expr.to_string(),
                FilterOperator::InSubquery,
                vec![subquery],
            ));
        }
        Predicate::Other(skipped) => {
            debug!(predicate = %skipped, "skipping unsupported filter predicate");
        }
    }
    Ok(())
}
