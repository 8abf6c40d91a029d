use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::GenerateError;

/// Comparison operator of a WHERE-clause filter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FilterOperator {
    /// `col = v`
    Eq,
    /// `col > v`
    Gt,
    /// `col BETWEEN lower AND upper`
    Between,
    /// `col IN (v1, v2, ...)`
    In,
    /// `col IN (SELECT ...)`
    InSubquery,
    /// Operator outside the recognized set, kept verbatim.
    ///
    /// The extractor never produces this variant; it lets callers feed
    /// arbitrary operators to the operator-table strategy.
    Other(String),
}

impl FilterOperator {
    /// SQL text of the operator as it appears in condition records.
    pub fn as_str(&self) -> &str {
        match self {
            FilterOperator::Eq => "=",
            FilterOperator::Gt => ">",
            FilterOperator::Between => "BETWEEN",
            FilterOperator::In => "IN",
            FilterOperator::InSubquery => "IN_SUBQUERY",
            FilterOperator::Other(text) => text,
        }
    }
}

impl fmt::Display for FilterOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for FilterOperator {
    fn from(value: &str) -> Self {
        let trimmed = value.trim();
        match trimmed.to_ascii_uppercase().as_str() {
            "=" => FilterOperator::Eq,
            ">" => FilterOperator::Gt,
            "BETWEEN" => FilterOperator::Between,
            "IN" => FilterOperator::In,
            "IN_SUBQUERY" => FilterOperator::InSubquery,
            _ => FilterOperator::Other(trimmed.to_string()),
        }
    }
}

impl From<String> for FilterOperator {
    fn from(value: String) -> Self {
        FilterOperator::from(value.as_str())
    }
}

impl From<FilterOperator> for String {
    fn from(value: FilterOperator) -> Self {
        value.as_str().to_string()
    }
}

/// A single WHERE-clause comparison decomposed into column, operator, and operand values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCondition {
    /// Textual form of the compared expression, usually a column reference.
    pub column: String,
    /// Comparison operator.
    pub operator: FilterOperator,
    /// Operand texts in source order (`[lower, upper]` for BETWEEN).
    pub values: Vec<String>,
}

impl FilterCondition {
    /// Build a condition without checking the value-count invariant.
    ///
    /// Call [`FilterCondition::validate`] before relying on `values` indices.
    pub fn new(
        column: impl Into<String>,
        operator: impl Into<FilterOperator>,
        values: Vec<String>,
    ) -> Self {
        Self {
            column: column.into(),
            operator: operator.into(),
            values,
        }
    }

    /// Check that the number of values matches what the operator requires.
    pub fn validate(&self) -> Result<(), GenerateError> {
        let found = self.values.len();
        let (ok, expected) = match self.operator {
            FilterOperator::Eq | FilterOperator::Gt | FilterOperator::InSubquery => {
                (found == 1, "exactly 1")
            }
            FilterOperator::Between => (found == 2, "exactly 2"),
            FilterOperator::In => (found >= 1, "at least 1"),
            FilterOperator::Other(_) => (true, "any number of"),
        };
        if ok {
            Ok(())
        } else {
            Err(GenerateError::MalformedCondition {
                column: self.column.clone(),
                operator: self.operator.to_string(),
                expected,
                found,
            })
        }
    }

    /// First operand, or an empty string when there is none.
    pub fn first_value(&self) -> &str {
        self.values.first().map_or("", String::as_str)
    }
}

/// Equality relationship between two columns from a join's ON clause.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinCondition {
    /// Left-hand side of the ON equality.
    pub left_column: String,
    /// Right-hand side of the ON equality.
    pub right_column: String,
}

/// Function-call projection such as `SUM(amount)` or `COUNT(*)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateCondition {
    /// Uppercased function name.
    pub function: String,
    /// Textual form of the first argument.
    pub column: String,
}

/// Comparison operator accepted in a HAVING predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HavingOperator {
    /// `FUNC(col) > literal`
    #[serde(rename = ">")]
    Gt,
    /// `FUNC(col) = literal`
    #[serde(rename = "=")]
    Eq,
}

impl fmt::Display for HavingOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HavingOperator::Gt => write!(f, ">"),
            HavingOperator::Eq => write!(f, "="),
        }
    }
}

/// Post-aggregation filter over a function-call result.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HavingCondition {
    /// Uppercased function name.
    pub function: String,
    /// Textual form of the function's first argument.
    pub column: String,
    /// Comparison operator.
    pub operator: HavingOperator,
    /// Literal text on the right-hand side.
    pub value: String,
}

/// `CASE WHEN condition THEN result` branch.
///
/// Reserved for CASE-expression coverage; extraction does not populate it yet.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseCondition {
    /// WHEN predicate text.
    pub condition: String,
    /// THEN result text.
    pub result: String,
}
