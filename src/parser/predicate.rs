use sqlparser::ast::{BinaryOperator, Expr};

use crate::parser::expr::unwrap_nested;

/// Closed set of predicate shapes the extractor distinguishes.
///
/// Anything that is not one of the recognized leaves or connectives lands in
/// [`Predicate::Other`], so every expression classifies to exactly one variant.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate<'a> {
    /// `left = right`
    Equality {
        /// Compared expression.
        left: &'a Expr,
        /// Operand.
        right: &'a Expr,
    },
    /// `left > right`
    GreaterThan {
        /// Compared expression.
        left: &'a Expr,
        /// Operand.
        right: &'a Expr,
    },
    /// `expr BETWEEN low AND high`
    Between {
        /// Compared expression.
        expr: &'a Expr,
        /// Lower bound.
        low: &'a Expr,
        /// Upper bound.
        high: &'a Expr,
    },
    /// `expr IN (v1, v2, ...)`
    InList {
        /// Compared expression.
        expr: &'a Expr,
        /// Literal list items.
        list: &'a [Expr],
    },
    /// `expr IN (SELECT ...)`
    InSubquery {
        /// Compared expression.
        expr: &'a Expr,
        /// Textual form of the subquery.
        subquery: String,
    },
    /// `left AND right`
    Conjunction {
        /// Left operand.
        left: &'a Expr,
        /// Right operand.
        right: &'a Expr,
    },
    /// `left OR right`
    Disjunction {
        /// Left operand.
        left: &'a Expr,
        /// Right operand.
        right: &'a Expr,
    },
    /// NOT, LIKE, IS NULL, `<`, `<=`, `>=`, `<>`, negated BETWEEN/IN, and everything else.
    Other(&'a Expr),
}

impl<'a> Predicate<'a> {
    /// Classify an expression, looking through enclosing parentheses.
    pub fn classify(expr: &'a Expr) -> Self {
        let expr = unwrap_nested(expr);
        match expr {
            Expr::BinaryOp { left, op, right } => match op {
                BinaryOperator::Eq => Predicate::Equality {
                    left: left.as_ref(),
                    right: right.as_ref(),
                },
                BinaryOperator::Gt => Predicate::GreaterThan {
                    left: left.as_ref(),
                    right: right.as_ref(),
                },
                BinaryOperator::And => Predicate::Conjunction {
                    left: left.as_ref(),
                    right: right.as_ref(),
                },
                BinaryOperator::Or => Predicate::Disjunction {
                    left: left.as_ref(),
                    right: right.as_ref(),
                },
                _ => Predicate::Other(expr),
            },
            Expr::Between {
                expr: target,
                negated: false,
                low,
                high,
            } => Predicate::Between {
                expr: target.as_ref(),
                low: low.as_ref(),
                high: high.as_ref(),
            },
            Expr::InList {
                expr: target,
                list,
                negated: false,
            } => Predicate::InList {
                expr: target.as_ref(),
                list: list.as_slice(),
            },
            Expr::InSubquery {
                expr: target,
                subquery,
                negated: false,
            } => Predicate::InSubquery {
                expr: target.as_ref(),
                subquery: subquery.to_string(),
            },
            _ => Predicate::Other(expr),
        }
    }

    /// Short label for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Predicate::Equality { .. } => "equality",
            Predicate::GreaterThan { .. } => "greater-than",
            Predicate::Between { .. } => "between",
            Predicate::InList { .. } => "in-list",
            Predicate::InSubquery { .. } => "in-subquery",
            Predicate::Conjunction { .. } => "conjunction",
            Predicate::Disjunction { .. } => "disjunction",
            Predicate::Other(_) => "other",
        }
    }
}
