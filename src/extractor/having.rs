use sqlparser::ast::Expr;
use tracing::debug;

use crate::model::{HavingCondition, HavingOperator};
use crate::parser::expr::{as_function, first_argument_text, function_name_upper, is_literal};
use crate::parser::predicate::Predicate;

/// Walk a HAVING predicate and append the `FUNC(col) > literal` and
/// `FUNC(col) = literal` comparisons it contains.
///
/// AND/OR are flattened the same way as for WHERE filters.
pub fn extract_having(expr: &Expr, conditions: &mut Vec<HavingCondition>) {
    let (operator, left, right) = match Predicate::classify(expr) {
        Predicate::Conjunction { left, right } | Predicate::Disjunction { left, right } => {
            extract_having(left, conditions);
            extract_having(right, conditions);
            return;
        }
        Predicate::GreaterThan { left, right } => (HavingOperator::Gt, left, right),
        Predicate::Equality { left, right } => (HavingOperator::Eq, left, right),
        skipped @ (Predicate::Between { .. }
        | Predicate::InList { .. }
        | Predicate::InSubquery { .. }
        | Predicate::Other(_)) => {
            debug!(predicate = %expr, kind = skipped.kind(), "skipping unsupported HAVING predicate");
            return;
        }
    };

    let Some(func) = as_function(left) else {
        debug!(predicate = %expr, "HAVING comparison does not start with a function call");
        return;
    };
    if !is_literal(right) {
        debug!(predicate = %expr, "HAVING comparison is not against a literal");
        return;
    }
    let Some(column) = first_argument_text(func) else {
        return;
    };

    conditions.push(HavingCondition {
        function: function_name_upper(func),
        column,
        operator,
        value: right.to_string(),
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlparser::dialect::GenericDialect;
    use sqlparser::parser::Parser;

    fn having_of(sql: &str) -> Vec<HavingCondition> {
        let expr = Parser::new(&GenericDialect {})
            .try_with_sql(sql)
            .unwrap()
            .parse_expr()
            .unwrap();
        let mut conditions = Vec::new();
        extract_having(&expr, &mut conditions);
        conditions
    }

    #[test]
    fn greater_than_and_equality_shapes_are_recognized() {
        assert_eq!(
            having_of("count(e.id) > 2 AND SUM(amount) = 100"),
            vec![
                HavingCondition {
                    function: "COUNT".to_string(),
                    column: "e.id".to_string(),
                    operator: HavingOperator::Gt,
                    value: "2".to_string(),
                },
                HavingCondition {
                    function: "SUM".to_string(),
                    column: "amount".to_string(),
                    operator: HavingOperator::Eq,
                    value: "100".to_string(),
                },
            ]
        );
    }

    #[test]
    fn other_having_shapes_are_skipped() {
        for sql in [
            "COUNT(id) >= 2",
            "COUNT(id) <> 99",
            "2 < COUNT(id)",
            "dept = 'HR'",
            "COUNT(id) > other_col",
            "COUNT(id) BETWEEN 1 AND 3",
        ] {
            assert!(having_of(sql).is_empty(), "{sql} should be skipped");
        }
    }

    #[test]
    fn count_star_keeps_wildcard_as_column() {
        let conditions = having_of("COUNT(*) > 0");
        assert_eq!(conditions.len(), 1);
        assert_eq!(conditions[0].column, "*");
    }
}
