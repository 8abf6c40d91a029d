use sqlparser::ast::{Expr, JoinConstraint, JoinOperator, Select};
use tracing::debug;

use crate::model::JoinCondition;
use crate::parser::predicate::Predicate;

/// Append one [`JoinCondition`] per explicit join whose ON clause is a single equality.
pub fn extract_joins(select: &Select, joins: &mut Vec<JoinCondition>) {
    for from_item in &select.from {
        for join in &from_item.joins {
            let Some(on_expr) = join_on_expr(&join.join_operator) else {
                continue;
            };
            if let Predicate::Equality { left, right } = Predicate::classify(on_expr) {
                joins.push(JoinCondition {
                    left_column: left.to_string(),
                    right_column: right.to_string(),
                });
            } else {
                debug!(on = %on_expr, "skipping join without a single-equality ON clause");
            }
        }
    }
}

/// Extract the ON expression from a `JoinOperator`, if present.
fn join_on_expr(op: &JoinOperator) -> Option<&Expr> {
    use JoinOperator::{FullOuter, Inner, Join, Left, LeftOuter, Right, RightOuter};
    let (Join(c) | Inner(c) | Left(c) | LeftOuter(c) | Right(c) | RightOuter(c) | FullOuter(c)) =
        op
    else {
        return None;
    };
    if let JoinConstraint::On(expr) = c {
        Some(expr)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlparser::ast::{SetExpr, Statement};
    use sqlparser::dialect::GenericDialect;
    use sqlparser::parser::Parser;

    fn joins_of(sql: &str) -> Vec<JoinCondition> {
        let statements = Parser::parse_sql(&GenericDialect {}, sql).unwrap();
        let Statement::Query(query) = &statements[0] else {
            panic!("expected query");
        };
        let SetExpr::Select(select) = query.body.as_ref() else {
            panic!("expected select");
        };
        let mut joins = Vec::new();
        extract_joins(select, &mut joins);
        joins
    }

    #[test]
    fn equality_joins_are_recorded_for_every_on_join_kind() {
        let joins = joins_of(
            "SELECT * FROM a \
             JOIN b ON a.id = b.a_id \
             LEFT JOIN c ON (b.id = c.b_id) \
             RIGHT OUTER JOIN d ON c.id = d.c_id \
             FULL OUTER JOIN e ON d.id = e.d_id",
        );
        let pairs: Vec<(&str, &str)> = joins
            .iter()
            .map(|j| (j.left_column.as_str(), j.right_column.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("a.id", "b.a_id"),
                ("b.id", "c.b_id"),
                ("c.id", "d.c_id"),
                ("d.id", "e.d_id"),
            ]
        );
    }

    #[test]
    fn compound_or_non_equality_on_clauses_are_skipped() {
        let joins = joins_of(
            "SELECT * FROM a \
             JOIN b ON a.id = b.a_id AND b.year >= 2024 \
             JOIN c ON a.id > c.a_id \
             JOIN d USING (id) \
             CROSS JOIN e",
        );
        assert!(joins.is_empty(), "unexpected joins: {joins:?}");
    }
}
