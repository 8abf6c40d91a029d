use sqlparser::ast::{Select, SelectItem};

use crate::model::AggregateCondition;
use crate::parser::expr::{as_function, first_argument_text, function_name_upper};

/// Append one [`AggregateCondition`] per function-call projection.
///
/// Any function call counts, not only SQL aggregates. Only the first argument is
/// kept; calls without arguments are ignored.
pub fn extract_aggregates(select: &Select, aggregates: &mut Vec<AggregateCondition>) {
    for item in &select.projection {
        let expr = match item {
            SelectItem::UnnamedExpr(expr) | SelectItem::ExprWithAlias { expr, .. } => expr,
            _ => continue,
        };
        let Some(func) = as_function(expr) else {
            continue;
        };
        if let Some(column) = first_argument_text(func) {
            aggregates.push(AggregateCondition {
                function: function_name_upper(func),
                column,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlparser::ast::{SetExpr, Statement};
    use sqlparser::dialect::GenericDialect;
    use sqlparser::parser::Parser;

    fn aggregates_of(sql: &str) -> Vec<AggregateCondition> {
        let statements = Parser::parse_sql(&GenericDialect {}, sql).unwrap();
        let Statement::Query(query) = &statements[0] else {
            panic!("expected query");
        };
        let SetExpr::Select(select) = query.body.as_ref() else {
            panic!("expected select");
        };
        let mut aggregates = Vec::new();
        extract_aggregates(select, &mut aggregates);
        aggregates
    }

    #[test]
    fn function_projections_become_uppercased_aggregates() {
        let aggregates = aggregates_of(
            "SELECT dept, sum(o.amount) AS total, count(*), max(price, 0), now(), id FROM t",
        );
        let pairs: Vec<(&str, &str)> = aggregates
            .iter()
            .map(|a| (a.function.as_str(), a.column.as_str()))
            .collect();
        assert_eq!(pairs, vec![("SUM", "o.amount"), ("COUNT", "*"), ("MAX", "price")]);
    }

    #[test]
    fn plain_columns_and_wildcards_are_ignored() {
        assert!(aggregates_of("SELECT *, a, b.c FROM t").is_empty());
    }
}
