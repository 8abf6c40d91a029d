use sqlparser::ast::{Query, Select, SetExpr, Statement, TableFactor, TableWithJoins};
use sqlparser::dialect::Dialect;
use tracing::debug;

use crate::error::{ExtractError, Result};
use crate::extractor::{aggregates, filters, having, joins};
use crate::model::QueryModel;
use crate::parser::sql_parser;

/// Parse `sql` with `dialect` and extract its conditions.
pub fn extract_from_sql(sql: &str, dialect: &dyn Dialect) -> Result<QueryModel> {
    let statement = sql_parser::parse_statement(sql, dialect)?;
    Ok(extract_query_model(&statement)?)
}

/// Extract every condition list from a parsed statement.
///
/// Only queries are accepted. CTE bodies are visited before the main body, and
/// derived tables in FROM before the SELECT that reads them, so that each list
/// follows source order. Subqueries inside predicates are not visited.
pub fn extract_query_model(statement: &Statement) -> std::result::Result<QueryModel, ExtractError> {
    let Statement::Query(query) = statement else {
        return Err(ExtractError::UnsupportedQueryShape(format!(
            "expected a SELECT query, found: {}",
            statement_kind(statement)
        )));
    };

    let mut selects = Vec::new();
    collect_query_selects(query, &mut selects)?;

    let mut filter_list = Vec::new();
    let mut join_list = Vec::new();
    let mut aggregate_list = Vec::new();
    let mut having_list = Vec::new();

    for select in &selects {
        if let Some(selection) = &select.selection {
            filters::extract_filters(selection, &mut filter_list)?;
        }
        joins::extract_joins(select, &mut join_list);
        aggregates::extract_aggregates(select, &mut aggregate_list);
        if let Some(having_expr) = &select.having {
            having::extract_having(having_expr, &mut having_list);
        }
    }

    debug!(
        selects = selects.len(),
        filters = filter_list.len(),
        joins = join_list.len(),
        aggregates = aggregate_list.len(),
        having = having_list.len(),
        "extracted query model"
    );

    Ok(QueryModel::new(
        join_list,
        filter_list,
        aggregate_list,
        Vec::new(),
        having_list,
    ))
}

fn collect_query_selects<'a>(
    query: &'a Query,
    selects: &mut Vec<&'a Select>,
) -> std::result::Result<(), ExtractError> {
    if let Some(with) = &query.with {
        for cte in &with.cte_tables {
            collect_query_selects(&cte.query, selects)?;
        }
    }
    collect_set_expr_selects(&query.body, selects)
}

fn collect_set_expr_selects<'a>(
    body: &'a SetExpr,
    selects: &mut Vec<&'a Select>,
) -> std::result::Result<(), ExtractError> {
    match body {
        SetExpr::Select(select) => {
            for table in &select.from {
                collect_from_selects(table, selects)?;
            }
            selects.push(select.as_ref());
            Ok(())
        }
        SetExpr::Query(query) => collect_query_selects(query, selects),
        SetExpr::SetOperation { left, right, .. } => {
            collect_set_expr_selects(left, selects)?;
            collect_set_expr_selects(right, selects)
        }
        other => Err(ExtractError::UnsupportedQueryShape(format!(
            "query body is not a SELECT: {other}"
        ))),
    }
}

fn collect_from_selects<'a>(
    table: &'a TableWithJoins,
    selects: &mut Vec<&'a Select>,
) -> std::result::Result<(), ExtractError> {
    collect_table_factor_selects(&table.relation, selects)?;
    for join in &table.joins {
        collect_table_factor_selects(&join.relation, selects)?;
    }
    Ok(())
}

fn collect_table_factor_selects<'a>(
    factor: &'a TableFactor,
    selects: &mut Vec<&'a Select>,
) -> std::result::Result<(), ExtractError> {
    match factor {
        TableFactor::Derived { subquery, .. } => collect_query_selects(subquery, selects),
        TableFactor::NestedJoin {
            table_with_joins, ..
        } => collect_from_selects(table_with_joins, selects),
        _ => Ok(()),
    }
}

fn statement_kind(statement: &Statement) -> String {
    let text = statement.to_string();
    let keyword = text.split_whitespace().next().unwrap_or("empty statement");
    keyword.to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FilterOperator, HavingOperator};
    use crate::parser::sql_parser::parse_generic;

    fn extract(sql: &str) -> QueryModel {
        let statement = parse_generic(sql).expect("test SQL should parse");
        extract_query_model(&statement).expect("extraction should succeed")
    }

    #[test]
    fn extracts_every_category_from_one_query() {
        let model = extract(
            "SELECT e.department_id, COUNT(e.id) AS employee_count \
             FROM employees e \
             JOIN departments d ON e.department_id = d.id \
             WHERE e.salary > 5000 AND d.name IN ('HR', 'ENG') \
             GROUP BY e.department_id \
             HAVING COUNT(e.id) > 2",
        );

        assert_eq!(model.joins().len(), 1);
        assert_eq!(model.filters().len(), 2);
        assert_eq!(model.aggregates().len(), 1);
        assert_eq!(model.having_conditions().len(), 1);
        assert!(model.case_conditions().is_empty());

        assert_eq!(model.joins()[0].left_column, "e.department_id");
        assert_eq!(model.joins()[0].right_column, "d.id");
        assert_eq!(model.filters()[1].operator, FilterOperator::In);
        assert_eq!(model.filters()[1].values, vec!["'HR'", "'ENG'"]);
        assert_eq!(model.aggregates()[0].function, "COUNT");
        assert_eq!(model.aggregates()[0].column, "e.id");
        assert_eq!(model.having_conditions()[0].operator, HavingOperator::Gt);
        assert_eq!(model.having_conditions()[0].value, "2");
    }

    #[test]
    fn cte_conditions_precede_main_query_conditions() {
        let model = extract(
            "WITH recent AS (SELECT id, region FROM orders WHERE created_year = 2024) \
             SELECT r.region, SUM(r.id) FROM recent r WHERE r.region = 'EU' GROUP BY r.region",
        );

        let columns: Vec<&str> = model.filters().iter().map(|f| f.column.as_str()).collect();
        assert_eq!(columns, vec!["created_year", "r.region"]);
        assert_eq!(model.aggregates().len(), 1);
    }

    #[test]
    fn union_branches_are_visited_left_to_right() {
        let model = extract("SELECT a FROM t WHERE a = 1 UNION SELECT a FROM u WHERE a > 2");
        let operators: Vec<FilterOperator> =
            model.filters().iter().map(|f| f.operator.clone()).collect();
        assert_eq!(operators, vec![FilterOperator::Eq, FilterOperator::Gt]);
    }

    #[test]
    fn derived_tables_are_visited_before_the_enclosing_select() {
        let model = extract(
            "SELECT x.a, SUM(x.b) \
             FROM (SELECT a, b FROM t JOIN u ON t.id = u.id WHERE a = 1) x \
             JOIN (SELECT c FROM v WHERE c > 5) y ON x.a = y.c \
             WHERE x.b > 2 GROUP BY x.a",
        );

        let columns: Vec<&str> = model.filters().iter().map(|f| f.column.as_str()).collect();
        assert_eq!(columns, vec!["a", "c", "x.b"]);

        let joins: Vec<(&str, &str)> = model
            .joins()
            .iter()
            .map(|j| (j.left_column.as_str(), j.right_column.as_str()))
            .collect();
        assert_eq!(joins, vec![("t.id", "u.id"), ("x.a", "y.c")]);
        assert_eq!(model.aggregates().len(), 1);
    }

    #[test]
    fn non_query_statements_are_unsupported() {
        let statement = parse_generic("INSERT INTO t (a) VALUES (1)").unwrap();
        let err = extract_query_model(&statement).expect_err("INSERT must be rejected");
        assert!(
            matches!(&err, ExtractError::UnsupportedQueryShape(msg) if msg.contains("INSERT")),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn values_body_is_unsupported() {
        let statement = parse_generic("VALUES (1, 2)").unwrap();
        assert!(matches!(
            extract_query_model(&statement),
            Err(ExtractError::UnsupportedQueryShape(_))
        ));
    }

    #[test]
    fn query_without_conditions_yields_empty_model() {
        let model = extract("SELECT id, name FROM employees");
        assert!(model.is_empty());
    }
}
