#![allow(dead_code)]

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use sql2tests::extractor;
use sql2tests::generator::Strategy;
use sql2tests::model::{FilterCondition, FilterOperator, QueryModel, Scenario};
use sql2tests::parser::sql_parser;

pub(crate) const EMPLOYEE_QUERY: &str = "SELECT e.department_id, COUNT(e.id) AS employee_count \
     FROM employees e \
     JOIN departments d ON e.department_id = d.id \
     WHERE e.salary > 5000 AND d.name IN ('HR', 'ENG') \
     GROUP BY e.department_id \
     HAVING COUNT(e.id) > 2";

pub(crate) fn extract(sql: &str) -> QueryModel {
    let statement = sql_parser::parse_generic(sql).expect("test SQL should parse");
    extractor::extract_query_model(&statement).expect("extraction should succeed")
}

pub(crate) fn generate(sql: &str, strategy: Strategy) -> Vec<Scenario> {
    strategy
        .generate(&extract(sql))
        .expect("generation should succeed")
}

pub(crate) fn filter(column: &str, operator: FilterOperator, values: &[&str]) -> FilterCondition {
    FilterCondition::new(
        column,
        operator,
        values.iter().map(ToString::to_string).collect(),
    )
}

pub(crate) fn unique_temp_dir(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock should be after epoch")
        .as_nanos();
    let dir = std::env::temp_dir().join(format!("{prefix}_{nanos}"));
    std::fs::create_dir_all(&dir).expect("should create temp dir");
    dir
}
