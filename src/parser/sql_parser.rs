use sqlparser::ast::Statement;
use sqlparser::dialect::{dialect_from_str, Dialect};
use sqlparser::parser::Parser;

use crate::error::{Error, ExtractError, Result};

/// Dialect used when the caller does not name one.
pub const DEFAULT_DIALECT: &str = "generic";

/// Resolve a dialect by name (`generic`, `postgresql`, `mysql`, `ansi`, ...).
pub fn dialect_by_name(name: &str) -> Result<Box<dyn Dialect>> {
    dialect_from_str(name.trim()).ok_or_else(|| Error::UnknownDialect(name.to_string()))
}

/// Parse SQL text into exactly one statement.
///
/// Grammar errors surface as [`Error::Parse`]; empty input or multiple statements
/// are rejected as an unsupported query shape.
pub fn parse_statement(sql: &str, dialect: &dyn Dialect) -> Result<Statement> {
    let mut statements = Parser::parse_sql(dialect, sql).map_err(|e| Error::Parse(e.to_string()))?;

    match statements.len() {
        1 => Ok(statements.remove(0)),
        0 => Err(ExtractError::UnsupportedQueryShape("no statement found".to_string()).into()),
        n => Err(ExtractError::UnsupportedQueryShape(format!(
            "expected a single statement, found {n}"
        ))
        .into()),
    }
}

/// Convenience: parse with the [`DEFAULT_DIALECT`].
pub fn parse_generic(sql: &str) -> Result<Statement> {
    let dialect = dialect_by_name(DEFAULT_DIALECT)?;
    parse_statement(sql, dialect.as_ref())
}
