//! Turn SQL queries into structured positive, negative, and boundary test scenarios.
#![warn(missing_docs)]

/// Free-text scenario generation through an external completion service.
pub mod ai;
/// Error taxonomy shared by extraction, generation, and output.
pub mod error;
/// Condition extraction from parsed SQL statements.
pub mod extractor;
/// Rule-based scenario generation strategies.
pub mod generator;
/// Condition records, query model, and scenario types.
pub mod model;
/// File output and markdown report generation.
pub mod output;
/// SQL parsing wrapper, expression helpers, and predicate classification.
pub mod parser;

pub use error::{Error, Result};

use sqlparser::dialect::Dialect;

use crate::generator::Strategy;
use crate::model::Scenario;

/// Parse, extract, and generate in one call.
pub fn generate_from_sql(sql: &str, dialect: &dyn Dialect, strategy: Strategy) -> Result<Vec<Scenario>> {
    let model = extractor::extract_from_sql(sql, dialect)?;
    Ok(strategy.generate(&model)?)
}
