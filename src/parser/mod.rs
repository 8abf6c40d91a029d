/// SQL expression helpers shared by the extractor.
pub mod expr;
/// Closed tagged union over the predicate shapes the extractor understands.
pub mod predicate;
/// Thin wrapper around `sqlparser` for statement parsing and dialect lookup.
pub mod sql_parser;
