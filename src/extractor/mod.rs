/// Function-call projections.
pub mod aggregates;
/// Top-level extraction: statement shape checks and SELECT-block traversal.
pub mod condition_extractor;
/// WHERE-clause filter walking.
pub mod filters;
/// HAVING-clause comparison walking.
pub mod having;
/// Equality joins from explicit ON clauses.
pub mod joins;

pub use condition_extractor::{extract_from_sql, extract_query_model};
