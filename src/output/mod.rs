/// Writes scenarios, the report, and any AI supplement to disk.
pub mod formatter;
/// Builds a Markdown summary of extracted conditions and generated scenarios.
pub mod report;
/// Validation counts and the hybrid output bundle.
pub mod summary;

pub use summary::{HybridOutput, ValidationSummary};
