/// Category-based rule table (authoritative strategy).
pub mod category;
/// Per-call scenario identifier source.
pub mod ids;
/// Operator-table rule table for single filter conditions.
pub mod operator_table;
/// Strategy trait and caller-facing strategy selector.
pub mod strategy;

pub use category::CategoryStrategy;
pub use ids::ScenarioIds;
pub use operator_table::OperatorTableStrategy;
pub use strategy::{ScenarioStrategy, Strategy};
