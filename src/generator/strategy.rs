use std::fmt;

use crate::error::GenerateError;
use crate::generator::category::CategoryStrategy;
use crate::generator::operator_table::OperatorTableStrategy;
use crate::model::{QueryModel, Scenario};

/// A rule table that turns a [`QueryModel`] into scenarios.
///
/// Implementations own no state between calls; every call starts a fresh
/// identifier sequence.
pub trait ScenarioStrategy {
    /// Stable name used in logs and CLI flags.
    fn name(&self) -> &'static str;

    /// Classify the model's conditions into scenarios.
    fn generate(&self, model: &QueryModel) -> Result<Vec<Scenario>, GenerateError>;
}

/// Caller-selected generator strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Two scenarios per condition of every category.
    #[default]
    Category,
    /// Per-operator expansion of filter conditions only.
    OperatorTable,
}

impl Strategy {
    /// Run the selected strategy.
    pub fn generate(self, model: &QueryModel) -> Result<Vec<Scenario>, GenerateError> {
        match self {
            Strategy::Category => CategoryStrategy.generate(model),
            Strategy::OperatorTable => OperatorTableStrategy.generate(model),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Category => f.write_str(CategoryStrategy.name()),
            Strategy::OperatorTable => f.write_str(OperatorTableStrategy.name()),
        }
    }
}

impl std::str::FromStr for Strategy {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "category" => Ok(Strategy::Category),
            "operator-table" | "operator_table" | "legacy" => Ok(Strategy::OperatorTable),
            _ => Err(format!("Invalid strategy: {s}")),
        }
    }
}
