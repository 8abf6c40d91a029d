use serde::{Deserialize, Serialize};
use std::fmt;

/// Intent of a generated scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ScenarioType {
    /// Rows satisfying the condition are returned.
    Positive,
    /// Rows violating the condition are excluded.
    Negative,
    /// Behavior at a range edge or with null input.
    Boundary,
}

impl fmt::Display for ScenarioType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScenarioType::Positive => write!(f, "POSITIVE"),
            ScenarioType::Negative => write!(f, "NEGATIVE"),
            ScenarioType::Boundary => write!(f, "BOUNDARY"),
        }
    }
}

/// Severity weight of a scenario, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Criticality {
    /// Cosmetic.
    Low,
    /// Default weight.
    Medium,
    /// Wrong rows would be returned.
    High,
    /// Core query semantics would break.
    Critical,
}

impl fmt::Display for Criticality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Criticality::Low => write!(f, "LOW"),
            Criticality::Medium => write!(f, "MEDIUM"),
            Criticality::High => write!(f, "HIGH"),
            Criticality::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// Row-level intent used by the operator-table strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TestIntent {
    /// Value satisfies the predicate.
    Match,
    /// Value falls outside the predicate.
    NotMatch,
    /// Value sits exactly on a bound.
    Equal,
    /// Value lies below the accepted range.
    Less,
    /// Column is NULL.
    NullCheck,
}

/// A generated test case.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    /// Identifier, unique within one generation call.
    pub id: String,
    /// What the scenario exercises.
    pub description: String,
    /// What the database is expected to do.
    pub expected_result: String,
    /// Positive, negative, or boundary.
    pub scenario_type: ScenarioType,
    /// Severity weight.
    pub criticality: Criticality,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scenario_serializes_with_camel_case_fields_and_uppercase_enums() {
        let scenario = Scenario {
            id: "TC_1".to_string(),
            description: "Verify age satisfies condition >".to_string(),
            expected_result: "Rows matching condition should be returned".to_string(),
            scenario_type: ScenarioType::Positive,
            criticality: Criticality::High,
        };
        let json = serde_json::to_value(&scenario).unwrap();
        assert_eq!(json["expectedResult"], "Rows matching condition should be returned");
        assert_eq!(json["scenarioType"], "POSITIVE");
        assert_eq!(json["criticality"], "HIGH");
    }

    #[test]
    fn criticality_orders_by_severity() {
        assert!(Criticality::Low < Criticality::Medium);
        assert!(Criticality::High < Criticality::Critical);
    }
}
