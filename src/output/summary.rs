use serde::Serialize;

use crate::model::{QueryModel, Scenario};

/// Per-category counts reported alongside generated scenarios.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationSummary {
    /// Number of extracted joins.
    pub join_count: usize,
    /// Number of extracted filters.
    pub filter_count: usize,
    /// Number of extracted aggregates.
    pub aggregate_count: usize,
    /// Number of extracted HAVING comparisons.
    pub having_count: usize,
    /// Number of scenarios produced.
    pub generated_scenarios: usize,
}

impl ValidationSummary {
    /// Count a model's conditions and the scenarios generated from it.
    pub fn new(model: &QueryModel, scenarios: &[Scenario]) -> Self {
        Self {
            join_count: model.joins().len(),
            filter_count: model.filters().len(),
            aggregate_count: model.aggregates().len(),
            having_count: model.having_conditions().len(),
            generated_scenarios: scenarios.len(),
        }
    }
}

/// Rule-based scenarios, their summary, and an optional free-text AI supplement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HybridOutput {
    /// Always `true`: scenarios come from the deterministic rule tables.
    pub standardized: bool,
    /// Generated scenarios in generation order.
    pub scenarios: Vec<Scenario>,
    /// Condition and scenario counts.
    pub validation: ValidationSummary,
    /// Whether the completion service was consulted.
    pub ai_used: bool,
    /// Raw completion text, when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_supplement: Option<String>,
}

impl HybridOutput {
    /// Bundle scenarios generated from `model`.
    pub fn new(model: &QueryModel, scenarios: Vec<Scenario>, ai_supplement: Option<String>) -> Self {
        let validation = ValidationSummary::new(model, &scenarios);
        Self {
            standardized: true,
            scenarios,
            validation,
            ai_used: ai_supplement.is_some(),
            ai_supplement,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::Strategy;
    use crate::model::{FilterCondition, JoinCondition};

    #[test]
    fn summary_counts_match_model_and_scenarios() {
        let model = QueryModel::new(
            vec![JoinCondition {
                left_column: "a.id".to_string(),
                right_column: "b.a_id".to_string(),
            }],
            vec![FilterCondition::new("a.x", "=", vec!["1".to_string()])],
            Vec::new(),
            Vec::new(),
            Vec::new(),
        );
        let scenarios = Strategy::Category.generate(&model).unwrap();
        let output = HybridOutput::new(&model, scenarios, None);

        assert!(output.standardized);
        assert!(!output.ai_used);
        assert_eq!(output.validation.join_count, 1);
        assert_eq!(output.validation.filter_count, 1);
        assert_eq!(output.validation.generated_scenarios, output.scenarios.len());

        let json = serde_json::to_value(&output).unwrap();
        assert!(json.get("aiSupplement").is_none());
        assert_eq!(json["validation"]["generatedScenarios"], 4);
    }

    #[test]
    fn ai_supplement_marks_ai_used() {
        let output = HybridOutput::new(&QueryModel::default(), Vec::new(), Some("ideas".to_string()));
        assert!(output.ai_used);
        assert_eq!(output.ai_supplement.as_deref(), Some("ideas"));
    }
}
