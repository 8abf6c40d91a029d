use crate::error::GenerateError;
use crate::generator::ids::ScenarioIds;
use crate::generator::strategy::ScenarioStrategy;
use crate::model::{
    Criticality, FilterCondition, FilterOperator, QueryModel, Scenario, ScenarioType, TestIntent,
};

const NULL_EXPECTATION: &str = "System should handle NULL appropriately";

/// Rule table keyed by filter operator: one scenario per row intent.
///
/// Only the model's filters are expanded; joins, aggregates, and having
/// conditions are outside this table.
#[derive(Debug, Clone, Copy, Default)]
pub struct OperatorTableStrategy;

impl ScenarioStrategy for OperatorTableStrategy {
    fn name(&self) -> &'static str {
        "operator-table"
    }

    fn generate(&self, model: &QueryModel) -> Result<Vec<Scenario>, GenerateError> {
        generate_for_filters(model.filters())
    }
}

/// Expand a list of filters with one shared identifier sequence.
pub fn generate_for_filters(filters: &[FilterCondition]) -> Result<Vec<Scenario>, GenerateError> {
    let mut ids = ScenarioIds::new();
    let mut scenarios = Vec::new();
    for filter in filters {
        scenarios.extend(expand_condition(filter, &mut ids)?);
    }
    Ok(scenarios)
}

/// Expand a single filter into its operator's scenario rows.
///
/// The condition is validated first, so a BETWEEN with fewer than two values is
/// rejected instead of indexed. Operators outside the table yield no scenarios.
pub fn expand_condition(
    condition: &FilterCondition,
    ids: &mut ScenarioIds,
) -> Result<Vec<Scenario>, GenerateError> {
    condition.validate()?;

    let column = &condition.column;
    let value = condition.first_value();

    let rows: Vec<(TestIntent, String, &str)> = match &condition.operator {
        FilterOperator::Eq => vec![
            (
                TestIntent::Match,
                format!("{column} = {value}"),
                "Records should be returned",
            ),
            (
                TestIntent::NotMatch,
                format!("{column} != {value}"),
                "No records should be returned",
            ),
            (
                TestIntent::NullCheck,
                format!("{column} IS NULL"),
                NULL_EXPECTATION,
            ),
        ],
        FilterOperator::Gt => vec![
            (
                TestIntent::Match,
                format!("{column} > {value}"),
                "Records should be returned",
            ),
            (
                TestIntent::Equal,
                format!("{column} = {value}"),
                "Boundary condition validation",
            ),
            (
                TestIntent::Less,
                format!("{column} < {value}"),
                "No records should be returned",
            ),
            (
                TestIntent::NullCheck,
                format!("{column} IS NULL"),
                NULL_EXPECTATION,
            ),
        ],
        FilterOperator::Between => {
            let lower = &condition.values[0];
            let upper = &condition.values[1];
            vec![
                (
                    TestIntent::Match,
                    format!("{column} BETWEEN {lower} AND {upper}"),
                    "Records within range should be returned",
                ),
                (
                    TestIntent::Equal,
                    format!("{column} = {lower}"),
                    "Lower boundary validation",
                ),
                (
                    TestIntent::Equal,
                    format!("{column} = {upper}"),
                    "Upper boundary validation",
                ),
                (
                    TestIntent::Less,
                    format!("{column} < {lower}"),
                    "Below range should not return records",
                ),
                (
                    TestIntent::NotMatch,
                    format!("{column} > {upper}"),
                    "Above range should not return records",
                ),
                (
                    TestIntent::NullCheck,
                    format!("{column} IS NULL"),
                    NULL_EXPECTATION,
                ),
            ]
        }
        FilterOperator::In => {
            let list = condition.values.join(", ");
            vec![
                (
                    TestIntent::Match,
                    format!("{column} IN ({list})"),
                    "Records matching values should be returned",
                ),
                (
                    TestIntent::NotMatch,
                    format!("{column} NOT IN ({list})"),
                    "Records outside list should not be returned",
                ),
                (
                    TestIntent::NullCheck,
                    format!("{column} IS NULL"),
                    NULL_EXPECTATION,
                ),
            ]
        }
        FilterOperator::InSubquery | FilterOperator::Other(_) => Vec::new(),
    };

    Ok(rows
        .into_iter()
        .map(|(intent, description, expected)| {
            let scenario_type = classify_intent(&condition.operator, intent);
            Scenario {
                id: ids.next_id(),
                description,
                expected_result: expected.to_string(),
                scenario_type,
                criticality: criticality_for(scenario_type),
            }
        })
        .collect())
}

/// Scenario type for an `(operator, intent)` pair.
///
/// Pairs outside the table fall back to [`ScenarioType::Negative`]. That fallback
/// is long-standing behavior and is kept as is.
pub fn classify_intent(operator: &FilterOperator, intent: TestIntent) -> ScenarioType {
    use FilterOperator as Op;
    use TestIntent as I;
    match (operator, intent) {
        (Op::Gt, I::Match) | (Op::Eq, I::Match) | (Op::Between, I::Match) | (Op::In, I::Match) => {
            ScenarioType::Positive
        }
        (Op::Gt, I::Equal) | (Op::Between, I::Equal) => ScenarioType::Boundary,
        (Op::Gt, I::Less | I::NullCheck)
        | (Op::Eq, I::NotMatch | I::NullCheck)
        | (Op::Between, I::Less | I::NotMatch | I::NullCheck)
        | (Op::In, I::NotMatch | I::NullCheck) => ScenarioType::Negative,
        _ => ScenarioType::Negative,
    }
}

/// Criticality is derived from the type alone: boundaries are HIGH, everything else MEDIUM.
pub fn criticality_for(scenario_type: ScenarioType) -> Criticality {
    match scenario_type {
        ScenarioType::Boundary => Criticality::High,
        ScenarioType::Positive | ScenarioType::Negative => Criticality::Medium,
    }
}
