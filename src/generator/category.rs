use crate::error::GenerateError;
use crate::generator::ids::ScenarioIds;
use crate::generator::strategy::ScenarioStrategy;
use crate::model::{
    AggregateCondition, Criticality, FilterCondition, HavingCondition, JoinCondition, QueryModel,
    Scenario, ScenarioType,
};

/// Rule table keyed by condition category: two scenarios per condition.
///
/// Output order is filters, joins, aggregates, having, each in model order.
#[derive(Debug, Clone, Copy, Default)]
pub struct CategoryStrategy;

impl ScenarioStrategy for CategoryStrategy {
    fn name(&self) -> &'static str {
        "category"
    }

    fn generate(&self, model: &QueryModel) -> Result<Vec<Scenario>, GenerateError> {
        for filter in model.filters() {
            filter.validate()?;
        }

        let mut ids = ScenarioIds::new();
        let mut scenarios = Vec::with_capacity(
            2 * (model.filters().len()
                + model.joins().len()
                + model.aggregates().len()
                + model.having_conditions().len()),
        );

        for filter in model.filters() {
            filter_scenarios(filter, &mut ids, &mut scenarios);
        }
        for join in model.joins() {
            join_scenarios(join, &mut ids, &mut scenarios);
        }
        for aggregate in model.aggregates() {
            aggregate_scenarios(aggregate, &mut ids, &mut scenarios);
        }
        for having in model.having_conditions() {
            having_scenarios(having, &mut ids, &mut scenarios);
        }

        Ok(scenarios)
    }
}

fn push(
    scenarios: &mut Vec<Scenario>,
    ids: &mut ScenarioIds,
    description: String,
    expected_result: &str,
    scenario_type: ScenarioType,
    criticality: Criticality,
) {
    scenarios.push(Scenario {
        id: ids.next_id(),
        description,
        expected_result: expected_result.to_string(),
        scenario_type,
        criticality,
    });
}

fn filter_scenarios(filter: &FilterCondition, ids: &mut ScenarioIds, out: &mut Vec<Scenario>) {
    push(
        out,
        ids,
        format!(
            "Verify {} satisfies condition {}",
            filter.column, filter.operator
        ),
        "Rows matching condition should be returned",
        ScenarioType::Positive,
        Criticality::High,
    );
    push(
        out,
        ids,
        format!(
            "Verify rows not satisfying {} condition are excluded",
            filter.column
        ),
        "Non matching rows should not appear",
        ScenarioType::Negative,
        Criticality::High,
    );
}

fn join_scenarios(join: &JoinCondition, ids: &mut ScenarioIds, out: &mut Vec<Scenario>) {
    push(
        out,
        ids,
        format!(
            "Verify join between {} and {}",
            join.left_column, join.right_column
        ),
        "Only matching rows across tables should be returned",
        ScenarioType::Positive,
        Criticality::Critical,
    );
    push(
        out,
        ids,
        format!(
            "Verify behavior when join condition between {} and {} fails",
            join.left_column, join.right_column
        ),
        "Rows without matching join should not appear",
        ScenarioType::Negative,
        Criticality::High,
    );
}

fn aggregate_scenarios(
    aggregate: &AggregateCondition,
    ids: &mut ScenarioIds,
    out: &mut Vec<Scenario>,
) {
    push(
        out,
        ids,
        format!(
            "Verify {} aggregation on column {}",
            aggregate.function, aggregate.column
        ),
        "Aggregation should compute correct value",
        ScenarioType::Positive,
        Criticality::Critical,
    );
    push(
        out,
        ids,
        format!(
            "Verify {} aggregation handles null values correctly on {}",
            aggregate.function, aggregate.column
        ),
        "Null values should not break aggregation logic",
        ScenarioType::Boundary,
        Criticality::Medium,
    );
}

fn having_scenarios(having: &HavingCondition, ids: &mut ScenarioIds, out: &mut Vec<Scenario>) {
    let condition = format!(
        "{}({}) {} {}",
        having.function, having.column, having.operator, having.value
    );
    push(
        out,
        ids,
        format!("Verify HAVING condition on {condition}"),
        "Only groups satisfying HAVING condition should appear",
        ScenarioType::Positive,
        Criticality::Critical,
    );
    push(
        out,
        ids,
        format!("Verify groups not satisfying HAVING condition {condition} are excluded"),
        "Invalid groups should not be returned",
        ScenarioType::Negative,
        Criticality::High,
    );
}
