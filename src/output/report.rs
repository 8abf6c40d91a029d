use std::fmt::Write;

use crate::output::summary::HybridOutput;

/// Build a markdown report with the condition summary and a scenario table.
pub fn build_report(output: &HybridOutput) -> String {
    let mut report = String::new();
    let summary = &output.validation;

    writeln!(report, "# sql2tests Scenario Report").unwrap();
    writeln!(report).unwrap();

    writeln!(report, "## Extraction Summary").unwrap();
    writeln!(report).unwrap();
    writeln!(report, "| Category | Count |").unwrap();
    writeln!(report, "|----------|-------|").unwrap();
    writeln!(report, "| Filters | {} |", summary.filter_count).unwrap();
    writeln!(report, "| Joins | {} |", summary.join_count).unwrap();
    writeln!(report, "| Aggregates | {} |", summary.aggregate_count).unwrap();
    writeln!(report, "| Having | {} |", summary.having_count).unwrap();
    writeln!(report, "| Scenarios | {} |", summary.generated_scenarios).unwrap();

    writeln!(report).unwrap();
    writeln!(report, "## Scenarios").unwrap();
    writeln!(report).unwrap();

    if output.scenarios.is_empty() {
        writeln!(report, "_No scenarios generated._").unwrap();
    } else {
        writeln!(report, "| ID | Type | Criticality | Description | Expected Result |").unwrap();
        writeln!(report, "|----|------|-------------|-------------|-----------------|").unwrap();
        for scenario in &output.scenarios {
            writeln!(
                report,
                "| {} | {} | {} | {} | {} |",
                scenario.id,
                scenario.scenario_type,
                scenario.criticality,
                escape_cell(&scenario.description),
                escape_cell(&scenario.expected_result)
            )
            .unwrap();
        }
    }

    if let Some(ai_text) = &output.ai_supplement {
        writeln!(report).unwrap();
        writeln!(report, "## AI Supplement").unwrap();
        writeln!(report).unwrap();
        writeln!(report, "{}", ai_text.trim_end()).unwrap();
    }

    report
}

// Pipes and line breaks inside SQL text would split table cells or rows.
fn escape_cell(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('|', "\\|")
        .replace("\r\n", "<br>")
        .replace(['\n', '\r'], "<br>")
}
