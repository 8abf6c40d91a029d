const TEMPLATE_HEADER: &str = "You are a professional QA engineer.

Generate structured SQL test scenarios for the following query.

Include:
- Positive cases
- Negative cases
- Boundary cases
- Edge cases

SQL Query:
";

/// Embed raw SQL text into the fixed QA instruction template.
pub fn build_prompt(sql: &str) -> String {
    format!("{TEMPLATE_HEADER}{sql}")
}
