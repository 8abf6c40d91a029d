use std::path::{Component, Path};

use crate::error::{Error, Result};
use crate::output::report;
use crate::output::summary::HybridOutput;

/// Write all output files to the specified directory.
///
/// Produces `<name>_scenarios.json`, `<name>_report.md`, and `<name>_ai.txt`
/// when an AI supplement is present.
pub fn write_output(output_dir: &Path, name: &str, output: &HybridOutput) -> Result<()> {
    validate_output_name(name)?;

    std::fs::create_dir_all(output_dir)?;

    let json_path = output_dir.join(format!("{name}_scenarios.json"));
    let json = serde_json::to_string_pretty(output)?;
    std::fs::write(&json_path, json)?;

    let report_path = output_dir.join(format!("{name}_report.md"));
    std::fs::write(&report_path, report::build_report(output))?;

    if let Some(ai_text) = &output.ai_supplement {
        let ai_path = output_dir.join(format!("{name}_ai.txt"));
        std::fs::write(&ai_path, ai_text)?;
    }

    Ok(())
}

fn validate_output_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::InvalidOutputName(name.to_string()));
    }
    let candidate = Path::new(name);
    let has_unsafe_component = candidate.components().any(|component| {
        matches!(
            component,
            Component::ParentDir | Component::RootDir | Component::Prefix(_)
        )
    });
    if candidate.is_absolute()
        || has_unsafe_component
        || name.contains('/')
        || name.contains('\\')
    {
        return Err(Error::InvalidOutputName(name.to_string()));
    }
    Ok(())
}
