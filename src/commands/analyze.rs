use crate::cli::InputArgs;
use crate::domain::diagnostics::{Diagnostics, Severity};
use crate::domain::models::{AnalysisResult, CheckReport, RunSummary};
use crate::services::inputs::{load_layers, load_unit_descriptions, resolve_input_paths};
use crate::services::output::{print_one, write_result};
use crate::services::pipeline::process;
use std::path::Path;

fn run_pipeline(input: &InputArgs, diags: &mut Diagnostics) -> anyhow::Result<AnalysisResult> {
    let (layers_path, units_path) = resolve_input_paths(input)?;
    let layers = load_layers(&layers_path)?;
    let unit_text = load_unit_descriptions(&units_path)?;
    Ok(process(&unit_text, &layers, diags)?)
}

pub fn handle_process(json: bool, input: &InputArgs, output: &Path) -> anyhow::Result<()> {
    let mut diags = Diagnostics::new();
    let result = run_pipeline(input, &mut diags)?;
    write_result(&result, output)?;

    let summary = RunSummary {
        output: output.display().to_string(),
        warnings: diags.count(Severity::Warning),
        errors: diags.count(Severity::Error),
    };
    print_one(json, summary, |s| format!("saved result to {}", s.output))
}

pub fn handle_check(json: bool, input: &InputArgs) -> anyhow::Result<()> {
    let mut diags = Diagnostics::new();
    let _ = run_pipeline(input, &mut diags)?;

    let report = CheckReport {
        warnings: diags.count(Severity::Warning),
        errors: diags.count(Severity::Error),
        diagnostics: diags.records().to_vec(),
    };
    print_one(json, report, |r| {
        format!(
            "architecture valid ({} warning(s), {} error(s))",
            r.warnings, r.errors
        )
    })
}
