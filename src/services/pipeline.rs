use crate::domain::diagnostics::Diagnostics;
use crate::domain::error::LayoutError;
use crate::domain::models::{AnalysisResult, Layers};
use crate::services::aggregate::assign_submodule_dependencies;
use crate::services::colors::assign_submodule_colors;
use crate::services::layering::flatten_layers;
use crate::services::parser::parse_unit_descriptions;
use crate::services::registry::build_submodule_table;
use crate::services::resolve::resolve_dependencies;
use crate::services::validate::validate_unit_paths;
use crate::services::violations::check_layer_violations;

/// Run the whole analysis pipeline over the raw declaration text and the
/// layer declaration.
///
/// Stages run strictly linearly; the path-validation gate is the only branch
/// and aborts before any registry, color, or resolution work happens. Every
/// stage takes its inputs by reference and returns a fresh structure.
pub fn process(
    unit_text: &str,
    layers: &Layers,
    diags: &mut Diagnostics,
) -> Result<AnalysisResult, LayoutError> {
    let (units, unit_order) = parse_unit_descriptions(unit_text)?;
    let all_submodules = flatten_layers(layers)?;

    let invalid = validate_unit_paths(&units, &all_submodules, diags);
    if invalid > 0 {
        return Err(LayoutError::ValidationFailed(invalid));
    }

    let submodules = build_submodule_table(&all_submodules, &unit_order, diags);
    let submodules = assign_submodule_colors(&submodules, layers);
    let units = resolve_dependencies(&units, diags);
    let units = check_layer_violations(&units, layers, diags);
    let submodules = assign_submodule_dependencies(&submodules, &units);

    Ok(AnalysisResult {
        layers: layers.clone(),
        submodules,
        units,
    })
}
