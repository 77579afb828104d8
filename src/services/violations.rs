use crate::domain::diagnostics::{DiagnosticKind, Diagnostics};
use crate::domain::models::{Layers, UnitTable};
use crate::services::layering::{build_rank_table, Rank};

/// Whether a dependency from a unit in `source` may target a unit in
/// `target` under the downward-only layering discipline.
///
/// Legal iff the target sits in a strictly lower root row, or in the same
/// root row within the same root module at a strictly lower intra row.
/// Everything else (upward, same-row different-module, same-module same-row
/// siblings) is a violation. Intra-submodule edges never reach this check.
fn edge_is_legal(source: &Rank, target: &Rank) -> bool {
    target.root_row > source.root_row
        || (target.root_row == source.root_row
            && target.module == source.module
            && target.intra_row > source.intra_row)
}

/// Flag dependencies that violate the declared layer hierarchy.
///
/// Illegal edges get their flag flipped to `false` and a warning record
/// naming both unit paths; the edge itself stays in the graph. Submodules
/// missing from the rank table should not occur after path validation and
/// are skipped rather than flagged. Returns a new unit table.
pub fn check_layer_violations(
    units: &UnitTable,
    layers: &Layers,
    diags: &mut Diagnostics,
) -> UnitTable {
    let ranks = build_rank_table(layers);

    units
        .iter()
        .map(|(unit_path, unit)| {
            let mut unit = unit.clone();
            let source_submodule = unit.submodule.clone();
            let Some(rank_a) = ranks.get(&source_submodule) else {
                return (unit_path.clone(), unit);
            };
            for (dep_path, flag) in unit.dependencies.iter_mut() {
                let Some(dep_unit) = units.get(dep_path) else {
                    continue;
                };
                if dep_unit.submodule == source_submodule {
                    continue;
                }
                let Some(rank_b) = ranks.get(&dep_unit.submodule) else {
                    continue;
                };
                if !edge_is_legal(rank_a, rank_b) {
                    diags.warn(
                        DiagnosticKind::LayerViolation,
                        format!("architecture validation: {unit_path} must not depend on {dep_path}"),
                    );
                    *flag = false;
                }
            }
            (unit_path.clone(), unit)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{check_layer_violations, edge_is_legal};
    use crate::domain::diagnostics::{DiagnosticKind, Diagnostics};
    use crate::services::layering::{build_rank_table, sample_layers};
    use crate::services::parser::parse_unit_descriptions;
    use crate::services::resolve::resolve_dependencies;

    #[test]
    fn legality_decision_table() {
        let ranks = build_rank_table(&sample_layers());
        let main = &ranks["main"];
        let api = &ranks["api.routes"];
        let commands = &ranks["db.commands"];
        let sample = &ranks["db.queries.sample"];
        let config = &ranks["db.queries.config"];
        let core = &ranks["core.common"];

        // strictly lower root row: legal both from row 0 and row 1
        assert!(edge_is_legal(main, commands));
        assert!(edge_is_legal(commands, core));
        // upward: illegal
        assert!(!edge_is_legal(core, main));
        assert!(!edge_is_legal(sample, main));
        // same row, different module: illegal both ways
        assert!(!edge_is_legal(main, api));
        assert!(!edge_is_legal(api, main));
        // same module: only strictly lower intra row is legal
        assert!(edge_is_legal(commands, sample));
        assert!(!edge_is_legal(sample, commands));
        // same module, same intra row siblings: illegal both ways
        assert!(!edge_is_legal(sample, config));
        assert!(!edge_is_legal(config, sample));
    }

    #[test]
    fn illegal_edges_are_flipped_and_warned_but_kept() {
        let text = "\
### core.common.bad
calls `@api.routes.get_samples`

### api.routes.get_samples
";
        let (units, _) = parse_unit_descriptions(text).unwrap();
        let mut diags = Diagnostics::new();
        let resolved = resolve_dependencies(&units, &mut diags);
        let checked = check_layer_violations(&resolved, &sample_layers(), &mut diags);

        assert_eq!(
            checked["core.common.bad"].dependencies.get("api.routes.get_samples"),
            Some(&false)
        );
        let violations: Vec<_> = diags.of_kind(DiagnosticKind::LayerViolation).collect();
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.contains("core.common.bad"));
        assert!(violations[0].message.contains("api.routes.get_samples"));
        // input untouched
        assert_eq!(
            resolved["core.common.bad"].dependencies.get("api.routes.get_samples"),
            Some(&true)
        );
    }

    #[test]
    fn intra_submodule_edges_stay_legal() {
        let text = "\
### db.commands.insert
calls `@db.commands.helpers`

### db.commands.helpers
";
        let (units, _) = parse_unit_descriptions(text).unwrap();
        let mut diags = Diagnostics::new();
        let resolved = resolve_dependencies(&units, &mut diags);
        let checked = check_layer_violations(&resolved, &sample_layers(), &mut diags);
        assert_eq!(
            checked["db.commands.insert"].dependencies.get("db.commands.helpers"),
            Some(&true)
        );
        assert_eq!(diags.of_kind(DiagnosticKind::LayerViolation).count(), 0);
    }

    #[test]
    fn unknown_source_submodule_is_skipped() {
        let text = "### mystery.thing\ncalls `@main.run`\n\n### main.run\n";
        let (units, _) = parse_unit_descriptions(text).unwrap();
        let mut diags = Diagnostics::new();
        let resolved = resolve_dependencies(&units, &mut diags);
        let checked = check_layer_violations(&resolved, &sample_layers(), &mut diags);
        // no rank for "mystery": edge left as-is
        assert_eq!(checked["mystery.thing"].dependencies.get("main.run"), Some(&true));
        assert_eq!(diags.of_kind(DiagnosticKind::LayerViolation).count(), 0);
    }
}
