use crate::domain::error::LayoutError;
use crate::domain::models::Layers;
use std::collections::{HashMap, HashSet};

/// Rank of a submodule in the flattened layer order. Root-row position
/// dominates; the intra-row position only distinguishes submodules within
/// the same root module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rank {
    pub root_row: usize,
    pub intra_row: usize,
    pub module: String,
}

/// Flatten the two-level layer declaration into one ordered submodule list.
///
/// Walks root rows in order; a module without intra-module rows is a leaf
/// and contributes itself, otherwise each of its intra rows contributes its
/// submodules in order. The structure is exactly two levels deep, so no
/// recursion is needed.
pub fn flatten_layers(layers: &Layers) -> Result<Vec<String>, LayoutError> {
    let mut all_submodules: Vec<String> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    let mut add = |sm: &str, out: &mut Vec<String>| -> Result<(), LayoutError> {
        if !seen.insert(sm.to_string()) {
            return Err(LayoutError::DuplicateSubmodule(sm.to_string()));
        }
        out.push(sm.to_string());
        Ok(())
    };

    for root_row in &layers.root_layers {
        for module in root_row {
            match layers.submodule_layers.get(module) {
                None => add(module, &mut all_submodules)?,
                Some(sub_rows) => {
                    for sub_row in sub_rows {
                        for sm in sub_row {
                            if !sm.starts_with(&format!("{module}.")) {
                                return Err(LayoutError::BadSubmodulePrefix {
                                    submodule: sm.clone(),
                                    module: module.clone(),
                                });
                            }
                            add(sm, &mut all_submodules)?;
                        }
                    }
                }
            }
        }
    }

    Ok(all_submodules)
}

/// Build the submodule → rank lookup used by the violation checker.
/// Leaf modules get intra-row index 0.
pub fn build_rank_table(layers: &Layers) -> HashMap<String, Rank> {
    let mut ranks = HashMap::new();
    for (root_row_idx, root_row) in layers.root_layers.iter().enumerate() {
        for module in root_row {
            match layers.submodule_layers.get(module) {
                None => {
                    ranks.insert(
                        module.clone(),
                        Rank {
                            root_row: root_row_idx,
                            intra_row: 0,
                            module: module.clone(),
                        },
                    );
                }
                Some(sub_rows) => {
                    for (intra_row_idx, sub_row) in sub_rows.iter().enumerate() {
                        for sm in sub_row {
                            ranks.insert(
                                sm.clone(),
                                Rank {
                                    root_row: root_row_idx,
                                    intra_row: intra_row_idx,
                                    module: module.clone(),
                                },
                            );
                        }
                    }
                }
            }
        }
    }
    ranks
}

#[cfg(test)]
pub(crate) fn sample_layers() -> Layers {
    serde_json::from_value(serde_json::json!({
        "root_layers": [["main", "api"], ["db"], ["core"]],
        "submodule_layers": {
            "db": [["db.commands"], ["db.queries.sample", "db.queries.config"]],
            "api": [["api.routes"]],
            "core": [["core.common"]]
        }
    }))
    .expect("sample layers deserialize")
}
