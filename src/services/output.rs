use crate::domain::models::{AnalysisResult, JsonOut};
use anyhow::Context;
use serde::Serialize;
use std::path::Path;

/// Write the analysis result as pretty JSON to `path`.
pub fn write_result(result: &AnalysisResult, path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output directory {}", parent.display()))?;
        }
    }
    let rendered = serde_json::to_string_pretty(result)?;
    std::fs::write(path, rendered)
        .with_context(|| format!("writing result to {}", path.display()))?;
    Ok(())
}

pub fn print_one<T: Serialize>(json: bool, data: T, row: impl Fn(&T) -> String) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        println!("{}", row(&data));
    }
    Ok(())
}
