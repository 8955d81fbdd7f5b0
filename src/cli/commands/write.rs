use std::{collections::HashMap, fs, path::Path};

use anyhow::{Context, Result};

use super::super::{args::WriteCommand, context::ScanContext, exit_status::ExitStatus};
use super::{CommandResult, CommandSummary, WriteSummary};
use crate::core::CatalogWriter;

pub fn write(cmd: WriteCommand) -> Result<CommandResult> {
    let ctx = ScanContext::new(&cmd.common)?;
    let outcome = ctx.scan()?;

    let mut translations = outcome.strings.translations();
    if let Some(path) = &cmd.overlay {
        let overlay = read_overlay(path)?;
        let unknown = overlay
            .keys()
            .filter(|hash| !outcome.strings.contains(hash))
            .count();
        if unknown > 0 {
            tracing::warn!(unknown, "Overlay entries do not match any scanned string");
        }
        translations.extend(overlay);
    }

    let path = cmd.output.clone().unwrap_or_else(|| ctx.catalog_file());
    let create_if_missing = ctx.config.create_if_missing && !cmd.no_create;
    let writer = CatalogWriter::new(&path, create_if_missing);
    let written = writer.write(&outcome.strings, &translations)?;

    Ok(CommandResult {
        summary: CommandSummary::Write(WriteSummary {
            path,
            written,
            total: outcome.strings.len(),
        }),
        exit_status: ExitStatus::Success,
    })
}

/// Read a JSON object of `hash -> translation`.
fn read_overlay(path: &Path) -> Result<HashMap<String, String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read overlay file: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse overlay file: {}", path.display()))
}
