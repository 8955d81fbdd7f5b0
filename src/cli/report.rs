//! Report formatting and printing utilities.
//!
//! Separate from the commands to allow transcan to be used as a library.

use std::io::{self, Write};

use anyhow::Result;
use colored::Colorize;
use serde_json::json;

use super::{
    args::OutputFormat,
    commands::{CommandResult, CommandSummary, InitSummary, ScanSummary, WriteSummary},
};
use crate::config::CONFIG_FILE_NAME;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print the result of a command to stdout (and stderr for failures).
pub fn print(result: &CommandResult) {
    match &result.summary {
        CommandSummary::Scan(summary) => print_scan(summary, &mut io::stdout().lock()),
        CommandSummary::Write(summary) => print_write(summary, &mut io::stdout().lock()),
        CommandSummary::Init(summary) => print_init(summary),
    }
}

pub fn print_scan<W: Write>(summary: &ScanSummary, writer: &mut W) {
    match summary.format {
        OutputFormat::Text => print_scan_text(summary, writer),
        OutputFormat::Json => {
            if let Err(e) = print_scan_json(summary, writer) {
                tracing::error!(error = %e, "Failed to serialize scan result");
            }
        }
    }
}

fn print_scan_text<W: Write>(summary: &ScanSummary, writer: &mut W) {
    let outcome = &summary.outcome;

    for (_, entry) in outcome.strings.sorted_by_text() {
        let dollar = if entry.dollar {
            format!(" {}", "($)".yellow())
        } else {
            String::new()
        };
        let _ = writeln!(writer, "\"{}\"{}", entry.text.bold(), dollar);

        if entry.is_translated() {
            let _ = writeln!(
                writer,
                "  {} {} {}",
                "=".blue(),
                "translation:".bold(),
                entry.translation
            );
        } else {
            let _ = writeln!(
                writer,
                "  {} {} {}",
                "=".blue(),
                "translation:".bold(),
                "(untranslated)".dimmed()
            );
        }

        let mut files = entry.files.clone();
        files.sort();
        let _ = writeln!(
            writer,
            "  {} {} {}",
            "=".blue(),
            "files:".bold(),
            files.join(", ")
        );
        let _ = writeln!(writer);
    }

    let untranslated = outcome.strings.untranslated();
    let line = format!(
        "Found {} {} in {} {} ({} untranslated)",
        outcome.new_count,
        if outcome.new_count == 1 { "string" } else { "strings" },
        outcome.files_scanned,
        if outcome.files_scanned == 1 { "file" } else { "files" },
        untranslated
    );
    let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), line.green());

    if outcome.skipped_count > 0 {
        let _ = writeln!(
            writer,
            "{} {} path(s) could not be read (use {} for details)",
            "warning:".bold().yellow(),
            outcome.skipped_count,
            "-v".cyan()
        );
    }
}

fn print_scan_json<W: Write>(summary: &ScanSummary, writer: &mut W) -> Result<()> {
    let outcome = &summary.outcome;
    let value = json!({
        "mode": summary.mode,
        "count": outcome.new_count,
        "filesScanned": outcome.files_scanned,
        "skipped": outcome.skipped_count,
        "strings": outcome.strings.to_sorted_map(),
    });
    writeln!(writer, "{}", serde_json::to_string_pretty(&value)?)?;
    Ok(())
}

pub fn print_write<W: Write>(summary: &WriteSummary, writer: &mut W) {
    let line = format!(
        "Wrote {} {} to {}",
        summary.written,
        if summary.written == 1 { "translation" } else { "translations" },
        summary.path.display()
    );
    let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), line.green());

    let missing = summary.total - summary.written;
    if missing > 0 {
        let _ = writeln!(
            writer,
            "{} {} untranslated {} skipped",
            "note:".bold(),
            missing,
            if missing == 1 { "string" } else { "strings" }
        );
    }
}

fn print_init(summary: &InitSummary) {
    match &summary.error {
        None => println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        ),
        Some(error) => eprintln!("{} {}", FAILURE_MARK.red(), error.red()),
    }
}
