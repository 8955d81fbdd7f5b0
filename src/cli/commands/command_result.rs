use std::path::PathBuf;

use super::super::{args::OutputFormat, exit_status::ExitStatus};
use crate::core::{ScanMode, ScanOutcome};

#[derive(Debug)]
pub enum CommandSummary {
    Scan(ScanSummary),
    Write(WriteSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct ScanSummary {
    pub mode: ScanMode,
    pub outcome: ScanOutcome,
    pub format: OutputFormat,
}

#[derive(Debug)]
pub struct WriteSummary {
    pub path: PathBuf,
    /// Entries with a non-empty translation that made it into the catalog.
    pub written: usize,
    /// Distinct strings found by the scan.
    pub total: usize,
}

#[derive(Debug)]
pub struct InitSummary {
    pub path: PathBuf,
    /// Error message when the config could not be created.
    pub error: Option<String>,
}

/// Result of running a transcan command
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    pub exit_status: ExitStatus,
}
