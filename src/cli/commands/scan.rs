use anyhow::Result;

use super::super::{args::ScanCommand, context::ScanContext, exit_status::ExitStatus};
use super::{CommandResult, CommandSummary, ScanSummary};

pub fn scan(cmd: ScanCommand) -> Result<CommandResult> {
    let ctx = ScanContext::new(&cmd.common)?;
    let outcome = ctx.scan()?;

    Ok(CommandResult {
        summary: CommandSummary::Scan(ScanSummary {
            mode: ctx.mode,
            outcome,
            format: cmd.format,
        }),
        exit_status: ExitStatus::Success,
    })
}
