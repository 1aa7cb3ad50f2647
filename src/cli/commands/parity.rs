use anyhow::Result;

use super::super::args::ParityCommand;
use super::{CommandResult, CommandSummary, ParitySummary};
use crate::pages::{EN_DIR, ES_DIR, PageSet, ParityReport};

/// Build both page sets and compare them. Each missing translation counts
/// as one error; an unreadable directory contributes zero pages rather than
/// failing the run.
pub fn parity(cmd: ParityCommand) -> Result<CommandResult> {
    let root = cmd.common.root;

    let en = PageSet::from_dir(&root.join(EN_DIR));
    let es = PageSet::from_dir(&root.join(ES_DIR));
    let report = ParityReport::compare(&en, &es);
    let error_count = report.missing_count();

    Ok(CommandResult {
        summary: CommandSummary::Parity(ParitySummary {
            root,
            en,
            es,
            report,
        }),
        error_count,
        exit_on_errors: true,
    })
}
