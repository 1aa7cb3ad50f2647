use std::path::Path;

use anyhow::Result;

use super::super::args::EnvCommand;
use super::{AuxChecks, CommandResult, CommandSummary, EnvSummary, StructureCheck};
use crate::envfile::{ENV_EXAMPLE_FILE_NAME, ENV_FILE_NAME, EnvStore, validate};
use crate::pages::{EN_DIR, ES_DIR, count_pages};

/// Load the store, run the tier-based required-variable check, and (on a
/// passing check) the informational file and structure probes. Only missing
/// required variables count as errors; everything the probes find is
/// reported without affecting the exit code.
pub fn env(cmd: EnvCommand) -> Result<CommandResult> {
    let root = cmd.common.root;

    let store = EnvStore::load(&root)?;
    let tier = store.tier();
    let result = validate(&store, tier);
    let error_count = result.missing.len();

    // The failure path stops at the remediation hint, so the probes only
    // run once the required check has passed.
    let aux = result.is_ok().then(|| AuxChecks {
        env_example_exists: root.join(ENV_EXAMPLE_FILE_NAME).exists(),
        env_file_exists: root.join(ENV_FILE_NAME).exists(),
        structure: structure_check(&root),
    });

    Ok(CommandResult {
        summary: CommandSummary::Env(EnvSummary {
            root,
            tier,
            var_count: store.len(),
            result,
            aux,
        }),
        error_count,
        exit_on_errors: true,
    })
}

fn structure_check(root: &Path) -> StructureCheck {
    let en_dir = root.join(EN_DIR);
    let es_dir = root.join(ES_DIR);
    let en_exists = en_dir.is_dir();
    let es_exists = es_dir.is_dir();

    let counts =
        (en_exists && es_exists).then(|| (count_pages(&en_dir), count_pages(&es_dir)));

    StructureCheck {
        en_exists,
        es_exists,
        counts,
    }
}
