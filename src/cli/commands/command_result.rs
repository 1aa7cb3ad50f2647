use std::path::PathBuf;

use crate::envfile::{Tier, ValidationResult};
use crate::pages::{PageSet, ParityReport};

#[derive(Debug)]
pub enum CommandSummary {
    Parity(ParitySummary),
    Env(EnvSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct ParitySummary {
    pub root: PathBuf,
    pub en: PageSet,
    pub es: PageSet,
    pub report: ParityReport,
}

#[derive(Debug)]
pub struct EnvSummary {
    pub root: PathBuf,
    pub tier: Tier,
    pub var_count: usize,
    pub result: ValidationResult,
    /// Informational probes, run only when the required check passed.
    pub aux: Option<AuxChecks>,
}

/// Informational filesystem probes; never affect the exit code.
#[derive(Debug)]
pub struct AuxChecks {
    pub env_example_exists: bool,
    pub env_file_exists: bool,
    pub structure: StructureCheck,
}

#[derive(Debug)]
pub struct StructureCheck {
    pub en_exists: bool,
    pub es_exists: bool,
    /// English and Spanish page counts; None when either directory is absent.
    pub counts: Option<(usize, usize)>,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running a duosite command.
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    /// Validation failures found (missing pages or missing required variables).
    pub error_count: usize,
    /// If true, exit code 1 should be returned when error_count > 0.
    pub exit_on_errors: bool,
}
