//! Report formatting and printing utilities.
//!
//! All user-facing output lives here, separate from command logic, so the
//! crate can be used as a library without printing side effects. Writers are
//! parameterized for testing.

use std::io::{self, Write};

use colored::Colorize;

use super::commands::{
    AuxChecks, CommandResult, CommandSummary, EnvSummary, InitSummary, ParitySummary,
    StructureCheck,
};
use crate::envfile::{ENV_EXAMPLE_FILE_NAME, ENV_FILE_NAME};
use crate::pages::{EN_DIR, ES_DIR, PAGE_EXTENSION};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Optional variable values are cut to this many characters for display.
const REDACT_LEN: usize = 20;

/// Print a command result to stdout.
pub fn print(result: &CommandResult, verbose: bool) {
    print_to(result, verbose, &mut io::stdout().lock());
}

/// Print a command result to a custom writer.
pub fn print_to<W: Write>(result: &CommandResult, verbose: bool, writer: &mut W) {
    match &result.summary {
        CommandSummary::Parity(summary) => print_parity(summary, verbose, writer),
        CommandSummary::Env(summary) => print_env(summary, verbose, writer),
        CommandSummary::Init(summary) => print_init(summary, writer),
    }
}

fn print_parity<W: Write>(summary: &ParitySummary, verbose: bool, writer: &mut W) {
    let _ = writeln!(writer, "Checking translation completeness...");
    let _ = writeln!(writer);

    if verbose {
        let _ = writeln!(
            writer,
            "Scanning {} and {}",
            summary.root.join(EN_DIR).display(),
            summary.root.join(ES_DIR).display()
        );
    }

    let _ = writeln!(
        writer,
        "English pages ({}): {}",
        summary.en.len(),
        summary.en.ids().join(", ")
    );
    let _ = writeln!(
        writer,
        "Spanish pages ({}): {}",
        summary.es.len(),
        summary.es.ids().join(", ")
    );
    let _ = writeln!(writer);

    let report = &summary.report;

    if !report.missing_en.is_empty() {
        let _ = writeln!(
            writer,
            "{} {}",
            FAILURE_MARK.red(),
            "Missing English translations:".red()
        );
        for id in &report.missing_en {
            let _ = writeln!(writer, "   - {}.{}", id, PAGE_EXTENSION);
        }
        let _ = writeln!(writer);
    }

    if !report.missing_es.is_empty() {
        let _ = writeln!(
            writer,
            "{} {}",
            FAILURE_MARK.red(),
            "Missing Spanish translations:".red()
        );
        for id in &report.missing_es {
            let _ = writeln!(writer, "   - {}.{}", id, PAGE_EXTENSION);
        }
        let _ = writeln!(writer);
    }

    if report.is_clean() {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            "All pages have both English and Spanish versions".green()
        );
    } else {
        let count = report.missing_count();
        let _ = writeln!(
            writer,
            "{} {}",
            FAILURE_MARK.red(),
            format!(
                "Translation check completed with {} missing {}",
                count,
                if count == 1 { "page" } else { "pages" }
            )
            .red()
        );
    }
}

fn print_env<W: Write>(summary: &EnvSummary, verbose: bool, writer: &mut W) {
    let _ = writeln!(writer, "Validating environment configuration...");
    let _ = writeln!(writer);

    if verbose {
        let _ = writeln!(
            writer,
            "Loaded {} variable(s) from {}",
            summary.var_count,
            summary.root.join(ENV_FILE_NAME).display()
        );
    }

    let _ = writeln!(writer, "Environment: {}", summary.tier.as_str().bold());

    let result = &summary.result;

    if !result.present.is_empty() {
        let _ = writeln!(writer);
        let _ = writeln!(
            writer,
            "{} Required variables present:",
            SUCCESS_MARK.green()
        );
        for (name, value) in &result.present {
            let _ = writeln!(writer, "   {}: {}", name, value);
        }
    }

    if !result.optional_present.is_empty() {
        let _ = writeln!(writer);
        let _ = writeln!(writer, "Optional variables present:");
        for (name, value) in &result.optional_present {
            let _ = writeln!(writer, "   {}: {}", name, redact(value));
        }
    }

    if !result.missing.is_empty() {
        let _ = writeln!(writer);
        let _ = writeln!(
            writer,
            "{} {}",
            FAILURE_MARK.red(),
            "Missing required variables:".red()
        );
        for name in &result.missing {
            let _ = writeln!(writer, "   {}", name);
        }
        let _ = writeln!(writer);
        let _ = writeln!(
            writer,
            "{} Create a {} file based on {}",
            "hint:".bold().cyan(),
            ENV_FILE_NAME,
            ENV_EXAMPLE_FILE_NAME
        );
        return;
    }

    let _ = writeln!(writer);
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        "Environment validation successful".green()
    );

    if let Some(aux) = &summary.aux {
        print_aux(aux, writer);
    }
}

fn print_aux<W: Write>(aux: &AuxChecks, writer: &mut W) {
    let _ = writeln!(writer);

    if aux.env_example_exists {
        let _ = writeln!(writer, "{} file found", ENV_EXAMPLE_FILE_NAME);
    } else {
        let _ = writeln!(
            writer,
            "{} {} file not found",
            "warning:".bold().yellow(),
            ENV_EXAMPLE_FILE_NAME
        );
    }

    if aux.env_file_exists {
        let _ = writeln!(writer, "{} file found (local configuration)", ENV_FILE_NAME);
    } else {
        let _ = writeln!(
            writer,
            "No {} file found (using system environment)",
            ENV_FILE_NAME
        );
    }

    print_structure(&aux.structure, writer);
}

fn print_structure<W: Write>(structure: &StructureCheck, writer: &mut W) {
    let _ = writeln!(writer);
    let _ = writeln!(writer, "Validating bilingual setup...");

    if !structure.en_exists {
        let _ = writeln!(
            writer,
            "{} English directory ({}/) not found",
            "error:".bold().red(),
            EN_DIR
        );
    }
    if !structure.es_exists {
        let _ = writeln!(
            writer,
            "{} Spanish directory ({}/) not found",
            "error:".bold().red(),
            ES_DIR
        );
    }

    let Some((en_count, es_count)) = structure.counts else {
        return;
    };

    let _ = writeln!(writer, "English pages: {}", en_count);
    let _ = writeln!(writer, "Spanish pages: {}", es_count);

    if en_count != es_count {
        let _ = writeln!(
            writer,
            "{} Mismatch in number of language files",
            "warning:".bold().yellow()
        );
    } else {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            "Language files are balanced".green()
        );
    }
}

fn print_init<W: Write>(summary: &InitSummary, writer: &mut W) {
    if summary.created {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", ENV_EXAMPLE_FILE_NAME).green()
        );
    }
}

/// Truncate an optional variable's value for display.
fn redact(value: &str) -> String {
    let cut: String = value.chars().take(REDACT_LEN).collect();
    format!("{}...", cut)
}
