use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, run, stderr, stdout};

#[test]
fn test_parity_identical_sets_passes() -> Result<()> {
    let test = CliTest::new()?;
    test.write_pages(&["landing", "about"], &["landing", "about"])?;

    let output = run(&mut test.parity_command());

    assert_eq!(output.status.code(), Some(0));
    let out = stdout(&output);
    assert!(out.contains("English pages (2):"));
    assert!(out.contains("Spanish pages (2):"));
    assert!(out.contains("All pages have both English and Spanish versions"));
    Ok(())
}

#[test]
fn test_parity_missing_spanish_fails() -> Result<()> {
    let test = CliTest::new()?;
    test.write_pages(&["a", "b"], &["a"])?;

    let output = run(&mut test.parity_command());

    assert_eq!(output.status.code(), Some(1));
    let out = stdout(&output);
    assert!(out.contains("Missing Spanish translations:"));
    assert!(out.contains("   - b.html"));
    assert!(!out.contains("Missing English translations:"));
    assert!(out.contains("1 missing page"));
    Ok(())
}

#[test]
fn test_parity_missing_both_directions() -> Result<()> {
    let test = CliTest::new()?;
    test.write_pages(&["a", "only-en"], &["a", "only-es"])?;

    let output = run(&mut test.parity_command());

    assert_eq!(output.status.code(), Some(1));
    let out = stdout(&output);
    assert!(out.contains("Missing English translations:"));
    assert!(out.contains("   - only-es.html"));
    assert!(out.contains("Missing Spanish translations:"));
    assert!(out.contains("   - only-en.html"));
    assert!(out.contains("2 missing pages"));
    Ok(())
}

#[test]
fn test_parity_empty_directories_are_vacuously_complete() -> Result<()> {
    let test = CliTest::new()?;
    test.write_pages(&[], &[])?;

    let output = run(&mut test.parity_command());

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("All pages have both English and Spanish versions"));
    Ok(())
}

#[test]
fn test_parity_unreadable_directory_treated_as_empty() -> Result<()> {
    let test = CliTest::new()?;
    // No en/ or es/ directories at all: both sides scan as empty, the read
    // failure is logged, and the check still passes.
    let output = run(&mut test.parity_command());

    assert_eq!(output.status.code(), Some(0));
    assert!(stderr(&output).contains("Error reading directory"));
    assert!(stdout(&output).contains("All pages have both English and Spanish versions"));
    Ok(())
}

#[test]
fn test_parity_ignores_non_page_files() -> Result<()> {
    let test = CliTest::new()?;
    test.write_pages(&["landing"], &["landing"])?;
    test.write_file("en/styles.css", "body {}")?;
    test.write_file("es/notes.txt", "notas")?;

    let output = run(&mut test.parity_command());

    assert_eq!(output.status.code(), Some(0));
    let out = stdout(&output);
    assert!(out.contains("English pages (1): landing"));
    assert!(out.contains("Spanish pages (1): landing"));
    Ok(())
}

#[test]
fn test_parity_respects_root_flag() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("site/en/landing.html", "<html></html>")?;
    test.write_file("site/es/otra.html", "<html></html>")?;

    let mut cmd = test.parity_command();
    cmd.arg("--root").arg(test.root().join("site"));
    let output = run(&mut cmd);

    assert_eq!(output.status.code(), Some(1));
    let out = stdout(&output);
    assert!(out.contains("   - landing.html"));
    assert!(out.contains("   - otra.html"));
    Ok(())
}
