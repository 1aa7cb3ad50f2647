use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, run, stderr, stdout};

#[test]
fn test_init_creates_env_example() -> Result<()> {
    let test = CliTest::new()?;

    let output = run(&mut test.init_command());

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Created .env.example"));

    let content = test.read_file(".env.example")?;
    assert!(content.contains("NODE_ENV=development"));
    assert!(content.contains("CONTACT_EMAIL="));
    assert!(content.contains("GOOGLE_ANALYTICS_ID="));
    Ok(())
}

#[test]
fn test_init_refuses_to_overwrite() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".env.example", "NODE_ENV=\n")?;

    let output = run(&mut test.init_command());

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains(".env.example already exists"));
    assert_eq!(test.read_file(".env.example")?, "NODE_ENV=\n");
    Ok(())
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = run(&mut test.command());

    assert_eq!(output.status.code(), Some(0));
    let out = stdout(&output);
    assert!(out.contains("parity"));
    assert!(out.contains("env"));
    assert!(out.contains("init"));
    Ok(())
}
