use anyhow::Result;
use clap::Parser;
use numero::core::ConfigProvider;
use numero::{CliConfig, Combiner, MemoryOutput, NumeroError, OverflowPolicy};
use std::io::Write;
use std::process::Command;
use tempfile::NamedTempFile;

#[test]
fn test_two_plus_three_end_to_end() -> Result<()> {
    let config = CliConfig::try_parse_from(["numero", "2", "3"])?;
    let settings = config.resolve()?;

    let mut output = MemoryOutput::new();
    let total = Combiner::new(settings.overflow_policy()).run(settings.operands(), &mut output)?;

    assert_eq!(total.quantity(), 5);
    assert_eq!(output.contents(), "5\n");
    Ok(())
}

#[test]
fn test_config_file_drives_checked_policy() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    file.write_all(
        br#"
[arithmetic]
overflow_policy = "checked"
operands = [2147483647, 1]
"#,
    )?;

    let path = file.path().to_str().unwrap().to_string();
    let config = CliConfig::try_parse_from(["numero", "--config", path.as_str()])?;
    let settings = config.resolve()?;
    assert_eq!(settings.overflow_policy(), OverflowPolicy::Checked);

    let mut output = MemoryOutput::new();
    let err = Combiner::new(settings.overflow_policy())
        .run(settings.operands(), &mut output)
        .unwrap_err();

    assert!(matches!(err, NumeroError::Overflow { .. }));
    assert_eq!(err.exit_code(), 2);
    assert_eq!(output.contents(), "");
    Ok(())
}

#[test]
fn test_binary_prints_only_the_total() -> Result<()> {
    let output = Command::new(env!("CARGO_BIN_EXE_numero"))
        .args(["2", "3"])
        .env_remove("RUST_LOG")
        .output()?;

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout)?, "5\n");
    Ok(())
}

#[test]
fn test_binary_handles_negative_operands() -> Result<()> {
    let output = Command::new(env!("CARGO_BIN_EXE_numero"))
        .args(["-10", "4", "--policy", "checked"])
        .env_remove("RUST_LOG")
        .output()?;

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout)?, "-6\n");
    Ok(())
}

#[test]
fn test_binary_exit_codes() -> Result<()> {
    let overflow = Command::new(env!("CARGO_BIN_EXE_numero"))
        .args(["2147483647", "1", "--policy", "checked"])
        .env_remove("RUST_LOG")
        .output()?;
    assert_eq!(overflow.status.code(), Some(2));
    assert!(overflow.stdout.is_empty());

    let wrapped = Command::new(env!("CARGO_BIN_EXE_numero"))
        .args(["2147483647", "1"])
        .env_remove("RUST_LOG")
        .output()?;
    assert_eq!(String::from_utf8(wrapped.stdout)?, "-2147483648\n");

    let missing = Command::new(env!("CARGO_BIN_EXE_numero"))
        .env_remove("RUST_LOG")
        .output()?;
    assert_eq!(missing.status.code(), Some(1));
    Ok(())
}
