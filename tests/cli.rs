use std::process::Command;

const LABEL: &str = "Random number between 10 and 1000: ";

fn run(args: &[&str]) -> anyhow::Result<(i32, String)> {
    let output = Command::new(env!("CARGO_BIN_EXE_rand-between"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()?;
    let code = output.status.code().unwrap_or(-1);
    Ok((code, String::from_utf8(output.stdout)?))
}

fn parse_value(stdout: &str) -> u32 {
    let line = stdout
        .strip_suffix('\n')
        .expect("output ends with a newline");
    assert!(!line.contains('\n'), "more than one line: {:?}", stdout);
    let digits = line
        .strip_prefix(LABEL)
        .unwrap_or_else(|| panic!("unexpected output: {:?}", stdout));
    assert!(!digits.is_empty());
    assert!(digits.bytes().all(|b| b.is_ascii_digit()), "not digits: {:?}", digits);
    digits.parse().expect("fits in a u32")
}

#[test]
fn test_prints_one_line_in_range() -> anyhow::Result<()> {
    for _ in 0..5 {
        let (code, stdout) = run(&[])?;
        assert_eq!(code, 0);
        let value = parse_value(&stdout);
        assert!((10..=1000).contains(&value), "{} out of range", value);
    }
    Ok(())
}

#[test]
fn test_arguments_are_ignored() -> anyhow::Result<()> {
    let (code, stdout) = run(&["--help", "whatever", "-x"])?;
    assert_eq!(code, 0);
    let value = parse_value(&stdout);
    assert!((10..=1000).contains(&value));
    Ok(())
}

#[test]
fn test_logs_stay_off_stdout() -> anyhow::Result<()> {
    let output = Command::new(env!("CARGO_BIN_EXE_rand-between"))
        .env("RUST_LOG", "trace")
        .output()?;
    assert!(output.status.success());
    let value = parse_value(&String::from_utf8(output.stdout)?);
    assert!((10..=1000).contains(&value));
    Ok(())
}
