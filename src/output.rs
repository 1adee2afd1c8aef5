use std::io::{self, Write};

pub(crate) const LABEL: &str = "Random number between 10 and 1000: ";

pub(crate) fn format_line(value: u32) -> String {
    format!("{}{}", LABEL, value)
}

/// Writes the line for `value`, terminated by a newline, and flushes.
pub(crate) fn write_line<W: Write>(writer: &mut W, value: u32) -> io::Result<()> {
    writeln!(writer, "{}", format_line(value))?;
    writer.flush()
}

#[test]
fn test_format_line() {
    assert_eq!(format_line(10), "Random number between 10 and 1000: 10");
    assert_eq!(format_line(1000), "Random number between 10 and 1000: 1000");
}

#[test]
fn test_write_line() -> anyhow::Result<()> {
    let mut buf = Vec::new();
    write_line(&mut buf, 537)?;
    assert_eq!(String::from_utf8(buf)?, "Random number between 10 and 1000: 537\n");
    Ok(())
}

#[test]
fn test_write_failure_propagates() {
    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    let err = write_line(&mut Broken, 42).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
}
