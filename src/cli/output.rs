use crate::cli::OutputFormat;
use anyhow::{Result, bail};
use serde_json::Value;
use std::io::Write;

pub fn emit_value(value: &Value, format: OutputFormat, compact: bool, quiet: bool) -> Result<()> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    write_value(&mut handle, value, format, compact, quiet)
}

pub fn write_value<W: Write>(
    writer: &mut W,
    value: &Value,
    format: OutputFormat,
    compact: bool,
    quiet: bool,
) -> Result<()> {
    if matches!(format, OutputFormat::Csv) {
        bail!("csv output is not implemented yet for datapoint-cli")
    }

    if compact || quiet {
        serde_json::to_writer(&mut *writer, value)?;
    } else {
        serde_json::to_writer_pretty(&mut *writer, value)?;
    }
    writer.write_all(b"\n")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn compact_output_is_single_line() {
        let mut buf = Vec::new();
        write_value(&mut buf, &json!({"a": [1, 2]}), OutputFormat::Json, true, false)
            .expect("write");
        assert_eq!(String::from_utf8(buf).expect("utf8"), "{\"a\":[1,2]}\n");
    }

    #[test]
    fn csv_is_rejected() {
        let mut buf = Vec::new();
        let err = write_value(&mut buf, &json!({}), OutputFormat::Csv, false, false)
            .expect_err("csv unsupported");
        assert!(err.to_string().contains("csv output is not implemented"));
        assert!(buf.is_empty());
    }
}
