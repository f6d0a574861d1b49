use crate::error::{ReqscoreError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::{BufRead, Write};
use tracing::warn;

#[derive(Debug, Clone)]
pub struct Parsed<T> {
    pub items: Vec<T>,
    pub skipped: usize,
}

pub fn read_lines<T, R>(reader: R, source: &str) -> Result<Parsed<T>>
where
    T: DeserializeOwned,
    R: BufRead,
{
    let mut items = Vec::new();
    let mut skipped = 0;
    for (index, raw) in reader.split(b'\n').enumerate() {
        let raw = raw?;
        match parse_line(&raw, source, index + 1) {
            Ok(Some(item)) => items.push(item),
            Ok(None) => {}
            Err(err) => {
                warn!("skipping record: {err}");
                skipped += 1;
            }
        }
    }
    Ok(Parsed { items, skipped })
}

// Blank lines yield `None`; undecodable or unparsable lines are errors.
fn parse_line<T: DeserializeOwned>(
    raw: &[u8],
    source: &str,
    line_no: usize,
) -> Result<Option<T>> {
    let invalid = |reason: String| ReqscoreError::InvalidRecord {
        location: format!("{source}:{line_no}"),
        reason,
    };
    let line = std::str::from_utf8(raw).map_err(|e| invalid(e.to_string()))?;
    let line = line.trim_end_matches('\r');
    if line.trim().is_empty() {
        return Ok(None);
    }
    serde_json::from_str(line)
        .map(Some)
        .map_err(|e| invalid(e.to_string()))
}

pub fn write_lines<T, W>(mut writer: W, items: &[T]) -> Result<()>
where
    T: Serialize,
    W: Write,
{
    for item in items {
        serde_json::to_writer(&mut writer, item)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(())
}
