//! Shared handling of the Ant Migration Tool's `key: value` result logs.

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::error::Result;

/// One `key: value` line of a record, both sides trimmed.
pub(crate) type Field<'a> = (&'a str, &'a str);

/// Split a result log into records.
///
/// A record is a run of `key: value` lines. Any other line (blank lines,
/// `****` separators, headers) ends the current record. A record still open
/// at the end of the text is kept.
pub(crate) fn records(text: &str) -> Vec<Vec<Field<'_>>> {
    let mut out = Vec::new();
    let mut current: Vec<Field<'_>> = Vec::new();

    for line in text.lines() {
        match line.split_once(':') {
            Some((key, value)) if !key.trim().is_empty() => {
                current.push((key.trim(), value.trim()));
            }
            _ => {
                if !current.is_empty() {
                    out.push(std::mem::take(&mut current));
                }
            }
        }
    }
    if !current.is_empty() {
        out.push(current);
    }
    out
}

/// Serialize a value as pretty JSON indented with tabs.
pub fn to_tabbed_json<T: Serialize>(value: &T) -> Result<String> {
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"\t"));
    value.serialize(&mut ser)?;
    // serde_json only emits valid UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
