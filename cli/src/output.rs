//! Output formatting for scanned records.

use argtoken_core::{Parameter, Token};

use crate::config::OutputFormat;

/// Formats records in the requested output format.
pub fn format_records(records: &[Parameter], format: OutputFormat) -> Result<String, String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(records)
            .map(|mut raw| {
                raw.push('\n');
                raw
            })
            .map_err(|e| format!("JSON serialization failed: {e}")),
        OutputFormat::Yaml => {
            serde_yaml::to_string(records).map_err(|e| format!("YAML serialization failed: {e}"))
        }
        OutputFormat::Text => Ok(records_to_text(records)),
    }
}

fn records_to_text(records: &[Parameter]) -> String {
    let mut out = String::new();
    for record in records {
        out.push_str(&record_to_line(record));
        out.push('\n');
    }
    out
}

/// One aligned line: argument index, kind, decoded name, optional value.
fn record_to_line(record: &Parameter) -> String {
    let (name, value) = match record.token() {
        Some(Token::Long { name, value }) => (name.to_string(), value),
        Some(Token::Short { name, value, .. }) => (name.to_string(), value),
        Some(Token::Property { name, value }) => (name.to_string(), Some(value)),
        None => (record.raw_text.clone(), None),
    };
    let mut line = format!(
        "{:>3}  {:<10}  {name}",
        record.argument_index,
        record.kind.as_str()
    );
    if let Some(value) = value {
        line.push_str(&format!(" = {value}"));
    }
    line
}
