//! Reads a table back from its text form.

use crate::codec::decode_value;
use crate::header::Label;
use crate::layout::FileLayout;
use serde_json::Value as Json;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use sylph_core::schema::TableSchema;
use sylph_core::{Error, Result, Value};
use sylph_storage::RowStore;
use tracing::{info, warn};

/// Parses a table file against the schema it was saved with.
///
/// Nothing is built until the header and every data line have parsed, and
/// indexes are rebuilt in one pass over the loaded rows.
pub fn from_str(text: &str, schema: &TableSchema) -> Result<RowStore> {
    let lines: Vec<&str> = text.lines().collect();
    if lines.len() < Label::COUNT {
        return Err(Error::corrupt(
            lines.len() + 1,
            format!("expected {} header lines, found {}", Label::COUNT, lines.len()),
        ));
    }

    let layout = FileLayout::parse(&lines[..Label::COUNT])?;
    let map = layout.remap(schema)?;

    if layout.data_start > lines.len() {
        return Err(Error::corrupt(
            Label::DataStart.line() + 1,
            format!("DATA_START {} is past the end of the file ({} lines)", layout.data_start, lines.len()),
        ));
    }
    if let Some(n) = (Label::COUNT..layout.data_start).find(|&n| !lines[n].trim().is_empty()) {
        return Err(Error::corrupt(n + 1, "unexpected content between header and DATA_START"));
    }

    let mut rows = Vec::new();
    let mut row_lines = Vec::new();
    for (n, line) in lines.iter().enumerate().skip(layout.data_start) {
        if line.trim().is_empty() {
            continue;
        }
        rows.push(decode_row(line, n + 1, &layout, &map)?);
        row_lines.push(n + 1);
    }

    // Every stored auto-increment key must be at or below the counter.
    if schema.is_auto_increment() {
        let pk = schema.pk();
        let counter = layout.counter as f64;
        if rows.iter().any(|r| r[pk].as_f64().map_or(false, |key| key > counter)) {
            return Err(Error::InvalidCounter {
                value: layout.counter.to_string(),
            });
        }
    }

    RowStore::from_parts(schema.clone(), rows, layout.counter).map_err(|e| match e {
        Error::DuplicateUniqueValue { row: Some(r), .. } => Error::corrupt(row_lines[r], e.to_string()),
        other => other,
    })
}

fn decode_row(line: &str, line_no: usize, layout: &FileLayout, map: &[usize]) -> Result<Vec<Value>> {
    let cells = match serde_json::from_str::<Json>(line) {
        Ok(Json::Array(cells)) => cells,
        Ok(_) => return Err(Error::corrupt(line_no, "expected a JSON array")),
        Err(e) => return Err(Error::corrupt(line_no, e.to_string())),
    };
    if cells.len() != layout.fields.len() {
        return Err(Error::corrupt(
            line_no,
            format!("expected {} values, found {}", layout.fields.len(), cells.len()),
        ));
    }

    let mut values = vec![Value::Null; cells.len()];
    for (i, cell) in cells.iter().enumerate() {
        let field = &layout.fields[i];
        let value = decode_value(cell, layout.types[i]).ok_or_else(|| {
            Error::corrupt(
                line_no,
                format!("{} is not a valid {} for field {}", cell, layout.types[i], field),
            )
        })?;
        if value.is_null() && !layout.nullables[i] {
            return Err(Error::corrupt(line_no, format!("null in non-nullable field {}", field)));
        }
        values[map[i]] = value;
    }
    Ok(values)
}

/// Loads a table file.
///
/// Returns `None` if the file does not exist.
pub fn load(path: impl AsRef<Path>, schema: &TableSchema) -> Result<Option<RowStore>> {
    let path = path.as_ref();
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!("No table file at {}, table {} left empty", path.display(), schema.name());
            return Ok(None);
        }
        Err(e) => return Err(crate::io_error(path, e)),
    };

    let store = from_str(&text, schema)?;
    info!(
        "Loaded table {} ({} rows) from {}",
        schema.name(),
        store.len(),
        path.display()
    );
    Ok(Some(store))
}
