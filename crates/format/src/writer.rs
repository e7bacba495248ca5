//! Writes a table to its text form.

use crate::codec::encode_value;
use crate::layout::FileLayout;
use serde_json::Value as Json;
use std::fs;
use std::path::Path;
use sylph_core::Result;
use sylph_storage::RowStore;
use tracing::info;

/// Renders a table: header lines, then one JSON array per row.
pub fn to_string(store: &RowStore) -> String {
    let layout = FileLayout::of(store.schema(), store.auto_increment_counter());
    let mut out = String::new();
    for line in layout.render() {
        out.push_str(&line);
        out.push('\n');
    }
    for row in store.rows() {
        let cells: Vec<Json> = row.values().iter().map(encode_value).collect();
        out.push_str(&Json::Array(cells).to_string());
        out.push('\n');
    }
    out
}

/// Writes a table to `path`, replacing any existing file.
pub fn save(path: impl AsRef<Path>, store: &RowStore) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, to_string(store)).map_err(|e| crate::io_error(path, e))?;
    info!(
        "Saved table {} ({} rows) to {}",
        store.schema().name(),
        store.len(),
        path.display()
    );
    Ok(())
}
