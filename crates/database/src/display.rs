//! Text rendering of a table.

use crate::table::Table;
use std::fmt;
use sylph_core::Value;

fn cell(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let store = self.store();
        let fields = store.schema().fields();
        let rows: Vec<Vec<String>> = store
            .rows()
            .iter()
            .map(|row| row.values().iter().map(cell).collect())
            .collect();

        let mut widths: Vec<usize> = fields.iter().map(|name| name.chars().count()).collect();
        for row in &rows {
            for (width, text) in widths.iter_mut().zip(row) {
                *width = (*width).max(text.chars().count());
            }
        }

        writeln!(f, "{} ({} rows)", self.name(), rows.len())?;
        write_line(f, fields.iter().map(String::as_str), &widths)?;
        let rule: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
        writeln!(f, "{}", rule.join("-+-"))?;
        for row in &rows {
            write_line(f, row.iter().map(String::as_str), &widths)?;
        }
        Ok(())
    }
}

fn write_line<'a>(
    f: &mut fmt::Formatter<'_>,
    cells: impl Iterator<Item = &'a str>,
    widths: &[usize],
) -> fmt::Result {
    let padded: Vec<String> = cells
        .zip(widths)
        .map(|(text, &width)| format!("{:<width$}", text, width = width))
        .collect();
    writeln!(f, "{}", padded.join(" | ").trim_end())
}

#[cfg(test)]
mod tests {
    use crate::Table;
    use sylph_core::schema::{FieldDef, TableConfig};
    use sylph_core::{DataType, Entity, Value};

    #[test]
    fn test_display_aligns_columns() {
        let config = TableConfig::new("users")
            .field(
                FieldDef::new("id", DataType::Number)
                    .primary_key(true)
                    .auto_increment(true),
            )
            .field(FieldDef::new("name", DataType::String))
            .field(FieldDef::new("nick", DataType::String).nullable(true));
        let mut table = Table::create(&config).unwrap();
        table.insert(&Entity::new().with("name", "Annabel")).unwrap();
        table
            .insert(&Entity::new().with("name", "Bo").with("nick", Value::from("b")))
            .unwrap();

        let expected = "\
users (2 rows)
id | name    | nick
---+---------+-----
1  | Annabel | null
2  | Bo      | b
";
        assert_eq!(table.display(), expected);
    }

    #[test]
    fn test_display_empty() {
        let config = TableConfig::new("t").field(FieldDef::new("id", DataType::Number).primary_key(true));
        let table = Table::create(&config).unwrap();
        assert_eq!(table.to_string(), "t (0 rows)\nid\n--\n");
    }
}
